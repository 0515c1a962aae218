//! Prismic REST API v2 client

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::{ContentSource, PostQuery};
use crate::content::{RawDocument, RawPage};
use crate::error::FetchError;

/// Content source backed by a Prismic repository
#[derive(Clone)]
pub struct PrismicClient {
    client: Client,
    endpoint: Url,
    master_ref: String,
    access_token: Option<String>,
    allow_foreign_cursor: bool,
}

#[derive(Debug, Deserialize)]
struct ApiInfo {
    #[serde(default)]
    refs: Vec<ApiRef>,
}

#[derive(Debug, Deserialize)]
struct ApiRef {
    #[serde(rename = "ref")]
    reference: String,
    #[serde(default, rename = "isMasterRef")]
    is_master_ref: bool,
}

impl PrismicClient {
    /// Connect to the API entry point and resolve the master ref
    pub async fn connect(
        endpoint: &str,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let endpoint_str = endpoint.trim_end_matches('/');
        let endpoint = parse_url(endpoint_str)?;
        let client = Client::builder().timeout(timeout).build()?;

        let mut req = client.get(endpoint.clone());
        if let Some(token) = &access_token {
            req = req.query(&[("access_token", token)]);
        }
        let info: ApiInfo = read_json(req.send().await?).await?;

        let master_ref = info
            .refs
            .into_iter()
            .find(|r| r.is_master_ref)
            .map(|r| r.reference)
            .ok_or_else(|| FetchError::MissingMasterRef(endpoint_str.to_string()))?;

        tracing::debug!("Connected to {} (master ref {})", endpoint, master_ref);

        Ok(Self {
            client,
            endpoint,
            master_ref,
            access_token,
            allow_foreign_cursor: false,
        })
    }

    /// Follow cursors that point outside the API endpoint's origin
    pub fn allow_foreign_cursor(mut self, allow: bool) -> Self {
        self.allow_foreign_cursor = allow;
        self
    }

    fn search_url(&self) -> String {
        format!("{}/documents/search", self.endpoint.as_str().trim_end_matches('/'))
    }

    async fn search(&self, params: Vec<(&str, String)>) -> Result<RawPage, FetchError> {
        let mut params = params;
        params.push(("ref", self.master_ref.clone()));
        if let Some(token) = &self.access_token {
            params.push(("access_token", token.clone()));
        }

        let resp = self
            .client
            .get(self.search_url())
            .query(&params)
            .send()
            .await?;
        read_json(resp).await
    }

    fn check_cursor(&self, cursor: &str) -> Result<Url, FetchError> {
        let url = parse_url(cursor)?;
        if !self.allow_foreign_cursor && !same_origin(&url, &self.endpoint) {
            return Err(FetchError::ForeignCursor {
                cursor: cursor.to_string(),
                endpoint: self.endpoint.to_string(),
            });
        }
        Ok(url)
    }
}

#[async_trait]
impl ContentSource for PrismicClient {
    async fn query_posts(&self, query: &PostQuery) -> Result<RawPage, FetchError> {
        let mut params = vec![
            ("q", query.predicate()),
            ("pageSize", query.page_size.to_string()),
        ];
        if !query.fields.is_empty() {
            params.push(("fetch", query.fields.join(",")));
        }

        let page = self.search(params).await?;
        tracing::debug!(
            "Query {} returned {} results (total {:?})",
            query.predicate(),
            page.results.len(),
            page.total_results_size
        );
        Ok(page)
    }

    async fn fetch_page(&self, cursor: &str) -> Result<RawPage, FetchError> {
        let url = self.check_cursor(cursor)?;
        let resp = self.client.get(url).send().await?;
        read_json(resp).await
    }

    async fn get_by_uid(
        &self,
        doc_type: &str,
        uid: &str,
    ) -> Result<Option<RawDocument>, FetchError> {
        let params = vec![
            ("q", uid_predicate(doc_type, uid)),
            ("pageSize", "1".to_string()),
        ];
        let page = self.search(params).await?;
        Ok(page.results.into_iter().next())
    }
}

fn uid_predicate(doc_type: &str, uid: &str) -> String {
    let uid = uid.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[[at(my.{}.uid,\"{}\")]]", doc_type, uid)
}

fn parse_url(url: &str) -> Result<Url, FetchError> {
    Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn same_origin(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme()
        && a.host_str() == b.host_str()
        && a.port_or_known_default() == b.port_or_known_default()
}

/// Read a JSON body, turning non-2xx statuses into errors
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, FetchError> {
    let status = resp.status();
    let url = resp.url().to_string();
    let body = resp.text().await?;
    parse_body(status, &url, &body)
}

/// Decode a response body answered by `url` with `status`
pub(super) fn parse_body<T: DeserializeOwned>(
    status: StatusCode,
    url: &str,
    body: &str,
) -> Result<T, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(serde_json::from_str(body)?)
}
