//! Content source - the headless CMS the site pulls posts from

mod prismic;

#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;

use crate::content::{RawDocument, RawPage};
use crate::error::FetchError;

pub use prismic::PrismicClient;

/// Custom type of blog posts in the repository
pub const POSTS_TYPE: &str = "posts";

/// A listing query: every document of one type, some fields, one page size
#[derive(Debug, Clone, PartialEq)]
pub struct PostQuery {
    pub doc_type: String,
    /// Fields to fetch, as `type.field`; empty fetches everything
    pub fields: Vec<String>,
    pub page_size: u32,
}

impl PostQuery {
    /// Query for the home listing: only the fields a summary needs
    pub fn summaries(page_size: u32) -> Self {
        Self {
            doc_type: POSTS_TYPE.to_string(),
            fields: ["uid", "title", "subtitle", "author"]
                .iter()
                .map(|f| format!("{}.{}", POSTS_TYPE, f))
                .collect(),
            page_size,
        }
    }

    /// Predicate selecting documents of this type
    pub fn predicate(&self) -> String {
        format!("[[at(document.type,\"{}\")]]", self.doc_type)
    }
}

/// Read access to a content repository
///
/// Every call is one request; implementations do not cache or retry.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Run a listing query and return its first page
    async fn query_posts(&self, query: &PostQuery) -> Result<RawPage, FetchError>;

    /// Follow a `next_page` cursor returned by a previous page
    async fn fetch_page(&self, cursor: &str) -> Result<RawPage, FetchError>;

    /// Look up one document by type and UID
    async fn get_by_uid(&self, doc_type: &str, uid: &str)
        -> Result<Option<RawDocument>, FetchError>;
}
