//! In-memory content source for tests

use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::prismic::parse_body;
use super::{ContentSource, PostQuery};
use crate::content::document::RawPostData;
use crate::content::{RawDocument, RawPage, TextSegment};
use crate::error::FetchError;

/// What a cursor answers
enum Canned {
    Page(RawPage),
    Status(u16),
    /// A 200 response with this raw body
    Body(String),
}

/// Serves canned pages keyed by cursor and documents keyed by UID
#[derive(Default)]
pub struct MemorySource {
    first_page: RawPage,
    pages: Mutex<HashMap<String, Canned>>,
    documents: HashMap<String, RawDocument>,
    requests: AtomicUsize,
}

impl MemorySource {
    pub fn new(first_page: RawPage) -> Self {
        Self {
            first_page,
            ..Default::default()
        }
    }

    pub fn with_page(self, cursor: &str, page: RawPage) -> Self {
        self.set_page(cursor, page);
        self
    }

    /// Make a cursor answer with an HTTP error status
    pub fn with_failing_page(self, cursor: &str, status: u16) -> Self {
        self.pages.lock().unwrap().insert(cursor.to_string(), Canned::Status(status));
        self
    }

    /// Make a cursor answer 200 with a raw JSON body
    pub fn with_body(self, cursor: &str, body: &str) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert(cursor.to_string(), Canned::Body(body.to_string()));
        self
    }

    /// Replace what a cursor answers, e.g. to let a retry succeed
    pub fn set_page(&self, cursor: &str, page: RawPage) {
        self.pages.lock().unwrap().insert(cursor.to_string(), Canned::Page(page));
    }

    pub fn with_document(mut self, doc: RawDocument) -> Self {
        let uid = doc.uid.clone().unwrap_or_default();
        self.documents.insert(uid, doc);
        self
    }

    /// Number of calls made against this source
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn query_posts(&self, _query: &PostQuery) -> Result<RawPage, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.first_page.clone())
    }

    async fn fetch_page(&self, cursor: &str) -> Result<RawPage, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        match self.pages.lock().unwrap().get(cursor) {
            Some(Canned::Page(page)) => Ok(page.clone()),
            Some(Canned::Status(status)) => Err(FetchError::Status {
                status: *status,
                url: cursor.to_string(),
            }),
            Some(Canned::Body(body)) => parse_body(StatusCode::OK, cursor, body),
            None => Err(FetchError::Status {
                status: 404,
                url: cursor.to_string(),
            }),
        }
    }

    async fn get_by_uid(
        &self,
        _doc_type: &str,
        uid: &str,
    ) -> Result<Option<RawDocument>, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.documents.get(uid).cloned())
    }
}

/// A published post whose single section holds `text`
pub fn post(uid: &str, text: &str) -> RawDocument {
    RawDocument {
        id: Some(format!("id-{}", uid)),
        uid: Some(uid.to_string()),
        doc_type: Some("posts".to_string()),
        first_publication_date: Some("2021-03-25T19:25:28+0000".to_string()),
        data: RawPostData {
            title: Some(format!("Post {}", uid)),
            subtitle: Some(format!("About {}", uid)),
            author: Some("Danilo Vieira".to_string()),
            content: vec![crate::content::document::RawSection {
                heading: Some("Intro".to_string()),
                body: vec![TextSegment::paragraph(text)],
            }],
            ..Default::default()
        },
        ..Default::default()
    }
}

/// A page holding posts with the given UIDs
pub fn page(uids: &[&str], next_page: Option<&str>) -> RawPage {
    RawPage {
        results: uids.iter().map(|uid| post(uid, "lorem ipsum")).collect(),
        next_page: next_page.map(str::to_string),
        ..Default::default()
    }
}
