//! Error taxonomy for the content pipeline
//!
//! Pipeline code returns these typed errors so callers can tell a malformed
//! upstream document apart from a transport failure. A document that simply
//! does not exist is not an error: lookups return `Ok(None)` for it.

use thiserror::Error;

/// Errors raised while turning CMS content into view models
#[derive(Debug, Error)]
pub enum ContentError {
    /// The upstream document lacks a required identity field
    #[error("Invalid document{}: missing required field `{field}`", document_suffix(.document))]
    Validation {
        field: &'static str,
        /// Prismic document id, when the document has one
        document: Option<String>,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Transport and protocol failures talking to the content source
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("Invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Refusing to follow cursor {cursor}: origin differs from {endpoint}")]
    ForeignCursor { cursor: String, endpoint: String },

    #[error("API entry point at {0} advertises no master ref")]
    MissingMasterRef(String),
}

fn document_suffix(document: &Option<String>) -> String {
    document
        .as_ref()
        .map(|id| format!(" {}", id))
        .unwrap_or_default()
}
