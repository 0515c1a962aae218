//! Raw Prismic documents as they arrive from the content API
//!
//! Document fields that may be missing upstream are optional here; the mapper
//! decides which absences are errors.

use serde::{Deserialize, Serialize};

/// One page of a Prismic search response
///
/// The initial query and every `next_page` URL return this same shape.
/// `results` and `next_page` must both be present; a body without them is
/// not a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPage {
    pub results: Vec<RawDocument>,

    /// Absolute URL of the following page, `null` on the last page
    #[serde(deserialize_with = "Option::deserialize")]
    pub next_page: Option<String>,

    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub total_results_size: Option<u64>,
}

/// A `posts` document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDocument {
    /// Prismic internal id
    #[serde(default)]
    pub id: Option<String>,

    /// Human readable identifier used in post URLs
    #[serde(default)]
    pub uid: Option<String>,

    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,

    /// `None` for documents that were never published
    #[serde(default)]
    pub first_publication_date: Option<String>,

    #[serde(default)]
    pub last_publication_date: Option<String>,

    #[serde(default)]
    pub data: RawPostData,
}

/// The custom type fields of a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPostData {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub banner: Option<RawImage>,

    #[serde(default)]
    pub content: Vec<RawSection>,
}

/// Image field; Prismic sends `{}` for an empty image
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub alt: Option<String>,
}

/// A repeatable group entry: one heading with its rich-text body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSection {
    #[serde(default)]
    pub heading: Option<String>,

    #[serde(default)]
    pub body: Vec<TextSegment>,
}

/// A single rich-text block (paragraph, heading, list item, image...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextSegment {
    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub spans: Vec<Span>,

    /// Only set on `image` segments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl TextSegment {
    /// A plain paragraph with no formatting
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: "paragraph".to_string(),
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Inline formatting over a character range of a segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,

    #[serde(rename = "type")]
    pub kind: String,

    /// Link target for `hyperlink`, label name for `label`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
