//! Render-ready post view models

use serde::{Deserialize, Serialize};

use super::document::TextSegment;

/// A titled section of post content, kept in render order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextBlock {
    pub heading: String,
    pub body: Vec<TextSegment>,
}

impl RichTextBlock {
    /// Plain text of the body, segments joined by a single space
    pub fn body_text(&self) -> String {
        self.body
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A post as shown in the home listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Document UID, used in `/post/<id>` links
    pub id: String,

    /// Source timestamp, untouched; `None` means not yet published
    pub published_at: Option<String>,

    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// A post as shown on its own page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    pub published_at: Option<String>,
    pub reading_time_minutes: u32,
    pub title: String,
    pub subtitle: String,
    pub banner_url: Option<String>,
    pub author: String,
    pub sections: Vec<RichTextBlock>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_text_joins_with_space() {
        let block = RichTextBlock {
            heading: "h1".to_string(),
            body: vec![
                TextSegment::paragraph("first"),
                TextSegment::paragraph("second paragraph"),
            ],
        };
        assert_eq!(block.body_text(), "first second paragraph");
    }

    #[test]
    fn test_body_text_empty() {
        let block = RichTextBlock {
            heading: "h1".to_string(),
            body: Vec::new(),
        };
        assert_eq!(block.body_text(), "");
    }
}
