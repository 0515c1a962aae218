//! Maps raw CMS documents onto view models

use super::document::RawDocument;
use super::post::{PostDetail, PostSummary, RichTextBlock};
use super::reading_time;
use crate::error::ContentError;

/// Build the listing view of a document
pub fn map_to_summary(doc: &RawDocument) -> Result<PostSummary, ContentError> {
    let id = required(doc, doc.uid.as_ref(), "uid")?;
    let title = required(doc, doc.data.title.as_ref(), "title")?;

    Ok(PostSummary {
        id,
        published_at: doc.first_publication_date.clone(),
        title,
        subtitle: doc.data.subtitle.clone().unwrap_or_default(),
        author: doc.data.author.clone().unwrap_or_default(),
    })
}

/// Build the full view of a document, including its reading time
pub fn map_to_detail(doc: &RawDocument) -> Result<PostDetail, ContentError> {
    required(doc, doc.uid.as_ref(), "uid")?;
    let title = required(doc, doc.data.title.as_ref(), "title")?;

    let sections: Vec<RichTextBlock> = doc
        .data
        .content
        .iter()
        .map(|section| RichTextBlock {
            heading: section.heading.clone().unwrap_or_default(),
            body: section.body.clone(),
        })
        .collect();

    Ok(PostDetail {
        published_at: doc.first_publication_date.clone(),
        reading_time_minutes: reading_time::estimate(&sections),
        title,
        subtitle: doc.data.subtitle.clone().unwrap_or_default(),
        banner_url: doc.data.banner.as_ref().and_then(|b| b.url.clone()),
        author: doc.data.author.clone().unwrap_or_default(),
        sections,
    })
}

fn required(
    doc: &RawDocument,
    value: Option<&String>,
    field: &'static str,
) -> Result<String, ContentError> {
    value.cloned().ok_or_else(|| ContentError::Validation {
        field,
        document: doc.id.clone(),
    })
}
