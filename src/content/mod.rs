//! Content module - raw CMS documents, post view models and their mapping

pub mod document;
pub mod loader;
mod mapper;
mod post;
pub mod reading_time;

pub use document::{RawDocument, RawPage, Span, TextSegment};
pub use loader::ContentLoader;
pub use mapper::{map_to_detail, map_to_summary};
pub use post::{PostDetail, PostSummary, RichTextBlock};
