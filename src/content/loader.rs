//! Content loader - pulls listing pages and post details from a content source

use std::collections::HashSet;

use super::{map_to_detail, PostDetail, PostSummary};
use crate::error::ContentError;
use crate::pagination::{LoadMore, PaginationController, PaginationState};
use crate::source::{ContentSource, PostQuery, POSTS_TYPE};

/// Loads posts from a content source
pub struct ContentLoader<'a, S: ContentSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: ContentSource + ?Sized> ContentLoader<'a, S> {
    /// Create a new content loader
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Fetch the first listing page as a fresh pagination session
    pub async fn first_page(&self, page_size: u32) -> Result<PaginationState, ContentError> {
        let page = self
            .source
            .query_posts(&PostQuery::summaries(page_size))
            .await?;
        PaginationState::from_page(&page)
    }

    /// Walk every listing page and return all summaries in listing order
    pub async fn all_summaries(&self, page_size: u32) -> Result<Vec<PostSummary>, ContentError> {
        let mut state = self.first_page(page_size).await?;
        let controller = PaginationController::new(self.source);
        let mut visited = HashSet::new();

        while let Some(cursor) = state.cursor() {
            if !visited.insert(cursor.to_string()) {
                tracing::warn!("Cursor {} was already visited, stopping", cursor);
                break;
            }
            if controller.load_more(&mut state).await? == LoadMore::Exhausted {
                break;
            }
        }

        Ok(state.into_items())
    }

    /// Look up a post by UID
    ///
    /// `Ok(None)` means the post does not exist or is not published; callers
    /// send the reader back to the listing.
    pub async fn fetch_detail(&self, uid: &str) -> Result<Option<PostDetail>, ContentError> {
        let Some(doc) = self.source.get_by_uid(POSTS_TYPE, uid).await? else {
            tracing::debug!("Post {} not found", uid);
            return Ok(None);
        };

        map_to_detail(&doc).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::{page, post, MemorySource};

    const PAGE_2: &str = "https://spacetraveling.cdn.prismic.io/api/v2/documents/search?page=2";

    #[tokio::test]
    async fn test_first_page() {
        let source = MemorySource::new(page(&["a"], Some(PAGE_2)));
        let state = ContentLoader::new(&source).first_page(1).await.unwrap();
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.cursor(), Some(PAGE_2));
    }

    #[tokio::test]
    async fn test_all_summaries_follows_cursor() {
        let source = MemorySource::new(page(&["a"], Some(PAGE_2)))
            .with_page(PAGE_2, page(&["b", "c"], None));
        let posts = ContentLoader::new(&source).all_summaries(1).await.unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(source.requests(), 2);
    }

    #[tokio::test]
    async fn test_all_summaries_stops_on_cursor_cycle() {
        let source = MemorySource::new(page(&["a"], Some(PAGE_2)))
            .with_page(PAGE_2, page(&["b"], Some(PAGE_2)));
        let posts = ContentLoader::new(&source).all_summaries(1).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(source.requests(), 2);
    }

    #[tokio::test]
    async fn test_fetch_detail() {
        let source = MemorySource::default().with_document(post("hooks", &"word ".repeat(300)));
        let detail = ContentLoader::new(&source)
            .fetch_detail("hooks")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.title, "Post hooks");
        assert_eq!(detail.reading_time_minutes, 2);
        assert_eq!(detail.banner_url, None);
    }

    #[tokio::test]
    async fn test_fetch_detail_unknown_uid() {
        let source = MemorySource::default().with_document(post("hooks", "text"));
        let detail = ContentLoader::new(&source).fetch_detail("unknown-id").await.unwrap();
        assert!(detail.is_none());
    }

    #[tokio::test]
    async fn test_fetch_detail_malformed() {
        let mut doc = post("hooks", "text");
        doc.data.title = None;
        let source = MemorySource::default().with_document(doc);
        let err = ContentLoader::new(&source).fetch_detail("hooks").await.unwrap_err();
        assert!(matches!(err, ContentError::Validation { field: "title", .. }));
    }
}
