//! Incremental "load more" pagination over cursor URLs

use std::collections::HashSet;

use crate::content::{map_to_summary, PostSummary, RawPage};
use crate::error::ContentError;
use crate::source::ContentSource;

/// Posts shown so far and where the next batch lives
///
/// `items` only ever grows at the end. A `None` cursor means there is
/// nothing left to load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationState {
    items: Vec<PostSummary>,
    cursor: Option<String>,
}

/// Result of a `load_more` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    /// The cursor was already exhausted; nothing was fetched
    Exhausted,
    /// A batch was fetched and this many posts were appended
    Appended(usize),
}

impl PaginationState {
    /// Start a session from an already mapped first batch
    ///
    /// Repeated ids in `items` are dropped like in any later batch.
    pub fn new(items: Vec<PostSummary>, cursor: Option<String>) -> Self {
        Self::default().apply(items, cursor)
    }

    /// Build the initial state from a pre-fetched first page
    pub fn from_page(page: &RawPage) -> Result<Self, ContentError> {
        let items = map_batch(page)?;
        Ok(Self::new(items, page.next_page.clone()))
    }

    pub fn items(&self) -> &[PostSummary] {
        &self.items
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn into_items(self) -> Vec<PostSummary> {
        self.items
    }

    /// Next state after receiving `batch` with cursor `next`
    ///
    /// Posts whose id is already listed are dropped so ids stay unique.
    pub fn apply(&self, batch: Vec<PostSummary>, next: Option<String>) -> Self {
        let mut seen: HashSet<String> = self.items.iter().map(|p| p.id.clone()).collect();
        let mut items = self.items.clone();

        for post in batch {
            if seen.insert(post.id.clone()) {
                items.push(post);
            } else {
                tracing::warn!("Skipping duplicate post {} in pagination", post.id);
            }
        }

        Self {
            items,
            cursor: next,
        }
    }
}

/// Drives `PaginationState` against a content source
pub struct PaginationController<'a, S: ContentSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: ContentSource + ?Sized> PaginationController<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Fetch the page behind the cursor and append it
    ///
    /// On any error `state` is left exactly as it was, so the call can be
    /// retried. The exclusive borrow keeps two loads of the same state from
    /// overlapping.
    pub async fn load_more(&self, state: &mut PaginationState) -> Result<LoadMore, ContentError> {
        let Some(cursor) = state.cursor.as_deref() else {
            return Ok(LoadMore::Exhausted);
        };

        tracing::debug!("Loading more posts from {}", cursor);
        let page = self.source.fetch_page(cursor).await?;
        let batch = map_batch(&page)?;

        let before = state.items.len();
        *state = state.apply(batch, page.next_page);
        let appended = state.items.len() - before;

        tracing::debug!(
            "Appended {} posts ({} total, more: {})",
            appended,
            state.items.len(),
            state.has_more()
        );
        Ok(LoadMore::Appended(appended))
    }
}

fn map_batch(page: &RawPage) -> Result<Vec<PostSummary>, ContentError> {
    page.results.iter().map(map_to_summary).collect()
}
