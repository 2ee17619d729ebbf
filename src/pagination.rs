//! Cursor paging protocol for list-returning fetch operations.
//!
//! A fetch takes a [`PageRequest`] and yields one [`Page`]. A command issues a
//! single fetch per invocation and shows the returned `next_cursor` so the user
//! can ask for the following page with `--cursor`. [`walk_pages`] drives a
//! fetch across every page for callers that need the whole collection.

use crate::error::ApiError;
use crate::render::PageMeta;
use tracing::debug;

/// Items requested per page when the user does not say otherwise.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Largest page size the API documents. Not enforced here.
pub const MAX_PER_PAGE: u32 = 500;

/// Cursor and page size for one list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Continuation token; empty requests the first page.
    pub cursor: String,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            cursor: String::new(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(cursor: impl Into<String>, per_page: u32) -> Self {
        Self {
            cursor: cursor.into(),
            per_page,
        }
    }

    /// Request for the page after the one described by `meta`, if any.
    pub fn next(&self, meta: &PageMeta) -> Option<PageRequest> {
        meta.has_next().then(|| PageRequest::new(meta.next_cursor.clone(), self.per_page))
    }

    /// Query parameters for the request; the cursor is left out when empty.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("per_page", self.per_page.to_string())];
        if !self.cursor.is_empty() {
            params.push(("cursor", self.cursor.clone()));
        }
        params
    }
}

/// One page of a list result.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, meta: PageMeta) -> Self {
        Self { items, meta }
    }
}

/// Fetch every page starting from `start`, following `next_cursor` until it is
/// empty.
///
/// Stops at the first error and returns it; items from earlier pages are
/// dropped.
pub fn walk_pages<T, F>(start: PageRequest, mut fetch: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(&PageRequest) -> Result<Page<T>, ApiError>,
{
    let mut items = Vec::new();
    let mut request = start;
    loop {
        let page = fetch(&request)?;
        debug!(
            cursor = %request.cursor,
            received = page.items.len(),
            total = page.meta.total_count,
            "Fetched page"
        );
        items.extend(page.items);
        match request.next(&page.meta) {
            Some(next) => request = next,
            None => return Ok(items),
        }
    }
}
