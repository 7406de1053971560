use serde::{Deserialize, Serialize};

/// Paged listing container, mirroring the backend's page envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Elements of the current page.
    pub content: Vec<T>,
    /// Total pages available for the query.
    pub total_pages: u32,
    /// Total elements across the whole collection, not just this page.
    pub total_elements: u64,
    /// Requested page size.
    pub size: u32,
    /// Current page index, 0-based.
    pub number: u32,
}

impl<T> Page<T> {
    /// Empty page, used when a listing request fails and the table should
    /// render empty rather than stale.
    pub fn empty(size: u32) -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
            total_elements: 0,
            size,
            number: 0,
        }
    }

    /// Next 0-based page index, if one exists.
    pub fn next_page(&self) -> Option<u32> {
        let next = self.number + 1;
        (next < self.total_pages).then_some(next)
    }

    pub fn has_prev(&self) -> bool {
        self.number > 0
    }
}
