//! Page windowing.

use std::ops::Range;

/// Current page and page size.
///
/// `current_page` is 1-based. The window computation clips to the data
/// bounds, so a page pointing past the end yields an empty window rather
/// than a panic; whether to snap back to a valid page after the data
/// shrinks is the caller's call (see the `reset_page_on_rows_change` flag
/// on [`TableConfig`](crate::table::TableConfig)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub rows_per_page: usize,
}

impl PaginationState {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            current_page: 1,
            rows_per_page,
        }
    }

    /// The index window `[(p-1)*n, p*n)` clipped to `len`.
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = (self.current_page - 1).saturating_mul(self.rows_per_page);
        let end = start.saturating_add(self.rows_per_page);
        start.min(len)..end.min(len)
    }

    /// Number of pages needed for `total` rows, never less than one.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page).max(1)
    }
}
