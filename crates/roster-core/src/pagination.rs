//! Pagination window over the active view.
//!
//! Pages are 1-based. The current page is kept inside
//! `[1, page_count(len, row_limit)]` by calling [`Pagination::clamp`] every
//! time the length of the source view or the row limit changes.

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;

/// Number of pages needed to show `len` rows, never less than one.
pub fn page_count(len: usize, row_limit: NonZeroUsize) -> usize {
    len.div_ceil(row_limit.get()).max(1)
}

/// Index range `[low, high)` of `page` within a source of length `len`.
pub fn window_bounds(len: usize, row_limit: NonZeroUsize, page: usize) -> Range<usize> {
    let limit = row_limit.get();
    let low = page.saturating_sub(1).saturating_mul(limit).min(len);
    let high = page.saturating_mul(limit).min(len);
    low..high
}

/// The contiguous slice of `source` shown on `page`.
pub fn window_of<T>(source: &[T], row_limit: NonZeroUsize, page: usize) -> &[T] {
    &source[window_bounds(source.len(), row_limit, page)]
}

/// Row limit and current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    row_limit: NonZeroUsize,
    current_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ROW_LIMIT)
    }
}

impl Pagination {
    /// Start on the first page with the given row limit.
    pub fn new(row_limit: NonZeroUsize) -> Self {
        Self {
            row_limit,
            current_page: 1,
        }
    }

    pub fn row_limit(&self) -> NonZeroUsize {
        self.row_limit
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Re-clamp the current page against a source of length `len`.
    pub fn clamp(&mut self, len: usize) {
        self.current_page = self.current_page.clamp(1, page_count(len, self.row_limit));
    }

    /// Change the row limit and re-clamp.
    pub fn set_row_limit(&mut self, row_limit: NonZeroUsize, len: usize) {
        self.row_limit = row_limit;
        self.clamp(len);
    }

    /// Jump to `page`, clamped into range.
    pub fn set_page(&mut self, page: usize, len: usize) {
        self.current_page = page;
        self.clamp(len);
    }

    pub fn next_page(&mut self, len: usize) {
        self.set_page(self.current_page.saturating_add(1), len);
    }

    pub fn prev_page(&mut self, len: usize) {
        self.set_page(self.current_page.saturating_sub(1), len);
    }

    pub fn first_page(&mut self, len: usize) {
        self.set_page(1, len);
    }

    pub fn last_page(&mut self, len: usize) {
        self.set_page(page_count(len, self.row_limit), len);
    }

    /// Index range of the current page within a source of length `len`.
    pub fn bounds(&self, len: usize) -> Range<usize> {
        window_bounds(len, self.row_limit, self.current_page)
    }

    /// Summary of the current page for display.
    pub fn info(&self, len: usize) -> PageInfo {
        let bounds = self.bounds(len);
        PageInfo {
            page: self.current_page,
            page_count: page_count(len, self.row_limit),
            first_row: if bounds.is_empty() { 0 } else { bounds.start + 1 },
            last_row: bounds.end,
            total: len,
        }
    }
}

/// Position of the current page, as shown next to the page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (1-based).
    pub page: usize,
    /// Total number of pages (at least one).
    pub page_count: usize,
    /// 1-based index of the first visible row, 0 when nothing is visible.
    pub first_row: usize,
    /// 1-based index of the last visible row, 0 when nothing is visible.
    pub last_row: usize,
    /// Length of the active view.
    pub total: usize,
}

impl PageInfo {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} of {}", self.first_row, self.last_row, self.total)
    }
}
