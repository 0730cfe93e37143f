//! Client-side pagination over an in-memory list
//!
//! The cursor is a 1-based page number plus a page size. The page size is
//! either configured explicitly or derived from the available display height
//! (see [`page_size_for_height`]).

use std::ops::Range;

/// Number of items that fit in `height` once `header` rows are reserved.
///
/// `floor((height - header) / item)`, saturating at zero. An `item` height of
/// zero yields zero rather than dividing by zero.
pub fn page_size_for_height(height: u32, header: u32, item: u32) -> usize {
    if item == 0 {
        return 0;
    }
    (height.saturating_sub(header) / item) as usize
}

/// Page cursor over a list of `total` items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Pagination {
    /// Start on page 1 with the given page size
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    /// Current page (1-based)
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `total` items (0 when nothing fits)
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            0
        } else {
            total.div_ceil(self.page_size)
        }
    }

    /// Index range of the current page: `[(page-1)*size, min(page*size, total))`
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.page_size).min(total);
        let end = self.window_end().min(total);
        start..end
    }

    /// Slice `items` down to the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.window(items.len())]
    }

    /// "Next" is offered while the current window ends before the last item
    pub fn has_next(&self, total: usize) -> bool {
        self.page_size > 0 && self.window_end() < total
    }

    /// "Previous" is offered on every page after the first
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Advance one page; returns false (and does nothing) when there is no next page
    pub fn next(&mut self, total: usize) -> bool {
        if self.has_next(total) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; returns false (and does nothing) on the first page
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Change the page size and pull the page back into range
    pub fn set_page_size(&mut self, page_size: usize, total: usize) {
        self.page_size = page_size;
        self.clamp(total);
    }

    /// Keep the page within `[1, max(1, page_count)]`
    pub fn clamp(&mut self, total: usize) {
        let last = self.page_count(total).max(1);
        self.page = self.page.clamp(1, last);
    }

    /// Return to the first page
    pub fn reset(&mut self) {
        self.page = 1;
    }

    fn window_end(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }
}
