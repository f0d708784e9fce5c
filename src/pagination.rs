use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::DEFAULT_PAGE_SIZE;
use crate::domain::types::ItemIndex;

/// The "current / total pages" pair shown next to the navigation buttons.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PageIndicator {
    pub current: usize,
    pub total_pages: usize,
}

/// Paging state over a fixed list of `total` items.
///
/// `current_page` is 1-based and always within `[1, last_page()]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    total: usize,
    page_size: NonZeroUsize,
    current_page: usize,
}

impl PageState {
    pub fn new(total: usize) -> Self {
        Self::with_page_size(total, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(total: usize, page_size: NonZeroUsize) -> Self {
        Self {
            total,
            page_size,
            current_page: 1,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `ceil(total / page_size)`; zero for an empty list.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size.get())
    }

    /// Highest page navigation may reach. Never below 1.
    pub fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Advances one page, clamped to the last page. Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        let next = (self.current_page + 1).min(self.last_page());
        self.move_to(next)
    }

    /// Steps back one page, clamped to page 1. Returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        let previous = self.current_page.saturating_sub(1).max(1);
        self.move_to(previous)
    }

    fn move_to(&mut self, page: usize) -> bool {
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }

    pub fn is_visible(&self, index: ItemIndex) -> bool {
        let index = index.get();
        let size = self.page_size.get();
        (self.current_page - 1) * size < index && index <= self.current_page * size
    }

    /// Indices shown on the current page, clipped to `total`.
    pub fn visible_range(&self) -> RangeInclusive<usize> {
        let size = self.page_size.get();
        let start = (self.current_page - 1) * size + 1;
        let end = (self.current_page * size).min(self.total);
        start..=end
    }

    pub fn indicator(&self) -> PageIndicator {
        PageIndicator {
            current: self.current_page,
            total_pages: self.total_pages(),
        }
    }
}
