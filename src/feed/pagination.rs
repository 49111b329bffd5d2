//! Page window math for the pagination control.

use crate::feed::PAGE_SIZE;

/// What the pagination control shows for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// Zero-based page numbers in the visible window, ascending.
    pub pages: Vec<usize>,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

/// Compute the visible window of pages.
///
/// The window holds `min(window, total_pages)` pages, centred on `current`
/// and clamped to `[0, total_pages)`. `current` itself is not clamped, so a
/// page past the end still yields the last full window.
pub fn paginate(total: usize, limit: usize, window: usize, current: usize) -> PageInfo {
    let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
    let size = window.min(total_pages);
    let start = current
        .saturating_sub(size / 2)
        .min(total_pages - size);

    PageInfo {
        pages: (start..start + size).collect(),
        current_page: current,
        total_pages,
        has_previous_page: current > 0,
        has_next_page: current.saturating_add(1) < total_pages,
    }
}

/// Target of the "last" control: `ceil(page_count / PAGE_SIZE)`.
pub fn last_index(page_count: usize) -> usize {
    page_count.div_ceil(PAGE_SIZE)
}
