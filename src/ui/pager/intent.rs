use crate::ui::mvi::Intent;

/// Pagination control actions, from clicks or their keyboard equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerIntent {
    First,
    Previous,
    /// Jump to a zero-based page.
    Goto { page: usize },
    Next,
    /// Jump to `ceil(page_count / PAGE_SIZE)`.
    Last,
}

impl Intent for PagerIntent {}
