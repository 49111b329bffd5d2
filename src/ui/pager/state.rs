use crate::ui::mvi::UiState;

/// Inputs the pagination handlers act on: the shared page and the item
/// count supplied by the view's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PagerState {
    pub page: usize,
    pub page_count: usize,
}

impl UiState for PagerState {}
