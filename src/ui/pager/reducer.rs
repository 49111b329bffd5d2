//! Reducer for pagination clicks.

use crate::feed::last_index;
use crate::ui::mvi::Reducer;

use super::intent::PagerIntent;
use super::state::PagerState;

/// Pure page transitions. Writing the new page into the shared
/// `PageContext` is the caller's job.
pub struct PagerReducer;

impl Reducer for PagerReducer {
    type State = PagerState;
    type Intent = PagerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let page = match intent {
            PagerIntent::First => 0,
            PagerIntent::Previous => state.page.saturating_sub(1),
            PagerIntent::Goto { page } => page,
            PagerIntent::Next => state.page.saturating_add(1),
            PagerIntent::Last => last_index(state.page_count),
        };
        PagerState { page, ..state }
    }
}
