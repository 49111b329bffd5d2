mod bar;
mod intent;
mod reducer;
mod state;

pub use bar::{pager_cells, PagerBar, PagerCell};
pub use intent::PagerIntent;
pub use reducer::PagerReducer;
pub use state::PagerState;
