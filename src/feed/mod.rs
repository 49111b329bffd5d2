//! Feed state shared by the article list: route, page context, pagination
//! math and viewport breakpoints.

pub mod context;
pub mod pagination;
pub mod route;
pub mod viewport;

pub use context::{PageContext, PageCountContext};
pub use pagination::{last_index, paginate, PageInfo};
pub use route::{feed_url, Route};
pub use viewport::Viewport;

/// Articles per page; also the multiplier for the `offset` query parameter.
pub const PAGE_SIZE: usize = 20;
