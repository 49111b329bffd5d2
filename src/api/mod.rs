//! Remote article API: wire types, the HTTP fetcher and the URL-keyed
//! fetch cache the article list reads from.

pub mod cache;
pub mod client;
pub mod error;
pub mod types;

pub use cache::{FetchCache, FetchSnapshot, SettleHook};
pub use client::{ArticleClient, Fetcher};
pub use error::FetchError;
pub use types::{Article, ArticlesResponse, ErrorBody, Profile};
