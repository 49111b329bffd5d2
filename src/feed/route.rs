//! Route state and fetch URL derivation.

use reqwest::Url;

use crate::api::FetchError;
use crate::feed::PAGE_SIZE;

/// Current location of the feed view: a path plus ordered query parameters
/// (`tag`, `author`, `favorited`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    query: Vec<(String, String)>,
}

impl Default for Route {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter, preserving insertion order.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Build the route for the home feed filters; `None` filters are omitted.
    pub fn from_filters(
        tag: Option<&str>,
        author: Option<&str>,
        favorited: Option<&str>,
    ) -> Self {
        let mut route = Self::default();
        for (key, value) in [("tag", tag), ("author", author), ("favorited", favorited)] {
            if let Some(value) = value {
                route = route.with_param(key, value);
            }
        }
        route
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Path and query as shown to the user, e.g. `/?tag=rust`.
    pub fn as_path(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}

/// URL of the articles page for `route` at zero-based `page`.
///
/// Route query parameters come first, in order, followed by
/// `offset = page * PAGE_SIZE`: `{base}/articles?tag=x&offset=20`, or
/// `{base}/articles?offset=20` when the route has no query.
pub fn feed_url(api_base: &str, route: &Route, page: usize) -> Result<String, FetchError> {
    let invalid = |reason: &str| FetchError::InvalidUrl(format!("{api_base}: {reason}"));

    let offset = page
        .checked_mul(PAGE_SIZE)
        .ok_or_else(|| FetchError::InvalidUrl(format!("page {page} is out of range")))?;

    let mut url = Url::parse(api_base).map_err(|e| invalid(&e.to_string()))?;
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("base URL must not carry a query or fragment"));
    }
    url.path_segments_mut()
        .map_err(|()| invalid("base URL cannot have a path"))?
        .pop_if_empty()
        .push("articles");

    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in route.query() {
            pairs.append_pair(key, value);
        }
        pairs.append_pair("offset", &offset.to_string());
    }

    Ok(url.to_string())
}
