//! HTTP fetcher for the article feed.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tokio::time::timeout;

use crate::api::error::FetchError;
use crate::api::types::{ArticlesResponse, ErrorBody};
use crate::config::ApiConfig;

/// Source of article pages, keyed by full request URL.
///
/// The cache only talks to this trait, so tests can substitute an
/// in-memory implementation.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ArticlesResponse, FetchError>;
}

/// reqwest-backed [`Fetcher`] for `GET /articles`.
pub struct ArticleClient {
    client: Client,
    request_timeout: Duration,
}

impl ArticleClient {
    pub fn new(config: &ApiConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .user_agent(concat!("conduit-feed/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    async fn do_fetch(&self, url: &str) -> Result<ArticlesResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Connection {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| FetchError::Connection {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            // Servers without a RealWorld error body still yield a status error.
            let body = serde_json::from_slice::<ErrorBody>(&bytes).unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Fetcher for ArticleClient {
    async fn fetch(&self, url: &str) -> Result<ArticlesResponse, FetchError> {
        tracing::debug!(url, "fetching articles");
        let result = match timeout(self.request_timeout, self.do_fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        };

        match &result {
            Ok(page) => tracing::debug!(
                url,
                articles = page.articles.len(),
                total = page.articles_count,
                "articles fetched"
            ),
            Err(err) => tracing::warn!(url, error = %err, "article fetch failed"),
        }
        result
    }
}
