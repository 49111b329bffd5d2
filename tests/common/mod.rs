//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use conduit_feed::api::{Article, ArticlesResponse, FetchCache, FetchError, Fetcher};
use conduit_feed::config::Config;
use conduit_feed::feed::{PageContext, Route};
use conduit_feed::ui::app::App;
use parking_lot::Mutex;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn article(slug: &str) -> Article {
    Article {
        slug: slug.to_string(),
        title: format!("Title of {slug}"),
        description: format!("About {slug}"),
        created_at: "2024-05-06T07:08:09.000Z".to_string(),
        ..Article::default()
    }
}

pub fn page_of(slugs: &[&str], total: usize) -> ArticlesResponse {
    ArticlesResponse {
        articles: slugs.iter().map(|s| article(s)).collect(),
        articles_count: total,
    }
}

/// In-memory fetcher: answers every URL with the same result and records
/// the URLs it was asked for.
pub struct StaticFetcher {
    result: Result<ArticlesResponse, FetchError>,
    pub urls: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn ok(page: ArticlesResponse) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(page),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn err(error: FetchError) -> Arc<Self> {
        Arc::new(Self {
            result: Err(error),
            urls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<ArticlesResponse, FetchError> {
        self.urls.lock().push(url.to_string());
        self.result.clone()
    }
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.api.base_url = "http://api.test/api".to_string();
    config
}

/// App wired to `fetcher` on the current tokio runtime.
pub fn test_app(fetcher: Arc<StaticFetcher>, route: Route, page: usize) -> App {
    let cache = FetchCache::new(
        fetcher,
        tokio::runtime::Handle::current(),
        Duration::from_secs(2),
    );
    App::new(&test_config(), route, cache, PageContext::new(page))
}

/// Wait until the fetch for the app's current URL has settled.
pub async fn settle(app: &mut App) {
    let url = app.fetch_url().expect("valid url");
    for _ in 0..200 {
        let snapshot = app.cache().use_fetch(&url);
        if !snapshot.is_validating && (snapshot.data.is_some() || snapshot.error.is_some()) {
            app.on_fetch_settled(&url);
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("fetch for {url} did not settle");
}

/// Render the full app into a test terminal and return the screen text,
/// one string per row.
pub fn render_app(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| conduit_feed::ui::render::draw(frame, app))
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}
