mod common;

use common::mock_backend::{MockBackend, MockResponse};
use conduit_feed::api::{ArticleClient, FetchCache, FetchError, Fetcher};
use conduit_feed::config::ApiConfig;
use conduit_feed::feed::{feed_url, Route};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn api_config(base_url: String) -> ApiConfig {
    ApiConfig {
        base_url,
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
        dedupe_interval_ms: 2000,
    }
}

fn cache_with_hook(base_url: String) -> (FetchCache, mpsc::UnboundedReceiver<String>) {
    let client = ArticleClient::new(&api_config(base_url)).unwrap();
    let cache = FetchCache::new(
        Arc::new(client),
        tokio::runtime::Handle::current(),
        Duration::from_secs(2),
    );
    let (tx, rx) = mpsc::unbounded_channel();
    cache.set_settle_hook(Arc::new(move |key: &str| {
        let _ = tx.send(key.to_string());
    }));
    (cache, rx)
}

async fn next_settled(rx: &mut mpsc::UnboundedReceiver<String>) -> String {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("request did not settle")
        .expect("hook channel closed")
}

#[tokio::test]
async fn client_requests_articles_with_query_and_offset() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::articles(20, 3, 43))
        .await;

    let client = ArticleClient::new(&api_config(backend.base_url())).unwrap();
    let route = Route::default().with_param("tag", "test");
    let url = feed_url(&backend.base_url(), &route, 1).unwrap();
    let page = client.fetch(&url).await.unwrap();

    assert_eq!(page.articles_count, 43);
    assert_eq!(
        page.articles.iter().map(|a| a.slug.as_str()).collect::<Vec<_>>(),
        vec!["article-20", "article-21", "article-22"]
    );

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/articles");
    assert_eq!(requests[0].query.as_deref(), Some("tag=test&offset=20"));
    assert!(requests[0]
        .headers
        .iter()
        .any(|(k, v)| k == "accept" && v == "application/json"));
}

#[tokio::test]
async fn client_maps_error_body() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(422, "offset", "is invalid"))
        .await;

    let client = ArticleClient::new(&api_config(backend.base_url())).unwrap();
    let url = feed_url(&backend.base_url(), &Route::default(), 0).unwrap();
    let err = client.fetch(&url).await.unwrap_err();

    match &err {
        FetchError::Status { status, body } => {
            assert_eq!(*status, 422);
            assert_eq!(body.errors["offset"], vec!["is invalid".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.error_list()[0],
        ("offset".to_string(), "is invalid".to_string())
    );
}

#[tokio::test]
async fn client_rejects_malformed_json() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"articles": "nope"}"#))
        .await;

    let client = ArticleClient::new(&api_config(backend.base_url())).unwrap();
    let url = feed_url(&backend.base_url(), &Route::default(), 0).unwrap();
    assert!(matches!(
        client.fetch(&url).await,
        Err(FetchError::Decode(_))
    ));
}

#[tokio::test]
async fn client_times_out() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::default().with_delay(1500))
        .await;

    let mut config = api_config(backend.base_url());
    config.timeout_seconds = 1;
    let client = ArticleClient::new(&config).unwrap();
    let url = feed_url(&backend.base_url(), &Route::default(), 0).unwrap();
    assert_eq!(
        client.fetch(&url).await.unwrap_err(),
        FetchError::Timeout { duration: 1 }
    );
}

#[tokio::test]
async fn identical_urls_issue_one_request() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::articles(0, 2, 2).with_delay(50))
        .await;
    let (cache, mut settled) = cache_with_hook(backend.base_url());
    let url = feed_url(&backend.base_url(), &Route::default(), 0).unwrap();

    let first = cache.use_fetch(&url);
    let second = cache.use_fetch(&url);
    assert!(first.data.is_none() && first.is_validating);
    assert!(second.data.is_none() && second.is_validating);

    assert_eq!(next_settled(&mut settled).await, url);
    let snapshot = cache.use_fetch(&url);
    assert_eq!(snapshot.data.unwrap().articles.len(), 2);
    assert_eq!(backend.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn failed_revalidation_keeps_previous_data() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::articles(0, 1, 1))
        .await;
    backend
        .enqueue_response(MockResponse::error(500, "server", "exploded"))
        .await;
    let (cache, mut settled) = cache_with_hook(backend.base_url());
    let url = feed_url(&backend.base_url(), &Route::default(), 0).unwrap();

    cache.use_fetch(&url);
    next_settled(&mut settled).await;
    assert!(cache.peek(&url).error.is_none());

    cache.revalidate(&url);
    next_settled(&mut settled).await;
    let snapshot = cache.peek(&url);
    assert!(snapshot.data.is_some());
    assert!(matches!(
        snapshot.error,
        Some(FetchError::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn success_after_failure_clears_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(503, "server", "unavailable"))
        .await;
    backend
        .enqueue_response(MockResponse::articles(0, 1, 1))
        .await;
    let (cache, mut settled) = cache_with_hook(backend.base_url());
    let url = feed_url(&backend.base_url(), &Route::default(), 0).unwrap();

    cache.use_fetch(&url);
    next_settled(&mut settled).await;
    assert!(cache.peek(&url).error.is_some());

    cache.revalidate(&url);
    next_settled(&mut settled).await;
    let snapshot = cache.peek(&url);
    assert!(snapshot.error.is_none());
    assert!(snapshot.data.is_some());
}

#[tokio::test]
async fn switching_back_within_dedupe_interval_reuses_entry() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::articles(0, 1, 40))
        .await;
    backend
        .enqueue_response(MockResponse::articles(20, 1, 40))
        .await;
    let (cache, mut settled) = cache_with_hook(backend.base_url());
    let page0 = feed_url(&backend.base_url(), &Route::default(), 0).unwrap();
    let page1 = feed_url(&backend.base_url(), &Route::default(), 1).unwrap();

    cache.use_fetch(&page0);
    next_settled(&mut settled).await;
    cache.use_fetch(&page1);
    next_settled(&mut settled).await;

    let back = cache.use_fetch(&page0);
    assert!(back.data.is_some());
    assert!(!back.is_validating);
    assert_eq!(backend.captured_requests().await.len(), 2);
}
