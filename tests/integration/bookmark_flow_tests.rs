//! Integration tests for the bookmark flow
//!
//! These tests drive the bookmark service end to end against a real SQLite
//! file, with titles coming either from a stub or from a wiremock server.

use async_trait::async_trait;
use linkeeper::config::FetcherConfig;
use linkeeper::service::{messages, SaveOutcome};
use linkeeper::storage::{BookmarkStore, SqliteStore};
use linkeeper::title::{HttpTitleFetcher, TitleFetcher};
use linkeeper::BookmarkService;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Fetcher that answers every URL with the same title
struct StubFetcher(&'static str);

#[async_trait]
impl TitleFetcher for StubFetcher {
    async fn fetch_title(&self, _url: &str) -> Option<String> {
        Some(self.0.to_string())
    }
}

fn open_store(dir: &TempDir) -> SqliteStore {
    SqliteStore::open(&dir.path().join("bookmarks.db")).expect("Failed to open store")
}

#[tokio::test]
async fn test_submit_then_resubmit_replaces_bookmark() {
    let dir = TempDir::new().unwrap();
    let service = BookmarkService::new(open_store(&dir), StubFetcher("Example Domain"), '|');

    let reply = service.submit("check out example.com #tech #news").await;
    assert_eq!(reply, messages::ADDED);

    let rows = service.store().list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].url, "example.com");
    assert_eq!(rows[0].title.as_deref(), Some("Example Domain"));
    assert_eq!(rows[0].tags.as_deref(), Some("tech|news"));
    let first_id = rows[0].id;

    let reply = service.submit("example.com #tech").await;
    assert_eq!(reply, messages::UPDATED);

    let rows = service.store().list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].url, "example.com");
    assert_eq!(rows[0].tags.as_deref(), Some("tech"));
    assert_ne!(rows[0].id, first_id);
}

#[tokio::test]
async fn test_rows_survive_reopening_the_store() {
    let dir = TempDir::new().unwrap();

    {
        let service = BookmarkService::new(open_store(&dir), StubFetcher("Rust"), '|');
        service.submit("rust-lang.org #lang").await;
    }

    let service = BookmarkService::new(open_store(&dir), StubFetcher("Rust"), '|');
    assert_eq!(service.list_all(), vec!["ID:1: rust-lang.org Rust #lang"]);
}

#[tokio::test]
async fn test_search_or_semantics() {
    let dir = TempDir::new().unwrap();
    let service = BookmarkService::new(open_store(&dir), StubFetcher("Page"), '|');

    service.submit("headlines.org #news").await;
    service.submit("example.com").await;
    service.submit("cooking.net #food").await;

    let found = service.find("example #news").unwrap();
    let urls: Vec<_> = found.iter().map(|b| b.url.as_str()).collect();
    assert_eq!(urls, vec!["headlines.org", "example.com"]);

    assert_eq!(
        service.search("example #news"),
        vec!["ID:1: headlines.org #news", "ID:2: example.com"]
    );
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let service = BookmarkService::new(open_store(&dir), StubFetcher("Page"), '|');

    let saved = service.save("example.com").await.unwrap();
    let id = saved.bookmark().id;

    assert_eq!(service.remove(id), messages::removed(id));
    assert_eq!(service.remove(id), messages::removed(id));
    assert_eq!(service.list_all(), vec![messages::NO_BOOKMARKS]);
}

#[tokio::test]
async fn test_custom_delimiter_round_trip() {
    let dir = TempDir::new().unwrap();
    let service = BookmarkService::new(open_store(&dir), StubFetcher("Docs"), ',');

    service.submit("docs.rs #rust #docs").await;

    let rows = service.store().list_all().unwrap();
    assert_eq!(rows[0].tags.as_deref(), Some("rust,docs"));
    assert_eq!(service.search("#docs"), vec!["ID:1: docs.rs #rust #docs"]);
}

#[tokio::test]
async fn test_title_fetched_over_http() {
    let mock_server = MockServer::start().await;
    let port = mock_server.address().port();

    Mock::given(method("GET"))
        .and(path("/article.html"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<html><head><title>  Fearless Concurrency </title></head><body></body></html>",
            "text/html; charset=utf-8",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Route a dotted host name to the mock server so the URL extractor
    // recognises it
    let config = FetcherConfig {
        timeout_secs: 2,
        user_agent: "TestKeeper/1.0".to_string(),
    };
    let client = reqwest::Client::builder()
        .resolve("blog.test", *mock_server.address())
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
        .unwrap();

    let dir = TempDir::new().unwrap();
    let service = BookmarkService::new(open_store(&dir), HttpTitleFetcher::with_client(client), '|');

    let text = format!("worth reading http://blog.test:{}/article.html #rust", port);
    let outcome = service.save(&text).await.unwrap();

    match outcome {
        SaveOutcome::Added(bookmark) => {
            assert_eq!(
                bookmark.url,
                format!("http://blog.test:{}/article.html", port)
            );
            assert_eq!(bookmark.title.as_deref(), Some("Fearless Concurrency"));
            assert_eq!(bookmark.tags.as_deref(), Some("rust"));
        }
        other => panic!("expected a new bookmark, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_page_still_saves_bookmark() {
    let config = FetcherConfig {
        timeout_secs: 1,
        user_agent: "TestKeeper/1.0".to_string(),
    };
    let client = reqwest::Client::builder()
        .resolve("dead.test", "127.0.0.1:1".parse().unwrap())
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
        .unwrap();

    let dir = TempDir::new().unwrap();
    let service = BookmarkService::new(open_store(&dir), HttpTitleFetcher::with_client(client), '|');

    let reply = service.submit("http://dead.test:1/gone.html #archive").await;
    assert_eq!(reply, messages::ADDED);

    let rows = service.store().list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, None);
    assert_eq!(rows[0].tags.as_deref(), Some("archive"));
}
