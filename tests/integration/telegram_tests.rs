//! Integration tests for the Telegram transport
//!
//! A wiremock server stands in for the Bot API so the polling cycle can be
//! exercised without a real bot token.

use linkeeper::bot::{poll_once, Dispatcher, TelegramClient};
use linkeeper::config::TelegramConfig;
use linkeeper::service::messages;
use linkeeper::storage::SqliteStore;
use linkeeper::title::NoTitle;
use linkeeper::BookmarkService;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "123:testtoken";

fn create_client(mock_server: &MockServer) -> TelegramClient {
    let config = TelegramConfig {
        api_base_url: mock_server.uri(),
        poll_timeout_secs: 0,
    };
    TelegramClient::new(&config, TOKEN).expect("Failed to build client")
}

fn create_dispatcher(dir: &TempDir) -> Dispatcher<SqliteStore, NoTitle> {
    let store = SqliteStore::open(&dir.path().join("bookmarks.db")).unwrap();
    Dispatcher::new(BookmarkService::new(store, NoTitle, '|'))
}

fn text_update(update_id: i64, text: &str) -> serde_json::Value {
    json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id * 10,
            "chat": {"id": 42, "type": "private"},
            "text": text
        }
    })
}

async fn mount_updates(mock_server: &MockServer, offset: &str, updates: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/bot{}/getUpdates", TOKEN)))
        .and(query_param("offset", offset))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": updates
        })))
        .mount(mock_server)
        .await;
}

async fn expect_reply(mock_server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/bot{}/sendMessage", TOKEN)))
        .and(body_partial_json(json!({"chat_id": 42, "text": text})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": {"message_id": 1}
        })))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_add_and_list_through_polling() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_client(&mock_server);
    let dispatcher = create_dispatcher(&dir);

    mount_updates(
        &mock_server,
        "0",
        json!([text_update(7, "/add example.com #tech #news")]),
    )
    .await;
    mount_updates(&mock_server, "8", json!([text_update(8, "/ls")])).await;
    expect_reply(&mock_server, messages::ADDED).await;
    expect_reply(&mock_server, "ID:1: example.com #tech #news").await;

    let offset = poll_once(&client, &dispatcher, 0).await.unwrap();
    assert_eq!(offset, 8);

    let offset = poll_once(&client, &dispatcher, offset).await.unwrap();
    assert_eq!(offset, 9);
}

#[tokio::test]
async fn test_reply_removal_through_polling() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_client(&mock_server);
    let dispatcher = create_dispatcher(&dir);

    dispatcher.handle("/add example.com", None).await;

    let update = json!({
        "update_id": 3,
        "message": {
            "message_id": 30,
            "chat": {"id": 42, "type": "private"},
            "text": "/rm",
            "reply_to_message": {
                "message_id": 29,
                "chat": {"id": 42, "type": "private"},
                "text": "ID:1: example.com"
            }
        }
    });
    mount_updates(&mock_server, "0", json!([update])).await;
    expect_reply(&mock_server, &messages::removed(1)).await;

    let offset = poll_once(&client, &dispatcher, 0).await.unwrap();
    assert_eq!(offset, 4);
    assert!(dispatcher.service().bookmarks().unwrap().is_empty());
}

#[tokio::test]
async fn test_silent_updates_still_advance_offset() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_client(&mock_server);
    let dispatcher = create_dispatcher(&dir);

    let updates = json!([
        text_update(5, "just chatting"),
        {"update_id": 6, "edited_message": {"message_id": 1}},
        {
            "update_id": 7,
            "message": {"message_id": 70, "chat": {"id": 42, "type": "private"}}
        }
    ]);
    mount_updates(&mock_server, "0", updates).await;

    Mock::given(method("POST"))
        .and(path(format!("/bot{}/sendMessage", TOKEN)))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let offset = poll_once(&client, &dispatcher, 0).await.unwrap();
    assert_eq!(offset, 8);
}

#[tokio::test]
async fn test_api_error_surfaces_from_poll() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_client(&mock_server);
    let dispatcher = create_dispatcher(&dir);

    Mock::given(method("GET"))
        .and(path(format!("/bot{}/getUpdates", TOKEN)))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "ok": false,
            "error_code": 401,
            "description": "Unauthorized"
        })))
        .mount(&mock_server)
        .await;

    let err = poll_once(&client, &dispatcher, 0).await.unwrap_err();
    assert!(err.to_string().contains("Unauthorized"));
}
