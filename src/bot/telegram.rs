//! Telegram Bot API client: long polling via getUpdates, replies via sendMessage

use crate::config::TelegramConfig;
use crate::LinkeeperError;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Envelope every Bot API response is wrapped in
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

impl<T> ApiResponse<T> {
    fn into_result(self, method: &str) -> Result<T, LinkeeperError> {
        if !self.ok {
            let description = self.description.unwrap_or_else(|| "unknown error".to_string());
            return Err(LinkeeperError::Telegram(format!(
                "{} failed: {}",
                method, description
            )));
        }

        self.result
            .ok_or_else(|| LinkeeperError::Telegram(format!("{} returned no result", method)))
    }
}

/// An incoming update; only message updates are of interest
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

/// A chat message
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
    pub reply_to_message: Option<Box<Message>>,
}

impl Message {
    /// Text of the message this one replies to
    pub fn reply_to_text(&self) -> Option<&str> {
        self.reply_to_message
            .as_ref()
            .and_then(|original| original.text.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// Minimal Bot API client
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
    token: String,
    poll_timeout_secs: u64,
}

impl TelegramClient {
    /// Creates a client for the bot identified by `token`
    ///
    /// The HTTP timeout is kept above the long-poll timeout so an idle poll
    /// is never cut off client-side.
    pub fn new(config: &TelegramConfig, token: &str) -> Result<Self, LinkeeperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.poll_timeout_secs + 10))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            poll_timeout_secs: config.poll_timeout_secs,
        })
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Fetches updates with an id of at least `offset`
    ///
    /// Passing the last seen `update_id + 1` acknowledges everything before it.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, LinkeeperError> {
        let params = [
            ("offset", offset.to_string()),
            ("timeout", self.poll_timeout_secs.to_string()),
            ("allowed_updates", r#"["message"]"#.to_string()),
        ];

        let response: ApiResponse<Vec<Update>> = self
            .client
            .get(self.api_url("getUpdates"))
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        response.into_result("getUpdates")
    }

    /// Sends `text` to `chat_id`
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), LinkeeperError> {
        let payload = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });

        let response: ApiResponse<serde_json::Value> = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&payload)
            .send()
            .await?
            .json()
            .await?;

        response.into_result("sendMessage").map(|_| ())
    }
}
