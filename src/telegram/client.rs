//! Thin Telegram Bot API client.
//!
//! The Bot API is plain HTTPS + JSON, so this speaks it directly with
//! reqwest: `getUpdates` long polling for inbound messages, `sendMessage`
//! for replies, `sendChatAction` for the typing indicator.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

use crate::errors::BotError;

const TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";

/// How long one `getUpdates` call may block server-side, in seconds.
const LONG_POLL_TIMEOUT_SECS: u64 = 50;

/// Response envelope shared by every Bot API method.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub forward_from_chat: Option<Chat>,
    #[serde(default)]
    pub forward_from_message_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    base_url: String,
}

impl TelegramClient {
    #[must_use]
    pub fn new(bot_token: &str) -> Self {
        // Timeout must exceed the long-poll window or getUpdates aborts early.
        let http = Client::builder()
            .timeout(Duration::from_secs(LONG_POLL_TIMEOUT_SECS + 10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: format!("{}/bot{}", TELEGRAM_API_BASE_URL, bot_token),
        }
    }

    async fn call<T>(&self, method: &str, payload: &Value) -> Result<T, BotError>
    where
        T: serde::de::DeserializeOwned,
    {
        let resp = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .json(payload)
            .send()
            .await?;

        let envelope: ApiResponse<T> = resp
            .json()
            .await
            .map_err(|e| BotError::ParseError(format!("Failed to parse {} response: {}", method, e)))?;

        if envelope.ok {
            envelope
                .result
                .ok_or_else(|| BotError::TelegramError(format!("{} response missing result", method)))
        } else {
            Err(BotError::TelegramError(format!(
                "{} failed: {}",
                method,
                envelope
                    .description
                    .unwrap_or_else(|| "Unknown error".to_string())
            )))
        }
    }

    /// Long-poll for the next batch of updates after `offset`.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, BotError> {
        let payload = json!({
            "offset": offset,
            "timeout": LONG_POLL_TIMEOUT_SECS,
            "allowed_updates": ["message"]
        });
        self.call("getUpdates", &payload).await
    }

    /// Send a plain text message.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<Message, BotError> {
        let payload = json!({
            "chat_id": chat_id,
            "text": text
        });
        self.call("sendMessage", &payload).await
    }

    /// Send an HTML-formatted summary reply: silent notification, link
    /// preview shown above the text.
    pub async fn send_html_reply(&self, chat_id: i64, html: &str) -> Result<Message, BotError> {
        let payload = json!({
            "chat_id": chat_id,
            "text": html,
            "parse_mode": "HTML",
            "disable_notification": true,
            "link_preview_options": {
                "show_above_text": true
            }
        });
        self.call("sendMessage", &payload).await
    }

    /// Broadcast a chat action ("typing", ...) to the chat.
    pub async fn send_chat_action(&self, chat_id: i64, action: &str) -> Result<bool, BotError> {
        let payload = json!({
            "chat_id": chat_id,
            "action": action
        });
        self.call("sendChatAction", &payload).await
    }
}
