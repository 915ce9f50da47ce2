//! Per-message orchestration: receive an update, classify and summarize
//! the input, format the result, reply.

pub mod format;

use std::time::Duration;

use tracing::{error, info, warn};

use crate::core::config::AppConfig;
use crate::errors::BotError;
use crate::summarize::{SummarizeClient, SummaryContent, extract_video_id, summarize};
use crate::telegram::{Message, TelegramClient, start_typing};
use crate::telegraph::TelegraphClient;

use format::{article_reply, text_reply, video_page_content, video_reply};

const GREETING: &str = "👋 Привет. Пришли мне 🔗 ссылку на видео (youtube.com), статью, страницу или любой текст от 300 до лимита телеграм - 4096 символов (используй telegra.ph 😉), можешь 📬 пересылать мне длинные сообщения. Поддерживаемые языки: 🇷🇺🇬🇧🇨🇳 и др.";
const USAGE_HINT: &str = "⚠️ Пришли мне 🔗 ссылку на видео, статью, страницу";
const APOLOGY: &str = "⚠️ Не получилось сделать краткий пересказ(";

const PAGE_AUTHOR_NAME: &str = "Краткий Пересказ";
const PAGE_AUTHOR_URL: &str = "https://t.me/sum300bot";

/// How long to wait before retrying after a failed getUpdates call.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

/// The bot: one Telegram transport, one summarizer client, one Telegraph
/// client. Each inbound message is handled to completion before the next
/// one is taken from the update queue.
pub struct Bot {
    telegram: TelegramClient,
    summarizer: SummarizeClient,
    telegraph: TelegraphClient,
}

impl Bot {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            telegram: TelegramClient::new(&config.bot_token),
            summarizer: SummarizeClient::new(config.yandex_session_id.clone()),
            telegraph: TelegraphClient::new(config.telegraph_access_token.clone()),
        }
    }

    /// Long-poll loop. Runs until the process is stopped; transport errors
    /// on getUpdates are logged and retried after a short delay.
    pub async fn run(&self) -> Result<(), BotError> {
        info!("Starting long-poll loop");
        let mut offset = 0i64;

        loop {
            let updates = match self.telegram.get_updates(offset).await {
                Ok(updates) => updates,
                Err(e) => {
                    warn!("getUpdates failed: {}", e);
                    tokio::time::sleep(POLL_RETRY_DELAY).await;
                    continue;
                }
            };

            for update in updates {
                offset = update.update_id + 1;
                let Some(message) = update.message else {
                    continue;
                };
                // Only one-on-one chats are served
                if message.chat.kind != "private" {
                    continue;
                }
                self.handle_message(&message).await;
            }
        }
    }

    /// Handle one private-chat message end to end. Failures never escape:
    /// the user gets one generic apology, the cause goes to the log.
    pub async fn handle_message(&self, message: &Message) {
        let chat_id = message.chat.id;

        let Some(text) = message.text.as_deref() else {
            if let Err(e) = self.telegram.send_message(chat_id, USAGE_HINT).await {
                error!("Failed to send usage hint: {}", e);
            }
            return;
        };

        if text == "/start" {
            if let Err(e) = self.telegram.send_message(chat_id, GREETING).await {
                error!("Failed to send greeting: {}", e);
            }
            return;
        }

        // Keeps "typing..." visible until this handler returns, on every
        // exit path.
        let _typing = start_typing(self.telegram.clone(), chat_id);

        match self.summarize_and_format(message, text).await {
            Ok(reply) => {
                if let Err(e) = self.telegram.send_html_reply(chat_id, &reply).await {
                    error!("Failed to deliver summary: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to generate summary: {}", e);
                let _ = self.telegram.send_message(chat_id, APOLOGY).await;
            }
        }
    }

    async fn summarize_and_format(
        &self,
        message: &Message,
        text: &str,
    ) -> Result<String, BotError> {
        let result = summarize(&self.summarizer, text).await?;

        match result.content {
            Some(SummaryContent::Video { title, keypoints }) => {
                let video_id = extract_video_id(text);
                let content = video_page_content(text, video_id.as_deref(), &keypoints);
                let page = self
                    .telegraph
                    .create_page(&title, PAGE_AUTHOR_NAME, PAGE_AUTHOR_URL, &content)
                    .await?;
                Ok(video_reply(&page.url, &title, text, video_id.as_deref()))
            }
            Some(SummaryContent::Article { title, thesis, .. }) => {
                Ok(article_reply(&title, &thesis, text))
            }
            Some(SummaryContent::Text { thesis, .. }) => {
                let forwarded_from = message
                    .forward_from_chat
                    .as_ref()
                    .filter(|chat| chat.kind == "channel")
                    .and_then(|chat| chat.username.as_deref())
                    .zip(message.forward_from_message_id);
                Ok(text_reply(&thesis, forwarded_from))
            }
            // Terminal non-success status with no content. The backend's
            // "unknown" and "error" codes are treated alike.
            None => Err(BotError::SummarizeFailed(
                result
                    .message
                    .unwrap_or_else(|| format!("terminal status {:?}", result.status_code)),
            )),
        }
    }
}
