//! Typing-indicator keep-alive.
//!
//! Telegram shows "typing..." for about five seconds per `sendChatAction`
//! call, so while a summary is being generated the indicator must be
//! re-sent on a ticker. The ticker is a background task scoped to a guard:
//! dropping the guard aborts the task, so cancellation happens on every
//! exit path of the handler, including errors and early returns.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use super::client::TelegramClient;

const TYPING_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

pub struct TypingGuard {
    handle: JoinHandle<()>,
}

impl Drop for TypingGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Start broadcasting "typing" to `chat_id` until the returned guard is
/// dropped. A failed `sendChatAction` stops the ticker quietly; there is
/// no way to clear the indicator, it simply expires.
#[must_use]
pub fn start_typing(client: TelegramClient, chat_id: i64) -> TypingGuard {
    let handle = tokio::spawn(async move {
        loop {
            if let Err(e) = client.send_chat_action(chat_id, "typing").await {
                debug!("Typing keep-alive stopped: {}", e);
                break;
            }
            tokio::time::sleep(TYPING_REFRESH_INTERVAL).await;
        }
    });

    TypingGuard { handle }
}
