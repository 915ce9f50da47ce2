use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to access Telegram API: {0}")]
    TelegramError(String),

    #[error("Telegraph rejected the page: {0}")]
    TelegraphError(String),

    #[error("Summarization still in progress after {0} attempts")]
    MaxRetryExceeded(u32),

    #[error("Summarizer could not process the input: {0}")]
    SummarizeFailed(String),

    #[error("Missing configuration: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::HttpError(error.to_string())
    }
}
