use pereskaz::errors::BotError;
use std::error::Error;

#[test]
fn test_bot_error_implements_error_trait() {
    // Verify BotError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = BotError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_bot_error_display() {
    let error = BotError::TelegramError("API failed".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access Telegram API: API failed"
    );

    let error = BotError::MaxRetryExceeded(20);
    assert_eq!(
        format!("{error}"),
        "Summarization still in progress after 20 attempts"
    );

    let error = BotError::TelegraphError("CONTENT_REQUIRED".to_string());
    assert_eq!(
        format!("{error}"),
        "Telegraph rejected the page: CONTENT_REQUIRED"
    );
}

#[test]
fn test_bot_error_from_reqwest() {
    // We can't easily construct a reqwest::Error directly, but we can verify
    // that the From<reqwest::Error> conversion exists and compiles.
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> BotError {
        BotError::from(err)
    }
}
