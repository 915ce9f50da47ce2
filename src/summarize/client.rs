//! 300.ya.ru generation API client and the poll loop that drives a job to
//! a terminal state.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::errors::BotError;

use super::input::{InputKind, classify};
use super::models::{SummarizeInput, SummarizeRequest, SummarizeResult, SummarizeStatus};

const SUMMARIZE_API_URL: &str = "https://300.ya.ru/api/generation";

/// How many submissions one `settle` call may make before giving up on a
/// job that is still in progress.
pub const MAX_POLL_ATTEMPTS: u32 = 20;

/// The submission seam of the poll loop. The production implementation
/// POSTs to the generation endpoint; tests script the responses.
#[async_trait]
pub trait SummarizeTransport {
    async fn submit(&self, request: &SummarizeRequest) -> Result<SummarizeResult, BotError>;
}

/// HTTP transport for the summarizer, authenticated with a session cookie.
pub struct SummarizeClient {
    http: Client,
    session_cookie: String,
}

impl SummarizeClient {
    #[must_use]
    pub fn new(session_cookie: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            session_cookie,
        }
    }
}

#[async_trait]
impl SummarizeTransport for SummarizeClient {
    async fn submit(&self, request: &SummarizeRequest) -> Result<SummarizeResult, BotError> {
        let response = self
            .http
            .post(SUMMARIZE_API_URL)
            .header(reqwest::header::COOKIE, self.session_cookie.as_str())
            .json(request)
            .send()
            .await?;

        let result: SummarizeResult = response.json().await.map_err(|e| {
            BotError::ParseError(format!("Failed to parse summarize response: {}", e))
        })?;

        Ok(result)
    }
}

/// Drive a job to a terminal state.
///
/// One submission per iteration; while the backend reports the job as in
/// progress, sleep exactly the server-advertised `poll_interval_ms` (the
/// poller never invents its own pacing), thread the returned `session_id`
/// into the next request, and resubmit. A response without a session id
/// keeps the one already carried by the request.
///
/// Terminal statuses - including backend-reported errors - are returned
/// as-is for the caller to interpret. The only error raised here is
/// [`BotError::MaxRetryExceeded`] once [`MAX_POLL_ATTEMPTS`] submissions
/// have all come back in-progress; transport failures propagate unmodified
/// and are not retried. Dropping the future cancels the job cleanly since
/// no state outlives the call.
pub async fn settle<T>(transport: &T, input: SummarizeInput) -> Result<SummarizeResult, BotError>
where
    T: SummarizeTransport + ?Sized,
{
    let mut request = SummarizeRequest::new(input);
    let mut attempts_left = MAX_POLL_ATTEMPTS;

    loop {
        let result = transport.submit(&request).await?;

        if result.status_code != SummarizeStatus::InProgress {
            return Ok(result);
        }
        if attempts_left <= 1 {
            return Err(BotError::MaxRetryExceeded(MAX_POLL_ATTEMPTS));
        }

        debug!(
            "Job still in progress, polling again in {} ms",
            result.poll_interval_ms
        );
        tokio::time::sleep(Duration::from_millis(result.poll_interval_ms)).await;

        if let Some(session_id) = result.session_id.filter(|s| !s.is_empty()) {
            request.session_id = Some(session_id);
        }
        attempts_left -= 1;
    }
}

/// Classify the input, build the single-field request and settle the job.
pub async fn summarize<T>(transport: &T, text: &str) -> Result<SummarizeResult, BotError>
where
    T: SummarizeTransport + ?Sized,
{
    let kind = classify(text);
    info!("Classified input as {:?}", kind);

    let input = match kind {
        InputKind::Video => SummarizeInput::VideoUrl(text.to_string()),
        InputKind::Article => SummarizeInput::ArticleUrl(text.to_string()),
        InputKind::Text => SummarizeInput::Text(text.to_string()),
    };

    settle(transport, input).await
}
