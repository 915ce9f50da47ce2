/// Pereskaz - a Telegram bot that produces short retellings of links,
/// YouTube videos and plain text by relaying them to the 300.ya.ru
/// summarization API.
///
/// The bot itself never summarizes anything. It classifies the incoming
/// message (video link / article link / plain text), submits a job to the
/// remote summarizer, polls the session until the backend reports a
/// terminal status, and formats the finished result as an HTML reply.
/// Video summaries are additionally published as a Telegraph page with
/// per-keypoint timestamp links.
///
/// # Architecture
///
/// The system uses:
/// - `summarize` for the request/poll/retry loop and the input classifier
/// - `telegraph` to publish long-form video digests as hosted pages
/// - `telegram` as a thin Bot API transport (long polling + replies)
/// - `bot` to wire the three together per incoming message
// Module declarations
pub mod bot;
pub mod core;
pub mod errors;
pub mod summarize;
pub mod telegram;
pub mod telegraph;

/// Configure structured logging for the binaries.
///
/// Call once at startup, before any handler runs.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
