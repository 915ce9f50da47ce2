//! Everything that talks to the 300.ya.ru summarizer: the wire model, the
//! input classifier and the request/poll/retry loop.

pub mod client;
pub mod input;
pub mod models;

// Re-export main types for convenience
pub use client::{MAX_POLL_ATTEMPTS, SummarizeClient, SummarizeTransport, settle, summarize};
pub use input::{InputKind, classify, extract_video_id};
pub use models::{
    Keypoint, SummarizeInput, SummarizeRequest, SummarizeResult, SummarizeStatus, SummaryContent,
    Thesis,
};
