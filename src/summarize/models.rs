//! Wire model for the 300.ya.ru generation endpoint.
//!
//! Requests carry exactly one content field (`video_url`, `article_url` or
//! `text`) plus an optional `session_id` once the backend has assigned one.
//! Responses share a common base (status code, session id, poll interval,
//! sharing URL) and, once the job is finished, a `type`-tagged content
//! variant.

use serde::{Deserialize, Serialize};

/// The single content field of a job request. Serializes to exactly one of
/// `{"video_url": ...}`, `{"article_url": ...}` or `{"text": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SummarizeInput {
    #[serde(rename = "video_url")]
    VideoUrl(String),
    #[serde(rename = "article_url")]
    ArticleUrl(String),
    #[serde(rename = "text")]
    Text(String),
}

/// One submission of a summarization job.
///
/// `session_id` is absent on the first submission and carried forward from
/// the previous response on every resubmission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarizeRequest {
    #[serde(flatten)]
    pub input: SummarizeInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl SummarizeRequest {
    #[must_use]
    pub fn new(input: SummarizeInput) -> Self {
        Self {
            input,
            session_id: None,
        }
    }
}

/// Backend status code. Only `InProgress` continues the poll loop; the
/// backend's `Unknown` and `Error` are both terminal and deliberately not
/// distinguished for control flow. Unrecognized codes decode as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u8")]
pub enum SummarizeStatus {
    Unknown,
    InProgress,
    Error,
}

impl From<u8> for SummarizeStatus {
    fn from(code: u8) -> Self {
        match code {
            1 => SummarizeStatus::InProgress,
            2 => SummarizeStatus::Error,
            _ => SummarizeStatus::Unknown,
        }
    }
}

/// One thesis line of a summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Thesis {
    #[serde(default)]
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// One keypoint of a video summary with its start offset in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Keypoint {
    #[serde(default)]
    pub id: i64,
    pub start_time: f64,
    pub content: String,
    #[serde(default)]
    pub theses: Vec<Thesis>,
}

/// The `type`-tagged part of a finished result.
///
/// The `text` variant has the same wire shape as `article` but its
/// `normalized_url` is always empty (the source had no canonical URL), so
/// it is not carried here.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryContent {
    Video {
        title: String,
        keypoints: Vec<Keypoint>,
    },
    Article {
        title: String,
        total_parts: u32,
        normalized_url: String,
        thesis: Vec<Thesis>,
    },
    Text {
        title: String,
        total_parts: u32,
        thesis: Vec<Thesis>,
    },
}

/// One poll response. Immutable once received; every poll produces a brand
/// new value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "WireResult")]
pub struct SummarizeResult {
    pub status_code: SummarizeStatus,
    pub session_id: Option<String>,
    pub poll_interval_ms: u64,
    pub sharing_url: String,
    pub message: Option<String>,
    pub content: Option<SummaryContent>,
}

// In-progress responses carry only the base fields, so the typed content
// variant is assembled from a fully-optional mirror of the wire shape.
#[derive(Deserialize)]
struct WireResult {
    #[serde(default)]
    status_code: u8,
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    poll_interval_ms: u64,
    #[serde(default)]
    sharing_url: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    video_title: Option<String>,
    #[serde(default)]
    keypoints: Option<Vec<Keypoint>>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    total_parts: Option<u32>,
    #[serde(default)]
    normalized_url: Option<String>,
    #[serde(default)]
    thesis: Option<Vec<Thesis>>,
}

impl From<WireResult> for SummarizeResult {
    fn from(wire: WireResult) -> Self {
        let content = match wire.kind.as_deref() {
            Some("video") => Some(SummaryContent::Video {
                title: wire.video_title.unwrap_or_default(),
                keypoints: wire.keypoints.unwrap_or_default(),
            }),
            Some("article") => Some(SummaryContent::Article {
                title: wire.title.unwrap_or_default(),
                total_parts: wire.total_parts.unwrap_or_default(),
                normalized_url: wire.normalized_url.unwrap_or_default(),
                thesis: wire.thesis.unwrap_or_default(),
            }),
            Some("text") => Some(SummaryContent::Text {
                title: wire.title.unwrap_or_default(),
                total_parts: wire.total_parts.unwrap_or_default(),
                thesis: wire.thesis.unwrap_or_default(),
            }),
            _ => None,
        };

        Self {
            status_code: SummarizeStatus::from(wire.status_code),
            session_id: wire.session_id,
            poll_interval_ms: wire.poll_interval_ms,
            sharing_url: wire.sharing_url,
            message: wire.message,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_exactly_one_content_field() {
        let request = SummarizeRequest::new(SummarizeInput::ArticleUrl(
            "https://example.com/a".to_string(),
        ));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["article_url"], "https://example.com/a");
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 1, "session_id must be skipped when absent");
    }

    #[test]
    fn request_serializes_session_id_on_resubmission() {
        let mut request = SummarizeRequest::new(SummarizeInput::Text("hello".to_string()));
        request.session_id = Some("abc".to_string());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["text"], "hello");
        assert_eq!(value["session_id"], "abc");
    }

    #[test]
    fn in_progress_response_decodes_without_content() {
        let body = json!({
            "status_code": 1,
            "session_id": "s1",
            "poll_interval_ms": 500,
            "sharing_url": ""
        });
        let result: SummarizeResult = serde_json::from_value(body).unwrap();

        assert_eq!(result.status_code, SummarizeStatus::InProgress);
        assert_eq!(result.session_id.as_deref(), Some("s1"));
        assert_eq!(result.poll_interval_ms, 500);
        assert!(result.content.is_none());
    }

    #[test]
    fn video_response_decodes_into_video_content() {
        let body = json!({
            "status_code": 0,
            "session_id": "s2",
            "poll_interval_ms": 0,
            "sharing_url": "https://300.ya.ru/abc",
            "type": "video",
            "video_title": "A talk",
            "keypoints": [
                {
                    "id": 1,
                    "start_time": 12.0,
                    "content": "Intro",
                    "theses": [{"id": 1, "content": "point"}]
                }
            ]
        });
        let result: SummarizeResult = serde_json::from_value(body).unwrap();

        match result.content {
            Some(SummaryContent::Video { title, keypoints }) => {
                assert_eq!(title, "A talk");
                assert_eq!(keypoints.len(), 1);
                assert_eq!(keypoints[0].theses[0].content, "point");
            }
            other => panic!("expected video content, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_status_code_decodes_as_unknown() {
        let body = json!({"status_code": 42});
        let result: SummarizeResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.status_code, SummarizeStatus::Unknown);
    }

    #[test]
    fn text_response_keeps_article_shape_without_url() {
        let body = json!({
            "status_code": 0,
            "session_id": "s3",
            "poll_interval_ms": 0,
            "sharing_url": "",
            "type": "text",
            "title": "Forwarded post",
            "total_parts": 1,
            "normalized_url": "",
            "thesis": [{"id": 1, "content": "first"}, {"id": 2, "content": "second"}]
        });
        let result: SummarizeResult = serde_json::from_value(body).unwrap();

        match result.content {
            Some(SummaryContent::Text { thesis, .. }) => assert_eq!(thesis.len(), 2),
            other => panic!("expected text content, got {other:?}"),
        }
    }
}
