//! Telegraph API client for publishing long-form summaries as hosted pages.
//!
//! Provides functionality to:
//! - Create a page from a tree of typed content nodes
//! - Build the embedded YouTube player element Telegraph expects

use once_cell::sync::Lazy;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use crate::errors::BotError;

const TELEGRAPH_API_BASE_URL: &str = "https://api.telegra.ph";

// Static HTTP client for Telegraph API calls
static TELEGRAPH_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create Telegraph HTTP client")
});

/// One node of Telegraph page content: either a plain text leaf or an
/// element with a tag, optional attributes and child nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(NodeElement),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeElement {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    #[must_use]
    pub fn element(tag: &str, attrs: Option<Value>, children: Vec<Node>) -> Self {
        Node::Element(NodeElement {
            tag: tag.to_string(),
            attrs,
            children: if children.is_empty() {
                None
            } else {
                Some(children)
            },
        })
    }
}

/// Build the markup Telegraph renders as an embedded YouTube player.
#[must_use]
pub fn youtube_player_node(youtube_src: &str, caption: &str) -> Node {
    let embed_src = format!(
        "https://telegra.ph/embed/youtube?url={}",
        utf8_percent_encode(youtube_src, NON_ALPHANUMERIC)
    );

    Node::element(
        "figure",
        None,
        vec![
            Node::element(
                "div",
                Some(json!({"class": "figure_wrapper"})),
                vec![Node::element(
                    "div",
                    Some(json!({"class": "iframe_wrap"})),
                    vec![Node::element(
                        "div",
                        Some(json!({
                            "class": "iframe_helper",
                            "style": "padding-top: 56.2319%;"
                        })),
                        vec![Node::element(
                            "iframe",
                            Some(json!({
                                "src": embed_src,
                                "width": "640",
                                "height": "360",
                                "frameborder": "0",
                                "allowtransparency": "true",
                                "allowfullscreen": "true",
                                "scrolling": "no"
                            })),
                            vec![],
                        )],
                    )],
                )],
            ),
            Node::element(
                "figcaption",
                Some(json!({"dir": "auto"})),
                vec![Node::text(caption)],
            ),
        ],
    )
}

/// A created Telegraph page.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub path: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub author_name: Option<String>,
}

/// Response envelope from the Telegraph API
#[derive(Debug, Deserialize)]
struct TelegraphResponse {
    ok: bool,
    result: Option<Page>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreatePageRequest<'a> {
    access_token: &'a str,
    title: &'a str,
    author_name: &'a str,
    author_url: &'a str,
    content: &'a [Node],
}

/// Telegraph API client bound to one access token.
pub struct TelegraphClient {
    access_token: String,
}

impl TelegraphClient {
    #[must_use]
    pub fn new(access_token: String) -> Self {
        Self { access_token }
    }

    /// Create a page and return it, including its canonical URL.
    ///
    /// # Errors
    ///
    /// Returns `BotError::TelegraphError` with the raw error payload when
    /// the API reports not-ok, `BotError::HttpError` on transport failure.
    pub async fn create_page(
        &self,
        title: &str,
        author_name: &str,
        author_url: &str,
        content: &[Node],
    ) -> Result<Page, BotError> {
        let payload = CreatePageRequest {
            access_token: &self.access_token,
            title,
            author_name,
            author_url,
            content,
        };

        let resp = TELEGRAPH_CLIENT
            .post(format!("{}/createPage", TELEGRAPH_API_BASE_URL))
            .json(&payload)
            .send()
            .await
            .map_err(|e| BotError::HttpError(format!("Telegraph request failed: {}", e)))?;

        let response: TelegraphResponse = resp.json().await.map_err(|e| {
            BotError::ParseError(format!("Failed to parse Telegraph response: {}", e))
        })?;

        if response.ok {
            let page = response.result.ok_or_else(|| {
                BotError::TelegraphError("createPage response missing result".to_string())
            })?;
            info!("Created Telegraph page: {}", page.url);
            Ok(page)
        } else {
            Err(BotError::TelegraphError(
                response
                    .error
                    .unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node_serializes_as_bare_string() {
        let node = Node::text("hello");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, serde_json::json!("hello"));
    }

    #[test]
    fn test_element_skips_absent_attrs_and_children() {
        let node = Node::element("br", None, vec![]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, serde_json::json!({"tag": "br"}));
    }

    #[test]
    fn test_youtube_player_node_percent_encodes_source() {
        let node = youtube_player_node("https://youtu.be/KxHihZx7qEE", "");
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("https://telegra.ph/embed/youtube?url=https%3A%2F%2Fyoutu%2Ebe%2FKxHihZx7qEE"));
        assert!(json.contains("figcaption"));
    }
}
