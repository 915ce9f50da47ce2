//! Reply formatting: timecodes, HTML replies and the Telegraph page body
//! for video summaries.

use serde_json::json;

use crate::summarize::{Keypoint, Thesis};
use crate::telegraph::{Node, youtube_player_node};

/// Escape the three characters Telegram's HTML parse mode reserves.
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render a start offset in seconds as `MM:SS`, or `HH:MM:SS` once the
/// hours are nonzero. Components are zero-padded.
#[must_use]
pub fn format_timecode(total_seconds: f64) -> String {
    let total = total_seconds.max(0.0) as u64;
    let seconds = total % 60;
    let minutes = (total / 60) % 60;
    let hours = total / 3600;

    if hours == 0 {
        format!("{:02}:{:02}", minutes, seconds)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

fn thesis_lines(thesis: &[Thesis]) -> String {
    thesis
        .iter()
        .map(|t| format!("— {}", escape_html(&t.content)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the Telegraph page body for a video summary: the embedded player
/// followed by one section per keypoint. When the video id is known every
/// keypoint heading links to the video at its start offset; without an id
/// the headings are plain text.
#[must_use]
pub fn video_page_content(
    input_url: &str,
    video_id: Option<&str>,
    keypoints: &[Keypoint],
) -> Vec<Node> {
    let mut content = vec![youtube_player_node(input_url, "")];

    for keypoint in keypoints {
        let timecode = format_timecode(keypoint.start_time);
        let heading_children = match video_id {
            Some(id) => vec![
                Node::element(
                    "a",
                    Some(json!({
                        "href": format!(
                            "https://youtu.be/{}?t={}",
                            id,
                            keypoint.start_time as u64
                        ),
                        "target": "_blank"
                    })),
                    vec![Node::text(timecode)],
                ),
                Node::text(format!(" {}", keypoint.content)),
            ],
            None => vec![Node::text(format!("{} {}", timecode, keypoint.content))],
        };

        let theses = keypoint
            .theses
            .iter()
            .map(|t| Node::element("li", None, vec![Node::text(t.content.as_str())]))
            .collect();

        content.push(Node::element(
            "div",
            None,
            vec![
                Node::element("h4", None, heading_children),
                Node::element("ul", None, theses),
            ],
        ));
    }

    content
}

/// Reply for a video summary: the published page as a bold link, then the
/// short video URL (falls back to the original input when the id could not
/// be extracted).
#[must_use]
pub fn video_reply(page_url: &str, title: &str, input_url: &str, video_id: Option<&str>) -> String {
    let video_link = match video_id {
        Some(id) => format!("https://youtu.be/{}", id),
        None => input_url.to_string(),
    };

    format!(
        "<b><a href=\"{}\">{}</a></b>\n\n{}",
        page_url,
        escape_html(title),
        video_link
    )
}

/// Reply for an article summary: bold title, thesis lines, source URL.
#[must_use]
pub fn article_reply(title: &str, thesis: &[Thesis], source_url: &str) -> String {
    format!(
        "<b>{}</b>\n\n{}\n\n{}",
        escape_html(title),
        thesis_lines(thesis),
        source_url
    )
}

/// Reply for a plain-text summary: thesis lines, plus a link back to the
/// channel post when the message was forwarded from a public channel.
#[must_use]
pub fn text_reply(thesis: &[Thesis], forwarded_from: Option<(&str, i64)>) -> String {
    let mut reply = thesis_lines(thesis);

    if let Some((username, message_id)) = forwarded_from {
        reply.push_str(&format!("\n\nhttps://t.me/{}/{}", username, message_id));
    }

    reply
}
