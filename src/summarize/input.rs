//! Input classification: decide whether a message should be submitted as a
//! video link, an article link or plain text, and best-effort extraction of
//! a YouTube video id for timestamp deep links.

use regex::Regex;
use url::Url;

/// Which content field of the job request to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Video,
    Article,
    Text,
}

// Matches youtube.com / youtu.be / m.youtube.com links, scheme optional.
static YOUTUBE_URL_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://)?(www\.|m\.)?youtu(\.be|be\.\w{2,3})+/")
        .expect("youtube url regex compiles")
});

// Recognizes the id across watch?v=, v/, vi/, u/<c>/, embed/, shorts/,
// live/, a bare youtu.be/<id>, and v=/vi= appended after an ampersand.
static YOUTUBE_ID_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(
        r"(?i)^.*(?:(?:youtu\.be/|v/|vi/|u/\w/|embed/|shorts/|live/)|(?:(?:watch)?\?v(?:i)?=|&v(?:i)?=))([^#&?]*).*",
    )
    .expect("youtube id regex compiles")
});

fn is_youtube_url(link: &str) -> bool {
    YOUTUBE_URL_RE.is_match(link)
}

fn is_valid_http_url(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Classify raw user input. Pure and total: malformed URLs, non-http
/// schemes and plain prose all fall through to `Text`.
#[must_use]
pub fn classify(text: &str) -> InputKind {
    if is_youtube_url(text) {
        InputKind::Video
    } else if is_valid_http_url(text) {
        InputKind::Article
    } else {
        InputKind::Text
    }
}

/// Extract the YouTube video id from a link, if the link is a YouTube URL
/// and the candidate has one of YouTube's two historical id lengths (11 or
/// 12 characters). Anything else is `None`, not an error - callers omit
/// timestamp links when the id is missing.
#[must_use]
pub fn extract_video_id(link: &str) -> Option<String> {
    if !is_youtube_url(link) {
        return None;
    }

    let candidate = YOUTUBE_ID_RE
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())?;

    if candidate.len() == 11 || candidate.len() == 12 {
        Some(candidate.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_youtube_links_as_video() {
        assert_eq!(classify("https://youtu.be/KxHihZx7qEE"), InputKind::Video);
        assert_eq!(
            classify("https://m.youtube.com/watch?v=KxHihZx7qEE"),
            InputKind::Video
        );
        assert_eq!(classify("youtube.com/shorts/KxHihZx7qEE"), InputKind::Video);
    }

    #[test]
    fn classifies_other_http_urls_as_article() {
        assert_eq!(classify("https://example.com/post/1"), InputKind::Article);
        assert_eq!(classify("http://example.com"), InputKind::Article);
    }

    #[test]
    fn everything_else_is_text() {
        assert_eq!(classify("just some prose"), InputKind::Text);
        assert_eq!(classify("ftp://example.com/file"), InputKind::Text);
        assert_eq!(classify("example.com/no-scheme"), InputKind::Text);
    }

    #[test]
    fn extracts_id_from_short_link() {
        assert_eq!(
            extract_video_id("https://youtu.be/KxHihZx7qEE"),
            Some("KxHihZx7qEE".to_string())
        );
    }

    #[test]
    fn rejects_ids_of_unexpected_length() {
        assert_eq!(extract_video_id("https://youtu.be/shortid9"), None);
    }
}
