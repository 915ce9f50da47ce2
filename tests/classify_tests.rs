use pereskaz::summarize::{InputKind, classify, extract_video_id};

/// Tests for the input classifier that selects the request payload shape,
/// and for best-effort YouTube id extraction.

#[test]
fn recognizes_youtube_domains_and_prefixes() {
    let links = [
        "https://www.youtube.com/watch?v=KxHihZx7qEE",
        "https://youtube.com/watch?v=KxHihZx7qEE",
        "https://m.youtube.com/watch?v=KxHihZx7qEE",
        "https://youtu.be/KxHihZx7qEE",
        "http://youtu.be/KxHihZx7qEE",
        "youtube.com/watch?v=KxHihZx7qEE",
        "youtu.be/KxHihZx7qEE",
        "HTTPS://WWW.YOUTUBE.COM/watch?v=KxHihZx7qEE",
    ];
    for link in links {
        assert_eq!(classify(link), InputKind::Video, "link: {link}");
    }
}

#[test]
fn recognizes_youtube_path_variants() {
    let links = [
        "https://www.youtube.com/embed/KxHihZx7qEE",
        "https://www.youtube.com/shorts/KxHihZx7qEE",
        "https://www.youtube.com/live/KxHihZx7qEE",
        "https://www.youtube.com/v/KxHihZx7qEE",
    ];
    for link in links {
        assert_eq!(classify(link), InputKind::Video, "link: {link}");
    }
}

#[test]
fn well_formed_http_urls_are_articles() {
    assert_eq!(
        classify("https://en.wikipedia.org/wiki/Rust_(programming_language)"),
        InputKind::Article
    );
    assert_eq!(classify("http://example.com"), InputKind::Article);
}

#[test]
fn malformed_urls_and_prose_are_text() {
    assert_eq!(classify("a long forwarded message"), InputKind::Text);
    assert_eq!(classify("example.com/path"), InputKind::Text);
    assert_eq!(classify("ftp://example.com/file"), InputKind::Text);
    assert_eq!(classify("https://"), InputKind::Text);
    assert_eq!(classify(""), InputKind::Text);
}

#[test]
fn extracts_eleven_char_ids() {
    let links = [
        "https://youtu.be/KxHihZx7qEE",
        "https://www.youtube.com/watch?v=KxHihZx7qEE",
        "https://www.youtube.com/embed/KxHihZx7qEE",
        "https://www.youtube.com/shorts/KxHihZx7qEE",
        "https://www.youtube.com/live/KxHihZx7qEE",
        "https://m.youtube.com/watch?v=KxHihZx7qEE",
    ];
    for link in links {
        assert_eq!(
            extract_video_id(link).as_deref(),
            Some("KxHihZx7qEE"),
            "link: {link}"
        );
    }
}

#[test]
fn accepts_twelve_char_ids() {
    assert_eq!(
        extract_video_id("https://youtu.be/KxHihZx7qEE2").as_deref(),
        Some("KxHihZx7qEE2")
    );
}

#[test]
fn ignores_query_noise_after_the_id() {
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?v=KxHihZx7qEE&t=42s").as_deref(),
        Some("KxHihZx7qEE")
    );
}

#[test]
fn rejects_garbled_ids() {
    // 9-character candidate: neither of YouTube's historical lengths.
    assert_eq!(extract_video_id("https://youtu.be/KxHihZx7q"), None);
    assert_eq!(
        extract_video_id("https://youtu.be/KxHihZx7qEEtoolong"),
        None
    );
}

#[test]
fn returns_none_for_non_youtube_links() {
    assert_eq!(extract_video_id("https://example.com/KxHihZx7qEE"), None);
    assert_eq!(extract_video_id("plain text"), None);
}
