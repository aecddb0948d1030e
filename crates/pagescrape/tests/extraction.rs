// ABOUTME: Integration tests for the extraction heuristics on complete HTML documents.
// ABOUTME: Covers field fallbacks, candidate priority, whole-document fallback, and the content cap.

use pagescrape::{Extractor, ExtractorConfig};
use pretty_assertions::assert_eq;

fn filler(words: usize) -> String {
    (0..words)
        .map(|i| format!("word{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn untitled_when_no_title_sources() {
    let html = r#"<html><head><meta name="description" content="d"></head>
        <body><h2>Not an h1</h2><p>Text</p></body></html>"#;
    let result = Extractor::default().extract_html(html, "https://example.com");
    assert_eq!(result.title, "Untitled");
}

#[test]
fn full_article_page() {
    let body = filler(40);
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>
        A Day in the Life
    </title>
    <meta property="og:title" content="OG Title">
    <meta property="og:description" content="OG description">
    <meta property="article:author" content="Sam Reporter">
    <meta name="publishdate" content="March 3, 2021">
    <meta name="twitter:image" content="/img/card.png">
    <meta name="keywords" content="news, life , days">
</head>
<body>
    <header>Site Header</header>
    <nav>Home | About</nav>
    <main>Main wrapper text that should not win because article comes first in priority.</main>
    <article>
        <h1>A Day in the Life</h1>
        <div class="social-share">Share this!</div>
        <p>{}</p>
        <div class="advertisement">Buy things</div>
        <style>.x {{ color: red; }}</style>
        <section class="comments">First!</section>
    </article>
    <footer>Copyright</footer>
</body>
</html>"#,
        body
    );

    let result = Extractor::default().extract_html(&html, "https://example.com/day");

    assert_eq!(result.title, "A Day in the Life");
    assert_eq!(result.description, "OG description");
    assert_eq!(result.author, "Sam Reporter");
    assert_eq!(result.publish_date, "March 3, 2021");
    assert_eq!(result.image, "/img/card.png");
    assert_eq!(result.tags, vec!["news", "life", "days"]);
    assert_eq!(result.content, format!("A Day in the Life {}", body));
}

#[test]
fn role_main_beats_class_candidates() {
    let main_text = filler(30);
    let html = format!(
        r#"<html><body>
            <div class="post-content">{}</div>
            <div role="main">{}</div>
        </body></html>"#,
        filler(50),
        main_text
    );
    let result = Extractor::default().extract_html(&html, "");
    assert_eq!(result.content, main_text);
}

#[test]
fn falls_back_to_whole_body_when_candidates_are_short() {
    let html = r#"<html><body>
        <script>window.x = 1;</script>
        <article>Short article.</article>
        <div class="content">Short content.</div>
        <div class="sidebar">Sidebar links</div>
        <p>Loose paragraph.</p>
    </body></html>"#;
    let result = Extractor::default().extract_html(html, "");
    assert_eq!(
        result.content,
        "Short article. Short content. Loose paragraph."
    );
}

#[test]
fn content_is_capped() {
    let html = format!(
        "<html><body><article>{}</article></body></html>",
        "abcdefghij ".repeat(2_000)
    );
    let result = Extractor::default().extract_html(&html, "");
    assert_eq!(result.content.chars().count(), 10_000);
    assert!(result.content.starts_with("abcdefghij abcdefghij"));
}

#[test]
fn content_cap_counts_characters_not_bytes() {
    let html = format!(
        "<html><body><article>{}</article></body></html>",
        "\u{e9}".repeat(12_000)
    );
    let result = Extractor::default().extract_html(&html, "");
    assert_eq!(result.content.chars().count(), 10_000);
}

#[test]
fn whitespace_is_collapsed() {
    let html = "<html><body><p>Hello\n\n  world\t!</p></body></html>";
    let result = Extractor::default().extract_html(html, "");
    assert_eq!(result.content, "Hello world !");
}

#[test]
fn custom_candidate_list() {
    let config = ExtractorConfig {
        candidate_selectors: vec!["#story".to_string()],
        min_content_chars: 5,
        ..Default::default()
    };
    let html = r#"<html><body><article>Ignored article text here</article><div id="story">The story text</div></body></html>"#;
    let result = Extractor::new(config).extract_html(html, "");
    assert_eq!(result.content, "The story text");
}

#[test]
fn document_is_mutated_by_extraction() {
    let doc = dom_query::Document::from(
        "<html><body><nav>Menu</nav><p>Body</p></body></html>",
    );
    let first = Extractor::default().extract(&doc, "");
    assert_eq!(first.content, "Body");
    assert!(!doc.html().contains("<nav>"));
}
