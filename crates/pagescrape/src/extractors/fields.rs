// ABOUTME: Metadata field resolution for title, description, author, publish date, image, and tags.
// ABOUTME: Each field tries an ordered chain of sources and keeps the first non-empty value.

//! Metadata field extraction.
//!
//! Key behaviors:
//! - Sources are tried in order; the first non-empty value wins.
//! - Meta lookups read the `content` attribute of the first matching tag.
//! - Attribute values are returned verbatim; only an empty string falls through.
//! - Text lookups are trimmed; whitespace-only text counts as empty.

use dom_query::Document;

use super::compiled::select;

/// Reads `attr` from the first element matching `css`, untrimmed.
///
/// Returns `None` when nothing matches, the attribute is missing, or it is empty.
/// A whitespace-only value is kept.
pub fn first_attr(doc: &Document, css: &str, attr: &str) -> Option<String> {
    let sel = select(doc, css)?;
    let value = sel.first().attr(attr)?;
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Reads the `content` attribute of the first meta tag matching `css`.
pub fn meta_content(doc: &Document, css: &str) -> Option<String> {
    first_attr(doc, css, "content")
}

/// Concatenated text of every element matching `css`, trimmed.
pub fn selection_text(doc: &Document, css: &str) -> Option<String> {
    let sel = select(doc, css)?;
    trimmed_text(&sel.text())
}

/// Text of the first element matching `css`, trimmed.
pub fn first_text(doc: &Document, css: &str) -> Option<String> {
    let sel = select(doc, css)?;
    trimmed_text(&sel.first().text())
}

fn trimmed_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `<title>` text, then `og:title`, then the first `<h1>`.
pub fn extract_title(doc: &Document) -> Option<String> {
    selection_text(doc, "title")
        .or_else(|| meta_content(doc, "meta[property=\"og:title\"]"))
        .or_else(|| first_text(doc, "h1"))
}

/// `description` meta, then `og:description`.
pub fn extract_description(doc: &Document) -> Option<String> {
    meta_content(doc, "meta[name=\"description\"]")
        .or_else(|| meta_content(doc, "meta[property=\"og:description\"]"))
}

/// `author` meta, then `article:author`, then text of `rel="author"` elements.
pub fn extract_author(doc: &Document) -> Option<String> {
    meta_content(doc, "meta[name=\"author\"]")
        .or_else(|| meta_content(doc, "meta[property=\"article:author\"]"))
        .or_else(|| selection_text(doc, "[rel=\"author\"]"))
}

/// Raw publish date string; no parsing or validation is applied.
pub fn extract_publish_date(doc: &Document) -> Option<String> {
    meta_content(doc, "meta[property=\"article:published_time\"]")
        .or_else(|| meta_content(doc, "meta[name=\"publishdate\"]"))
        .or_else(|| first_attr(doc, "time", "datetime"))
}

/// `og:image`, then `twitter:image`, then the first `<img>` src. Relative URLs are kept as-is.
pub fn extract_image(doc: &Document) -> Option<String> {
    meta_content(doc, "meta[property=\"og:image\"]")
        .or_else(|| meta_content(doc, "meta[name=\"twitter:image\"]"))
        .or_else(|| first_attr(doc, "img", "src"))
}

/// Comma-separated `keywords` meta, each piece trimmed, order preserved.
pub fn extract_tags(doc: &Document) -> Vec<String> {
    meta_content(doc, "meta[name=\"keywords\"]")
        .map(|keywords| split_tags(&keywords))
        .unwrap_or_default()
}

/// Splits a keywords string on commas.
///
/// A blank string yields no tags. Otherwise every piece is kept, so `"a,,b"`
/// gives an empty tag between `a` and `b`.
pub fn split_tags(keywords: &str) -> Vec<String> {
    if keywords.trim().is_empty() {
        return Vec::new();
    }
    keywords
        .split(',')
        .map(|tag| tag.trim().to_string())
        .collect()
}
