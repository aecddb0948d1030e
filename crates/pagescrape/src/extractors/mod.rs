// ABOUTME: Extractor facade turning a parsed document into an ExtractionResult.
// ABOUTME: Runs metadata chains, body resolution, whitespace cleanup, and truncation.

//! Content extraction module.
//!
//! Submodules:
//! - `compiled`: process-wide cache of compiled CSS selectors.
//! - `fields`: ordered-fallback chains for metadata fields.
//! - `content`: candidate-container body resolution.

pub mod compiled;
pub mod content;
pub mod fields;

use chrono::{SecondsFormat, Utc};
use dom_query::Document;
use tracing::debug;

use crate::options::ExtractorConfig;
use crate::result::ExtractionResult;

use self::content::resolve_content;

/// Collapses every run of whitespace to a single space and trims the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keeps at most `max_chars` characters. Not word-boundary aware.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Heuristic extractor configured with thresholds and selector lists.
///
/// Extraction is total: every field has a terminal fallback, so any
/// document (including an empty one) yields a result.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        compiled::precompile_selectors(&config.candidate_selectors);
        compiled::precompile_selectors([config.noise_selector_group()]);
        Self { config }
    }

    /// Extracts structured data from `doc`.
    ///
    /// The document is mutated: noise subtrees are removed while resolving
    /// the body, so the same instance must not be extracted twice.
    pub fn extract(&self, doc: &Document, source_url: &str) -> ExtractionResult {
        let title = fields::extract_title(doc).unwrap_or_else(|| self.config.untitled.clone());
        let description = fields::extract_description(doc).unwrap_or_default();
        let author = fields::extract_author(doc).unwrap_or_default();
        let publish_date = fields::extract_publish_date(doc).unwrap_or_default();
        let image = fields::extract_image(doc).unwrap_or_default();

        let resolved = resolve_content(doc, &self.config);
        let content = truncate_chars(
            &normalize_whitespace(&resolved.text),
            self.config.max_content_chars,
        );

        let tags = fields::extract_tags(doc);

        debug!(
            url = source_url,
            source = ?resolved.source,
            chars = content.chars().count(),
            "extraction complete"
        );

        ExtractionResult {
            title,
            description,
            author,
            publish_date,
            image,
            content,
            tags,
            scraped_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Parses `html` and extracts from the fresh document.
    pub fn extract_html(&self, html: &str, source_url: &str) -> ExtractionResult {
        let doc = Document::from(html);
        self.extract(&doc, source_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("Hello\n\n  world\t!"), "Hello world !");
        assert_eq!(normalize_whitespace("  \n\t "), "");
        assert_eq!(normalize_whitespace("a\u{a0}b"), "a b");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
    }

    #[test]
    fn test_empty_document_defaults() {
        let result = Extractor::default().extract_html("", "https://example.com");
        assert_eq!(result.title, "Untitled");
        assert_eq!(result.description, "");
        assert_eq!(result.author, "");
        assert_eq!(result.publish_date, "");
        assert_eq!(result.image, "");
        assert_eq!(result.content, "");
        assert!(result.tags.is_empty());
        assert!(result.scraped_at.ends_with('Z'));
    }

    #[test]
    fn test_custom_untitled_and_cap() {
        let extractor = Extractor::new(ExtractorConfig {
            untitled: "No title".to_string(),
            max_content_chars: 5,
            ..Default::default()
        });
        let result = extractor.extract_html(
            "<html><body><p>one two three</p></body></html>",
            "https://example.com",
        );
        assert_eq!(result.title, "No title");
        assert_eq!(result.content, "one t");
    }

    #[test]
    fn test_scraped_at_is_rfc3339() {
        let result = Extractor::default().extract_html("<p>x</p>", "");
        assert!(chrono::DateTime::parse_from_rfc3339(&result.scraped_at).is_ok());
    }
}
