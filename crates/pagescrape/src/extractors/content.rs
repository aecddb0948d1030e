// ABOUTME: Body content resolution: ordered candidate containers with noise removal and a length threshold.
// ABOUTME: Falls back to the whole document body when no candidate yields substantial text.

//! Body content resolution.
//!
//! Candidate container selectors are tried in priority order. For every
//! candidate that matches, noise subtrees inside the matched elements are
//! removed from the document and the remaining text is measured. The first
//! candidate whose trimmed text is longer than `min_content_chars` wins.
//!
//! Noise removal is destructive: a rejected candidate still leaves the
//! document without its noise subtrees, and later candidates (and the
//! whole-document fallback) see the mutated tree.

use dom_query::Document;
use tracing::debug;

use super::compiled::{select, select_within};
use crate::options::ExtractorConfig;

/// Where the resolved body text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// A candidate container selector was accepted.
    Candidate(String),
    /// No candidate qualified; the whole `<body>` was used.
    Body,
}

/// Resolved, trimmed body text before whitespace normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub text: String,
    pub source: ContentSource,
}

/// Resolves the raw body text of the document, mutating it along the way.
pub fn resolve_content(doc: &Document, config: &ExtractorConfig) -> ResolvedContent {
    let noise = config.noise_selector_group();

    for css in &config.candidate_selectors {
        let Some(matched) = select(doc, css) else {
            debug!(selector = %css, "skipping invalid candidate selector");
            continue;
        };
        if !matched.exists() {
            continue;
        }

        if let Some(noise_sel) = select_within(&matched, &noise) {
            noise_sel.remove();
        }

        let text = matched.text().trim().to_string();
        let chars = text.chars().count();
        if chars > config.min_content_chars {
            debug!(selector = %css, chars, "accepted content candidate");
            return ResolvedContent {
                text,
                source: ContentSource::Candidate(css.clone()),
            };
        }
        debug!(selector = %css, chars, "content candidate below threshold");
    }

    if let Some(noise_sel) = select(doc, &noise) {
        noise_sel.remove();
    }
    let text = select(doc, "body")
        .map(|body| body.text().trim().to_string())
        .unwrap_or_default();
    debug!(chars = text.chars().count(), "falling back to document body");

    ResolvedContent {
        text,
        source: ContentSource::Body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn long_text(word: &str, n: usize) -> String {
        vec![word; n].join(" ")
    }

    #[test]
    fn test_article_accepted_first() {
        let body = long_text("article", 30);
        let html = format!(
            r#"<html><body><main>{}</main><article><script>var x = 1;</script>{}</article></body></html>"#,
            long_text("main", 40),
            body
        );
        let doc = Document::from(html.as_str());
        let resolved = resolve_content(&doc, &ExtractorConfig::default());
        assert_eq!(resolved.source, ContentSource::Candidate("article".to_string()));
        assert_eq!(resolved.text, body);
    }

    #[test]
    fn test_short_candidate_skipped_for_later_one() {
        let body = long_text("entry", 40);
        let html = format!(
            r#"<html><body><article>short</article><div class="entry-content">{}</div></body></html>"#,
            body
        );
        let doc = Document::from(html.as_str());
        let resolved = resolve_content(&doc, &ExtractorConfig::default());
        assert_eq!(
            resolved.source,
            ContentSource::Candidate(".entry-content".to_string())
        );
        assert_eq!(resolved.text, body);
    }

    #[test]
    fn test_exactly_threshold_is_rejected() {
        let exact = "x".repeat(100);
        let html = format!(
            r#"<html><body><article>{}</article><p>tail</p></body></html>"#,
            exact
        );
        let doc = Document::from(html.as_str());
        let resolved = resolve_content(&doc, &ExtractorConfig::default());
        assert_eq!(resolved.source, ContentSource::Body);
        assert!(resolved.text.contains("tail"));
    }

    #[test]
    fn test_fallback_removes_noise_from_whole_document() {
        let html = r#"<html><body>
            <nav>Menu</nav>
            <header>Site header</header>
            <div class="sidebar">Side</div>
            <p>Short page body.</p>
            <div class="ad">Buy now</div>
            <footer>Footer</footer>
        </body></html>"#;
        let doc = Document::from(html);
        let resolved = resolve_content(&doc, &ExtractorConfig::default());
        assert_eq!(resolved.source, ContentSource::Body);
        assert_eq!(resolved.text, "Short page body.");
    }

    #[test]
    fn test_rejected_candidate_still_mutates_document() {
        let html = r#"<html><body><article><nav>Article nav</nav>tiny</article><p>Body</p></body></html>"#;
        let doc = Document::from(html);
        let resolved = resolve_content(&doc, &ExtractorConfig::default());
        assert_eq!(resolved.source, ContentSource::Body);
        assert!(!resolved.text.contains("Article nav"));
        assert!(select(&doc, "nav").map_or(true, |s| !s.exists()));
    }

    #[test]
    fn test_noise_removed_only_inside_matched_candidate() {
        let body = long_text("story", 30);
        let html = format!(
            r#"<html><body><nav>outer nav</nav><div class="story-body"><div class="comments">c</div>{}</div></body></html>"#,
            body
        );
        let doc = Document::from(html.as_str());
        let resolved = resolve_content(&doc, &ExtractorConfig::default());
        assert_eq!(resolved.text, body);
        assert!(select(&doc, "nav").is_some_and(|s| s.exists()));
        assert!(select(&doc, ".comments").is_some_and(|s| !s.exists()));
    }

    #[test]
    fn test_custom_threshold() {
        let config = ExtractorConfig {
            min_content_chars: 3,
            ..Default::default()
        };
        let doc = Document::from("<html><body><main>four</main><p>x</p></body></html>");
        let resolved = resolve_content(&doc, &config);
        assert_eq!(resolved.source, ContentSource::Candidate("main".to_string()));
        assert_eq!(resolved.text, "four");
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::from("");
        let resolved = resolve_content(&doc, &ExtractorConfig::default());
        assert_eq!(resolved.source, ContentSource::Body);
        assert_eq!(resolved.text, "");
    }
}
