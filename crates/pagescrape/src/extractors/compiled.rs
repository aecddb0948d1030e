// ABOUTME: Pre-compiled CSS selector cache shared by every extraction call.
// ABOUTME: Invalid selectors are cached as None so they are only parsed once.

//! Selector caching for repeated DOM queries.
//!
//! Every scrape runs the same fixed selector lists, so selectors are compiled
//! once per process and reused for all subsequent documents.

use std::collections::HashMap;
use std::sync::RwLock;

use dom_query::{Document, Matcher, Selection};
use once_cell::sync::Lazy;

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Matcher>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Returns the compiled matcher for `css`, compiling and caching it on first use.
///
/// Field chains and the candidate list hit the same handful of selectors on
/// every page, so after the first scrape this is a read-locked map lookup.
/// Selectors from a user-supplied `ExtractorConfig` that fail to parse are
/// cached as `None` and skipped by every later lookup.
pub fn get_or_compile(css: &str) -> Option<Matcher> {
    {
        let cache = SELECTOR_CACHE.read().unwrap_or_else(|e| e.into_inner());
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Matcher::new(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap_or_else(|e| e.into_inner());
    // Another thread may have inserted while we were compiling.
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Warms the cache with an extractor's candidate list and noise group.
///
/// Called from `Extractor::new`, taking the write lock once for the batch.
pub fn precompile_selectors<I, S>(selectors: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cache = SELECTOR_CACHE.write().unwrap_or_else(|e| e.into_inner());
    for css in selectors {
        let css = css.as_ref();
        if !cache.contains_key(css) {
            cache.insert(css.to_string(), Matcher::new(css).ok());
        }
    }
}

/// Selects every element in the document matching `css`.
///
/// An invalid selector yields `None` rather than an empty selection.
pub fn select<'a>(doc: &'a Document, css: &str) -> Option<Selection<'a>> {
    let matcher = get_or_compile(css)?;
    Some(doc.select_matcher(&matcher))
}

/// Selects descendants of `sel` matching `css`.
pub fn select_within<'a>(sel: &Selection<'a>, css: &str) -> Option<Selection<'a>> {
    let matcher = get_or_compile(css)?;
    Some(sel.select_matcher(&matcher))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selector_is_cached() {
        assert!(get_or_compile("div.post-content").is_some());
        assert!(get_or_compile("div.post-content").is_some());
    }

    #[test]
    fn test_invalid_selector_returns_none() {
        assert!(get_or_compile("[[[invalid").is_none());
        assert!(get_or_compile("[[[invalid").is_none());
    }

    #[test]
    fn test_precompile_selectors() {
        precompile_selectors(["article", "[role=\"main\"]", ".story-body"]);
        assert!(get_or_compile("article").is_some());
        assert!(get_or_compile("[role=\"main\"]").is_some());
        assert!(get_or_compile(".story-body").is_some());
    }

    #[test]
    fn test_select_within_scopes_to_descendants() {
        let doc = Document::from(
            "<html><body><p class=\"x\">out</p><div><p class=\"x\">in</p></div></body></html>",
        );
        let div = select(&doc, "div").expect("valid selector");
        let inner = select_within(&div, "p.x").expect("valid selector");
        assert_eq!(inner.length(), 1);
        assert_eq!(inner.text().to_string(), "in");
    }

    #[test]
    fn test_select_invalid_is_none() {
        let doc = Document::from("<p>hi</p>");
        assert!(select(&doc, "[[[").is_none());
    }
}
