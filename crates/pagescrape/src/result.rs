// ABOUTME: ExtractionResult record produced by the extractor and the ScrapedPage success payload.
// ABOUTME: Includes markdown formatting for the CLI and a word count for scrape logging.

use serde::{Deserialize, Serialize};

/// Structured data extracted from one document.
///
/// Every string field defaults to the empty string.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub title: String,
    pub description: String,
    pub author: String,
    /// Raw source string, not validated as a date.
    pub publish_date: String,
    /// Possibly relative; not resolved against the page URL.
    pub image: String,
    pub content: String,
    pub tags: Vec<String>,
    /// ISO-8601 UTC timestamp taken when extraction completed.
    pub scraped_at: String,
}

impl ExtractionResult {
    /// Format the result as a markdown document.
    pub fn format_markdown(&self, url: &str) -> String {
        let mut parts = Vec::new();

        if !self.title.is_empty() {
            parts.push(format!("# {}", self.title));
        }

        let mut meta = Vec::new();
        if !self.author.is_empty() {
            meta.push(format!("By {}", self.author));
        }
        if !self.publish_date.is_empty() {
            meta.push(self.publish_date.clone());
        }
        if !meta.is_empty() {
            parts.push(meta.join(" | "));
        }

        if !url.is_empty() {
            parts.push(format!("Source: {}", url));
        }

        if !self.description.is_empty() {
            parts.push(format!("> {}", self.description));
        }

        if !self.image.is_empty() {
            parts.push(format!("![Lead Image]({})", self.image));
        }

        if !self.tags.is_empty() {
            parts.push(format!("Tags: {}", self.tags.join(", ")));
        }

        if !parts.is_empty() && !self.content.is_empty() {
            parts.push("---".to_string());
        }

        if !self.content.is_empty() {
            parts.push(self.content.clone());
        }

        parts.join("\n\n")
    }

    /// Number of whitespace-separated words in the body.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// Success payload: the requested URL echoed alongside the extracted fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScrapedPage {
    pub url: String,
    #[serde(flatten)]
    pub result: ExtractionResult,
}

impl ScrapedPage {
    pub fn format_markdown(&self) -> String {
        self.result.format_markdown(&self.url)
    }
}
