// ABOUTME: The main Client struct for pagescrape that validates input, fetches pages, and runs the extractor.
// ABOUTME: Provides async scrape() for URLs and scrape_html() for markup that is already in hand.

use dom_query::Document;
use tracing::info;

use crate::error::ScrapeError;
use crate::extractors::Extractor;
use crate::options::{ClientBuilder, Options};
use crate::resource::{fetch, FetchOptions};
use crate::result::ScrapedPage;

/// Checks that `url` is present and syntactically valid.
///
/// Only the empty string counts as missing; a whitespace-only value is present
/// and fails to parse. Unsupported schemes surface later as fetch errors.
pub fn validate_url(url: &str, op: &str) -> Result<url::Url, ScrapeError> {
    if url.is_empty() {
        return Err(ScrapeError::missing_input(op));
    }
    url::Url::parse(url).map_err(|e| {
        ScrapeError::invalid_url(url, op, Some(anyhow::anyhow!("malformed URL: {}", e)))
    })
}

/// The pagescrape client: one HTTP client plus one configured extractor.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
    extractor: Extractor,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .cookie_store(true)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        let extractor = Extractor::new(opts.extractor.clone());

        Self {
            opts,
            http_client,
            extractor,
        }
    }

    /// Fetch the page at `url` and extract its content.
    pub async fn scrape(&self, url: &str) -> Result<ScrapedPage, ScrapeError> {
        validate_url(url, "Scrape")?;

        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
        };
        let fetched = fetch(&self.http_client, url, &fetch_opts).await?;
        let raw_html = fetched.text_utf8(None);

        let page = self.extract_page(&raw_html, url);
        info!(
            url,
            final_url = %fetched.final_url,
            status = fetched.status,
            words = page.result.word_count(),
            "scraped page"
        );
        Ok(page)
    }

    /// Extract content from markup that was obtained elsewhere.
    ///
    /// `url` is validated and echoed back but never fetched.
    pub fn scrape_html(&self, html: &str, url: &str) -> Result<ScrapedPage, ScrapeError> {
        validate_url(url, "ScrapeHTML")?;
        Ok(self.extract_page(html, url))
    }

    fn extract_page(&self, html: &str, url: &str) -> ScrapedPage {
        let doc = Document::from(html);
        ScrapedPage {
            url: url.to_string(),
            result: self.extractor.extract(&doc, url),
        }
    }
}
