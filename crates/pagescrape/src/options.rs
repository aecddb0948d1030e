// ABOUTME: Configuration for pagescrape: ExtractorConfig thresholds, client Options, and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Browser-identifying user agent sent with every fetch.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Content container selectors, highest priority first.
pub const CANDIDATE_SELECTORS: &[&str] = &[
    "article",
    "[role=\"main\"]",
    ".post-content",
    ".entry-content",
    ".content",
    ".article-body",
    ".story-body",
    ".post-body",
    "main",
    ".main-content",
];

/// Subtrees removed before body text is read.
pub const NOISE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "nav",
    "footer",
    "header",
    ".sidebar",
    ".comments",
    ".social-share",
    ".advertisement",
    ".ad",
];

/// A candidate's text must be longer than this to be accepted as the body.
pub const MIN_CONTENT_CHARS: usize = 100;

/// Hard cap on the length of the extracted body.
pub const MAX_CONTENT_CHARS: usize = 10_000;

/// Title used when the document offers none.
pub const UNTITLED: &str = "Untitled";

/// Thresholds and selector lists driving the extraction heuristics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub candidate_selectors: Vec<String>,
    pub noise_selectors: Vec<String>,
    pub min_content_chars: usize,
    pub max_content_chars: usize,
    pub untitled: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            candidate_selectors: CANDIDATE_SELECTORS.iter().map(|s| s.to_string()).collect(),
            noise_selectors: NOISE_SELECTORS.iter().map(|s| s.to_string()).collect(),
            min_content_chars: MIN_CONTENT_CHARS,
            max_content_chars: MAX_CONTENT_CHARS,
            untitled: UNTITLED.to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Noise selectors joined into a single selector group.
    pub fn noise_selector_group(&self) -> String {
        self.noise_selectors.join(", ")
    }
}

/// Configuration options for the pagescrape client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
    pub extractor: ExtractorConfig,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_client: None,
            headers: HashMap::new(),
            extractor: ExtractorConfig::default(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Use a custom HTTP client. Its own timeout and user agent take precedence.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Replace the extraction thresholds and selector lists.
    pub fn extractor_config(mut self, config: ExtractorConfig) -> Self {
        self.opts.extractor = config;
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
