// ABOUTME: Error types for pagescrape including the ErrorCode enum and ScrapeError struct.
// ABOUTME: Maps each failure category to the HTTP status and message returned to callers.

use std::fmt;

/// Error codes representing the categories of scrape failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MissingInput,
    InvalidUrl,
    Timeout,
    NotFound,
    Forbidden,
    Fetch,
}

impl ErrorCode {
    /// HTTP status code reported for this failure.
    pub fn status(self) -> u16 {
        match self {
            ErrorCode::MissingInput | ErrorCode::InvalidUrl => 400,
            ErrorCode::Timeout => 408,
            ErrorCode::NotFound => 404,
            ErrorCode::Forbidden => 403,
            ErrorCode::Fetch => 500,
        }
    }

    /// Human-readable message placed in the error payload.
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::MissingInput => "URL is required",
            ErrorCode::InvalidUrl => "Invalid URL format",
            ErrorCode::Timeout => "Request timeout",
            ErrorCode::NotFound => "Page not found",
            ErrorCode::Forbidden => "Access forbidden",
            ErrorCode::Fetch => "Failed to scrape content",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MissingInput => "missing input",
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Timeout => "timeout",
            ErrorCode::NotFound => "not found",
            ErrorCode::Forbidden => "forbidden",
            ErrorCode::Fetch => "fetch error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for scrape operations.
#[derive(Debug, thiserror::Error)]
pub struct ScrapeError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pagescrape: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ScrapeError {
    fn with_code(
        code: ErrorCode,
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a MissingInput error.
    pub fn missing_input(op: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::MissingInput, String::new(), op, None)
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::InvalidUrl, url, op, source)
    }

    /// Create a Timeout error.
    pub fn timeout(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::Timeout, url, op, source)
    }

    /// Create a NotFound error.
    pub fn not_found(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::NotFound, url, op, source)
    }

    /// Create a Forbidden error.
    pub fn forbidden(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::Forbidden, url, op, source)
    }

    /// Create a generic Fetch error.
    pub fn fetch(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::Fetch, url, op, source)
    }

    /// Classify a non-success HTTP status into the matching error.
    pub fn from_status(url: impl Into<String>, op: impl Into<String>, status: u16) -> Self {
        let source = Some(anyhow::anyhow!("HTTP status {}", status));
        match status {
            404 => Self::not_found(url, op, source),
            403 => Self::forbidden(url, op, source),
            _ => Self::fetch(url, op, source),
        }
    }

    /// Classify a transport error reported by reqwest.
    pub fn from_reqwest(url: impl Into<String>, op: impl Into<String>, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::timeout(url, op, Some(anyhow::Error::new(err)));
        }
        if let Some(status) = err.status() {
            return Self::from_status(url, op, status.as_u16());
        }
        Self::fetch(url, op, Some(anyhow::Error::new(err)))
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        self.code.status()
    }

    /// Caller-facing message for this error.
    pub fn message(&self) -> &'static str {
        self.code.message()
    }

    /// Returns true if this is a MissingInput error.
    pub fn is_missing_input(&self) -> bool {
        self.code == ErrorCode::MissingInput
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is a Timeout error.
    pub fn is_timeout(&self) -> bool {
        self.code == ErrorCode::Timeout
    }

    /// Returns true if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }

    /// Returns true if this is a Forbidden error.
    pub fn is_forbidden(&self) -> bool {
        self.code == ErrorCode::Forbidden
    }

    /// Returns true if this is a generic Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }
}
