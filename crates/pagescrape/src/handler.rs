// ABOUTME: Request boundary for the scrape endpoint: JSON body in, status code and JSON payload out.
// ABOUTME: Every failure becomes a {"error": message} payload with the mapped status; nothing is retried.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::client::Client;
use crate::error::ScrapeError;

/// Incoming request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Status code plus the JSON payload to serialize back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeResponse {
    pub status: u16,
    pub body: Value,
}

impl ScrapeResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn from_error(err: &ScrapeError) -> Self {
        Self {
            status: err.status(),
            body: json!({ "error": err.message() }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// The `error` message, if this is a failure payload.
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}

/// Parses a raw request body.
///
/// An empty body is treated as a request without a URL. A body that is not
/// a JSON object with an optional string `url` is a generic failure.
pub fn parse_request(body: &[u8]) -> Result<ScrapeRequest, ScrapeError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ScrapeRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        ScrapeError::fetch(
            "",
            "ParseRequest",
            Some(anyhow::anyhow!("invalid request body: {}", e)),
        )
    })
}

/// Handles one scrape request end to end.
pub async fn handle_scrape(client: &Client, body: &[u8]) -> ScrapeResponse {
    let request = match parse_request(body) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "rejected scrape request");
            return ScrapeResponse::from_error(&err);
        }
    };
    handle_request(client, &request).await
}

/// Handles an already-decoded request.
pub async fn handle_request(client: &Client, request: &ScrapeRequest) -> ScrapeResponse {
    let url = request.url.as_deref().unwrap_or_default();
    match client.scrape(url).await {
        Ok(page) => match serde_json::to_value(&page) {
            Ok(value) => ScrapeResponse::ok(value),
            Err(e) => {
                let err = ScrapeError::fetch(url, "Serialize", Some(anyhow::Error::new(e)));
                warn!(url, error = %err, "failed to serialize scrape result");
                ScrapeResponse::from_error(&err)
            }
        },
        Err(err) => {
            warn!(url, status = err.status(), error = %err, "scraping error");
            ScrapeResponse::from_error(&err)
        }
    }
}
