// ABOUTME: Resource fetching for pagescrape: HTTP GET, failure classification, and charset decoding.
// ABOUTME: Maps timeouts and 404/403 responses to dedicated error codes; everything else is a generic fetch error.

use std::collections::HashMap;

use bytes::Bytes;
use tracing::debug;

use crate::error::ScrapeError;

/// Maximum allowed response body size (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
}

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    /// URL the body was served from, after redirects.
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as UTF-8 text, using charset hints from the content-type header.
    pub fn text_utf8(&self, content_type_hint: Option<&str>) -> String {
        let ct = content_type_hint.or(self.content_type.as_deref());
        decode_body(&self.body, ct)
    }
}

/// Turns a fetched page body into text for the HTML parser.
///
/// A `charset=` label the server declared takes priority. Pages served without
/// one, or with a label `encoding_rs` does not know, are sniffed with
/// `chardetng`. Malformed sequences become U+FFFD rather than failing the scrape.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Pulls the `charset` parameter out of a `Content-Type` value such as
/// `text/html; charset="ISO-8859-1"`. Quotes are stripped and the label is
/// lowercased.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Fetch a resource from the given URL.
///
/// The timeout and user agent are carried by `client`.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, ScrapeError> {
    let mut request = client.get(url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ScrapeError::from_reqwest(url, "Fetch", e))?;

    let status = response.status();
    debug!(url, status = status.as_u16(), "received response");
    if !status.is_success() {
        return Err(ScrapeError::from_status(url, "Fetch", status.as_u16()));
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(ScrapeError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response
        .bytes()
        .await
        .map_err(|e| ScrapeError::from_reqwest(url, "Fetch", e))?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(ScrapeError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    Ok(FetchResult {
        status: status.as_u16(),
        final_url,
        content_type,
        body,
    })
}
