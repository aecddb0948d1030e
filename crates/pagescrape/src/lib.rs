// ABOUTME: Main library entry point for the pagescrape web content scraper.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Extractor, ExtractionResult, ScrapeError, handler types.

//! pagescrape - fetch a web page and extract its title, metadata, and main text.
//!
//! Extraction uses ordered fallbacks per field and a list of candidate
//! content containers tried in priority order, falling back to the whole
//! document body.
//!
//! # Example
//!
//! ```no_run
//! use pagescrape::{Client, ScrapeError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScrapeError> {
//!     let client = Client::builder().build();
//!     let page = client.scrape("https://example.com/article").await?;
//!     println!("{}", page.format_markdown());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extractors;
pub mod handler;
pub mod options;
pub mod resource;
pub mod result;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::extractors::Extractor;
pub use crate::handler::{handle_request, handle_scrape, ScrapeRequest, ScrapeResponse};
pub use crate::options::{ClientBuilder, ExtractorConfig, Options};
pub use crate::result::{ExtractionResult, ScrapedPage};
