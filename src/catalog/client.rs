//! HTTP client for the Gutendex catalog.
//!
//! One client instance is created per run and reused for the search request
//! and the content download, taking advantage of connection pooling. Search
//! and content fetches carry different per-request timeouts because content
//! payloads are whole books.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use super::entry::{CatalogEntry, SearchResponse};
use super::error::CatalogError;

/// Default catalog search endpoint.
pub const GUTENDEX_API_URL: &str = "https://gutendex.com/books";

/// Bound on the search request, in seconds.
pub const SEARCH_TIMEOUT_SECS: u64 = 20;

/// Bound on a content download, in seconds. Larger than the search bound
/// because payloads are complete book texts.
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 60;

/// Client for searching the catalog and fetching book content.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    search_timeout: Duration,
    download_timeout: Duration,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Creates a client against the default Gutendex endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(GUTENDEX_API_URL)
    }

    /// Creates a client against a custom search endpoint with the default
    /// timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeouts(base_url, SEARCH_TIMEOUT_SECS, DOWNLOAD_TIMEOUT_SECS)
    }

    /// Creates a client with explicit endpoint and timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_timeouts(
        base_url: impl Into<String>,
        search_timeout_secs: u64,
        download_timeout_secs: u64,
    ) -> Self {
        let client = Client::builder()
            .gzip(true)
            .user_agent(concat!("bookbot/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self {
            client,
            base_url: base_url.into(),
            search_timeout: Duration::from_secs(search_timeout_secs),
            download_timeout: Duration::from_secs(download_timeout_secs),
        }
    }

    /// Searches the catalog for books matching `query`, restricted to
    /// entries advertising a plain-text format.
    ///
    /// Returns the entries in the order the catalog ranked them.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Timeout` when the endpoint does not respond
    /// within the search bound, `CatalogError::Unreachable` when a
    /// connection cannot be established, `CatalogError::HttpStatus` on a
    /// non-success response, and `CatalogError::Protocol` for any other
    /// transport or decoding failure.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
        debug!("searching catalog");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("search", query), ("mime_type", "text/plain")])
            .timeout(self.search_timeout)
            .send()
            .await
            .map_err(|e| self.classify_search_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::http_status(&self.base_url, status.as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::protocol(&self.base_url, e.to_string()))?;

        info!(results = body.results.len(), "search complete");
        Ok(body.results)
    }

    /// Downloads the raw byte content behind a format locator.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::HttpStatus` on a non-success response and
    /// `CatalogError::Protocol` for a malformed locator or any transport
    /// failure, including a download that exceeds its bound.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_content(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        Url::parse(url).map_err(|e| CatalogError::protocol(url, e.to_string()))?;

        debug!("downloading content");

        let response = self
            .client
            .get(url)
            .timeout(self.download_timeout)
            .send()
            .await
            .map_err(|e| CatalogError::protocol(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::http_status(url, status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CatalogError::protocol(url, e.to_string()))?;

        info!(bytes = bytes.len(), "content download complete");
        Ok(bytes.to_vec())
    }

    fn classify_search_error(&self, error: reqwest::Error) -> CatalogError {
        if error.is_timeout() {
            CatalogError::timeout(self.search_timeout.as_secs())
        } else if error.is_connect() {
            CatalogError::unreachable(&self.base_url, error)
        } else {
            CatalogError::protocol(&self.base_url, error.to_string())
        }
    }
}
