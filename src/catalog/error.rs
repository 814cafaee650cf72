//! Error types for catalog operations.

use thiserror::Error;

/// Errors raised by [`CatalogClient`](super::CatalogClient) operations.
///
/// No retries happen at this layer; the interactive session decides whether
/// a failure is worth another attempt.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog did not respond within the request's bound.
    #[error("Project Gutenberg API did not respond in time (timeout after {timeout_secs} seconds)")]
    Timeout {
        /// The bound that was exceeded, in seconds.
        timeout_secs: u64,
    },

    /// A connection to the catalog could not be established.
    #[error("could not connect to Project Gutenberg API at {url}")]
    Unreachable {
        /// The endpoint that was unreachable.
        url: String,
        /// The underlying connection error.
        #[source]
        source: reqwest::Error,
    },

    /// The catalog answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Any other transport or decoding failure.
    #[error("catalog request failed for {url}: {detail}")]
    Protocol {
        /// The URL involved in the failed exchange.
        url: String,
        /// Human-readable description of the failure.
        detail: String,
    },
}

impl CatalogError {
    /// Creates a timeout error carrying the exceeded bound.
    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    /// Creates an unreachable-endpoint error from a reqwest connect failure.
    pub fn unreachable(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Unreachable {
            url: url.into(),
            source,
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a protocol error with a detail string.
    pub fn protocol(url: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Protocol {
            url: url.into(),
            detail: detail.into(),
        }
    }
}

// No `From<reqwest::Error>`: the variants need context (url, bound) that the
// source error does not carry, so callers classify through the constructors.
