//! Error types for the acquisition subsystem.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors that can occur while acquiring a book.
///
/// The session is the sole recovery point: search failures are offered back
/// to the user as a retry prompt, download and persistence failures abort
/// the current selection.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A catalog request failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The selected entry exposes no plain-text format.
    #[error("no text format available for book: {title}")]
    NoPlainText {
        /// Title of the entry that lacked a plain-text locator.
        title: String,
    },

    /// Filesystem failure while persisting the downloaded content.
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The interactive console could not be read or written.
    #[error("failed to read user input: {source}")]
    Prompt {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Creates a missing-plain-text error for an entry title.
    pub fn no_plain_text(title: impl Into<String>) -> Self {
        Self::NoPlainText {
            title: title.into(),
        }
    }

    /// Creates an IO error with the affected path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a console read/write error.
    pub fn prompt(source: std::io::Error) -> Self {
        Self::Prompt { source }
    }
}
