//! BookBot Library
//!
//! This library provides the core functionality for the BookBot tool, which
//! analyzes plain-text books sourced either from a local file or from an
//! interactive Project Gutenberg search-and-download session.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`catalog`] - Gutendex catalog client and search-result model
//! - [`fetch`] - Interactive acquisition session (search, select, download)
//! - [`stats`] - Word and character statistics over the acquired text

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod fetch;
pub mod stats;

// Re-export commonly used types
pub use catalog::{
    Author, CatalogClient, CatalogEntry, CatalogError, GUTENDEX_API_URL, MAX_SEARCH_RESULTS,
    selectable_entries,
};
pub use fetch::{AcquisitionSession, Console, ContentStore, FetchError, StdConsole};
