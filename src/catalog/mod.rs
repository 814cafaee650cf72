//! Gutendex catalog access: search, content download, and the result model.
//!
//! The catalog is queried with a free-text search plus a plain-text format
//! filter; the response is a JSON document whose `results` array deserializes
//! into [`CatalogEntry`] values. Content downloads fetch the raw byte body of
//! a format locator.
//!
//! # Example
//!
//! ```no_run
//! use bookbot::catalog::CatalogClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CatalogClient::new();
//! let entries = client.search("dracula").await?;
//! for entry in entries.iter().filter(|e| e.is_selectable()) {
//!     println!("{} (ID {})", entry.title, entry.id);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod entry;
mod error;

pub use client::{CatalogClient, DOWNLOAD_TIMEOUT_SECS, GUTENDEX_API_URL, SEARCH_TIMEOUT_SECS};
pub use entry::{
    Author, CatalogEntry, FormatMap, MAX_SEARCH_RESULTS, PLAIN_TEXT_PREFIX, selectable_entries,
};
pub use error::CatalogError;
