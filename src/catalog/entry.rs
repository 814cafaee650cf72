//! Search-result model for the catalog.
//!
//! Entries arrive as JSON objects whose `formats` member maps content-type
//! labels to download URLs. The first `text/plain` format in the object's own
//! order is the entry's plain-text locator, so [`FormatMap`] keeps the
//! insertion order the default map types would lose.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Content-type prefix identifying a plain-text format.
pub const PLAIN_TEXT_PREFIX: &str = "text/plain";

/// Maximum number of entries shown to the user per search.
pub const MAX_SEARCH_RESULTS: usize = 10;

/// One author record attached to a catalog entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    /// Display name, e.g. `"Stoker, Bram"`.
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i16>,
    #[serde(default)]
    pub death_year: Option<i16>,
}

/// One book record returned by a catalog search.
///
/// Read-only after deserialization; the identifier is unique within the
/// catalog and anchors the downloaded file name.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub formats: FormatMap,
}

impl CatalogEntry {
    /// Returns the locator of the first plain-text format, scanning the
    /// format mapping in insertion order.
    #[must_use]
    pub fn plain_text_locator(&self) -> Option<&str> {
        self.formats
            .iter()
            .find(|(label, _)| label.starts_with(PLAIN_TEXT_PREFIX))
            .map(|(_, url)| url)
    }

    /// True iff the entry exposes at least one plain-text format.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.plain_text_locator().is_some()
    }

    /// Comma-joined author names for display, or `"Unknown"` when the entry
    /// has no authors.
    #[must_use]
    pub fn authors_display(&self) -> String {
        if self.authors.is_empty() {
            return "Unknown".to_string();
        }
        self.authors
            .iter()
            .map(|author| author.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Content-type label to locator mapping, preserving JSON insertion order.
#[derive(Debug, Clone, Default)]
pub struct FormatMap(Vec<(String, String)>);

impl FormatMap {
    /// Iterates over `(content-type label, locator)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(label, url)| (label.as_str(), url.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormatMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(label, url)| (label.into(), url.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for FormatMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FormatMapVisitor;

        impl<'de> Visitor<'de> for FormatMapVisitor {
            type Value = FormatMap;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of content-type labels to locator URLs")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, url)) = access.next_entry::<String, String>()? {
                    pairs.push((label, url));
                }
                Ok(FormatMap(pairs))
            }
        }

        deserializer.deserialize_map(FormatMapVisitor)
    }
}

/// Search response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<CatalogEntry>,
}

/// Filters entries down to those with a plain-text locator, capped at `limit`.
///
/// Entries beyond the cap are silently dropped; the caller presents the
/// survivors as the selectable list.
#[must_use]
pub fn selectable_entries(entries: Vec<CatalogEntry>, limit: usize) -> Vec<CatalogEntry> {
    entries
        .into_iter()
        .filter(CatalogEntry::is_selectable)
        .take(limit)
        .collect()
}
