//! File-name derivation for downloaded books.
//!
//! Names follow the pattern `{slug(title)}-{id}.txt`. The identifier suffix
//! keeps names unique even when two titles slugify identically, and
//! guarantees a non-empty name for empty or all-punctuation titles.

use crate::catalog::CatalogEntry;

/// Converts text to a lowercase, hyphen-delimited, filesystem-safe slug.
///
/// Every maximal run of characters outside `[a-z0-9]` collapses to a single
/// hyphen; leading and trailing hyphens are stripped. Degenerates to the
/// empty string for empty or all-punctuation input.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut prev_hyphen = false;
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }
    slug.trim_matches('-').to_string()
}

/// Derives the on-disk file name for a catalog entry.
#[must_use]
pub fn file_name(entry: &CatalogEntry) -> String {
    format!("{}-{}.txt", slugify(&entry.title), entry.id)
}
