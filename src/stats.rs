//! Word and character statistics over a book's text.
//!
//! Consumes the path produced by the acquisition flow (or given directly on
//! the command line) and renders the BOOKBOT report.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

/// A character and how often it occurs in the analyzed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCount {
    pub ch: char,
    pub count: usize,
}

/// Number of whitespace-separated words in `text`.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Per-character occurrence counts, with characters lowercased before
/// counting.
#[must_use]
pub fn char_frequencies(text: &str) -> HashMap<char, usize> {
    let mut frequencies = HashMap::new();
    for ch in text.chars().flat_map(char::to_lowercase) {
        *frequencies.entry(ch).or_insert(0) += 1;
    }
    frequencies
}

/// Sorts character counts descending; ties break on the character so the
/// report is deterministic.
#[must_use]
pub fn sorted_char_counts(frequencies: &HashMap<char, usize>) -> Vec<CharCount> {
    let mut counts: Vec<CharCount> = frequencies
        .iter()
        .map(|(&ch, &count)| CharCount { ch, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.ch.cmp(&b.ch)));
    counts
}

/// Renders the full report for a book's text.
///
/// The character section lists alphabetic characters only, most frequent
/// first.
#[must_use]
pub fn render_report(path: &Path, text: &str) -> String {
    let words = word_count(text);
    let frequencies = char_frequencies(text);
    let counts = sorted_char_counts(&frequencies);

    let mut report = String::new();
    let _ = writeln!(report, "============ BOOKBOT ============");
    let _ = writeln!(report, "Analyzing book found at {}...", path.display());
    let _ = writeln!(report, "----------- Word Count ----------");
    let _ = writeln!(report, "Found {words} total words");
    let _ = writeln!(report, "--------- Character Count -------");
    for CharCount { ch, count } in counts {
        if !ch.is_alphabetic() {
            continue;
        }
        let _ = writeln!(report, "{ch}: {count}");
    }
    let _ = writeln!(report, "============= END ===============");
    report
}
