//! Core types shared across the wordfreq workspace.
//!
//! This crate holds the small vocabulary that both the extraction engine
//! and its binaries speak:
//!
//! - **Counts**: a word occurrence count is a plain `u32`
//! - **Ranked pairs**: [`WordCount`] orders entries for the result table
//! - **Selection knobs**: [`SelectionConfig`] carries the reporting thresholds

#![warn(missing_docs)]

use core::cmp::Ordering;
use core::fmt;

/// Number of surviving occurrences of a word.
///
/// A diary corpus of a few hundred thousand entries stays far below
/// `u32::MAX` occurrences for any single word.
pub type Count = u32;

/// Default minimum number of occurrences for a word to be reported.
pub const DEFAULT_MIN_COUNT: Count = 500;

/// Default minimum word length (in bytes) for a word to be reported.
///
/// Single-letter words are never reported, however frequent.
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// A word together with its occurrence count.
///
/// Ordering ranks by count first (higher = greater), then by word in
/// reverse lexical order, so that a descending sort yields the most
/// frequent words first and breaks ties alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordCount {
    /// Normalized word (lowercase `a-z` only).
    pub word: String,
    /// Number of surviving occurrences.
    pub count: Count,
}

impl WordCount {
    /// Creates a new word/count pair.
    #[inline]
    pub fn new(word: impl Into<String>, count: Count) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }

    /// Byte length of the word.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Returns `true` if the word is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl PartialOrd for WordCount {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordCount {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.count.cmp(&other.count) {
            Ordering::Equal => other.word.cmp(&self.word),
            ord => ord,
        }
    }
}

impl fmt::Display for WordCount {
    /// Formats as a result table row: `word,count`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.word, self.count)
    }
}

/// Thresholds applied when reducing a frequency table to the reported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Minimum occurrence count (inclusive).
    /// Default: 500
    pub min_count: Count,
    /// Minimum word length in bytes (inclusive).
    /// Default: 2
    pub min_length: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_count: DEFAULT_MIN_COUNT,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl SelectionConfig {
    /// Creates a configuration with explicit thresholds.
    pub const fn new(min_count: Count, min_length: usize) -> Self {
        Self {
            min_count,
            min_length,
        }
    }

    /// Accepts every word of at least two letters, regardless of count.
    ///
    /// Useful for small corpora and for inspecting the raw vocabulary.
    pub const fn everything() -> Self {
        Self {
            min_count: 1,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    /// Returns `true` if a word with this length and count is reported.
    #[inline(always)]
    pub fn accepts(&self, word: &str, count: Count) -> bool {
        count >= self.min_count && word.len() >= self.min_length
    }
}

impl fmt::Display for SelectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count >= {}, length >= {}",
            self.min_count, self.min_length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_ordering() {
        let a = WordCount::new("friend", 900);
        let b = WordCount::new("coffee", 500);
        let c = WordCount::new("dinner", 900);

        assert!(a > b); // Higher count is "greater"
        assert_ne!(a, c);

        // Equal counts: alphabetically earlier word ranks higher
        assert_eq!(c.cmp(&a), Ordering::Greater);
    }

    #[test]
    fn descending_sort_ranks_by_count_then_word() {
        let mut rows = vec![
            WordCount::new("work", 600),
            WordCount::new("family", 1200),
            WordCount::new("dinner", 600),
            WordCount::new("friend", 800),
        ];
        rows.sort_unstable_by(|a, b| b.cmp(a));

        let words: Vec<&str> = rows.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, ["family", "friend", "dinner", "work"]);
    }

    #[test]
    fn display_is_table_row() {
        assert_eq!(WordCount::new("friend", 501).to_string(), "friend,501");
    }

    #[test]
    fn selection_defaults() {
        let cfg = SelectionConfig::default();
        assert_eq!(cfg.min_count, 500);
        assert_eq!(cfg.min_length, 2);
    }

    #[test]
    fn selection_count_boundary() {
        let cfg = SelectionConfig::default();
        assert!(!cfg.accepts("friend", 499));
        assert!(cfg.accepts("friend", 500));
    }

    #[test]
    fn selection_length_boundary() {
        let cfg = SelectionConfig::default();
        assert!(!cfg.accepts("x", 5000));
        assert!(cfg.accepts("ox", 5000));
        assert!(!cfg.accepts("", 5000));
    }

    #[test]
    fn everything_preset() {
        let cfg = SelectionConfig::everything();
        assert!(cfg.accepts("tea", 1));
        assert!(!cfg.accepts("a", 1));
    }

    #[test]
    fn selection_display() {
        assert_eq!(
            SelectionConfig::new(10, 3).to_string(),
            "count >= 10, length >= 3"
        );
    }
}
