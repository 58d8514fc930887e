//! Frequency aggregation.

use rustc_hash::FxHashMap;
use wordfreq_types::{Count, WordCount};

/// Mapping from normalized word to its number of surviving occurrences.
///
/// Every key was seen at least once, and its value is the exact number of
/// times it was recorded. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, Count>,
    total: u64,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table sized for `vocabulary` distinct words.
    pub fn with_capacity(vocabulary: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(vocabulary, Default::default()),
            total: 0,
        }
    }

    /// Counts every token of a filtered stream.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.record(token);
        }
        table
    }

    /// Records one occurrence of `word`.
    ///
    /// Looks up by `&str` first so repeat words never allocate.
    #[inline]
    pub fn record(&mut self, word: &str) {
        self.total += 1;
        if let Some(count) = self.counts.get_mut(word) {
            *count = count.saturating_add(1);
        } else {
            self.counts.insert(word.to_owned(), 1);
        }
    }

    /// Count for `word`, if it was seen.
    #[inline]
    pub fn get(&self, word: &str) -> Option<Count> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of recorded occurrences.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterates `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Count)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// All entries, most frequent first, ties broken alphabetically.
    pub fn ranked(&self) -> Vec<WordCount> {
        let mut rows: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(w, &c)| WordCount::new(w.as_str(), c))
            .collect();
        rows.sort_unstable_by(|a, b| b.cmp(a));
        rows
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}
