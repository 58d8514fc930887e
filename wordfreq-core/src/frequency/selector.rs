//! Threshold selection: reduces a frequency table to the reported words.

use core::slice;

use rustc_hash::FxHashSet;
use wordfreq_types::{Count, SelectionConfig, WordCount};

use crate::frequency::aggregator::FrequencyTable;

/// The reported subset of a [`FrequencyTable`].
///
/// Words are unique. Entries are kept ranked (most frequent first, ties
/// alphabetical) so every run over the same table writes the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<WordCount>,
}

impl ResultSet {
    /// Builds a result set from arbitrary entries, ranking them.
    ///
    /// Duplicate words keep only their highest-ranked entry.
    pub fn from_entries(mut entries: Vec<WordCount>) -> Self {
        entries.sort_unstable_by(|a, b| b.cmp(a));
        let mut seen = FxHashSet::default();
        entries.retain(|e| seen.insert(e.word.clone()));
        Self { entries }
    }

    /// Number of selected words.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no word was selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked entries.
    #[inline]
    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    /// Iterates ranked entries.
    pub fn iter(&self) -> slice::Iter<'_, WordCount> {
        self.entries.iter()
    }

    /// Count for `word`, if selected.
    pub fn get(&self, word: &str) -> Option<Count> {
        self.entries.iter().find(|e| e.word == word).map(|e| e.count)
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a WordCount;
    type IntoIter = slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Pure filter keeping entries with `count >= min_count` and
/// `len(word) >= min_length`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdSelector {
    config: SelectionConfig,
}

impl ThresholdSelector {
    /// Creates a selector with the given thresholds.
    pub const fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    /// The active thresholds.
    pub fn config(&self) -> SelectionConfig {
        self.config
    }

    /// Selects the reportable entries. The table is not modified.
    pub fn select(&self, table: &FrequencyTable) -> ResultSet {
        let mut entries: Vec<WordCount> = table
            .iter()
            .filter(|&(word, count)| self.config.accepts(word, count))
            .map(|(word, count)| WordCount::new(word, count))
            .collect();
        entries.sort_unstable_by(|a, b| b.cmp(a));
        ResultSet { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordfreq_types::DEFAULT_MIN_COUNT;

    fn table_with(entries: &[(&str, u32)]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for &(word, count) in entries {
            for _ in 0..count {
                table.record(word);
            }
        }
        table
    }

    #[test]
    fn count_boundary() {
        let m = DEFAULT_MIN_COUNT;
        let table = table_with(&[("below", m - 1), ("exact", m), ("above", m + 1)]);
        let result = ThresholdSelector::default().select(&table);

        assert_eq!(result.len(), 2);
        assert_eq!(result.get("below"), None);
        assert_eq!(result.get("exact"), Some(m));
        assert_eq!(result.get("above"), Some(m + 1));
    }

    #[test]
    fn length_boundary() {
        let n = 10 * DEFAULT_MIN_COUNT;
        let table = table_with(&[("x", n), ("ox", n)]);
        let result = ThresholdSelector::default().select(&table);

        assert_eq!(result.len(), 1);
        assert_eq!(result.get("x"), None);
        assert_eq!(result.get("ox"), Some(n));
    }

    #[test]
    fn selection_is_ranked() {
        let table = table_with(&[("tea", 3), ("cake", 5), ("jam", 3)]);
        let result = ThresholdSelector::new(SelectionConfig::everything()).select(&table);
        let words: Vec<&str> = result.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["cake", "jam", "tea"]);
    }

    #[test]
    fn table_untouched() {
        let table = table_with(&[("tea", 3), ("a", 9)]);
        let before = table.clone();
        let _ = ThresholdSelector::new(SelectionConfig::everything()).select(&table);
        assert_eq!(table, before);
    }

    #[test]
    fn empty_table_selects_nothing() {
        let result = ThresholdSelector::default().select(&FrequencyTable::new());
        assert!(result.is_empty());
    }

    #[test]
    fn from_entries_dedups_and_ranks() {
        let result = ResultSet::from_entries(vec![
            WordCount::new("friend", 501),
            WordCount::new("coffee", 750),
            WordCount::new("friend", 400),
        ]);
        assert_eq!(result.len(), 2);
        assert_eq!(result.entries()[0], WordCount::new("coffee", 750));
        assert_eq!(result.get("friend"), Some(501));
    }
}
