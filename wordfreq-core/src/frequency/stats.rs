//! Per-run extraction statistics.

use core::fmt;

use crate::frequency::aggregator::FrequencyTable;
use crate::frequency::selector::ResultSet;

/// A snapshot of one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of records in the corpus.
    pub records: usize,
    /// Corpus size in bytes before normalization.
    pub corpus_bytes: usize,
    /// Normalized text size in bytes.
    pub normalized_bytes: usize,
    /// Tokens produced by the tokenizer.
    pub tokens: u64,
    /// Tokens discarded by the stopword filter.
    pub discarded: u64,
    /// Distinct words counted.
    pub vocabulary: usize,
    /// Words that passed the thresholds.
    pub selected: usize,
}

impl RunStats {
    /// Tokens that survived filtering.
    pub fn kept(&self) -> u64 {
        self.tokens - self.discarded
    }

    /// Fills the table-derived fields.
    pub(crate) fn observe(&mut self, table: &FrequencyTable, results: &ResultSet) {
        self.vocabulary = table.len();
        self.selected = results.len();
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} tokens ({} kept), {} distinct words, {} selected",
            self.records,
            self.tokens,
            self.kept(),
            self.vocabulary,
            self.selected
        )
    }
}
