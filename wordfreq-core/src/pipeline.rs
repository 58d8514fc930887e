//! The extraction pipeline.
//!
//! ```text
//! Corpus ─▶ TextNormalizer ─▶ Tokenizer ─▶ StopwordFilter ─▶ FrequencyTable ─▶ ThresholdSelector ─▶ ResultSet
//! ```
//!
//! Single pass, single thread, no retries: a run either returns an
//! [`Extraction`] or never starts.

use wordfreq_types::SelectionConfig;

use crate::analyzer::{NoisePhraseList, StopwordFilter, StopwordSet, TextNormalizer, Tokenizer};
use crate::corpus::Corpus;
use crate::frequency::{FrequencyTable, ResultSet, RunStats, ThresholdSelector};

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Counts of every surviving word.
    pub table: FrequencyTable,
    /// The reported subset.
    pub results: ResultSet,
    /// Run counters.
    pub stats: RunStats,
}

/// Normalizer, tokenizer, filter and selector wired together.
///
/// All tables are injected at construction and never change afterwards.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyPipeline {
    normalizer: TextNormalizer,
    tokenizer: Tokenizer,
    filter: StopwordFilter,
    selector: ThresholdSelector,
}

impl WordFrequencyPipeline {
    /// Creates a pipeline from explicit tables and thresholds.
    pub fn new(phrases: &NoisePhraseList, stopwords: StopwordSet, selection: SelectionConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(phrases),
            tokenizer: Tokenizer::new(),
            filter: StopwordFilter::new(stopwords),
            selector: ThresholdSelector::new(selection),
        }
    }

    /// Built-in tables with custom thresholds.
    pub fn with_selection(selection: SelectionConfig) -> Self {
        Self {
            selector: ThresholdSelector::new(selection),
            ..Self::default()
        }
    }

    /// The normalizer stage.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// The stopword filter stage.
    pub fn filter(&self) -> &StopwordFilter {
        &self.filter
    }

    /// The selection thresholds.
    pub fn selection(&self) -> SelectionConfig {
        self.selector.config()
    }

    /// Normalizes, tokenizes and filters `text`, counting what survives.
    ///
    /// Also fills the token counters of `stats`.
    pub fn count(&self, text: &str, stats: &mut RunStats) -> FrequencyTable {
        let normalized = self.normalizer.normalize(text);
        stats.normalized_bytes = normalized.len();
        log::debug!("normalized {} -> {} bytes", text.len(), normalized.len());

        let mut table = FrequencyTable::new();
        for token in self.tokenizer.iter(&normalized) {
            stats.tokens += 1;
            if self.filter.keep(token) {
                table.record(token);
            } else {
                stats.discarded += 1;
            }
        }
        log::debug!(
            "counted {} tokens ({} discarded), {} distinct",
            stats.tokens,
            stats.discarded,
            table.len()
        );
        table
    }

    /// Runs every stage over the corpus.
    pub fn run(&self, corpus: &Corpus) -> Extraction {
        let mut stats = RunStats {
            records: corpus.len(),
            corpus_bytes: corpus.byte_len(),
            ..Default::default()
        };

        let table = self.count(corpus.text(), &mut stats);
        let results = self.selector.select(&table);
        stats.observe(&table, &results);

        log::debug!("{}", stats);
        log::info!("selected {} words ({})", results.len(), self.selection());

        Extraction {
            table,
            results,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordfreq_types::DEFAULT_MIN_COUNT;

    fn everything() -> WordFrequencyPipeline {
        WordFrequencyPipeline::with_selection(SelectionConfig::everything())
    }

    fn repeated(word: &str, n: u32) -> String {
        let mut s = String::with_capacity((word.len() + 1) * n as usize);
        for _ in 0..n {
            s.push_str(word);
            s.push(' ');
        }
        s
    }

    #[test]
    fn regression_vector_counts_nothing() {
        let corpus = Corpus::from_bodies(["i had a great day today and a great day"]);
        let out = everything().run(&corpus);

        // Normalizes to "i had a a"; every token is a stopword.
        assert!(out.table.is_empty());
        assert!(out.results.is_empty());
        assert_eq!(out.stats.tokens, 4);
        assert_eq!(out.stats.discarded, 4);
    }

    #[test]
    fn counts_content_words() {
        let corpus = Corpus::from_bodies([
            "Dinner with my family.",
            "My daughter's recital; FAMILY dinner!",
        ]);
        let out = everything().run(&corpus);

        assert_eq!(out.table.get("dinner"), Some(2));
        assert_eq!(out.table.get("family"), Some(2));
        assert_eq!(out.table.get("daughter"), Some(1));
        assert_eq!(out.table.get("recital"), Some(1));
        // "s" from "daughter's" is counted but too short to report.
        assert_eq!(out.table.get("s"), Some(1));
        assert_eq!(out.results.get("s"), None);
        assert_eq!(out.table.get("my"), None);
        assert_eq!(out.table.get("with"), None);
    }

    #[test]
    fn stopwords_never_counted() {
        let corpus = Corpus::from_bodies([repeated("the", 5_000), repeated("friend", 600)]);
        let out = WordFrequencyPipeline::default().run(&corpus);

        assert_eq!(out.table.get("the"), None);
        assert_eq!(out.results.get("friend"), Some(600));
        assert_eq!(out.results.len(), 1);
    }

    #[test]
    fn ours_is_counted() {
        let corpus = Corpus::from_bodies([repeated("ours", 600)]);
        let out = WordFrequencyPipeline::default().run(&corpus);

        assert_eq!(out.results.get("ours"), Some(600));
    }

    #[test]
    fn replacement_characters_split_words() {
        let data: &[u8] = b"id,text\n1,caf\xE9 dinner\n";
        let corpus = crate::source::read_corpus_from(data, 1, 0).unwrap();
        let out = everything().run(&corpus);

        assert_eq!(out.table.get("caf"), Some(1));
        assert_eq!(out.table.get("dinner"), Some(1));
    }

    #[test]
    fn count_threshold_boundary() {
        let m = DEFAULT_MIN_COUNT;
        let corpus = Corpus::from_bodies([repeated("coffee", m - 1), repeated("friend", m)]);
        let out = WordFrequencyPipeline::default().run(&corpus);

        assert_eq!(out.table.get("coffee"), Some(m - 1));
        assert_eq!(out.results.get("coffee"), None);
        assert_eq!(out.results.get("friend"), Some(m));
    }

    #[test]
    fn length_threshold_boundary() {
        let n = 10 * DEFAULT_MIN_COUNT;
        let corpus = Corpus::from_bodies([repeated("x", n), repeated("ox", n)]);
        let out = WordFrequencyPipeline::default().run(&corpus);

        assert_eq!(out.table.get("x"), Some(n));
        assert_eq!(out.results.get("x"), None);
        assert_eq!(out.results.get("ox"), Some(n));
    }

    #[test]
    fn noise_phrases_removed_before_counting() {
        let corpus = Corpus::from_bodies(["Happy times at the park", "park happy"]);
        let out = everything().run(&corpus);

        assert_eq!(out.table.get("happy"), None);
        assert_eq!(out.table.get("park"), Some(2));
    }

    #[test]
    fn injected_tables() {
        let pipeline = WordFrequencyPipeline::new(
            &NoisePhraseList::new(["coffee"]),
            StopwordSet::new(["tea"]),
            SelectionConfig::everything(),
        );
        let corpus = Corpus::from_bodies(["coffee tea cake the", "cake coffee"]);
        let out = pipeline.run(&corpus);

        assert_eq!(out.table.get("coffee"), None);
        assert_eq!(out.table.get("tea"), None);
        assert_eq!(out.table.get("cake"), Some(2));
        assert_eq!(out.table.get("the"), Some(1));
    }

    #[test]
    fn empty_corpus_is_not_an_error() {
        let out = WordFrequencyPipeline::default().run(&Corpus::default());
        assert!(out.table.is_empty());
        assert!(out.results.is_empty());
        assert_eq!(out.stats, RunStats::default());
    }

    #[test]
    fn deterministic() {
        let corpus = Corpus::from_bodies([
            "Went hiking with friends, saw a deer.",
            "Finished my thesis and celebrated with friends.",
            "Friends came over for board games.",
        ]);
        let pipeline = everything();
        let a = pipeline.run(&corpus);
        let b = pipeline.run(&corpus);

        assert_eq!(a.table, b.table);
        assert_eq!(a.results, b.results);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn stats_are_consistent() {
        let corpus = Corpus::from_bodies(["park dog park", "dog and the cat"]);
        let out = everything().run(&corpus);

        assert_eq!(out.stats.records, 2);
        assert_eq!(out.stats.corpus_bytes, corpus.byte_len());
        assert_eq!(out.stats.kept(), out.table.total());
        assert_eq!(out.stats.vocabulary, out.table.len());
        assert_eq!(out.stats.selected, out.results.len());
    }
}
