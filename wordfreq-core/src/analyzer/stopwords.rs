//! Stopword filtering.
//!
//! A token is discarded when it is empty, when it is itself a stopword, or
//! when its leading run of `a-z` letters is a stopword. For the purely
//! alphabetic tokens the normalizer produces, both membership tests look at
//! the same string; they only diverge for tokens carrying other characters.

use rustc_hash::FxHashSet;

/// Built-in English stopwords.
///
/// Contractions are kept even though a normalized token can never contain an
/// apostrophe, so the same set serves un-normalized token streams. `"ours"`
/// is deliberately absent and is counted like any content word.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't", "do",
    "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few", "for",
    "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he",
    "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself", "him", "himself", "his",
    "how", "how's", "http", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't",
    "it", "it's", "its", "itself", "just", "k", "let's", "like", "me", "more", "most", "mustn't",
    "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "ought",
    "our", "ourselves", "out", "over", "own", "r", "same", "shall", "shan't", "she",
    "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such", "than", "that",
    "that's", "the", "their", "theirs", "them", "themselves", "then", "there", "there's", "these",
    "they", "they'd", "they'll", "they're", "they've", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've",
    "were", "weren't", "what", "what's", "when", "when's", "where", "where's", "which", "while",
    "who", "who's", "whom", "why", "why's", "with", "won't", "would", "wouldn't", "www", "you",
    "you'd", "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

/// Immutable set of stopwords tested by exact membership.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS.iter().copied())
    }
}

impl StopwordSet {
    /// Builds a set; entries are trimmed and ASCII-lowercased, empty ones dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// An empty set: nothing is a stopword.
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Exact membership test.
    #[inline(always)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stopwords.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Longest prefix of `token` made only of `a-z`. May be empty.
#[inline]
pub fn leading_alpha_run(token: &str) -> &str {
    let end = token
        .bytes()
        .position(|b| !b.is_ascii_lowercase())
        .unwrap_or(token.len());
    &token[..end]
}

/// Keep/discard decision for candidate tokens.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: StopwordSet,
}

impl StopwordFilter {
    /// Creates a filter over the given set.
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    /// The underlying stopword set.
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Returns `true` if the token survives filtering.
    #[inline]
    pub fn keep(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        if self.stopwords.contains(token) {
            return false;
        }
        !self.stopwords.contains(leading_alpha_run(token))
    }
}
