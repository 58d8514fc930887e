//! Corpus normalization.
//!
//! Turns the raw concatenated corpus into lowercase `a-z` words separated by
//! single spaces, stripping a fixed list of noise phrases on the way.
//!
//! The work is modelled as an ordered list of [`TextStep`]s. Each step reads
//! one string and produces a new one:
//!
//! ```text
//! Lowercase
//! Remove(" happy")  Remove("happy ")  CollapseNonAlpha
//! Remove(" day")    Remove("day ")    CollapseNonAlpha
//! ...
//! ```
//!
//! Phrase removal and collapsing are interleaved per phrase, so a later
//! phrase always sees text already stripped of the earlier ones. Reordering
//! the list changes the output.

use core::fmt;
use std::mem;

use memchr::memmem::Finder;

#[rustfmt::skip]
const LOWERCASE_TABLE: [u8; 256] = [
    0x00,0x01,0x02,0x03,0x04,0x05,0x06,0x07,0x08,0x09,0x0a,0x0b,0x0c,0x0d,0x0e,0x0f,
    0x10,0x11,0x12,0x13,0x14,0x15,0x16,0x17,0x18,0x19,0x1a,0x1b,0x1c,0x1d,0x1e,0x1f,
    0x20,0x21,0x22,0x23,0x24,0x25,0x26,0x27,0x28,0x29,0x2a,0x2b,0x2c,0x2d,0x2e,0x2f,
    0x30,0x31,0x32,0x33,0x34,0x35,0x36,0x37,0x38,0x39,0x3a,0x3b,0x3c,0x3d,0x3e,0x3f,
    0x40,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x5b,0x5c,0x5d,0x5e,0x5f,
    0x60,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x7b,0x7c,0x7d,0x7e,0x7f,
    0x80,0x81,0x82,0x83,0x84,0x85,0x86,0x87,0x88,0x89,0x8a,0x8b,0x8c,0x8d,0x8e,0x8f,
    0x90,0x91,0x92,0x93,0x94,0x95,0x96,0x97,0x98,0x99,0x9a,0x9b,0x9c,0x9d,0x9e,0x9f,
    0xa0,0xa1,0xa2,0xa3,0xa4,0xa5,0xa6,0xa7,0xa8,0xa9,0xaa,0xab,0xac,0xad,0xae,0xaf,
    0xb0,0xb1,0xb2,0xb3,0xb4,0xb5,0xb6,0xb7,0xb8,0xb9,0xba,0xbb,0xbc,0xbd,0xbe,0xbf,
    0xc0,0xc1,0xc2,0xc3,0xc4,0xc5,0xc6,0xc7,0xc8,0xc9,0xca,0xcb,0xcc,0xcd,0xce,0xcf,
    0xd0,0xd1,0xd2,0xd3,0xd4,0xd5,0xd6,0xd7,0xd8,0xd9,0xda,0xdb,0xdc,0xdd,0xde,0xdf,
    0xe0,0xe1,0xe2,0xe3,0xe4,0xe5,0xe6,0xe7,0xe8,0xe9,0xea,0xeb,0xec,0xed,0xee,0xef,
    0xf0,0xf1,0xf2,0xf3,0xf4,0xf5,0xf6,0xf7,0xf8,0xf9,0xfa,0xfb,0xfc,0xfd,0xfe,0xff,
];

/// Built-in noise phrases, in application order.
///
/// `"day"` appears twice on purpose: the second pass catches occurrences
/// exposed by the phrases removed in between.
pub const DEFAULT_NOISE_PHRASES: &[&str] = &[
    "happy", "day", "got", "went", "today", "made", "one", "two", "time", "last", "first",
    "going", "getting", "took", "found", "lot", "really", "saw", "see", "month", "week", "day",
    "yesterday", "year", "ago", "now", "still", "since", "something", "great", "good", "long",
    "thing", "toi", "without", "yesteri", "2s", "toand", "ing", "came", "able", "bought", "go",
];

/// Ordered list of noise phrases stripped from the corpus.
///
/// Entries are trimmed and ASCII-lowercased on construction; empty entries
/// are dropped (an empty phrase would match every space).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoisePhraseList {
    phrases: Vec<String>,
}

impl Default for NoisePhraseList {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_PHRASES.iter().copied())
    }
}

impl NoisePhraseList {
    /// Builds a list from phrases in application order.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_ascii_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { phrases }
    }

    /// An empty list: normalization only lowercases and collapses.
    pub fn empty() -> Self {
        Self {
            phrases: Vec::new(),
        }
    }

    /// Number of phrases.
    #[inline]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns `true` if the list holds no phrases.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Iterates phrases in application order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

/// A single pure text transform.
#[derive(Clone)]
pub enum TextStep {
    /// ASCII-lowercase every byte; non-ASCII characters pass through.
    Lowercase,
    /// Delete every non-overlapping occurrence of the needle, left to right.
    Remove(Finder<'static>),
    /// Replace each maximal run of bytes outside `a-z` with one space.
    CollapseNonAlpha,
}

impl TextStep {
    /// Step deleting `" " + phrase` (the phrase when not the first token).
    pub fn strip_leading(phrase: &str) -> Self {
        Self::remove(&format!(" {phrase}"))
    }

    /// Step deleting `phrase + " "` (the phrase when not the last token).
    pub fn strip_trailing(phrase: &str) -> Self {
        Self::remove(&format!("{phrase} "))
    }

    fn remove(needle: &str) -> Self {
        Self::Remove(Finder::new(needle.as_bytes()).into_owned())
    }

    /// Applies the step, returning a new string.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.apply_into(text, &mut out);
        out
    }

    /// Applies the step, appending the result to `out`.
    pub fn apply_into(&self, text: &str, out: &mut String) {
        match self {
            TextStep::Lowercase => lowercase_into(text, out),
            TextStep::Remove(finder) => remove_into(finder, text, out),
            TextStep::CollapseNonAlpha => collapse_into(text, out),
        }
    }
}

impl fmt::Debug for TextStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextStep::Lowercase => f.write_str("Lowercase"),
            TextStep::Remove(finder) => {
                write!(f, "Remove({:?})", String::from_utf8_lossy(finder.needle()))
            }
            TextStep::CollapseNonAlpha => f.write_str("CollapseNonAlpha"),
        }
    }
}

#[inline]
fn lowercase_into(text: &str, out: &mut String) {
    out.reserve(text.len());
    // SAFETY: the table only remaps 0x41..=0x5A to 0x61..=0x7A and leaves every
    // other byte untouched, so multi-byte UTF-8 sequences are copied verbatim
    // and the buffer stays valid UTF-8.
    unsafe {
        let buf = out.as_mut_vec();
        buf.extend(text.bytes().map(|b| LOWERCASE_TABLE[b as usize]));
    }
}

#[inline]
fn remove_into(finder: &Finder<'_>, text: &str, out: &mut String) {
    let needle_len = finder.needle().len();
    let mut last = 0usize;
    for start in finder.find_iter(text.as_bytes()) {
        // Matches of a UTF-8 needle in a UTF-8 haystack start and end on char
        // boundaries, so these slices never split a character.
        out.push_str(&text[last..start]);
        last = start + needle_len;
    }
    out.push_str(&text[last..]);
}

#[inline]
fn collapse_into(text: &str, out: &mut String) {
    out.reserve(text.len());
    let mut in_run = false;
    for b in text.bytes() {
        if b.is_ascii_lowercase() {
            out.push(b as char);
            in_run = false;
        } else if !in_run {
            out.push(' ');
            in_run = true;
        }
    }
}

/// Corpus normalizer driven by a [`NoisePhraseList`].
///
/// Output contains only `a-z` and single spaces. It may start or end with a
/// space; the tokenizer skips those.
///
/// # Examples
///
/// ```
/// use wordfreq_core::analyzer::normalizer::{NoisePhraseList, TextNormalizer};
///
/// let normalizer = TextNormalizer::new(&NoisePhraseList::new(["coffee"]));
/// assert_eq!(normalizer.normalize("Morning COFFEE, then work!"), "morning then work ");
/// ```
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    steps: Vec<TextStep>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(&NoisePhraseList::default())
    }
}

impl TextNormalizer {
    /// Builds the step pipeline for the given phrases.
    pub fn new(phrases: &NoisePhraseList) -> Self {
        let mut steps = Vec::with_capacity(1 + phrases.len() * 3);
        steps.push(TextStep::Lowercase);
        for phrase in phrases.iter() {
            steps.push(TextStep::strip_leading(phrase));
            steps.push(TextStep::strip_trailing(phrase));
            steps.push(TextStep::CollapseNonAlpha);
        }
        if phrases.is_empty() {
            steps.push(TextStep::CollapseNonAlpha);
        }
        Self { steps }
    }

    /// The ordered transform steps.
    pub fn steps(&self) -> &[TextStep] {
        &self.steps
    }

    /// Normalizes text into an existing buffer.
    ///
    /// Clears `out` first. Internally ping-pongs between `out` and one
    /// scratch buffer, so the whole run costs two corpus-sized allocations.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.push_str(input);

        let mut scratch = String::with_capacity(input.len());
        for step in &self.steps {
            scratch.clear();
            step.apply_into(out, &mut scratch);
            mem::swap(out, &mut scratch);
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}
