//! Corpus Storage
//!
//! All record bodies live in one contiguous string, each followed by a
//! single space separator. Records are referenced by (offset, length) spans.
//!
//! ## Memory Layout
//!
//! ```text
//! Buffer: [body0][ ][body1][ ][body2][ ]
//!         ^          ^          ^
//! Spans:  (0,5)      (6,7)      (14,4) ...
//! ```
//!
//! The normalizer reads the whole buffer at once; spans only serve lookups
//! of individual records.

/// Record reference inside the corpus buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordSpan {
    offset: usize,
    len: usize,
}

impl RecordSpan {
    /// Creates a new record span.
    #[inline(always)]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Returns the byte offset in the corpus.
    #[inline(always)]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Returns the byte length.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Returns `true` for an empty body.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Builder for a [`Corpus`]. The only way to append records.
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    text: String,
    spans: Vec<RecordSpan>,
}

impl CorpusBuilder {
    /// Creates a builder with pre-allocated capacity.
    pub fn with_capacity(text_cap: usize, record_cap: usize) -> Self {
        Self {
            text: String::with_capacity(text_cap),
            spans: Vec::with_capacity(record_cap),
        }
    }

    /// Appends a record body followed by the separator.
    #[inline]
    pub fn push(&mut self, body: &str) -> usize {
        let index = self.spans.len();
        let offset = self.text.len();
        self.text.push_str(body);
        self.text.push(' ');
        self.spans.push(RecordSpan::new(offset, body.len()));
        index
    }

    /// Number of records pushed so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if nothing was pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Freezes the corpus.
    pub fn build(self) -> Corpus {
        Corpus {
            text: self.text,
            spans: self.spans,
        }
    }
}

/// The concatenated free-text bodies of every input record.
///
/// Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    text: String,
    spans: Vec<RecordSpan>,
}

impl Corpus {
    /// Starts a new corpus.
    pub fn builder() -> CorpusBuilder {
        CorpusBuilder::default()
    }

    /// Builds a corpus from bodies in order.
    pub fn from_bodies<I, S>(bodies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = CorpusBuilder::default();
        for body in bodies {
            builder.push(body.as_ref());
        }
        builder.build()
    }

    /// The whole corpus text, separators included.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of records.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if no record was added.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Corpus size in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// Gets a record body by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        let span = self.spans.get(index)?;
        self.text.get(span.offset()..span.offset() + span.len())
    }

    /// Iterates record bodies in order.
    pub fn records(&self) -> impl Iterator<Item = &str> {
        self.spans
            .iter()
            .map(move |span| &self.text[span.offset()..span.offset() + span.len()])
    }
}
