//! Whitespace Tokenizer
//!
//! Splits normalized text into candidate words. It is the second stage of the
//! extraction pipeline, right after the [`TextNormalizer`](super::TextNormalizer).
//!
//! ## What It Does
//!
//! Given normalized input like `" dinner with family "`, it yields each word
//! with its position in the token stream:
//!
//! ```ignore
//! ("dinner", 0)
//! ("with", 1)
//! ("family", 2)
//! ```
//!
//! ## Key Features
//!
//! - **Zero Allocation**: tokens are slices of the input string
//! - **Restartable**: [`Tokenizer::iter`] can be called any number of times
//!   over the same text and always yields the same sequence
//! - **Lenient**: leading, trailing and repeated whitespace are skipped, so
//!   the normalizer's stray edge spaces need no trimming
//!
//! Whitespace here means ASCII space, tab, newline and carriage return.

#[inline(always)]
const fn is_ascii_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\t' | b'\r')
}

/// Splits text on runs of ASCII whitespace.
///
/// ## Example
///
/// ```
/// use wordfreq_core::analyzer::tokenizer::Tokenizer;
///
/// let tokenizer = Tokenizer::new();
/// let mut count = 0;
///
/// tokenizer.tokenize(" coffee  with friends ", |_text, _pos| {
///     count += 1;
/// });
///
/// assert_eq!(count, 3);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Returns an iterator over the tokens of `text`.
    #[inline]
    pub fn iter<'n>(&self, text: &'n str) -> Tokens<'n> {
        Tokens { text, cursor: 0 }
    }

    /// Tokenizes `text` and emits `(token, position)` for every token.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop (overflow protection).
    #[inline]
    pub fn tokenize<'n, F>(&self, text: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let mut pos = 0u32;
        for token in self.iter(text) {
            emit(token, pos);
            if pos == u32::MAX {
                return;
            }
            pos += 1;
        }
    }

    /// Collects all tokens eagerly.
    pub fn tokens<'n>(&self, text: &'n str) -> Vec<&'n str> {
        self.iter(text).collect()
    }
}

/// Iterator over the whitespace-separated tokens of a string.
#[derive(Debug, Clone)]
pub struct Tokens<'n> {
    text: &'n str,
    cursor: usize,
}

impl<'n> Iterator for Tokens<'n> {
    type Item = &'n str;

    #[inline]
    fn next(&mut self) -> Option<&'n str> {
        let bytes = self.text.as_bytes();
        let mut start = self.cursor;
        while start < bytes.len() && is_ascii_ws(bytes[start]) {
            start += 1;
        }
        if start == bytes.len() {
            self.cursor = start;
            return None;
        }

        let mut end = start;
        while end < bytes.len() && !is_ascii_ws(bytes[end]) {
            end += 1;
        }
        self.cursor = end;

        // Both bounds sit next to an ASCII byte (or the string edge), never
        // inside a multi-byte character.
        Some(&self.text[start..end])
    }
}
