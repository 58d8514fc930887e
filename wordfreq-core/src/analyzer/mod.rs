//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Lowercases, strips noise phrases, collapses non-letters
//! - **Tokenizer**: Splits normalized text into tokens
//! - **Stopwords**: Discards function words before counting

pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

pub use normalizer::{NoisePhraseList, TextNormalizer, TextStep};
pub use stopwords::{StopwordFilter, StopwordSet};
pub use tokenizer::{Tokenizer, Tokens};
