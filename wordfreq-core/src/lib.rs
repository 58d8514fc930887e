//! Word-frequency extraction for diary corpora.
//!
//! Turns free-text entries into a ranked `word,count` table for a word cloud:
//!
//! 1. [`source`] reads the CSV export into a [`Corpus`]
//! 2. [`analyzer`] normalizes, tokenizes and filters the text
//! 3. [`frequency`] counts the survivors and applies the thresholds
//! 4. [`output`] publishes the table atomically
//!
//! [`WordFrequencyPipeline`] wires steps 2 and 3 together.

pub mod analyzer;
pub mod config;
pub mod corpus;
mod error;
pub mod frequency;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod source;

pub use config::Config;
pub use corpus::Corpus;
pub use error::{Error, Result};
pub use frequency::{FrequencyTable, ResultSet, RunStats};
pub use output::ResultWriter;
pub use pipeline::{Extraction, WordFrequencyPipeline};
pub use source::CsvSource;
pub use wordfreq_types::{Count, SelectionConfig, WordCount};
