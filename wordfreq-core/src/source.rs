//! CSV record source.
//!
//! Reads the diary export (one entry per row, header first) and feeds the
//! designated free-text column into a [`Corpus`].

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use crate::corpus::{Corpus, CorpusBuilder};
use crate::error::{Error, Result};

/// Column of `cleaned_hm` in the HappyDB export.
pub const DEFAULT_TEXT_FIELD: usize = 4;

/// A CSV file whose rows each carry one free-text body.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    text_field: usize,
}

impl CsvSource {
    /// Creates a source reading column `text_field` of the file at `path`.
    pub fn new(path: impl Into<PathBuf>, text_field: usize) -> Self {
        Self {
            path: path.into(),
            text_field,
        }
    }

    /// The source path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every row and builds the corpus.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, malformed CSV (including rows whose width differs
    /// from the header) and rows lacking the text field. Nothing partial is
    /// returned.
    pub fn read_corpus(&self) -> Result<Corpus> {
        let file = File::open(&self.path)?;
        let size_hint = file.metadata().map_or(0, |m| m.len() as usize);
        let corpus = read_corpus_from(file, self.text_field, size_hint)?;
        log::debug!(
            "read {} records ({} bytes) from {}",
            corpus.len(),
            corpus.byte_len(),
            self.path.display()
        );
        Ok(corpus)
    }
}

/// Builds a corpus from CSV data. The first row is a header and is skipped.
///
/// `size_hint` pre-sizes the corpus buffer; pass 0 when unknown.
pub fn read_corpus_from<R: Read>(
    reader: R,
    text_field: usize,
    size_hint: usize,
) -> Result<Corpus> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    // Bodies make up most of the file, so its size bounds the corpus text.
    let mut builder = CorpusBuilder::with_capacity(size_hint, 0);

    // Bodies are read as bytes; invalid UTF-8 becomes U+FFFD, which the
    // normalizer collapses like any other non-letter.
    let mut record = csv::ByteRecord::new();
    while rdr.read_byte_record(&mut record)? {
        let body = record.get(text_field).ok_or_else(|| Error::MissingField {
            row: record.position().map_or(0, |p| p.line()),
            index: text_field,
        })?;
        builder.push(&String::from_utf8_lossy(body));
    }

    Ok(builder.build())
}

/// Blocks until `path` exists, checking every `interval`.
///
/// An upstream stage publishes the source file; until it appears there is
/// nothing to do. Errors other than "not found" are returned immediately.
pub fn wait_for_source(path: &Path, interval: Duration) -> Result<()> {
    let started = Instant::now();
    loop {
        match fs::metadata(path) {
            Ok(_) => {
                log::debug!(
                    "source {} available after {:?}",
                    path.display(),
                    started.elapsed()
                );
                return Ok(());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "source file {} does not exist, retrying in {:?}",
                    path.display(),
                    interval
                );
                thread::sleep(interval);
            }
            Err(e) => return Err(e.into()),
        }
    }
}
