//! Environment-driven run configuration.
//!
//! | Variable             | Default            |
//! |----------------------|--------------------|
//! | `FILE_PATH`          | `./cleaned_hm.csv` |
//! | `RESULT_PATH`        | `./result.csv`     |
//! | `TEXT_FIELD`         | `4`                |
//! | `MIN_COUNT`          | `500`              |
//! | `MIN_LENGTH`         | `2`                |
//! | `POLL_INTERVAL_MS`   | `1000`             |
//! | `STOPWORDS_PATH`     | built-in list      |
//! | `NOISE_PHRASES_PATH` | built-in list      |
//!
//! List files hold one entry per line; blank lines are ignored.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use wordfreq_types::{SelectionConfig, DEFAULT_MIN_COUNT, DEFAULT_MIN_LENGTH};

use crate::analyzer::{NoisePhraseList, StopwordSet};
use crate::error::{Error, Result};
use crate::pipeline::WordFrequencyPipeline;
use crate::source::DEFAULT_TEXT_FIELD;

/// Source CSV when `FILE_PATH` is unset.
pub const DEFAULT_FILE_PATH: &str = "./cleaned_hm.csv";
/// Result table when `RESULT_PATH` is unset.
pub const DEFAULT_RESULT_PATH: &str = "./result.csv";
/// Source polling delay when `POLL_INTERVAL_MS` is unset.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source CSV.
    pub source_path: PathBuf,
    /// Result table destination.
    pub result_path: PathBuf,
    /// Column holding the free-text body.
    pub text_field: usize,
    /// Delay between checks while the source is missing.
    pub poll_interval: Duration,
    /// Reporting thresholds.
    pub selection: SelectionConfig,
    /// Replacement stopword list.
    pub stopwords_path: Option<PathBuf>,
    /// Replacement noise phrase list, in application order.
    pub noise_phrases_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_FILE_PATH),
            result_path: PathBuf::from(DEFAULT_RESULT_PATH),
            text_field: DEFAULT_TEXT_FIELD,
            poll_interval: DEFAULT_POLL_INTERVAL,
            selection: SelectionConfig::default(),
            stopwords_path: None,
            noise_phrases_path: None,
        }
    }
}

impl Config {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            let value = lookup(key).filter(|v| !v.trim().is_empty());
            if value.is_none() {
                log::info!("{} not set. Using default.", key);
            }
            value
        };

        Ok(Self {
            source_path: get("FILE_PATH")
                .map_or_else(|| PathBuf::from(DEFAULT_FILE_PATH), PathBuf::from),
            result_path: get("RESULT_PATH")
                .map_or_else(|| PathBuf::from(DEFAULT_RESULT_PATH), PathBuf::from),
            text_field: parse_or("TEXT_FIELD", get("TEXT_FIELD"), DEFAULT_TEXT_FIELD)?,
            poll_interval: Duration::from_millis(parse_or(
                "POLL_INTERVAL_MS",
                get("POLL_INTERVAL_MS"),
                DEFAULT_POLL_INTERVAL.as_millis() as u64,
            )?),
            selection: SelectionConfig::new(
                parse_or("MIN_COUNT", get("MIN_COUNT"), DEFAULT_MIN_COUNT)?,
                parse_or("MIN_LENGTH", get("MIN_LENGTH"), DEFAULT_MIN_LENGTH)?,
            ),
            stopwords_path: optional_path(&lookup, "STOPWORDS_PATH"),
            noise_phrases_path: optional_path(&lookup, "NOISE_PHRASES_PATH"),
        })
    }

    /// The stopword set: the configured file, or the built-in list.
    pub fn stopwords(&self) -> Result<StopwordSet> {
        match &self.stopwords_path {
            Some(path) => {
                let set = StopwordSet::new(load_list(path)?);
                log::info!("loaded {} stopwords from {}", set.len(), path.display());
                Ok(set)
            }
            None => Ok(StopwordSet::default()),
        }
    }

    /// The noise phrase list: the configured file, or the built-in list.
    pub fn noise_phrases(&self) -> Result<NoisePhraseList> {
        match &self.noise_phrases_path {
            Some(path) => {
                let list = NoisePhraseList::new(load_list(path)?);
                log::info!("loaded {} noise phrases from {}", list.len(), path.display());
                Ok(list)
            }
            None => Ok(NoisePhraseList::default()),
        }
    }

    /// Builds the pipeline these settings describe.
    pub fn pipeline(&self) -> Result<WordFrequencyPipeline> {
        Ok(WordFrequencyPipeline::new(
            &self.noise_phrases()?,
            self.stopwords()?,
            self.selection,
        ))
    }
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::InvalidConfig { key, value: raw }),
    }
}

fn optional_path<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str) -> Option<PathBuf> {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

fn load_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}
