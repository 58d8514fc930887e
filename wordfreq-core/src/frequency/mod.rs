//! Counting and selection.
//!
//! - **Aggregator**: counts filtered tokens into a [`FrequencyTable`]
//! - **Selector**: reduces the table to the reported [`ResultSet`]
//! - **Stats**: per-run counters for the summary log line

pub mod aggregator;
pub mod selector;
pub mod stats;

pub use aggregator::FrequencyTable;
pub use selector::{ResultSet, ThresholdSelector};
pub use stats::RunStats;
