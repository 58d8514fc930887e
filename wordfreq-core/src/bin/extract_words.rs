//! Batch extraction stage.
//!
//! Waits for the diary export, counts its words and publishes the
//! `Word,Count` table for the loading stage. Settings come from the
//! environment (or a `.env` file); see [`wordfreq_core::config`].

use std::process::ExitCode;

use wordfreq_core::{logging, Config, CsvSource, ResultWriter, Result};

fn run() -> Result<()> {
    let config = Config::from_env()?;
    let pipeline = config.pipeline()?;

    wordfreq_core::source::wait_for_source(&config.source_path, config.poll_interval)?;

    let corpus = CsvSource::new(&config.source_path, config.text_field).read_corpus()?;
    let extraction = pipeline.run(&corpus);

    ResultWriter::new(&config.result_path).write(&extraction.results)?;
    log::info!(
        "wrote {} rows to {}",
        extraction.results.len(),
        config.result_path.display()
    );

    Ok(())
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("extraction failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
