//! Logger setup for the binaries.
//!
//! Timestamped, level-coloured lines on stderr. The default level is `info`;
//! `RUST_LOG` overrides it (e.g. `RUST_LOG=wordfreq_core=debug`).

use std::io::Write as _;

use log::{Level, LevelFilter};
use pretty_env_logger::env_logger;

/// Installs the global logger. Later calls are ignored.
pub fn init() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(LevelFilter::Info);
    builder.parse_default_env();

    builder.format(|buf, record| {
        let mut level_style = buf.style();
        level_style.set_color(match record.level() {
            Level::Error => env_logger::fmt::Color::Red,
            Level::Warn => env_logger::fmt::Color::Yellow,
            Level::Info => env_logger::fmt::Color::Green,
            Level::Debug => env_logger::fmt::Color::Blue,
            Level::Trace => env_logger::fmt::Color::Magenta,
        });
        level_style.set_bold(true);

        writeln!(
            buf,
            "{} {} {} > {}",
            buf.timestamp(),
            level_style.value(format!("{:<5}", record.level())),
            record.target(),
            record.args()
        )
    });

    let _ = builder.try_init();
}
