//! Logging bootstrap.
//!
//! Initializes the global tracing subscriber from the resolved logging
//! configuration. The config core itself never logs; this runs in `main`
//! strictly after resolution has finished.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Parse a configured level string, defaulting to INFO on anything
/// unrecognized. Matching is case-insensitive ("debug" and "DEBUG" both
/// work).
pub fn parse_level(level: &str) -> Level {
    match level.parse::<Level>() {
        Ok(level) => level,
        Err(_) => {
            eprintln!("Warning: unrecognized log level '{level}', using INFO");
            Level::INFO
        }
    }
}

/// Install the global subscriber: append-mode file when `logging.file` is
/// set, stderr otherwise.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = parse_level(&config.level);

    match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed opening log file: {}", path.display()))?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        None => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_known_values() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("INFO"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("ERROR"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_unknown_falls_back_to_info() {
        assert_eq!(parse_level("verbose"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }
}
