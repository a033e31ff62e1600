//! Logger setup
//!
//! `env_logger` behind the `log` facade. The TUI owns the terminal, so in that
//! mode records go to a file or nowhere.

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::File;
use std::path::Path;

/// Where log records should end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    Stderr,
    File(&'a Path),
    Disabled,
}

impl<'a> LogSink<'a> {
    /// Pick a sink for the given mode: a file always wins, stderr only outside the TUI
    #[must_use]
    pub fn select(log_file: Option<&'a Path>, owns_terminal: bool) -> Self {
        match (log_file, owns_terminal) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Disabled,
            (None, false) => Self::Stderr,
        }
    }
}

/// Install the global logger
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is already installed.
pub fn init_logger(level: LevelFilter, sink: LogSink<'_>) -> Result<()> {
    let mut builder = Builder::new();
    builder.format_timestamp_millis().format_module_path(false);

    match sink {
        LogSink::Stderr => {
            builder.filter_level(level).target(Target::Stderr);
        }
        LogSink::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder
                .filter_level(level)
                .target(Target::Pipe(Box::new(file)));
        }
        LogSink::Disabled => {
            builder.filter_level(LevelFilter::Off);
        }
    }

    builder.try_init().context("logger already initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sink_wins() {
        let path = Path::new("game.log");
        assert_eq!(LogSink::select(Some(path), true), LogSink::File(path));
        assert_eq!(LogSink::select(Some(path), false), LogSink::File(path));
    }

    #[test]
    fn tui_without_file_disables_logging() {
        assert_eq!(LogSink::select(None, true), LogSink::Disabled);
        assert_eq!(LogSink::select(None, false), LogSink::Stderr);
    }
}
