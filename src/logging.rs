//! File-backed `log` sink.
//!
//! The game owns the terminal, so log records go to a file or nowhere.

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

/// Logger appending records at `level` and above to `path`.
pub fn file_logger(path: &Path, level: LevelFilter) -> Result<Box<WriteLogger<File>>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    Ok(WriteLogger::new(level, Config::default(), file))
}

/// Install a [`file_logger`] as the global logger.
///
/// Without a call to this, every `log` macro in the workspace is a no-op.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let logger = file_logger(path, level)?;
    log::set_boxed_logger(logger).context("installing logger")?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Record};

    #[test]
    fn writes_enabled_records_only() {
        let path = std::env::temp_dir().join(format!("blockfall-log-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let logger = file_logger(&path, LevelFilter::Info).unwrap();
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("blockfall_core::engine")
                .args(format_args!("game over"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("blockfall_core::engine")
                .args(format_args!("spawned"))
                .build(),
        );
        logger.flush();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[INFO]"));
        assert!(text.contains("game over"));
        assert!(!text.contains("spawned"));
        let _ = std::fs::remove_file(&path);
    }
}
