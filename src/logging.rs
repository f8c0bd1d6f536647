//! File logging bootstrap.
//!
//! Logs go to a rotating file next to the schedules so they never draw over
//! the terminal UI. Initialization happens at most once per process and a
//! failure only disables logging. Writes are unbuffered: most runs are
//! one-shot commands that exit before a flush cycle would fire.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "dayplan";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
pub const LOG_LEVEL_ENV: &str = "DAYPLAN_LOG";

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    _logger: LoggerHandle,
}

#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error|off")]
    InvalidLevel(String),
    #[error("failed to create log directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to start logger: {0}")]
    Start(#[from] flexi_logger::FlexiLoggerError),
}

/// Starts file logging under `log_dir`. Repeated calls are no-ops.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), LoggingError> {
    let level = normalize_level(level)?;
    LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, LoggingError> {
        std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
            path: log_dir.to_path_buf(),
            source,
        })?;
        let logger = Logger::try_with_str(level)?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::Direct)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()?;
        info!(
            "event=app_start status=ok version={} level={} log_dir={}",
            env!("CARGO_PKG_VERSION"),
            level,
            log_dir.display()
        );
        Ok(LoggingState { _logger: logger })
    })?;
    Ok(())
}

/// Logs live in the store directory. A read-only run never creates that
/// directory just to hold a log file.
pub fn log_dir_for(store_dir: &Path, writes_store: bool) -> Option<&Path> {
    if writes_store || store_dir.is_dir() {
        Some(store_dir)
    } else {
        None
    }
}

/// Level from the command line, else `DAYPLAN_LOG`, else `info`.
pub fn resolve_level(cli: Option<&str>) -> String {
    cli.map(str::to_string)
        .or_else(|| std::env::var(LOG_LEVEL_ENV).ok())
        .unwrap_or_else(|| "info".to_string())
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(LoggingError::InvalidLevel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level(" WARNING ").unwrap(), "warn");
        assert_eq!(normalize_level("debug").unwrap(), "debug");
        assert!(matches!(
            normalize_level("loud"),
            Err(LoggingError::InvalidLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn read_only_runs_skip_missing_store_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("never-created");
        assert_eq!(log_dir_for(&missing, false), None);
        assert_eq!(log_dir_for(&missing, true), Some(missing.as_path()));
        assert_eq!(log_dir_for(tmp.path(), false), Some(tmp.path()));
        assert!(!missing.exists());
    }

    #[test]
    fn cli_level_wins() {
        assert_eq!(resolve_level(Some("trace")), "trace");
    }

    #[test]
    fn init_is_idempotent_and_writes_through() {
        let tmp = tempfile::tempdir().unwrap();
        init_logging("info", tmp.path()).unwrap();
        init_logging("info", tmp.path()).unwrap();
        assert!(LOGGING_STATE.get().is_some());

        info!("event=written_through marker=7f3a");
        let contents: String = std::fs::read_dir(tmp.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| std::fs::read_to_string(entry.path()).ok())
            .collect();
        assert!(contents.contains("event=app_start"));
        assert!(contents.contains("marker=7f3a"));
    }
}
