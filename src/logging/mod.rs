//! Tracing subscriber setup for the binary.
//!
//! The library only emits events through the `tracing` facade. The binary
//! installs a subscriber that appends them to a log file, so greeting output
//! on stdout stays clean.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Why the log file subscriber could not be installed.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The directory holding the log file could not be created.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The log path does not end in a UTF-8 file name.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// The log path is a filesystem root.
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// A global subscriber is already installed in this process.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Split a log path into the directory to write in and the file name.
///
/// A bare file name resolves to the current directory.
fn split_log_path(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;
    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;
    if directory.as_os_str().is_empty() {
        Ok((Path::new("."), file_name))
    } else {
        Ok((directory, file_name))
    }
}

/// Install a global subscriber that appends plain-text events to `log_path`.
///
/// The level filter comes from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
/// Missing parent directories are created before the subscriber is installed.
///
/// # Errors
///
/// - [`LoggingError::InvalidPath`] / [`LoggingError::NoParentDirectory`] for
///   unusable paths
/// - [`LoggingError::DirectoryCreation`] if the directory cannot be created
/// - [`LoggingError::SubscriberAlreadySet`] on a second call
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let (directory, file_name) = split_log_path(log_path)?;
    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(tracing_appender::rolling::never(directory, file_name))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
