//! Error types for infl-output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when writing simulation results.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A file the archive must copy could not be read.
    #[error("cannot archive {path}: {source}")]
    ArchiveInput {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("cannot move finished output into place at {path}: {source}")]
    Persist {
        path:   PathBuf,
        source: std::io::Error,
    },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
