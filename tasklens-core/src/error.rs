//! Error types for tasklens-core

use thiserror::Error;

/// Main error type for the tasklens-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// The event log header lacks a column the engine needs
    #[error("event log is missing required column '{column}'")]
    MissingColumn { column: String },

    /// At least one event timestamp could not be resolved to an instant.
    ///
    /// `line` and `value` identify the first offending row; `invalid_rows`
    /// counts every offending row in the log.
    #[error(
        "some timestamps could not be parsed ({invalid_rows} row(s)); first at line {line}: {value:?}"
    )]
    UnparseableTimestamp {
        line: u64,
        value: String,
        invalid_rows: usize,
    },

    /// A staged report file could not be moved into place
    #[error("failed to persist report: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Result type alias for tasklens-core
pub type Result<T> = std::result::Result<T, Error>;
