//! Crate-wide error taxonomy.
//!
//! `Configuration` and `Input` abort a batch before any state mutation.
//! `Generation` is per-file and non-fatal: the engine records it in the
//! result's status and moves on to the next file.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid credential. Checked once, before processing starts.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input to an operation (empty file set, nothing to export).
    #[error("Input error: {0}")]
    Input(String),

    /// A single file's generation step failed.
    #[error("Generation error: {0}")]
    Generation(String),

    /// CSV rendering failure.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Filesystem failure during file intake.
    #[error("IO error: {0}")]
    Io(String),

    /// Invariant breach (task join failures and the like).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
