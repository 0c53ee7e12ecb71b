//! Error types for itemdata-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Structural failures that abort a run.
///
/// Gaps in the data itself (unknown property codes, unknown skills, missing
/// rune words) are never errors; they are reported as
/// [`Diagnostic`](crate::diagnostics::Diagnostic)s instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Table is empty or otherwise unusable
    #[error("failed to parse table '{path}': {message}")]
    TableParse { path: PathBuf, message: String },

    /// TSV parsing error from the csv crate
    #[error("TSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A mandatory column is absent from the header
    #[error("missing required column '{column}' in '{path}'")]
    MissingColumn { path: PathBuf, column: String },

    /// A source table could not be located
    #[error("source table not found: {0}")]
    TableNotFound(String),

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Bad user input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
