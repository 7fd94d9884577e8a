//! Error types for CSV parsing and writing

use thiserror::Error;

/// Errors produced while configuring, parsing, or writing CSV documents
///
/// Configuration problems (`InvalidPath`, `FileExists`, `Decode`) surface
/// before any row is processed. `MalformedContent` is raised mid-parse and
/// halts the parse at the offending cell.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Source file path does not exist or cannot be opened
    #[error("invalid file path: {0}")]
    InvalidPath(String),

    /// Destination already exists and exclusive creation was requested
    #[error("destination already exists: {0}")]
    FileExists(String),

    /// Source bytes could not be decoded with the configured encoding
    #[error("failed to decode source text: {0}")]
    Decode(String),

    /// Malformed quoting or escaping encountered during parse
    #[error("malformed content at row {row}, column {column}: {message}")]
    MalformedContent {
        /// 1-based row number of the offending cell
        row: usize,
        /// 1-based column number of the offending cell
        column: usize,
        /// What went wrong
        message: String,
    },

    /// Underlying read failure
    #[error("read error: {0}")]
    Read(String),

    /// Underlying write failure
    #[error("write error: {0}")]
    Write(String),
}

/// Convenience result type used throughout the crate
pub type Result<T> = std::result::Result<T, CsvError>;

impl CsvError {
    /// Shorthand for a `MalformedContent` error at the given position
    pub(crate) fn malformed(row: usize, column: usize, message: &str) -> Self {
        CsvError::MalformedContent {
            row,
            column,
            message: message.to_string(),
        }
    }
}
