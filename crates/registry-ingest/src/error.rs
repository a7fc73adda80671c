//! Error types for registry export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a raw table.
///
/// Only file-level problems are errors; per-cell content is never validated
/// at this layer.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input has no rows at all.
    #[error("input is empty")]
    EmptyInput,

    /// The header offset discards every row.
    #[error("no header row left after discarding {offset} leading rows ({rows} rows in input)")]
    NoHeaderRow { offset: usize, rows: usize },

    /// Neither the UTF-8/comma nor the Latin-1/semicolon form parsed.
    #[error("failed to parse delimited input: {message}")]
    Parse { message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IngestError::NoHeaderRow { offset: 7, rows: 3 };
        assert_eq!(
            err.to_string(),
            "no header row left after discarding 7 leading rows (3 rows in input)"
        );
    }
}
