//! Error types for gsdb-core
//!
//! Errors carry enough context to be shown to an operator as-is: each message
//! says what failed and what to check or do next.

use thiserror::Error;

/// Result type alias for store and ingestion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type shared by the parser, the store, and the engines built on it
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables.")]
    Config(String),

    /// Gene set catalog path does not exist
    #[error("Gene set source not found: '{0}'. Verify the path exists and is readable.")]
    SourceNotFound(String),

    /// Gene set catalog parsed to zero records
    #[error("Gene set source '{0}' contains no records. Verify the file is a GMT catalog and is not empty.")]
    EmptySource(String),

    /// A GMT line could not be parsed
    #[error("Malformed gene set record at line {line}: {reason}. GMT lines carry a name, a source field, and tab-separated gene symbols.")]
    MalformedRecord { line: usize, reason: String },

    /// A write collided with a stored row
    #[error("Uniqueness violation: {0}. Reset the schema before loading a catalog into a populated store.")]
    UniquenessViolation(String),

    /// Database operation failed (rusqlite)
    #[error("Database error: {0}. The store file may be corrupt or locked by another process.")]
    Database(#[from] rusqlite::Error),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("Network request failed: {0}. Check your internet connection and the catalog URL.")]
    Http(#[from] reqwest::Error),

    /// Catalog download did not complete
    #[error("Download failed: {0}")]
    Download(String),

    /// TSV serialization failed
    #[error("Export failed: {0}")]
    Export(#[from] csv::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a source-not-found error
    pub fn source_not_found(path: impl Into<String>) -> Self {
        Self::SourceNotFound(path.into())
    }

    /// Create an empty-source error
    pub fn empty_source(source: impl Into<String>) -> Self {
        Self::EmptySource(source.into())
    }

    /// Create a malformed-record error for a 1-based line number
    pub fn malformed_record(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Create a uniqueness-violation error
    pub fn uniqueness(msg: impl Into<String>) -> Self {
        Self::UniquenessViolation(msg.into())
    }

    /// Create a download error
    pub fn download(msg: impl Into<String>) -> Self {
        Self::Download(msg.into())
    }
}
