//! Error types for the gsdb CLI
//!
//! Core errors pass through with their own messages; the variants here are
//! the failures only the CLI itself can produce.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Populate would write into a store that already holds pathways
    #[error("Store already contains {pathways} pathway(s). Re-run with --delete-first to replace them, or point --connection at an empty database.")]
    StoreNotEmpty { pathways: usize },

    /// Core library operation failed
    #[error(transparent)]
    Core(#[from] gsdb_core::Error),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),
}
