//! Error types for storage operations

use std::path::PathBuf;

/// Error type for storage operations
///
/// Only failures of a source as a whole are errors; a single unreadable or
/// malformed document is skipped during indexing.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The document root does not exist or is not a directory
    #[error("Document source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// IO error while reading the source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed at the source root
    #[error("Failed to walk document source: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;
