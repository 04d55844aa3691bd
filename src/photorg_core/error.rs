use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotorgError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Filesystem errors
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    // Metadata errors
    #[error("Date parsing error: {0}")]
    InvalidDateFormat(String),

    #[error("Failed to extract metadata from {path}: {reason}")]
    MetadataExtraction { path: PathBuf, reason: String },

    #[error("Date formatting error: {0}")]
    DateFormat(#[from] time::error::Format),
}

/// Result type for photorg operations.
pub type Result<T> = std::result::Result<T, PhotorgError>;
