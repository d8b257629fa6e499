//! Error types for the media month sorter

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for media month sorter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the media month sorter
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read EXIF data from {path}: {message}")]
    ExifRead { path: PathBuf, message: String },

    #[error("Cannot open file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot read file metadata of {path}: {source}")]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to move {from} to {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    #[error("Entry has no usable file name: {path}")]
    InvalidFileName { path: PathBuf },

    #[error("No source directory given (use --source or a config file)")]
    MissingSource,

    #[error("Directory traversal error: {0}")]
    Enumeration(#[from] walkdir::Error),
}
