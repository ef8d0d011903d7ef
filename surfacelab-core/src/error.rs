//! Error types for surfacelab

use thiserror::Error;

/// Main error type for surfacelab operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to load model: {0}")]
    Load(String),

    #[error("Unknown material kind: {0}")]
    UnknownKind(String),

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image error: {0}")]
    Image(String),
}

/// Result type alias for surfacelab operations
pub type Result<T> = std::result::Result<T, Error>;
