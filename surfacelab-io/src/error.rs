//! Error types for I/O operations

use thiserror::Error;

/// Errors that can occur during I/O operations
#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid file format: {format}")]
    InvalidFormat { format: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<IoError> for surfacelab_core::Error {
    fn from(e: IoError) -> Self {
        match e {
            IoError::FileNotFound { path } => surfacelab_core::Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found: {}", path),
            )),
            IoError::InvalidFormat { format } => surfacelab_core::Error::UnsupportedFormat(format),
            IoError::ParseError { message } => surfacelab_core::Error::InvalidData(message),
            IoError::Io(e) => surfacelab_core::Error::Io(e),
        }
    }
}
