use std::io;
use thiserror::Error;
use tracing::{debug, warn};

pub type Result<T> = std::result::Result<T, FileError>;

/// Errors raised while encoding, writing, reading or decoding a container file.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Unsupported column type: {0}")]
    UnsupportedType(String),

    #[error("Compression error: {0}")]
    Compression(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

impl FileError {
    pub fn is_format(&self) -> bool {
        matches!(self, FileError::Format(_))
    }

    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, FileError::UnsupportedType(_))
    }

    /// True for short reads on a truncated file.
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, FileError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }

    pub fn log_error(&self) {
        match self {
            FileError::Io(e) => {
                warn!("I/O failure: {}", e);
                debug!("I/O error details: {:?}", e);
            }
            FileError::Format(e) => {
                warn!("Malformed file: {}", e);
            }
            FileError::UnsupportedType(e) => {
                warn!("Unsupported column type: {}", e);
            }
            FileError::Compression(e) => {
                warn!("Block codec failure: {}", e);
            }
            FileError::InvalidInput(e) => {
                warn!("Rejected input: {}", e);
            }
            FileError::UnknownColumn(e) => {
                debug!("Unknown column requested: {}", e);
            }
        }
    }
}

impl From<serde_json::Error> for FileError {
    fn from(e: serde_json::Error) -> Self {
        FileError::Format(format!("invalid JSON: {e}"))
    }
}
