//! Error types for STL I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing or reading STL.
#[derive(Error, Debug)]
pub enum StlError {
    /// I/O error from the underlying writer or file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Finished temp file could not be moved over the destination.
    #[error("failed to publish {path}: {source}")]
    Persist {
        /// Destination path.
        path: PathBuf,
        /// Underlying rename error.
        source: std::io::Error,
    },

    /// Solid name would break the line-oriented format.
    #[error("solid name must be a single line, got {0:?}")]
    InvalidName(String),

    /// Malformed ASCII STL.
    #[error("invalid STL at line {line}: {message}")]
    InvalidContent {
        /// 1-based line number.
        line: usize,
        /// Description of what was invalid.
        message: String,
    },

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}

impl StlError {
    /// Create an `InvalidContent` error.
    pub fn invalid_content(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            line,
            message: message.into(),
        }
    }
}

/// Result type for STL operations.
pub type Result<T> = std::result::Result<T, StlError>;
