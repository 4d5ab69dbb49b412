//! Error types for board loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type for board loading
pub type Result<T> = std::result::Result<T, LoadError>;

/// Why a board could not be loaded
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request never got a response
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Http { status: u16, message: String },

    /// No board with this id exists
    #[error("Board not found: {board}")]
    NotFound { board: String },

    /// The payload is not a board
    #[error("Failed to decode board from {origin}: {message}")]
    Decode { origin: String, message: String },

    /// A board file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Create a decode error
    pub fn decode(origin: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            origin: origin.into(),
            message: message.to_string(),
        }
    }

    /// Create a not-found error
    pub fn not_found(board: impl ToString) -> Self {
        Self::NotFound {
            board: board.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            LoadError::not_found("b1").to_string(),
            "Board not found: b1"
        );
        let err = LoadError::Http {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "API error (500): boom");
    }
}
