//! Error types for the partitioning core

use thiserror::Error;

/// Result type alias for partition operations
pub type Result<T> = std::result::Result<T, Error>;

/// Partitioning errors
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid input to a partition call (path/stream exclusivity, bad encoding label)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Strict decode failure under an explicitly declared encoding
    #[error("Failed to decode bytes as {encoding}: malformed sequence at byte {offset}")]
    Decode { encoding: String, offset: usize },

    /// Malformed source markup
    #[error("{}", parse_display(.message, .offset))]
    Parse {
        message: String,
        offset: Option<u64>,
    },

    /// IO error (unreadable path, broken stream)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn parse_display(message: &str, offset: &Option<u64>) -> String {
    match offset {
        Some(offset) => format!("Failed to parse document: {message} at byte {offset}"),
        None => format!("Failed to parse document: {message}"),
    }
}

impl Error {
    /// Create an input-validation error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a decode error at a byte offset
    pub fn decode(encoding: impl Into<String>, offset: usize) -> Self {
        Self::Decode {
            encoding: encoding.into(),
            offset,
        }
    }

    /// Create a parse error with an optional byte offset
    pub fn parse(message: impl Into<String>, offset: Option<u64>) -> Self {
        Self::Parse {
            message: message.into(),
            offset,
        }
    }
}
