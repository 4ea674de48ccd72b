//! Error types for wordgraph
//!
//! Graph queries never fail: absent words and unreachable targets are
//! reported through their result types. The errors here cover the edges
//! of the system (reading input, loading configuration).

use std::path::Path;
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordGraphError>;

/// Main error type for wordgraph
#[derive(Error, Debug, Clone)]
pub enum WordGraphError {
    /// The input source could not be read
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// The input contains too few words to form a single edge
    #[error("Insufficient input: {message}")]
    InsufficientInput { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl WordGraphError {
    /// Create an I/O error for the given path
    pub fn io(path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    /// Create an insufficient input error
    pub fn insufficient_input(message: impl Into<String>) -> Self {
        Self::InsufficientInput {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error came from reading the input source
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<serde_json::Error> for WordGraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WordGraphError::insufficient_input("need at least two words");
        assert!(err.to_string().contains("Insufficient input"));
        assert!(err.to_string().contains("need at least two words"));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = WordGraphError::io("corpus.txt", &io);
        assert!(err.to_string().contains("corpus.txt"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_is_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(WordGraphError::io("x", &io).is_io());
        assert!(!WordGraphError::invalid_config("bad").is_io());
    }

    #[test]
    fn test_from_serde_json() {
        let err: WordGraphError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, WordGraphError::Serialization { .. }));
    }
}
