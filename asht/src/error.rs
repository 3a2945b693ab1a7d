//! Error handling module for the asht CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use ash_lex::LexError;
use thiserror::Error;

/// Main error type for the asht CLI application.
#[derive(Error, Debug)]
pub enum AshtError {
    /// Error when a configuration file is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a source file cannot be tokenized.
    #[error("{}: {source}", path.display())]
    Lex {
        /// The file being scanned.
        path: PathBuf,
        /// The scanner failure.
        source: LexError,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using AshtError.
pub type Result<T> = std::result::Result<T, AshtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = AshtError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = AshtError::FileOperation("permission denied".to_string());
        assert_eq!(err.to_string(), "File operation failed: permission denied");
    }

    #[test]
    fn test_validation_error_display() {
        let err = AshtError::Validation("no input files".to_string());
        assert_eq!(err.to_string(), "Validation error: no input files");
    }

    #[test]
    fn test_lex_error_display() {
        let err = AshtError::Lex {
            path: PathBuf::from("demo.ash"),
            source: LexError::UnterminatedString { line: 3, offset: 17 },
        };
        assert_eq!(
            err.to_string(),
            "demo.ash: unterminated string literal starting at line 3, offset 17"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let asht_err: AshtError = io_err.into();
        assert!(matches!(asht_err, AshtError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let asht_err: AshtError = json_err.into();
        assert!(matches!(asht_err, AshtError::Json(_)));
    }
}
