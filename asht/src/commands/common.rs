//! Common types and utilities for asht commands.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{AshtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line
    Table,
    /// JSON array of token records
    Json,
}

impl FromStr for OutputFormat {
    type Err = AshtError;

    /// Parses a format name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(AshtError::Validation(format!(
                "{}: {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Reads a whole source file, or standard input for `-`.
///
/// # Returns
/// * `Result<(PathBuf, String)>` - The display path and the file contents
pub fn read_source(path: &Path) -> Result<(PathBuf, String)> {
    if path == Path::new(STDIN_PATH) {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok((PathBuf::from("<stdin>"), source));
    }

    if !path.is_file() {
        return Err(AshtError::FileOperation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let source = std::fs::read_to_string(path).map_err(|e| {
        AshtError::FileOperation(format!("{}: {}", path.display(), e))
    })?;
    Ok((path.to_path_buf(), source))
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path is not a readable file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Error when an unknown output format is requested.
    pub const UNKNOWN_FORMAT: &str = "Unknown format";

    /// Error when the job count is zero.
    pub const ZERO_JOBS: &str = "Number of jobs must be at least 1";

    /// Error when files failed to scan.
    pub const FILES_FAILED: &str = "file(s) failed to scan";
}
