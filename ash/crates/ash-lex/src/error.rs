//! Error types for the scanner.
//!
//! Every error is fatal to the scan that produced it. Each variant carries
//! the line (1-based) and character offset (0-based) it refers to.

use thiserror::Error;

/// Error produced when the input cannot be tokenized.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// No recognizer matches at the cursor.
    #[error("illegal character {ch:?} at line {line}, offset {offset}")]
    IllegalCharacter {
        /// The offending character.
        ch: char,
        /// Line of the character.
        line: u32,
        /// Offset of the character.
        offset: usize,
    },

    /// A string literal was opened but never closed.
    #[error("unterminated string literal starting at line {line}, offset {offset}")]
    UnterminatedString {
        /// Line of the opening delimiter (or prefix).
        line: u32,
        /// Offset of the opening delimiter (or prefix).
        offset: usize,
    },

    /// A `0x`, `0o` or `0b` prefix is not followed by any valid digit.
    #[error("malformed numeric literal {text:?}: no digits after prefix at line {line}, offset {offset}")]
    MalformedNumericLiteral {
        /// The prefix text as scanned.
        text: String,
        /// Line of the literal.
        line: u32,
        /// Offset of the literal.
        offset: usize,
    },
}

/// Fieldless discriminant of [`LexError`], for callers that only branch on
/// the failure class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// See [`LexError::IllegalCharacter`].
    IllegalCharacter,
    /// See [`LexError::UnterminatedString`].
    UnterminatedString,
    /// See [`LexError::MalformedNumericLiteral`].
    MalformedNumericLiteral,
}

impl LexError {
    /// Returns the failure class.
    pub fn kind(&self) -> LexErrorKind {
        match self {
            LexError::IllegalCharacter { .. } => LexErrorKind::IllegalCharacter,
            LexError::UnterminatedString { .. } => LexErrorKind::UnterminatedString,
            LexError::MalformedNumericLiteral { .. } => LexErrorKind::MalformedNumericLiteral,
        }
    }

    /// Returns the line the error refers to.
    pub fn line(&self) -> u32 {
        match *self {
            LexError::IllegalCharacter { line, .. }
            | LexError::UnterminatedString { line, .. }
            | LexError::MalformedNumericLiteral { line, .. } => line,
        }
    }

    /// Returns the character offset the error refers to.
    pub fn offset(&self) -> usize {
        match *self {
            LexError::IllegalCharacter { offset, .. }
            | LexError::UnterminatedString { offset, .. }
            | LexError::MalformedNumericLiteral { offset, .. } => offset,
        }
    }
}

/// Result type alias for scanner operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
