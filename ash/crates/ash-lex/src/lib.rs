//! ash-lex - Lexical Scanner for the ash Scripting Language
//!
//! This crate turns ash source text into an ordered stream of typed tokens
//! for the parser. Every token keeps the exact source text it matched, the
//! line of its first character and its absolute character offset.
//!
//! # Example Usage
//!
//! ```
//! use ash_lex::{tokenize, Lexer, Number, TokenKind};
//!
//! // Pull tokens one at a time
//! let mut lexer = Lexer::new("x = 0x2A");
//! let x = lexer.next_token().unwrap().unwrap();
//! assert_eq!((x.kind, x.text, x.line, x.offset), (TokenKind::Name, "x", 1, 0));
//!
//! // Or collect a whole input
//! let tokens = tokenize("x = 0x2A").unwrap();
//! assert_eq!(tokens[2].kind, TokenKind::HexLiteral);
//! assert_eq!(tokens[2].number, Some(Number::Int(42)));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and token values
//! - [`tables`] - Keyword and operator classification tables
//! - [`lexer`] - Scanner loop and recognizers
//! - [`cursor`] - Character cursor with line/offset tracking
//! - [`unicode`] - Character classes
//! - [`error`] - Scanner errors
//!
//! # Recognizer Precedence
//!
//! At the start of a logical line a run of spaces and tabs becomes an
//! `INDENT` token. Otherwise recognizers are tried in this order and the
//! first match wins:
//!
//! 1. newline (`NEWLINE`)
//! 2. whitespace (skipped, no token)
//! 3. string literal, optionally prefixed with `r`, `u` or `b`
//! 4. numeric literal (hex, octal, legacy octal, binary, float, decimal)
//! 5. keyword or name
//! 6. operator or punctuation, longest match first
//!
//! Anything else is a [`LexError::IllegalCharacter`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod tables;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, LexResult};
pub use lexer::Lexer;
pub use tables::{keyword_kind, longest_operator};
pub use token::{Number, Token, TokenKind};

/// Scans `source` to the end and collects every token.
///
/// Stops at the first error.
///
/// # Example
///
/// ```
/// use ash_lex::{tokenize, LexErrorKind};
///
/// assert_eq!(tokenize("a and b").unwrap().len(), 3);
/// assert_eq!(tokenize("a ? b").unwrap_err().kind(), LexErrorKind::IllegalCharacter);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token<'_>>> {
    Lexer::new(source).collect()
}
