//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `whitespace` - Indentation, newline and whitespace handling
//! - `string` - String literal lexing
//! - `number` - Number literal lexing
//! - `identifier` - Identifier and keyword lexing
//! - `operator` - Operator and punctuation lexing

mod core;
mod identifier;
mod number;
mod operator;
mod string;
mod whitespace;

pub use core::Lexer;
