//! Command modules for the asht CLI.
//!
//! Each subcommand is implemented in its own file and implements
//! [`traits::Command`].

pub mod common;
pub mod traits;

pub mod check;
pub mod tokens;

// Re-export command types
pub use check::{CheckArgs, CheckCommand};
pub use tokens::{TokensArgs, TokensCommand};
