//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use crate::tables::keyword_kind;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_ident_continue, is_ident_start};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by
    /// alphanumeric characters or underscores. After reading the identifier,
    /// checks if it matches a reserved keyword.
    ///
    /// # Returns
    ///
    /// Either a keyword token (e.g., `TokenKind::And`) or a `TokenKind::Name`
    /// token, or `None` when the cursor is not at an identifier.
    pub fn lex_identifier(&mut self) -> Option<Token<'a>> {
        if !is_ident_start(self.cursor.current_char()) {
            return None;
        }
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_kind(text).unwrap_or(TokenKind::Name);
        Some(self.make_token(kind, None))
    }
}
