//! Indentation, newline and whitespace handling.
//!
//! Leading whitespace of a logical line is a token (`INDENT`); whitespace
//! anywhere else is skipped but still advances the offset of later tokens.

use crate::token::{Token, TokenKind};
use crate::unicode::{is_indent_char, is_inline_whitespace};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the leading space/tab run of a logical line.
    ///
    /// Returns `None` without moving when the line does not start with
    /// indentation.
    pub(crate) fn lex_indent(&mut self) -> Option<Token<'a>> {
        if self.cursor.eat_while(is_indent_char) == 0 {
            return None;
        }
        Some(self.make_token(TokenKind::Indent, None))
    }

    /// Lexes a line break.
    pub(crate) fn lex_newline(&mut self) -> Option<Token<'a>> {
        if !self.cursor.match_char('\n') {
            return None;
        }
        Some(self.make_token(TokenKind::Newline, None))
    }

    /// Skips a run of inline whitespace. Returns true if anything was skipped.
    pub(crate) fn skip_whitespace(&mut self) -> bool {
        self.cursor.eat_while(is_inline_whitespace) > 0
    }

    /// Skips form feeds and carriage returns before a line's indentation,
    /// leaving spaces and tabs for [`Lexer::lex_indent`].
    pub(crate) fn skip_line_start_whitespace(&mut self) -> bool {
        self.cursor
            .eat_while(|c| is_inline_whitespace(c) && !is_indent_char(c))
            > 0
    }
}
