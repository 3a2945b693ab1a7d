//! Operator and punctuation lexing.
//!
//! Operators are matched against [`crate::tables::OPERATORS`] by maximal
//! munch, so `**=` is never split into `**` and `=`.

use crate::tables::longest_operator;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the longest operator or punctuation symbol at the cursor.
    ///
    /// # Returns
    ///
    /// The operator token, or `None` when no table entry matches.
    pub fn lex_operator(&mut self) -> Option<Token<'a>> {
        let (len, kind) = longest_operator(self.cursor.remaining())?;
        // Operator patterns are ASCII: byte length equals character count
        self.cursor.advance_n(len);
        Some(self.make_token(kind, None))
    }
}
