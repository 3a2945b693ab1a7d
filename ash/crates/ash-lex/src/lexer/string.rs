//! String literal lexing.
//!
//! Handles plain, raw (`r`), unicode (`u`) and bytes (`b`) literals, each
//! with single or tripled quote delimiters. The token text is the exact
//! source slice; escapes are skipped over, never decoded.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::is_quote;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal with an optional one-letter prefix.
    ///
    /// A backslash always consumes the character after it, so `'\''` is a
    /// single literal. Tripled delimiters may span lines.
    ///
    /// # Returns
    ///
    /// `Ok(None)` without moving when the cursor is not at a literal, or
    /// `LexError::UnterminatedString` when input ends before the closer.
    pub fn lex_string(&mut self) -> LexResult<Option<Token<'a>>> {
        let (kind, prefix_len) = match self.cursor.current_char() {
            'r' => (TokenKind::RawStringLiteral, 1),
            'u' => (TokenKind::UnicodeLiteral, 1),
            'b' => (TokenKind::BytesLiteral, 1),
            _ => (TokenKind::StringLiteral, 0),
        };

        let quote = self.cursor.peek_char(prefix_len);
        if !is_quote(quote) {
            return Ok(None);
        }
        self.cursor.advance_n(prefix_len);

        let triple = self.cursor.peek_char(1) == quote && self.cursor.peek_char(2) == quote;
        let delimiter_len = if triple { 3 } else { 1 };
        self.cursor.advance_n(delimiter_len);

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedString {
                    line: self.token_line,
                    offset: self.token_offset,
                });
            }

            match self.cursor.current_char() {
                '\\' => self.cursor.advance_n(2),
                c if c == quote && (!triple || self.at_triple(quote)) => {
                    self.cursor.advance_n(delimiter_len);
                    break;
                },
                _ => self.cursor.advance(),
            }
        }

        Ok(Some(self.make_token(kind, None)))
    }

    /// Checks for three `quote` characters at the cursor.
    fn at_triple(&self, quote: char) -> bool {
        (0..3).all(|n| self.cursor.peek_char(n) == quote)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::{Token, TokenKind};
    use crate::Lexer;

    fn lex_str(source: &str) -> Token<'_> {
        let mut lexer = Lexer::new(source);
        lexer.lex_string().unwrap().unwrap()
    }

    fn lex_str_err(source: &str) -> LexError {
        let mut lexer = Lexer::new(source);
        lexer.lex_string().unwrap_err()
    }

    #[test]
    fn test_plain_strings() {
        for source in ["'yo'", "\"yo\"", "'''yo'''", "\"\"\"yo\"\"\""] {
            let token = lex_str(source);
            assert_eq!(token.kind, TokenKind::StringLiteral);
            assert_eq!(token.text, source);
        }
    }

    #[test]
    fn test_prefixed_strings() {
        assert_eq!(lex_str("r'yo'").kind, TokenKind::RawStringLiteral);
        assert_eq!(lex_str("r\"yo\"").kind, TokenKind::RawStringLiteral);
        assert_eq!(lex_str("u'yo'").kind, TokenKind::UnicodeLiteral);
        assert_eq!(lex_str("u\"yo\"").kind, TokenKind::UnicodeLiteral);
        assert_eq!(lex_str("b'yo'").kind, TokenKind::BytesLiteral);
        assert_eq!(lex_str("b'''yo'''").text, "b'''yo'''");
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        let mut lexer = Lexer::new("R'yo'");
        assert_eq!(lexer.lex_string(), Ok(None));
        let mut lexer = Lexer::new("rb'yo'");
        assert_eq!(lexer.lex_string(), Ok(None));
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(lex_str("''").text, "''");
        assert_eq!(lex_str("''''''").text, "''''''");
        assert_eq!(lex_str("'' + x").text, "''");
    }

    #[test]
    fn test_escaped_quote_does_not_terminate() {
        assert_eq!(lex_str(r"'it\'s' x").text, r"'it\'s'");
        assert_eq!(lex_str(r"r'\'' x").text, r"r'\''");
        assert_eq!(lex_str(r"'\\' x").text, r"'\\'");
    }

    #[test]
    fn test_other_quote_inside() {
        assert_eq!(lex_str("'say \"hi\"' x").text, "'say \"hi\"'");
        assert_eq!(lex_str("'''a ' b '' c''' x").text, "'''a ' b '' c'''");
    }

    #[test]
    fn test_triple_quoted_spans_lines() {
        let mut lexer = Lexer::new("\"\"\"one\ntwo\"\"\" x");
        let token = lexer.lex_string().unwrap().unwrap();
        assert_eq!(token.text, "\"\"\"one\ntwo\"\"\"");
        assert_eq!(token.line, 1);
        assert_eq!(lexer.line(), 2);
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            lex_str_err("'yo"),
            LexError::UnterminatedString { line: 1, offset: 0 }
        );
        assert!(matches!(lex_str_err("'''yo''"), LexError::UnterminatedString { .. }));
        assert!(matches!(lex_str_err("b'yo\\'"), LexError::UnterminatedString { .. }));
        assert!(matches!(lex_str_err("'yo\\"), LexError::UnterminatedString { .. }));
    }

    #[test]
    fn test_non_ascii_body() {
        assert_eq!(lex_str("u'λx'").text, "u'λx'");
    }
}
