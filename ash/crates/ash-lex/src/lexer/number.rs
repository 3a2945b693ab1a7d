//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.

use num_bigint::BigUint;

use crate::error::{LexError, LexResult};
use crate::token::{Number, Token, TokenKind};
use crate::unicode::is_digit_in_base;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Forms are tried most specific first, so `0x42` is never read as a
    /// decimal `0` followed by a name:
    ///
    /// 1. Hexadecimal: `0x2A`
    /// 2. Octal: `0o52`
    /// 3. Legacy octal: `052` (not followed by `.`, an exponent or a digit)
    /// 4. Binary: `0b101010`
    /// 5. Float: `4.2`, `.5`, `5.`, `1e10`, `0.5e-42`
    /// 6. Decimal: `42`
    ///
    /// # Returns
    ///
    /// `Ok(None)` without moving when the cursor is not at a number.
    pub fn lex_number(&mut self) -> LexResult<Option<Token<'a>>> {
        let c = self.cursor.current_char();
        let starts_fraction = c == '.' && self.cursor.peek_char(1).is_ascii_digit();
        if !c.is_ascii_digit() && !starts_fraction {
            return Ok(None);
        }

        if c == '0' {
            match self.cursor.peek_char(1) {
                'x' | 'X' => return self.lex_prefixed(16, TokenKind::HexLiteral).map(Some),
                'o' | 'O' => return self.lex_prefixed(8, TokenKind::OctLiteral).map(Some),
                _ => {},
            }
            if let Some(token) = self.lex_legacy_octal()? {
                return Ok(Some(token));
            }
            if matches!(self.cursor.peek_char(1), 'b' | 'B') {
                return self.lex_prefixed(2, TokenKind::BinLiteral).map(Some);
            }
        }

        self.lex_decimal().map(Some)
    }

    /// Lexes an integer with a two-character base prefix.
    ///
    /// # Arguments
    ///
    /// * `base` - The numeric base (2, 8, or 16)
    /// * `kind` - The token kind to produce
    fn lex_prefixed(&mut self, base: u32, kind: TokenKind) -> LexResult<Token<'a>> {
        self.cursor.advance_n(2);

        let digit_start = self.cursor.position();
        if self.cursor.eat_while(|c| is_digit_in_base(c, base)) == 0 {
            return Err(LexError::MalformedNumericLiteral {
                text: self.cursor.slice_from(self.token_start).to_string(),
                line: self.token_line,
                offset: self.token_offset,
            });
        }

        let value = self.parse_integer(self.cursor.slice_from(digit_start), base)?;
        Ok(self.make_token(kind, Some(value)))
    }

    /// Lexes a leading-zero octal literal such as `042`.
    ///
    /// Backs off when the run continues as a decimal or float literal
    /// (`09`, `042.5`, `01e3`).
    fn lex_legacy_octal(&mut self) -> LexResult<Option<Token<'a>>> {
        let snapshot = self.cursor.snapshot();
        self.cursor.advance();

        let digit_start = self.cursor.position();
        let count = self.cursor.eat_while(|c| is_digit_in_base(c, 8));
        let next = self.cursor.current_char();
        if count == 0 || next.is_ascii_digit() || matches!(next, '.' | 'e' | 'E') {
            self.cursor.restore(snapshot);
            return Ok(None);
        }

        let value = self.parse_integer(self.cursor.slice_from(digit_start), 8)?;
        Ok(Some(self.make_token(TokenKind::OctLiteral, Some(value))))
    }

    /// Lexes a decimal integer or a float.
    fn lex_decimal(&mut self) -> LexResult<Token<'a>> {
        let int_digits = self.cursor.eat_while(|c| c.is_ascii_digit());
        let mut is_float = false;

        // A point belongs to the literal when digits sit on at least one side
        if self.cursor.current_char() == '.'
            && (int_digits > 0 || self.cursor.peek_char(1).is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
            is_float = true;
        }

        if self.lex_exponent() {
            is_float = true;
        }

        let text = self.cursor.slice_from(self.token_start);
        if is_float {
            let value = text.parse::<f64>().map_err(|_| LexError::MalformedNumericLiteral {
                text: text.to_string(),
                line: self.token_line,
                offset: self.token_offset,
            })?;
            Ok(self.make_token(TokenKind::FloatLiteral, Some(Number::Float(value))))
        } else {
            let value = self.parse_integer(text, 10)?;
            Ok(self.make_token(TokenKind::IntLiteral, Some(value)))
        }
    }

    /// Consumes an exponent (`e`, optional sign, digits) if one is present.
    ///
    /// An `e` without digits is left for the next recognizer: `1else` is an
    /// integer followed by a name.
    fn lex_exponent(&mut self) -> bool {
        if !matches!(self.cursor.current_char(), 'e' | 'E') {
            return false;
        }

        let snapshot = self.cursor.snapshot();
        self.cursor.advance();
        if matches!(self.cursor.current_char(), '+' | '-') {
            self.cursor.advance();
        }
        if self.cursor.eat_while(|c| c.is_ascii_digit()) == 0 {
            self.cursor.restore(snapshot);
            return false;
        }
        true
    }

    /// Decodes already validated digits. Integers have no size limit.
    fn parse_integer(&self, digits: &str, base: u32) -> LexResult<Number> {
        if let Ok(value) = u64::from_str_radix(digits, base) {
            return Ok(Number::Int(value));
        }
        BigUint::parse_bytes(digits.as_bytes(), base)
            .map(Number::from_biguint)
            .ok_or_else(|| LexError::MalformedNumericLiteral {
                text: self.cursor.slice_from(self.token_start).to_string(),
                line: self.token_line,
                offset: self.token_offset,
            })
    }
}
