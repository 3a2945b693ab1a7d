//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the dispatch loop that
//! tries the recognizers in their fixed precedence order.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Number, Token, TokenKind};

/// Lexer for the ash scripting language.
///
/// A lexer owns one scanning session over one input. It is a lazy,
/// single-pass token source: once it reports end of input or an error it
/// yields nothing more, and scanning the same text again needs a new lexer.
///
/// # Example
///
/// ```
/// use ash_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x = 42");
///
/// let name = lexer.next_token().unwrap().unwrap();
/// assert_eq!(name.kind, TokenKind::Name);
/// assert_eq!(name.text, "x");
///
/// let kinds: Vec<TokenKind> = lexer.map(|token| token.unwrap().kind).collect();
/// assert_eq!(kinds, [TokenKind::Equals, TokenKind::IntLiteral]);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte position where the current token starts.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    pub(crate) token_line: u32,

    /// Character offset where the current token starts.
    pub(crate) token_offset: usize,

    /// True at the start of input and right after a NEWLINE token.
    at_line_start: bool,

    /// Set once end of input or an error has been reported.
    finished: bool,

    /// Number of tokens produced so far.
    emitted: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_line: 1,
            token_offset: 0,
            at_line_start: true,
            finished: false,
            emitted: 0,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// `Ok(None)` marks the end of input. After the end, or after an error,
    /// every further call returns `Ok(None)`.
    pub fn next_token(&mut self) -> LexResult<Option<Token<'a>>> {
        if self.finished {
            return Ok(None);
        }

        match self.scan() {
            Ok(Some(token)) => {
                self.emitted += 1;
                trace!(
                    kind = %token.kind,
                    line = token.line,
                    offset = token.offset,
                    "token"
                );
                Ok(Some(token))
            },
            Ok(None) => {
                self.finished = true;
                debug!(tokens = self.emitted, lines = self.cursor.line(), "scan complete");
                Ok(None)
            },
            Err(err) => {
                self.finished = true;
                debug!(tokens = self.emitted, error = %err, "scan aborted");
                Err(err)
            },
        }
    }

    /// Runs one step of the scanner loop.
    ///
    /// Precedence: indentation (line start only), newline, whitespace,
    /// string, number, keyword or name, operator. The first recognizer that
    /// matches wins.
    fn scan(&mut self) -> LexResult<Option<Token<'a>>> {
        loop {
            self.begin_token();

            if self.cursor.is_at_end() {
                return Ok(None);
            }

            if self.at_line_start {
                if self.skip_line_start_whitespace() {
                    continue;
                }
                if let Some(indent) = self.lex_indent() {
                    self.at_line_start = false;
                    return Ok(Some(indent));
                }
            }

            if let Some(newline) = self.lex_newline() {
                self.at_line_start = true;
                return Ok(Some(newline));
            }

            if self.skip_whitespace() {
                continue;
            }

            let token = if let Some(token) = self.lex_string()? {
                token
            } else if let Some(token) = self.lex_number()? {
                token
            } else if let Some(token) = self.lex_identifier() {
                token
            } else if let Some(token) = self.lex_operator() {
                token
            } else {
                return Err(self.illegal_character());
            };

            self.at_line_start = false;
            return Ok(Some(token));
        }
    }

    /// Records the cursor position as the start of the next token.
    fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_line = self.cursor.line();
        self.token_offset = self.cursor.offset();
    }

    /// Builds a token spanning from the token start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind, number: Option<Number>) -> Token<'a> {
        Token {
            kind,
            text: self.cursor.slice_from(self.token_start),
            number,
            line: self.token_line,
            offset: self.token_offset,
        }
    }

    fn illegal_character(&self) -> LexError {
        LexError::IllegalCharacter {
            ch: self.cursor.current_char(),
            line: self.cursor.line(),
            offset: self.cursor.offset(),
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current character offset.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Returns true when the next token starts a logical line.
    pub fn is_at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Returns the source being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl FusedIterator for Lexer<'_> {}
