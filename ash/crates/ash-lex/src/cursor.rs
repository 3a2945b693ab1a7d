//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It keeps two positions in
//! step: the byte position used to slice the source, and the character offset
//! reported on tokens. Line numbers are tracked on every `'\n'` consumed.

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use ash_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x = 42");
///
/// assert_eq!(cursor.current_char(), 'x');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// assert_eq!(cursor.offset(), 1);
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current character offset from the start of the source (0-based).
    offset: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            offset: 0,
            line: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `n` characters ahead of the current position.
    ///
    /// Returns '\0' past the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use ash_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("r'a'");
    /// assert_eq!(cursor.peek_char(0), 'r');
    /// assert_eq!(cursor.peek_char(1), '\'');
    /// assert_eq!(cursor.peek_char(4), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, n: usize) -> char {
        let bytes = self.source.as_bytes();

        // Fast path for ASCII lookahead
        let pos = self.position + n;
        if pos < bytes.len() && bytes[self.position..=pos].is_ascii() {
            return bytes[pos] as char;
        }

        self.remaining().chars().nth(n).unwrap_or('\0')
    }

    /// Advances the cursor by one character.
    ///
    /// Updates the line counter on `'\n'`. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
        }
    }

    /// Advances the cursor by up to `count` characters.
    ///
    /// # Example
    ///
    /// ```
    /// use ash_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abcdef");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.current_char(), 'd');
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Consumes characters while `predicate` holds and returns how many
    /// characters were consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use ash_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  \tx");
    /// assert_eq!(cursor.eat_while(|c| c == ' ' || c == '\t'), 3);
    /// assert_eq!(cursor.current_char(), 'x');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use ash_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("->");
    /// assert!(cursor.match_char('-'));
    /// assert!(!cursor.match_char('-'));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current character offset (0-based, absolute).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the byte position `start` to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use ash_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("and x");
    /// let start = cursor.position();
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(start), "and");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    ///
    /// Recognizers that look ahead past characters they may not keep (an
    /// exponent marker without digits, a legacy octal run) take a snapshot
    /// and restore it when the longer form does not match.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            offset: self.offset,
            line: self.line,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.offset = snapshot.offset;
        self.line = snapshot.line;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Character offset in source.
    pub offset: usize,
    /// Line number (1-based).
    pub line: u32,
}
