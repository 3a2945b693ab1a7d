//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it matched
//! and the position of its first character. Numeric tokens also carry their
//! decoded [`Number`].

use std::fmt;

use num_bigint::BigUint;

/// The closed set of token kinds the parser consumes.
///
/// Every kind has a canonical upper-snake name (see [`TokenKind::name`]).
/// Keyword and operator kinds are reached through the classification tables
/// in [`crate::tables`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========================================================================
    // Literals
    // ========================================================================
    /// Decimal integer: `42`
    IntLiteral,
    /// Hexadecimal integer: `0x2A`
    HexLiteral,
    /// Octal integer: `0o52`, `052`
    OctLiteral,
    /// Binary integer: `0b101010`
    BinLiteral,
    /// Floating point: `4.2`, `.5`, `1e10`
    FloatLiteral,
    /// Unprefixed string: `'yo'`
    StringLiteral,
    /// Raw string: `r'yo'`
    RawStringLiteral,
    /// Unicode string: `u'yo'`
    UnicodeLiteral,
    /// Bytes string: `b'yo'`
    BytesLiteral,

    // ========================================================================
    // Names and layout
    // ========================================================================
    /// Identifier that is not a keyword
    Name,
    /// Leading whitespace run of a logical line
    Indent,
    /// Line break
    Newline,

    // ========================================================================
    // Keywords
    // ========================================================================
    /// `and`
    And,
    /// `as`
    As,
    /// `assert`
    Assert,
    /// `break`
    Break,
    /// `class`
    Class,
    /// `continue`
    Continue,
    /// `def`
    Def,
    /// `del`
    Del,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `except`
    Except,
    /// `finally`
    Finally,
    /// `for`
    For,
    /// `from`
    From,
    /// `global`
    Global,
    /// `if`
    If,
    /// `import`
    Import,
    /// `in`
    In,
    /// `is`
    Is,
    /// `lambda`
    Lambda,
    /// `nonlocal`
    Nonlocal,
    /// `not`
    Not,
    /// `or`
    Or,
    /// `pass`
    Pass,
    /// `raise`
    Raise,
    /// `return`
    Return,
    /// `try`
    Try,
    /// `while`
    While,
    /// `with`
    With,
    /// `yield`
    Yield,
    /// `True`
    True,
    /// `False`
    False,
    /// `None`
    None,

    // ========================================================================
    // Operators
    // ========================================================================
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `%`
    Mod,
    /// `**`
    Pow,
    /// `//`
    DoubleDiv,
    /// `@`
    At,
    /// `&`
    Ampersand,
    /// `|`
    Pipe,
    /// `^`
    Xor,
    /// `~`
    Tilde,
    /// `<<`
    LShift,
    /// `>>`
    RShift,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `->`
    RArrow,
    /// `=`
    Equals,
    /// `+=`
    PlusEqual,
    /// `-=`
    MinusEqual,
    /// `*=`
    TimesEqual,
    /// `/=`
    DivEqual,
    /// `%=`
    ModEqual,
    /// `**=`
    PowEqual,
    /// `//=`
    DoubleDivEqual,
    /// `@=`
    AtEqual,
    /// `&=`
    AmpersandEqual,
    /// `|=`
    PipeEqual,
    /// `^=`
    XorEqual,
    /// `<<=`
    LShiftEqual,
    /// `>>=`
    RShiftEqual,

    // ========================================================================
    // Punctuation
    // ========================================================================
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `.`
    Period,
    /// `;`
    Semi,
    /// `...`
    Ellipsis,
}

impl TokenKind {
    /// Returns the canonical name of this kind, e.g. `"INT_LITERAL"`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::HexLiteral => "HEX_LITERAL",
            TokenKind::OctLiteral => "OCT_LITERAL",
            TokenKind::BinLiteral => "BIN_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::RawStringLiteral => "RAW_STRING_LITERAL",
            TokenKind::UnicodeLiteral => "UNICODE_LITERAL",
            TokenKind::BytesLiteral => "BYTES_LITERAL",
            TokenKind::Name => "NAME",
            TokenKind::Indent => "INDENT",
            TokenKind::Newline => "NEWLINE",

            TokenKind::And => "AND",
            TokenKind::As => "AS",
            TokenKind::Assert => "ASSERT",
            TokenKind::Break => "BREAK",
            TokenKind::Class => "CLASS",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Def => "DEF",
            TokenKind::Del => "DEL",
            TokenKind::Elif => "ELIF",
            TokenKind::Else => "ELSE",
            TokenKind::Except => "EXCEPT",
            TokenKind::Finally => "FINALLY",
            TokenKind::For => "FOR",
            TokenKind::From => "FROM",
            TokenKind::Global => "GLOBAL",
            TokenKind::If => "IF",
            TokenKind::Import => "IMPORT",
            TokenKind::In => "IN",
            TokenKind::Is => "IS",
            TokenKind::Lambda => "LAMBDA",
            TokenKind::Nonlocal => "NONLOCAL",
            TokenKind::Not => "NOT",
            TokenKind::Or => "OR",
            TokenKind::Pass => "PASS",
            TokenKind::Raise => "RAISE",
            TokenKind::Return => "RETURN",
            TokenKind::Try => "TRY",
            TokenKind::While => "WHILE",
            TokenKind::With => "WITH",
            TokenKind::Yield => "YIELD",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::None => "NONE",

            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Mod => "MOD",
            TokenKind::Pow => "POW",
            TokenKind::DoubleDiv => "DOUBLEDIV",
            TokenKind::At => "AT",
            TokenKind::Ampersand => "AMPERSAND",
            TokenKind::Pipe => "PIPE",
            TokenKind::Xor => "XOR",
            TokenKind::Tilde => "TILDE",
            TokenKind::LShift => "LSHIFT",
            TokenKind::RShift => "RSHIFT",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Le => "LE",
            TokenKind::Ge => "GE",
            TokenKind::Eq => "EQ",
            TokenKind::Ne => "NE",
            TokenKind::RArrow => "RARROW",
            TokenKind::Equals => "EQUALS",
            TokenKind::PlusEqual => "PLUSEQUAL",
            TokenKind::MinusEqual => "MINUSEQUAL",
            TokenKind::TimesEqual => "TIMESEQUAL",
            TokenKind::DivEqual => "DIVEQUAL",
            TokenKind::ModEqual => "MODEQUAL",
            TokenKind::PowEqual => "POWEQUAL",
            TokenKind::DoubleDivEqual => "DOUBLEDIVEQUAL",
            TokenKind::AtEqual => "ATEQUAL",
            TokenKind::AmpersandEqual => "AMPERSANDEQUAL",
            TokenKind::PipeEqual => "PIPEEQUAL",
            TokenKind::XorEqual => "XOREQUAL",
            TokenKind::LShiftEqual => "LSHIFTEQUAL",
            TokenKind::RShiftEqual => "RSHIFTEQUAL",

            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Period => "PERIOD",
            TokenKind::Semi => "SEMI",
            TokenKind::Ellipsis => "ELLIPSIS",
        }
    }

    /// Returns true for the integer and float literal kinds.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::HexLiteral
                | TokenKind::OctLiteral
                | TokenKind::BinLiteral
                | TokenKind::FloatLiteral
        )
    }

    /// Returns true for the four string literal kinds.
    pub fn is_string(self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::RawStringLiteral
                | TokenKind::UnicodeLiteral
                | TokenKind::BytesLiteral
        )
    }

    /// Returns true if this kind comes from the keyword table.
    pub fn is_keyword(self) -> bool {
        crate::tables::KEYWORDS.iter().any(|&(_, kind)| kind == self)
    }

    /// Returns true if this kind comes from the operator table.
    pub fn is_operator(self) -> bool {
        crate::tables::OPERATORS.iter().any(|&(_, kind)| kind == self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded value of a numeric literal.
///
/// Integers have no size limit. Values that fit in 64 bits are always
/// `Int`, larger ones always `Big`, so derived equality compares values.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    /// Integer literal of any base, up to `u64::MAX`.
    Int(u64),
    /// Integer literal above `u64::MAX`.
    Big(BigUint),
    /// Floating point literal.
    Float(f64),
}

impl Number {
    /// Builds the integer variant that holds `value`.
    pub fn from_biguint(value: BigUint) -> Self {
        match u64::try_from(&value) {
            Ok(small) => Number::Int(small),
            Err(_) => Number::Big(value),
        }
    }

    /// Returns the integer value, `None` for floats.
    pub fn to_biguint(&self) -> Option<BigUint> {
        match self {
            Number::Int(value) => Some(BigUint::from(*value)),
            Number::Big(value) => Some(value.clone()),
            Number::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Big(value) => write!(f, "{}", value),
            Number::Float(value) => write!(f, "{:?}", value),
        }
    }
}

/// A token scanned from ash source.
///
/// `text` borrows the exact source slice that matched: string tokens keep
/// their prefix and delimiters, numeric tokens keep their prefix and
/// exponent markers.
///
/// Two tokens are equal when their kind, line and offset agree and either
/// their decoded numbers agree (numeric tokens) or their texts agree (every
/// other token). `0x2a` and `0x2A` are therefore equal at the same position.
#[derive(Clone, Debug)]
pub struct Token<'src> {
    /// Token class.
    pub kind: TokenKind,
    /// Raw source text of the lexeme.
    pub text: &'src str,
    /// Decoded value for numeric kinds, `None` otherwise.
    pub number: Option<Number>,
    /// Line of the first character (1-based).
    pub line: u32,
    /// Character offset of the first character (0-based, absolute).
    pub offset: usize,
}

impl<'src> Token<'src> {
    /// Length of the lexeme in characters.
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Character offset one past the last character of the lexeme.
    pub fn end_offset(&self) -> usize {
        self.offset + self.len_chars()
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.kind != other.kind || self.line != other.line || self.offset != other.offset {
            return false;
        }
        match (&self.number, &other.number) {
            (None, None) => self.text == other.text,
            (lhs, rhs) => lhs == rhs,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.number {
            Some(number) => write!(f, "{}({})", self.kind, number),
            None => write!(f, "{}({:?})", self.kind, self.text),
        }
    }
}
