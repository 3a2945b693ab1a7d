//! Lexeme classification tables.
//!
//! Keywords and operators are plain `(text, kind)` tables. Adding a keyword
//! or an operator means adding a [`TokenKind`] variant and a row here; the
//! scanning algorithm reads only the tables.
//!
//! Hashed lookups are built once on first use and never mutated, so any
//! number of lexers may read them concurrently.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::token::TokenKind;

/// Reserved words.
pub static KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("as", TokenKind::As),
    ("assert", TokenKind::Assert),
    ("break", TokenKind::Break),
    ("class", TokenKind::Class),
    ("continue", TokenKind::Continue),
    ("def", TokenKind::Def),
    ("del", TokenKind::Del),
    ("elif", TokenKind::Elif),
    ("else", TokenKind::Else),
    ("except", TokenKind::Except),
    ("finally", TokenKind::Finally),
    ("for", TokenKind::For),
    ("from", TokenKind::From),
    ("global", TokenKind::Global),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("in", TokenKind::In),
    ("is", TokenKind::Is),
    ("lambda", TokenKind::Lambda),
    ("nonlocal", TokenKind::Nonlocal),
    ("not", TokenKind::Not),
    ("or", TokenKind::Or),
    ("pass", TokenKind::Pass),
    ("raise", TokenKind::Raise),
    ("return", TokenKind::Return),
    ("try", TokenKind::Try),
    ("while", TokenKind::While),
    ("with", TokenKind::With),
    ("yield", TokenKind::Yield),
    ("True", TokenKind::True),
    ("False", TokenKind::False),
    ("None", TokenKind::None),
];

/// Operators and punctuation, longest patterns first.
///
/// Lookup does not depend on the row order (it looks up by length), but
/// keeping the table sorted makes the maximal-munch rule visible.
pub static OPERATORS: &[(&str, TokenKind)] = &[
    // Three characters
    ("**=", TokenKind::PowEqual),
    ("//=", TokenKind::DoubleDivEqual),
    (">>=", TokenKind::RShiftEqual),
    ("<<=", TokenKind::LShiftEqual),
    ("...", TokenKind::Ellipsis),
    // Two characters
    ("**", TokenKind::Pow),
    ("//", TokenKind::DoubleDiv),
    ("<<", TokenKind::LShift),
    (">>", TokenKind::RShift),
    ("<=", TokenKind::Le),
    (">=", TokenKind::Ge),
    ("==", TokenKind::Eq),
    ("!=", TokenKind::Ne),
    ("->", TokenKind::RArrow),
    ("+=", TokenKind::PlusEqual),
    ("-=", TokenKind::MinusEqual),
    ("*=", TokenKind::TimesEqual),
    ("/=", TokenKind::DivEqual),
    ("%=", TokenKind::ModEqual),
    ("&=", TokenKind::AmpersandEqual),
    ("|=", TokenKind::PipeEqual),
    ("^=", TokenKind::XorEqual),
    ("@=", TokenKind::AtEqual),
    // One character
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Times),
    ("/", TokenKind::Divide),
    ("%", TokenKind::Mod),
    ("@", TokenKind::At),
    ("&", TokenKind::Ampersand),
    ("|", TokenKind::Pipe),
    ("^", TokenKind::Xor),
    ("~", TokenKind::Tilde),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("=", TokenKind::Equals),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("[", TokenKind::LBracket),
    ("]", TokenKind::RBracket),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    (",", TokenKind::Comma),
    (":", TokenKind::Colon),
    (".", TokenKind::Period),
    (";", TokenKind::Semi),
];

static KEYWORD_MAP: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

static OPERATOR_MAP: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| OPERATORS.iter().copied().collect());

/// Length in bytes of the longest operator pattern.
static MAX_OPERATOR_LEN: LazyLock<usize> =
    LazyLock::new(|| OPERATORS.iter().map(|(text, _)| text.len()).max().unwrap_or(0));

/// Looks up a keyword by its exact (case-sensitive) text.
///
/// # Example
///
/// ```
/// use ash_lex::tables::keyword_kind;
/// use ash_lex::TokenKind;
///
/// assert_eq!(keyword_kind("and"), Some(TokenKind::And));
/// assert_eq!(keyword_kind("AND"), None);
/// ```
pub fn keyword_kind(text: &str) -> Option<TokenKind> {
    KEYWORD_MAP.get(text).copied()
}

/// Finds the longest operator that prefixes `rest`.
///
/// Returns the matched length in bytes and the operator's kind.
///
/// # Example
///
/// ```
/// use ash_lex::tables::longest_operator;
/// use ash_lex::TokenKind;
///
/// assert_eq!(longest_operator("**=2"), Some((3, TokenKind::PowEqual)));
/// assert_eq!(longest_operator("*2"), Some((1, TokenKind::Times)));
/// assert_eq!(longest_operator("$"), None);
/// ```
pub fn longest_operator(rest: &str) -> Option<(usize, TokenKind)> {
    (1..=*MAX_OPERATOR_LEN).rev().find_map(|len| {
        // `get` refuses lengths that split a multi-byte character
        let candidate = rest.get(..len)?;
        OPERATOR_MAP.get(candidate).map(|&kind| (len, kind))
    })
}
