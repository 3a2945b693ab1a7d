//! Character classification used by the recognizers.
//!
//! ash identifiers and numeric literals are ASCII only. Any other character
//! outside a string literal is an illegal character.

/// Checks if a character can start an identifier: `[a-zA-Z_]`.
///
/// # Example
///
/// ```
/// use ash_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('x'));
/// assert!(!is_ident_start('4'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier: `[a-zA-Z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a valid digit in the given base.
///
/// # Arguments
///
/// * `c` - The character to check
/// * `base` - The numeric base (2, 8, 10, or 16)
///
/// # Example
///
/// ```
/// use ash_lex::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('7', 8));
/// assert!(!is_digit_in_base('8', 8));
/// assert!(is_digit_in_base('F', 16));
/// ```
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        2 => matches!(c, '0' | '1'),
        8 => matches!(c, '0'..='7'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Checks if a character belongs to a leading indentation run.
#[inline]
pub fn is_indent_char(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

/// Checks if a character is skippable whitespace inside a line.
///
/// The newline character is not whitespace here: it is always a token.
#[inline]
pub fn is_inline_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\x0c')
}

/// Checks if a character opens or closes a string literal.
#[inline]
pub fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"')
}
