//! Scanner integration tests.
//!
//! Each test compares the scanned sequence against `(kind, value, line,
//! offset)` tuples, where `value` is the decoded number for numeric tokens
//! and the raw text otherwise.

use ash_lex::{tokenize, LexError, Lexer, Number, Token, TokenKind};
use num_bigint::BigUint;
use proptest::prelude::*;

#[derive(Debug, PartialEq)]
enum Value {
    Int(BigUint),
    Float(f64),
    Text(String),
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Int(BigUint::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

fn observe(token: &Token<'_>) -> (TokenKind, Value, u32, usize) {
    let value = match &token.number {
        Some(Number::Float(value)) => Value::Float(*value),
        Some(number) => Value::Int(number.to_biguint().unwrap()),
        None => Value::Text(token.text.to_string()),
    };
    (token.kind, value, token.line, token.offset)
}

fn check_tokens(input: &str, expected: Vec<(TokenKind, Value, u32, usize)>) {
    let observed: Vec<_> = tokenize(input)
        .unwrap_or_else(|err| panic!("scan of {:?} failed: {}", input, err))
        .iter()
        .map(observe)
        .collect();
    assert_eq!(observed, expected, "input: {:?}", input);
}

fn check_token(input: &str, kind: TokenKind, value: impl Into<Value>) {
    check_tokens(input, vec![(kind, value.into(), 1, 0)]);
}

// ============================================================================
// Numeric literals
// ============================================================================

#[test]
fn test_int_literal() {
    check_token("42", TokenKind::IntLiteral, 42u64);
}

#[test]
fn test_hex_literal() {
    check_token("0x42", TokenKind::HexLiteral, 0x42u64);
}

#[test]
fn test_oct_o_literal() {
    check_token("0o42", TokenKind::OctLiteral, 0o42u64);
}

#[test]
fn test_oct_no_o_literal() {
    check_token("042", TokenKind::OctLiteral, 34u64);
}

#[test]
fn test_bin_literal() {
    check_token("0b101010", TokenKind::BinLiteral, 0b101010u64);
}

#[test]
fn test_float_literals() {
    for input in ["0.0", ".0", "0.", "1e10", "1.e42", "0.1e42", "0.5e-42", "5E10", "5e+42"] {
        let expected: f64 = input.parse().unwrap();
        check_token(input, TokenKind::FloatLiteral, expected);
    }
}

fn big(digits: &str, base: u32) -> Value {
    Value::Int(BigUint::parse_bytes(digits.as_bytes(), base).unwrap())
}

#[test]
fn test_thirty_digit_literals() {
    check_token(
        "123456789012345678901234567890",
        TokenKind::IntLiteral,
        big("123456789012345678901234567890", 10),
    );
    check_token(
        "0xfedcba9876543210fedcba98765432",
        TokenKind::HexLiteral,
        big("fedcba9876543210fedcba98765432", 16),
    );
    check_token(
        "0o765432107654321076543210765432",
        TokenKind::OctLiteral,
        big("765432107654321076543210765432", 8),
    );
    check_token(
        "0765432107654321076543210765432",
        TokenKind::OctLiteral,
        big("765432107654321076543210765432", 8),
    );
    check_token(
        "0b101010101010101010101010101010101010101010101010101010101010101010101010",
        TokenKind::BinLiteral,
        big("101010101010101010101010101010101010101010101010101010101010101010101010", 2),
    );
}

#[test]
fn test_large_literal_inside_expression() {
    check_tokens(
        "x = 99999999999999999999999 + 1",
        vec![
            (TokenKind::Name, "x".into(), 1, 0),
            (TokenKind::Equals, "=".into(), 1, 2),
            (TokenKind::IntLiteral, big("99999999999999999999999", 10), 1, 4),
            (TokenKind::Plus, "+".into(), 1, 28),
            (TokenKind::IntLiteral, 1u64.into(), 1, 30),
        ],
    );
}

#[test]
fn test_numeric_equality_ignores_spelling() {
    let lower = tokenize("0xff").unwrap();
    let upper = tokenize("0XFF").unwrap();
    assert_eq!(lower, upper);
}

// ============================================================================
// Whitespace and positions
// ============================================================================

#[test]
fn test_indent() {
    check_tokens(
        "  \t  42",
        vec![
            (TokenKind::Indent, "  \t  ".into(), 1, 0),
            (TokenKind::IntLiteral, 42u64.into(), 1, 5),
        ],
    );
}

#[test]
fn test_post_whitespace() {
    check_tokens("42  \t  ", vec![(TokenKind::IntLiteral, 42u64.into(), 1, 0)]);
}

#[test]
fn test_internal_whitespace() {
    check_tokens(
        "42  +\t65",
        vec![
            (TokenKind::IntLiteral, 42u64.into(), 1, 0),
            (TokenKind::Plus, "+".into(), 1, 4),
            (TokenKind::IntLiteral, 65u64.into(), 1, 6),
        ],
    );
}

#[test]
fn test_indent_internal_whitespace() {
    check_tokens(
        " 42  +\t65",
        vec![
            (TokenKind::Indent, " ".into(), 1, 0),
            (TokenKind::IntLiteral, 42u64.into(), 1, 1),
            (TokenKind::Plus, "+".into(), 1, 5),
            (TokenKind::IntLiteral, 65u64.into(), 1, 7),
        ],
    );
}

#[test]
fn test_assignment() {
    check_tokens(
        "x = 42",
        vec![
            (TokenKind::Name, "x".into(), 1, 0),
            (TokenKind::Equals, "=".into(), 1, 2),
            (TokenKind::IntLiteral, 42u64.into(), 1, 4),
        ],
    );
}

#[test]
fn test_multiline() {
    check_tokens(
        "x\ny",
        vec![
            (TokenKind::Name, "x".into(), 1, 0),
            (TokenKind::Newline, "\n".into(), 1, 1),
            (TokenKind::Name, "y".into(), 2, 2),
        ],
    );
}

#[test]
fn test_indented_block() {
    check_tokens(
        "while x:\n    x -= 1\n",
        vec![
            (TokenKind::While, "while".into(), 1, 0),
            (TokenKind::Name, "x".into(), 1, 6),
            (TokenKind::Colon, ":".into(), 1, 7),
            (TokenKind::Newline, "\n".into(), 1, 8),
            (TokenKind::Indent, "    ".into(), 2, 9),
            (TokenKind::Name, "x".into(), 2, 13),
            (TokenKind::MinusEqual, "-=".into(), 2, 15),
            (TokenKind::IntLiteral, 1u64.into(), 2, 18),
            (TokenKind::Newline, "\n".into(), 2, 19),
        ],
    );
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_and() {
    check_token("and", TokenKind::And, "and");
}

// ============================================================================
// String literals
// ============================================================================

#[test]
fn test_single_quote_literal() {
    check_token("'yo'", TokenKind::StringLiteral, "'yo'");
}

#[test]
fn test_double_quote_literal() {
    check_token("\"yo\"", TokenKind::StringLiteral, "\"yo\"");
}

#[test]
fn test_triple_single_quote_literal() {
    check_token("'''yo'''", TokenKind::StringLiteral, "'''yo'''");
}

#[test]
fn test_triple_double_quote_literal() {
    check_token("\"\"\"yo\"\"\"", TokenKind::StringLiteral, "\"\"\"yo\"\"\"");
}

#[test]
fn test_single_raw_string_literal() {
    check_token("r'yo'", TokenKind::RawStringLiteral, "r'yo'");
}

#[test]
fn test_double_raw_string_literal() {
    check_token("r\"yo\"", TokenKind::RawStringLiteral, "r\"yo\"");
}

#[test]
fn test_single_unicode_literal() {
    check_token("u'yo'", TokenKind::UnicodeLiteral, "u'yo'");
}

#[test]
fn test_double_unicode_literal() {
    check_token("u\"yo\"", TokenKind::UnicodeLiteral, "u\"yo\"");
}

#[test]
fn test_single_bytes_literal() {
    check_token("b'yo'", TokenKind::BytesLiteral, "b'yo'");
}

#[test]
fn test_double_bytes_literal() {
    check_token("b\"yo\"", TokenKind::BytesLiteral, "b\"yo\"");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_illegal_character() {
    let mut lexer = Lexer::new("x\n  y ? z");
    let mut seen = Vec::new();
    let err = loop {
        match lexer.next_token() {
            Ok(Some(token)) => seen.push(token.kind),
            Ok(None) => panic!("scan should fail"),
            Err(err) => break err,
        }
    };
    assert_eq!(
        err,
        LexError::IllegalCharacter {
            ch: '?',
            line: 2,
            offset: 6,
        }
    );
    assert_eq!(
        seen,
        [TokenKind::Name, TokenKind::Newline, TokenKind::Indent, TokenKind::Name]
    );
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        tokenize("  u\"yo").unwrap_err(),
        LexError::UnterminatedString { line: 1, offset: 2 }
    );
}

#[test]
fn test_malformed_numeric_literals() {
    for input in ["0x", "0o", "0b", "x = 0xz"] {
        assert!(
            matches!(tokenize(input), Err(LexError::MalformedNumericLiteral { .. })),
            "{}",
            input
        );
    }
}

// ============================================================================
// Properties
// ============================================================================

/// Rebuilds the input from token texts, filling gaps from the source.
///
/// Returns the rebuilt text and whether every gap was whitespace.
fn reconstruct(source: &str, tokens: &[Token<'_>]) -> (String, bool) {
    let chars: Vec<char> = source.chars().collect();
    let mut rebuilt = String::new();
    let mut cursor = 0;
    let mut gaps_are_whitespace = true;
    for token in tokens {
        let gap: String = chars[cursor..token.offset].iter().collect();
        gaps_are_whitespace &= gap.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\x0c'));
        rebuilt.push_str(&gap);
        rebuilt.push_str(token.text);
        cursor = token.end_offset();
    }
    let tail: String = chars[cursor..].iter().collect();
    gaps_are_whitespace &= tail.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\x0c'));
    rebuilt.push_str(&tail);
    (rebuilt, gaps_are_whitespace)
}

#[test]
fn test_reconstruction_of_program() {
    let source = "def f(x):\n\treturn x ** 2  \n\ny = f(0x10) + .5\n";
    let tokens = tokenize(source).unwrap();
    let (rebuilt, gaps_are_whitespace) = reconstruct(source, &tokens);
    assert_eq!(rebuilt, source);
    assert!(gaps_are_whitespace);
}

#[test]
fn test_independent_scans_are_identical() {
    let source = "if a and not b:\n  c = r'x' + \"\"\"y\"\"\"\n";
    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}

/// Decoded integer value of a single-token input.
fn single_integer(source: &str, kind: TokenKind) -> Option<BigUint> {
    let tokens = tokenize(source).ok()?;
    match tokens.as_slice() {
        [token] if token.kind == kind => token.number.as_ref().and_then(Number::to_biguint),
        _ => None,
    }
}

proptest! {
    #[test]
    fn prop_plain_digits_are_one_int(input in "[1-9][0-9]{0,79}") {
        let expected = BigUint::parse_bytes(input.as_bytes(), 10);
        prop_assert_eq!(single_integer(&input, TokenKind::IntLiteral), expected);
    }

    #[test]
    fn prop_hex_literals(digits in "[0-9a-fA-F]{1,60}") {
        let expected = BigUint::parse_bytes(digits.as_bytes(), 16);
        prop_assert_eq!(single_integer(&format!("0x{}", digits), TokenKind::HexLiteral), expected);
    }

    #[test]
    fn prop_octal_literals(digits in "[0-7]{1,60}") {
        let expected = BigUint::parse_bytes(digits.as_bytes(), 8);
        prop_assert_eq!(single_integer(&format!("0o{}", digits), TokenKind::OctLiteral), expected);
    }

    #[test]
    fn prop_binary_literals(digits in "[01]{1,200}") {
        let expected = BigUint::parse_bytes(digits.as_bytes(), 2);
        prop_assert_eq!(single_integer(&format!("0b{}", digits), TokenKind::BinLiteral), expected);
    }

    #[test]
    fn prop_names_are_single_tokens(input in "[a-zA-Z_][a-zA-Z0-9_]{0,30}") {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        let expected = ash_lex::keyword_kind(&input).unwrap_or(TokenKind::Name);
        prop_assert_eq!(tokens[0].kind, expected);
        prop_assert_eq!(tokens[0].text, input.as_str());
    }

    #[test]
    fn prop_string_literals(body in "[^'\\\\]{0,40}") {
        let source = format!("'{}'", body);
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        prop_assert_eq!(tokens[0].text, source.as_str());
    }

    #[test]
    fn prop_reconstruction(
        atoms in prop::collection::vec(
            "[a-z]{1,4}|[1-9][0-9]{0,2}|[ \t]{1,3}|\n|'[a-z ]{1,4}'|\\+|==|\\*\\*=|\\(|\\)",
            0..24,
        )
    ) {
        let source = atoms.join(" ");
        let tokens = tokenize(&source).unwrap();
        let (rebuilt, gaps_are_whitespace) = reconstruct(&source, &tokens);
        prop_assert_eq!(rebuilt, source.clone());
        prop_assert!(gaps_are_whitespace);
        prop_assert_eq!(tokenize(&source).unwrap(), tokens);
    }

    #[test]
    fn prop_lines_follow_newlines(lines in prop::collection::vec("[a-z]{1,5}", 1..10)) {
        let source = lines.join("\n");
        let tokens = tokenize(&source).unwrap();
        let names: Vec<&Token<'_>> = tokens.iter().filter(|t| t.kind != TokenKind::Newline).collect();
        for (index, token) in names.iter().enumerate() {
            prop_assert_eq!(token.line as usize, index + 1);
        }
    }
}
