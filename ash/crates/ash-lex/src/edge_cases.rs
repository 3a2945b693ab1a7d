//! Edge case tests for ash-lex
