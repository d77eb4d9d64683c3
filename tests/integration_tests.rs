//! Integration tests for end-to-end recognition.
//!
//! These tests drive the public library API from source text through
//! tokenization and recognition.

use recognizer::{
    errors::errors::{ErrorCategory, ErrorImpl},
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    recognize,
};

#[test]
fn test_whitespace_only_is_accepted() {
    for source in ["", " ", "\n\n", "\t \r\n \t"] {
        assert!(recognize(source).is_ok(), "{:?} should be accepted", source);
    }
}

#[test]
fn test_scenario_if_else_program() {
    let source = "int a; a = 5; Agar (a > 0) { return a; } else { return 0; }";

    assert!(recognize(source).is_ok());
    assert!(recognize(&source.replace("Agar", "if")).is_ok());
}

#[test]
fn test_scenario_missing_semicolon_after_declaration() {
    let error = recognize("int a a = 5;").unwrap_err();

    assert_eq!(error.get_category(), ErrorCategory::Syntax);
    assert_eq!(
        error.get_error(),
        &ErrorImpl::ExpectedToken { expected: TokenKind::Semicolon, token: "a".to_string() }
    );
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 7);
    assert_eq!(
        error.to_string(),
        "Syntax error: expected `;` but found `a` at line 1, column 7"
    );
}

#[test]
fn test_scenario_less_than_is_rejected() {
    let error = recognize("while (a < 10) { a = a + 1; }").unwrap_err();

    assert_eq!(error.get_token(), "<");
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 10);
    assert_eq!(error.get_category(), ErrorCategory::Lexical);
}

#[test]
fn test_scenario_empty_char_literal() {
    let error = recognize("char c;\nc = '';").unwrap_err();

    assert_eq!(error.get_category(), ErrorCategory::Lexical);
    assert_eq!(error.get_error_name(), "EmptyChar");
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_unterminated_string_reported_at_opening_quote() {
    let error = recognize("string s;\ns = \"abc;\nint b;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_unknown_declaration_type() {
    let error = recognize("foo x;").unwrap_err();

    assert_eq!(error.get_category(), ErrorCategory::Syntax);
    assert_eq!(error.get_token(), "foo");
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_chained_comparison_is_accepted() {
    assert!(recognize("x = a > b > c;").is_ok());
}

#[test]
fn test_lexical_error_precedes_syntax_error() {
    // The syntax error at `a` comes first in the text, but tokenizing
    // finishes before recognition starts.
    let error = recognize("int a a;\nb = #;").unwrap_err();

    assert_eq!(error.get_category(), ErrorCategory::Lexical);
    assert_eq!(error.get_token(), "#");
}

#[test]
fn test_tokens_feed_parser() {
    let tokens = tokenize("bool done; done = 0;").unwrap();

    assert_eq!(tokens.eof().kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 8);
    assert!(parse(&tokens).is_ok());
}

#[test]
fn test_independent_inputs_in_parallel() {
    let sources = vec![
        ("int a; a = 1;", true),
        ("int a a", false),
        ("while (x > 0) x = x - 1;", true),
        ("c = '';", false),
    ];

    let handles: Vec<_> = sources
        .into_iter()
        .map(|(source, valid)| std::thread::spawn(move || (recognize(source).is_ok(), valid)))
        .collect();

    for handle in handles {
        let (accepted, valid) = handle.join().unwrap();
        assert_eq!(accepted, valid);
    }
}

#[test]
fn test_deeply_nested_input_is_a_syntax_error() {
    let source = format!("while (a) {}b = 1;{}", "{".repeat(100_000), "}".repeat(100_000));
    let error = recognize(&source).unwrap_err();

    assert_eq!(error.get_category(), ErrorCategory::Syntax);
    assert_eq!(error.get_error_name(), "NestingTooDeep");
}
