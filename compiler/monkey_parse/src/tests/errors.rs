//! Syntax error tests.
//!
//! Messages are compared verbatim: they are user-facing output.

use crate::{parse, ParseError};
use monkey_ir::{Span, TokenKind};
use pretty_assertions::assert_eq;

fn errors(source: &str) -> Vec<String> {
    parse(source).error_messages()
}

#[test]
fn test_bad_let_statements_report_each_mistake() {
    assert_eq!(
        errors("let x 5;\nlet = 10;\nlet 838383;"),
        vec![
            "expected next token to be =, got INT instead",
            "expected next token to be IDENT, got = instead",
            "no prefix parse function for = found",
            "expected next token to be IDENT, got INT instead",
        ]
    );
}

#[test]
fn test_failed_statements_are_not_attached() {
    let output = parse("let x 5; let y = 1;");

    assert_eq!(output.errors.len(), 1);
    // `5` survives as an expression statement after recovery.
    assert_eq!(output.program.to_string(), "5; let y = 1;");
}

#[test]
fn test_missing_prefix_parser() {
    assert_eq!(errors("1 + ;"), vec!["no prefix parse function for ; found"]);
    assert_eq!(errors("@"), vec!["no prefix parse function for ILLEGAL found"]);
    assert_eq!(errors("}"), vec!["no prefix parse function for } found"]);
}

#[test]
fn test_integer_out_of_range() {
    assert_eq!(
        errors("9223372036854775808"),
        vec!["could not parse 9223372036854775808 as integer"]
    );
}

#[test]
fn test_non_identifier_parameter() {
    assert_eq!(
        errors("fn(1) {}"),
        vec!["expected next token to be IDENT, got INT instead"]
    );
}

#[test]
fn test_unclosed_delimiters() {
    assert_eq!(
        errors("(1 + 2"),
        vec!["expected next token to be ), got EOF instead"]
    );
    assert_eq!(
        errors("[1, 2"),
        vec!["expected next token to be ], got EOF instead"]
    );
    assert_eq!(
        errors(r#"{"a" 1}"#),
        vec![
            "expected next token to be :, got INT instead",
            "no prefix parse function for } found",
        ]
    );
}

#[test]
fn test_if_requires_parenthesized_condition() {
    let messages = errors("if x { 1 }");
    assert_eq!(
        messages.first().map(String::as_str),
        Some("expected next token to be (, got IDENT instead")
    );
}

#[test]
fn test_error_carries_span_of_offending_token() {
    let output = parse("let x 5;");

    assert_eq!(
        output.errors,
        vec![ParseError::UnexpectedToken {
            expected: TokenKind::Assign,
            found: TokenKind::Int,
            span: Span::new(6, 7),
        }]
    );
}
