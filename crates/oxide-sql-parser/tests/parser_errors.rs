//! Tests for parser error cases.

mod common;
use common::*;

use oxide_sql_parser::{Error, TokenKind};

#[test]
fn error_empty_input() {
    let err = parse_err("");
    assert!(matches!(err, Error::Syntax(ref e) if e.found == Some(TokenKind::Eof)));
}

#[test]
fn error_incomplete_select() {
    let _ = parse_err("SELECT");
}

#[test]
fn error_missing_from_table() {
    let _ = parse_err("SELECT * FROM");
}

#[test]
fn error_unexpected_statement() {
    let err = parse_err("UPDATE users SET a = 1");
    let Error::Syntax(e) = err else {
        panic!("Expected syntax error, got {err:?}");
    };
    assert_eq!(e.expected.as_deref(), Some("SELECT"));
    assert_eq!(e.span.start, 0);
}

#[test]
fn error_unclosed_paren() {
    let _ = parse_err("SELECT (1 + 2");
}

#[test]
fn error_position_points_at_offending_token() {
    let err = parse_err("SELECT a FROM t WHERE");
    assert_eq!(err.position(), Some(21));

    let err = parse_err("SELECT a FROM t1 t2 t3");
    assert_eq!(err.position(), Some(20));
}

#[test]
fn error_trailing_statement() {
    let _ = parse_err("SELECT a FROM t; SELECT b FROM u");
}

#[test]
fn error_empty_select_list() {
    let _ = parse_err("SELECT FROM t");
}

#[test]
fn error_empty_function_distinct() {
    let _ = parse_err("SELECT COUNT(DISTINCT) FROM t");
}

#[test]
fn error_case_without_when() {
    let _ = parse_err("SELECT CASE ELSE 1 END FROM t");
}

#[test]
fn lex_error_unterminated_string() {
    let err = parse_err("SELECT 'abc");
    assert!(matches!(err, Error::Lex(_)));
    assert_eq!(err.position(), Some(7));
}

#[test]
fn lex_error_illegal_character() {
    let err = parse_err("SELECT a FROM t WHERE #");
    assert!(matches!(err, Error::Lex(_)));
    assert_eq!(err.position(), Some(22));
}

#[test]
fn error_messages_carry_context() {
    let err = parse_err("SELECT a FROM t LEFT SEMI b");
    let message = err.to_string();
    assert!(message.starts_with("syntax error:"), "{message}");
    assert!(message.contains("expected JOIN"), "{message}");
}

#[test]
fn no_partial_results() {
    // A failure late in the statement yields only the error.
    let result = oxide_sql_parser::astify("SELECT a, b FROM t WHERE", &spark());
    assert!(result.is_err());
}
