#![allow(dead_code)]

use oxide_sql_parser::ast::{SelectStatement, Statement};
use oxide_sql_parser::{astify, sqlify, Error, Options};

pub fn spark() -> Options {
    Options::new().database("spark")
}

pub fn parse(sql: &str) -> Statement {
    astify(sql, &spark()).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> Error {
    astify(sql, &spark()).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        // `Statement` is non-exhaustive outside the crate.
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn render(statement: &Statement) -> String {
    sqlify(statement, &spark()).unwrap_or_else(|e| panic!("Failed to render: {e:?}"))
}

/// Parses `sql` with the Spark dialect, checks the rendering against
/// `expected`, and checks that the rendering is a fixed point.
pub fn assert_sql(sql: &str, expected: &str) {
    let rendered = render(&parse(sql));
    assert_eq!(rendered, expected, "Input: {sql}");
    round_trip(&rendered);
}

/// Verifies that rendering is a fixed point: the rendered text re-parses to
/// the same AST and renders to the same string again.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = render(&ast1);
    let ast2 = parse(&rendered1);
    let rendered2 = render(&ast2);
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
    assert_eq!(ast2, parse(&rendered2), "AST changed on re-parse of {rendered1}");
}
