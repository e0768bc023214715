//! Tests for the serde representation of the AST.

mod common;
use common::*;

use oxide_sql_parser::ast::Statement;

#[test]
fn ast_survives_json() {
    let ast = parse(
        "SELECT a, COUNT(DISTINCT b, c) FROM t LATERAL VIEW explode(xs) e AS x \
         WHERE CAST(y AS ARRAY<INT>) IS NOT NULL DISTRIBUTE BY a SORT BY b",
    );
    let json = serde_json::to_string(&ast).unwrap();
    let back: Statement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ast);
    assert_eq!(render(&back), render(&ast));
}

#[test]
fn json_shape_is_tagged_by_variant() {
    let ast = parse("SELECT a FROM t LEFT SEMI JOIN u ON t.id = u.id");
    let value = serde_json::to_value(&ast).unwrap();
    let select = &value["Select"];
    assert_eq!(select["distinct"], serde_json::json!(false));
    assert_eq!(
        select["from"]["joins"][0]["join_type"],
        serde_json::json!("LeftSemi")
    );
    assert_eq!(
        select["columns"][0]["expr"]["Column"]["name"],
        serde_json::json!("a")
    );
}
