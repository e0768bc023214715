//! Tests for window functions and IGNORE NULLS.

mod common;
use common::*;

use oxide_sql_parser::ast::{Expr, NullOrdering, OrderDirection};

#[test]
fn partition_and_order() {
    assert_sql(
        "SELECT ROW_NUMBER() OVER (PARTITION BY a, b ORDER BY c DESC, d) AS rn FROM t",
        "SELECT ROW_NUMBER() OVER (PARTITION BY `a`, `b` ORDER BY `c` DESC, `d` ASC) AS `rn` FROM `t`",
    );
}

#[test]
fn ignore_nulls_sits_before_over() {
    assert_sql(
        "SELECT first_value(x) IGNORE NULLS OVER (PARTITION BY g ORDER BY ts DESC) FROM t",
        "SELECT FIRST_VALUE(`x`) IGNORE NULLS OVER (PARTITION BY `g` ORDER BY `ts` DESC) FROM `t`",
    );
}

#[test]
fn ignore_nulls_without_window() {
    let select = parse_select("SELECT last(x) IGNORE NULLS FROM t");
    let Expr::Function(call) = &select.columns[0].expr else {
        panic!("Expected function call");
    };
    assert!(call.ignore_nulls);
    assert!(call.over.is_none());
    assert_sql(
        "SELECT last(x) IGNORE NULLS FROM t",
        "SELECT LAST(`x`) IGNORE NULLS FROM `t`",
    );
}

#[test]
fn empty_window() {
    assert_sql("SELECT SUM(x) OVER () FROM t", "SELECT SUM(`x`) OVER () FROM `t`");
}

#[test]
fn partition_only() {
    assert_sql(
        "SELECT SUM(x) OVER (PARTITION BY a) FROM t",
        "SELECT SUM(`x`) OVER (PARTITION BY `a`) FROM `t`",
    );
}

#[test]
fn null_ordering_in_window() {
    let select = parse_select("SELECT RANK() OVER (ORDER BY a NULLS LAST) FROM t");
    let Expr::Function(call) = &select.columns[0].expr else {
        panic!("Expected function call");
    };
    let order = &call.over.as_ref().unwrap().order_by[0];
    assert_eq!(order.direction, None);
    assert_eq!(order.effective_direction(), OrderDirection::Asc);
    assert_eq!(order.nulls, Some(NullOrdering::Last));
    assert_sql(
        "SELECT RANK() OVER (ORDER BY a NULLS LAST) FROM t",
        "SELECT RANK() OVER (ORDER BY `a` ASC NULLS LAST) FROM `t`",
    );
}

#[test]
fn window_arithmetic() {
    assert_sql(
        "SELECT amount - LAG(amount, 1) OVER (ORDER BY ts) AS delta FROM t",
        "SELECT `amount` - LAG(`amount`, 1) OVER (ORDER BY `ts` ASC) AS `delta` FROM `t`",
    );
}

#[test]
fn frames_are_rejected() {
    let _ = parse_err("SELECT SUM(x) OVER (ORDER BY a ROWS BETWEEN 1 PRECEDING AND CURRENT ROW) FROM t");
}

#[test]
fn unclosed_window_fails() {
    let _ = parse_err("SELECT SUM(x) OVER (PARTITION BY a FROM t");
}
