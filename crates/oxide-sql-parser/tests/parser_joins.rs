//! Tests for join parsing and rendering.

mod common;
use common::*;

use oxide_sql_parser::ast::{JoinType, TableRef};

#[test]
fn bare_join_is_inner() {
    assert_sql(
        "SELECT * FROM a JOIN b ON a.id = b.id",
        "SELECT * FROM `a` INNER JOIN `b` ON `a`.`id` = `b`.`id`",
    );
}

#[test]
fn outer_joins_drop_the_outer_keyword() {
    assert_sql(
        "SELECT * FROM a LEFT OUTER JOIN b ON a.id = b.id \
         RIGHT JOIN c ON b.id = c.id FULL OUTER JOIN d ON c.id = d.id",
        "SELECT * FROM `a` LEFT JOIN `b` ON `a`.`id` = `b`.`id` \
         RIGHT JOIN `c` ON `b`.`id` = `c`.`id` FULL JOIN `d` ON `c`.`id` = `d`.`id`",
    );
}

#[test]
fn cross_join_takes_no_condition() {
    assert_sql("SELECT * FROM a CROSS JOIN b", "SELECT * FROM `a` CROSS JOIN `b`");
    let _ = parse_err("SELECT * FROM a CROSS JOIN b ON a.id = b.id");
}

#[test]
fn join_using_columns() {
    assert_sql(
        "SELECT * FROM a JOIN b USING (id, ts)",
        "SELECT * FROM `a` INNER JOIN `b` USING (`id`, `ts`)",
    );
}

#[test]
fn join_without_condition() {
    assert_sql("SELECT * FROM a JOIN b", "SELECT * FROM `a` INNER JOIN `b`");
}

#[test]
fn semi_and_anti_are_distinct_from_left() {
    let select = parse_select(
        "SELECT * FROM a LEFT SEMI JOIN b ON a.id = b.id \
         LEFT ANTI JOIN c ON a.id = c.id LEFT JOIN d ON a.id = d.id",
    );
    let types: Vec<JoinType> = select
        .from
        .unwrap()
        .joins
        .iter()
        .map(|j| j.join_type)
        .collect();
    assert_eq!(
        types,
        vec![JoinType::LeftSemi, JoinType::LeftAnti, JoinType::Left]
    );
}

#[test]
fn joins_with_aliases() {
    assert_sql(
        "SELECT o.id FROM orders o LEFT ANTI JOIN refunds AS r ON o.id = r.order_id",
        "SELECT `o`.`id` FROM `orders` AS `o` LEFT ANTI JOIN `refunds` AS `r` ON `o`.`id` = `r`.`order_id`",
    );
}

#[test]
fn join_against_subquery() {
    let select = parse_select(
        "SELECT * FROM a LEFT SEMI JOIN (SELECT id FROM b WHERE ok) s ON a.id = s.id",
    );
    let join = &select.from.unwrap().joins[0];
    assert!(matches!(
        &join.table,
        TableRef::Subquery { alias: Some(alias), .. } if alias == "s"
    ));
    round_trip("SELECT * FROM a LEFT SEMI JOIN (SELECT id FROM b WHERE ok) s ON a.id = s.id");
}

#[test]
fn semi_without_join_keyword_fails() {
    let _ = parse_err("SELECT * FROM a LEFT SEMI b ON a.id = b.id");
}

#[test]
fn unknown_join_modifier_fails() {
    let _ = parse_err("SELECT * FROM a LEFT INNER JOIN b ON a.id = b.id");
}
