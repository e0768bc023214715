//! End-to-end Spark queries: parse, render, and re-parse.

mod common;
use common::*;

#[test]
fn basic_select() {
    assert_sql("SELECT a, b FROM t1", "SELECT `a`, `b` FROM `t1`");
}

#[test]
fn select_with_where() {
    assert_sql(
        "SELECT * FROM t1 WHERE id = 1",
        "SELECT * FROM `t1` WHERE `id` = 1",
    );
}

#[test]
fn select_distinct() {
    assert_sql(
        "SELECT DISTINCT a, b FROM t1",
        "SELECT DISTINCT `a`, `b` FROM `t1`",
    );
}

#[test]
fn count_distinct_two_columns() {
    assert_sql(
        "SELECT COUNT(DISTINCT a, b) FROM t1",
        "SELECT COUNT(DISTINCT `a`, `b`) FROM `t1`",
    );
}

#[test]
fn count_distinct_three_columns() {
    assert_sql(
        "SELECT COUNT(DISTINCT a, b, c) FROM t1",
        "SELECT COUNT(DISTINCT `a`, `b`, `c`) FROM `t1`",
    );
}

#[test]
fn count_distinct_single_column() {
    assert_sql(
        "SELECT COUNT(DISTINCT a) FROM t1",
        "SELECT COUNT(DISTINCT `a`) FROM `t1`",
    );
}

#[test]
fn count_star() {
    assert_sql("SELECT COUNT(*) FROM t1", "SELECT COUNT(*) FROM `t1`");
}

#[test]
fn sum_distinct() {
    assert_sql(
        "SELECT SUM(DISTINCT amount) FROM orders",
        "SELECT SUM(DISTINCT `amount`) FROM `orders`",
    );
}

#[test]
fn avg_distinct() {
    assert_sql(
        "SELECT AVG(DISTINCT score) FROM students",
        "SELECT AVG(DISTINCT `score`) FROM `students`",
    );
}

#[test]
fn min_and_max_without_distinct() {
    assert_sql(
        "SELECT MIN(a), MAX(b) FROM t1",
        "SELECT MIN(`a`), MAX(`b`) FROM `t1`",
    );
}

#[test]
fn left_semi_join() {
    assert_sql(
        "SELECT * FROM a LEFT SEMI JOIN b ON a.id = b.id",
        "SELECT * FROM `a` LEFT SEMI JOIN `b` ON `a`.`id` = `b`.`id`",
    );
}

#[test]
fn left_anti_join() {
    assert_sql(
        "SELECT * FROM a LEFT ANTI JOIN b ON a.id = b.id",
        "SELECT * FROM `a` LEFT ANTI JOIN `b` ON `a`.`id` = `b`.`id`",
    );
}

#[test]
fn complex_query_with_distinct_aggregates() {
    assert_sql(
        "SELECT a, COUNT(DISTINCT b, c), SUM(DISTINCT d) FROM t1 WHERE e > 1 GROUP BY a",
        "SELECT `a`, COUNT(DISTINCT `b`, `c`), SUM(DISTINCT `d`) FROM `t1` WHERE `e` > 1 GROUP BY `a`",
    );
}

#[test]
fn window_with_default_ascending_order() {
    assert_sql(
        "SELECT LAG(amount,1) OVER (PARTITION BY user_id ORDER BY created_at) FROM orders",
        "SELECT LAG(`amount`, 1) OVER (PARTITION BY `user_id` ORDER BY `created_at` ASC) FROM `orders`",
    );
}

#[test]
fn distribute_by_then_sort_by() {
    assert_sql(
        "SELECT a, b FROM t1 DISTRIBUTE BY a SORT BY b ASC",
        "SELECT `a`, `b` FROM `t1` DISTRIBUTE BY `a` SORT BY `b` ASC",
    );
}

#[test]
fn lower_case_keywords_are_normalized() {
    assert_sql(
        "select a from t where a = 1 group by a having count(*) > 2",
        "SELECT `a` FROM `t` WHERE `a` = 1 GROUP BY `a` HAVING COUNT(*) > 2",
    );
}

#[test]
fn backtick_identifiers_survive() {
    assert_sql(
        "SELECT `order`, `we``ird` FROM `my table`",
        "SELECT `order`, `we``ird` FROM `my table`",
    );
}

#[test]
fn contextual_keywords_as_column_names() {
    assert_sql(
        "SELECT first, last, view FROM t",
        "SELECT `first`, `last`, `view` FROM `t`",
    );
}

#[test]
fn aliases_and_qualified_names() {
    assert_sql(
        "SELECT o.id oid, o.total AS amount FROM sales.orders o",
        "SELECT `o`.`id` AS `oid`, `o`.`total` AS `amount` FROM `sales`.`orders` AS `o`",
    );
}

#[test]
fn qualified_wildcard() {
    assert_sql("SELECT t.* FROM t", "SELECT `t`.* FROM `t`");
}

#[test]
fn comments_and_trailing_semicolon() {
    assert_sql(
        "SELECT a -- the key\nFROM /* source */ t;",
        "SELECT `a` FROM `t`",
    );
}

#[test]
fn limit_follows_ordering() {
    assert_sql(
        "SELECT a FROM t ORDER BY a LIMIT 10",
        "SELECT `a` FROM `t` ORDER BY `a` ASC LIMIT 10",
    );
}

#[test]
fn subquery_in_from() {
    assert_sql(
        "SELECT x.a FROM (SELECT a FROM t WHERE a > 0) x",
        "SELECT `x`.`a` FROM (SELECT `a` FROM `t` WHERE `a` > 0) AS `x`",
    );
}

#[test]
fn large_query_round_trips() {
    round_trip(
        "SELECT u.country, COUNT(DISTINCT o.user_id, o.day) AS buyers, \
         SUM(o.total) / COUNT(*) AS avg_total \
         FROM orders o \
         LEFT SEMI JOIN users u ON o.user_id = u.id \
         LATERAL VIEW OUTER explode(o.items) it AS item \
         WHERE o.total BETWEEN 10 AND 1000 AND u.country NOT IN ('XX', 'YY') \
         GROUP BY 1 \
         HAVING COUNT(*) > 5 \
         DISTRIBUTE BY u.country SORT BY buyers DESC \
         LIMIT 100",
    );
}
