//! Spark SQL dialect.
//!
//! # How Spark differs from the generic dialect
//!
//! - **Identifier quoting**: backticks; `"..."` is a string literal.
//! - **Joins**: `LEFT SEMI JOIN` and `LEFT ANTI JOIN`.
//! - **Generators**: `LATERAL VIEW [OUTER] explode(...) t AS c`.
//! - **Partition-local ordering**: `DISTRIBUTE BY`, `SORT BY` and
//!   `CLUSTER BY` as alternatives to `ORDER BY`. `DISTRIBUTE BY` may be
//!   followed by `SORT BY`; `CLUSTER BY` stands alone.
//! - **Pattern matching**: `ILIKE` and `RLIKE` alongside `LIKE`.

use super::{Dialect, OrderingRules};

/// Spark SQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SparkDialect;

impl SparkDialect {
    /// Creates a new Spark dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SparkDialect {
    fn name(&self) -> &'static str {
        "spark"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn double_quoted_strings(&self) -> bool {
        true
    }

    fn supports_ilike(&self) -> bool {
        true
    }

    fn supports_rlike(&self) -> bool {
        true
    }

    fn supports_semi_anti_join(&self) -> bool {
        true
    }

    fn supports_lateral_view(&self) -> bool {
        true
    }

    fn supports_distribute_sort_cluster(&self) -> bool {
        true
    }

    fn ordering_rules(&self) -> OrderingRules {
        OrderingRules {
            sort_after_distribute: true,
            sort_after_cluster: false,
        }
    }
}
