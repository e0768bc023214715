//! Generic SQL dialect.

use super::Dialect;

/// A generic SQL dialect using ANSI SQL conventions.
///
/// Double quotes delimit identifiers and none of the Spark extensions are
/// recognized. This is the dialect used when no `database` is selected.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert_eq!(dialect.identifier_quote(), '"');
        assert!(!dialect.double_quoted_strings());
        assert!(!dialect.supports_ilike());
        assert!(!dialect.supports_semi_anti_join());
        assert!(!dialect.supports_lateral_view());
        assert!(!dialect.supports_distribute_sort_cluster());
    }
}
