//! SQL Dialect support.
//!
//! A dialect is an immutable, `'static` descriptor that the parser and the
//! serializer consult for every dialect-conditional production or rendering
//! rule. Dialects are selected by name with [`dialect_for`]; there is no
//! registration step and no global state.

mod generic;
mod spark;

use core::fmt;
use core::str::FromStr;

pub use generic::GenericDialect;
pub use spark::SparkDialect;

use crate::error::Error;

/// Which clauses may follow DISTRIBUTE BY / CLUSTER BY.
///
/// ORDER BY never combines with DISTRIBUTE BY, SORT BY or CLUSTER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderingRules {
    /// `DISTRIBUTE BY a SORT BY b` is accepted.
    pub sort_after_distribute: bool,
    /// `CLUSTER BY a SORT BY b` is accepted.
    pub sort_after_cluster: bool,
}

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for Spark).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns whether `"..."` is a string literal rather than a quoted
    /// identifier.
    fn double_quoted_strings(&self) -> bool {
        false
    }

    /// Returns whether `ILIKE` / `NOT ILIKE` are recognized.
    fn supports_ilike(&self) -> bool {
        false
    }

    /// Returns whether `RLIKE` / `NOT RLIKE` are recognized.
    fn supports_rlike(&self) -> bool {
        false
    }

    /// Returns whether `LEFT SEMI JOIN` and `LEFT ANTI JOIN` are recognized.
    fn supports_semi_anti_join(&self) -> bool {
        false
    }

    /// Returns whether `LATERAL VIEW` clauses are recognized.
    fn supports_lateral_view(&self) -> bool {
        false
    }

    /// Returns whether DISTRIBUTE BY, SORT BY and CLUSTER BY are recognized.
    fn supports_distribute_sort_cluster(&self) -> bool {
        false
    }

    /// Returns the combination rules for the trailing ordering clauses.
    fn ordering_rules(&self) -> OrderingRules {
        OrderingRules::default()
    }

    /// Quotes an identifier, doubling any embedded quote character.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let mut escaped = String::with_capacity(name.len() + 2);
        escaped.push(quote);
        for c in name.chars() {
            if c == quote {
                escaped.push(quote);
            }
            escaped.push(c);
        }
        escaped.push(quote);
        escaped
    }
}

/// The dialects this crate knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialectName {
    /// ANSI-flavoured baseline.
    #[default]
    Generic,
    /// Spark SQL.
    Spark,
}

impl DialectName {
    /// Returns the canonical lower-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Spark => "spark",
        }
    }

    /// Returns the static descriptor for this dialect.
    #[must_use]
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Generic => &GenericDialect,
            Self::Spark => &SparkDialect,
        }
    }
}

impl FromStr for DialectName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "spark" => Ok(Self::Spark),
            _ => Err(Error::UnsupportedDialect(String::from(s))),
        }
    }
}

impl fmt::Display for DialectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a dialect by name (case-insensitive).
///
/// # Errors
///
/// Returns `Error::UnsupportedDialect` if the name is unknown.
pub fn dialect_for(name: &str) -> Result<&'static dyn Dialect, Error> {
    name.parse::<DialectName>().map(DialectName::dialect)
}
