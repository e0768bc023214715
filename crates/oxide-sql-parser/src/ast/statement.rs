//! SQL statement AST types.

use serde::{Deserialize, Serialize};

use super::expression::{Expr, FunctionCall};

/// Order direction for ORDER BY and SORT BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Null ordering for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullOrdering {
    /// NULLs come first.
    First,
    /// NULLs come last.
    Last,
}

impl NullOrdering {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// One entry of an ordering list.
///
/// The direction is `None` when the source omitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    /// The expression to order by.
    pub expr: Expr,
    /// The direction, if written.
    pub direction: Option<OrderDirection>,
    /// Null ordering, if written.
    pub nulls: Option<NullOrdering>,
}

impl OrderBy {
    /// Creates an entry with no explicit direction.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self {
            expr,
            direction: None,
            nulls: None,
        }
    }

    /// Creates an entry with an explicit direction.
    #[must_use]
    pub const fn with_direction(expr: Expr, direction: OrderDirection) -> Self {
        Self {
            expr,
            direction: Some(direction),
            nulls: None,
        }
    }

    /// Returns the direction this entry sorts in.
    #[must_use]
    pub fn effective_direction(&self) -> OrderDirection {
        self.direction.unwrap_or_default()
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinType {
    /// INNER JOIN (or bare JOIN).
    Inner,
    /// LEFT [OUTER] JOIN.
    Left,
    /// RIGHT [OUTER] JOIN.
    Right,
    /// FULL [OUTER] JOIN.
    Full,
    /// CROSS JOIN.
    Cross,
    /// LEFT SEMI JOIN.
    LeftSemi,
    /// LEFT ANTI JOIN.
    LeftAnti,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
            Self::LeftSemi => "LEFT SEMI JOIN",
            Self::LeftAnti => "LEFT ANTI JOIN",
        }
    }
}

/// A JOIN clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinClause {
    /// The type of join.
    pub join_type: JoinType,
    /// The table to join.
    pub table: TableRef,
    /// The join condition.
    pub on: Option<Expr>,
    /// USING columns (alternative to ON).
    pub using: Vec<String>,
}

/// A table reference in FROM clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableRef {
    /// A table name.
    Table {
        /// Schema/database name (optional).
        schema: Option<String>,
        /// Table name.
        name: String,
        /// Alias.
        alias: Option<String>,
    },
    /// A parenthesized subquery.
    Subquery {
        /// The subquery.
        query: Box<SelectStatement>,
        /// Alias.
        alias: Option<String>,
    },
}

impl TableRef {
    /// Creates a simple table reference.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table {
            schema: None,
            name: name.into(),
            alias: None,
        }
    }

    /// Adds an alias to this table reference.
    #[must_use]
    pub fn alias(self, alias: impl Into<String>) -> Self {
        match self {
            Self::Table { schema, name, .. } => Self::Table {
                schema,
                name,
                alias: Some(alias.into()),
            },
            Self::Subquery { query, .. } => Self::Subquery {
                query,
                alias: Some(alias.into()),
            },
        }
    }
}

/// The FROM clause: a base relation followed by a chain of joins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromClause {
    /// The first relation.
    pub relation: TableRef,
    /// Joins, in source order.
    pub joins: Vec<JoinClause>,
}

impl FromClause {
    /// Creates a FROM clause without joins.
    #[must_use]
    pub const fn new(relation: TableRef) -> Self {
        Self {
            relation,
            joins: vec![],
        }
    }
}

/// `LATERAL VIEW [OUTER] func(args) alias AS col, ...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateralView {
    /// Whether OUTER was given (keep rows for which the generator is empty).
    pub outer: bool,
    /// The generator function call, e.g. `EXPLODE(arr)`.
    pub function: FunctionCall,
    /// Alias of the generated table.
    pub table_alias: String,
    /// Aliases of the generated columns (at least one).
    pub column_aliases: Vec<String>,
}

/// A GROUP BY entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupByItem {
    /// A grouping expression.
    Expr(Expr),
    /// A 1-based reference into the select list.
    Ordinal(u64),
}

/// The trailing ordering clause of a query.
///
/// DISTRIBUTE BY and CLUSTER BY entries may carry a direction internally, but
/// it is never rendered for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderingClause {
    /// ORDER BY ...
    OrderBy(Vec<OrderBy>),
    /// SORT BY ... (per-partition sort)
    SortBy(Vec<OrderBy>),
    /// DISTRIBUTE BY ... [SORT BY ...]
    DistributeBy {
        /// Distribution keys.
        items: Vec<OrderBy>,
        /// The SORT BY list that follows, if any.
        sort_by: Option<Vec<OrderBy>>,
    },
    /// CLUSTER BY ... [SORT BY ...] where the dialect allows the latter.
    ClusterBy {
        /// Clustering keys.
        items: Vec<OrderBy>,
        /// The SORT BY list that follows, if any.
        sort_by: Option<Vec<OrderBy>>,
    },
}

impl OrderingClause {
    /// Returns the keyword pair that opens the clause.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OrderBy(_) => "ORDER BY",
            Self::SortBy(_) => "SORT BY",
            Self::DistributeBy { .. } => "DISTRIBUTE BY",
            Self::ClusterBy { .. } => "CLUSTER BY",
        }
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectStatement {
    /// Whether to select DISTINCT values.
    pub distinct: bool,
    /// The columns to select.
    pub columns: Vec<SelectColumn>,
    /// The FROM clause.
    pub from: Option<FromClause>,
    /// LATERAL VIEW clauses, in source order.
    pub lateral_views: Vec<LateralView>,
    /// The WHERE clause.
    pub where_clause: Option<Expr>,
    /// GROUP BY entries.
    pub group_by: Vec<GroupByItem>,
    /// HAVING clause.
    pub having: Option<Expr>,
    /// ORDER BY / SORT BY / DISTRIBUTE BY / CLUSTER BY.
    pub ordering: Option<OrderingClause>,
    /// LIMIT clause.
    pub limit: Option<Expr>,
}

impl SelectStatement {
    /// Creates a statement selecting `columns` with every clause empty.
    #[must_use]
    pub const fn new(columns: Vec<SelectColumn>) -> Self {
        Self {
            distinct: false,
            columns,
            from: None,
            lateral_views: vec![],
            where_clause: None,
            group_by: vec![],
            having: None,
            ordering: None,
            limit: None,
        }
    }
}

/// A column in SELECT clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectColumn {
    /// The expression.
    pub expr: Expr,
    /// Column alias.
    pub alias: Option<String>,
}

impl SelectColumn {
    /// Creates a new select column.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self { expr, alias: None }
    }

    /// Creates a select column with an alias.
    #[must_use]
    pub fn with_alias(expr: Expr, alias: impl Into<String>) -> Self {
        Self {
            expr,
            alias: Some(alias.into()),
        }
    }
}

/// A SQL statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
}
