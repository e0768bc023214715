//! AST to SQL text.
//!
//! The [`Serializer`] renders a [`Statement`] as a single line of SQL:
//! keywords upper-case, identifiers quoted by the dialect, function names
//! upper-case, and an explicit `ASC` on every ORDER BY / SORT BY entry that
//! has no direction. Output is a fixed point: parsing it with the same
//! dialect and serializing again yields the same text.
//!
//! Structurally invalid trees (an empty select list, a LATERAL VIEW without
//! column aliases, ...) are rejected with [`Error::InvariantViolation`].

mod expr;

use crate::ast::{
    FromClause, GroupByItem, JoinClause, JoinType, LateralView, OrderBy, OrderingClause,
    SelectColumn, SelectStatement, Statement, TableRef,
};
use crate::dialect::Dialect;
use crate::error::{Error, Result};

/// Renders AST nodes for one dialect.
#[derive(Debug, Clone, Copy)]
pub struct Serializer<'d> {
    dialect: &'d dyn Dialect,
}

impl<'d> Serializer<'d> {
    /// Creates a serializer for the given dialect.
    #[must_use]
    pub const fn new(dialect: &'d dyn Dialect) -> Self {
        Self { dialect }
    }

    /// Renders a statement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] if the tree is malformed.
    pub fn serialize(&self, statement: &Statement) -> Result<String> {
        match statement {
            Statement::Select(select) => self.select(select),
        }
    }

    /// Renders a SELECT statement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] if the tree is malformed.
    pub fn select(&self, select: &SelectStatement) -> Result<String> {
        if select.columns.is_empty() {
            return Err(invariant("SELECT requires at least one column"));
        }

        let mut sql = String::from("SELECT ");
        if select.distinct {
            sql.push_str("DISTINCT ");
        }
        sql.push_str(&comma_separated(&select.columns, |c| self.select_column(c))?);

        match &select.from {
            Some(from) => {
                sql.push_str(" FROM ");
                sql.push_str(&self.from_clause(from)?);
            }
            None if !select.lateral_views.is_empty() => {
                return Err(invariant("LATERAL VIEW requires a FROM clause"));
            }
            None => {}
        }

        for view in &select.lateral_views {
            sql.push(' ');
            sql.push_str(&self.lateral_view(view)?);
        }

        if let Some(condition) = &select.where_clause {
            sql.push_str(" WHERE ");
            sql.push_str(&self.expr(condition)?);
        }

        if !select.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&comma_separated(&select.group_by, |g| self.group_by_item(g))?);
        }

        if let Some(having) = &select.having {
            sql.push_str(" HAVING ");
            sql.push_str(&self.expr(having)?);
        }

        if let Some(ordering) = &select.ordering {
            sql.push(' ');
            sql.push_str(&self.ordering_clause(ordering)?);
        }

        if let Some(limit) = &select.limit {
            sql.push_str(" LIMIT ");
            sql.push_str(&self.expr(limit)?);
        }

        Ok(sql)
    }

    fn select_column(&self, column: &SelectColumn) -> Result<String> {
        let mut sql = self.expr(&column.expr)?;
        if let Some(alias) = &column.alias {
            sql.push_str(" AS ");
            sql.push_str(&self.identifier(alias)?);
        }
        Ok(sql)
    }

    fn from_clause(&self, from: &FromClause) -> Result<String> {
        let mut sql = self.table_ref(&from.relation)?;
        for join in &from.joins {
            sql.push(' ');
            sql.push_str(&self.join(join)?);
        }
        Ok(sql)
    }

    fn table_ref(&self, table: &TableRef) -> Result<String> {
        let (mut sql, alias) = match table {
            TableRef::Table {
                schema,
                name,
                alias,
            } => {
                let mut sql = String::new();
                if let Some(schema) = schema {
                    sql.push_str(&self.identifier(schema)?);
                    sql.push('.');
                }
                sql.push_str(&self.identifier(name)?);
                (sql, alias)
            }
            TableRef::Subquery { query, alias } => (format!("({})", self.select(query)?), alias),
        };
        if let Some(alias) = alias {
            sql.push_str(" AS ");
            sql.push_str(&self.identifier(alias)?);
        }
        Ok(sql)
    }

    fn join(&self, join: &JoinClause) -> Result<String> {
        let has_condition = join.on.is_some() || !join.using.is_empty();
        if join.join_type == JoinType::Cross && has_condition {
            return Err(invariant("CROSS JOIN takes neither ON nor USING"));
        }
        if join.on.is_some() && !join.using.is_empty() {
            return Err(invariant("a join has either ON or USING, not both"));
        }

        let mut sql = String::from(join.join_type.as_str());
        sql.push(' ');
        sql.push_str(&self.table_ref(&join.table)?);
        if let Some(on) = &join.on {
            sql.push_str(" ON ");
            sql.push_str(&self.expr(on)?);
        }
        if !join.using.is_empty() {
            sql.push_str(" USING (");
            sql.push_str(&comma_separated(&join.using, |c| self.identifier(c))?);
            sql.push(')');
        }
        Ok(sql)
    }

    fn lateral_view(&self, view: &LateralView) -> Result<String> {
        if view.column_aliases.is_empty() {
            return Err(invariant("LATERAL VIEW requires at least one column alias"));
        }
        let mut sql = String::from("LATERAL VIEW ");
        if view.outer {
            sql.push_str("OUTER ");
        }
        sql.push_str(&self.function_call(&view.function)?);
        sql.push(' ');
        sql.push_str(&self.identifier(&view.table_alias)?);
        sql.push_str(" AS ");
        sql.push_str(&comma_separated(&view.column_aliases, |c| {
            self.identifier(c)
        })?);
        Ok(sql)
    }

    fn group_by_item(&self, item: &GroupByItem) -> Result<String> {
        match item {
            GroupByItem::Ordinal(0) => Err(invariant("GROUP BY ordinals start at 1")),
            GroupByItem::Ordinal(n) => Ok(n.to_string()),
            GroupByItem::Expr(expr) => self.expr(expr),
        }
    }

    fn ordering_clause(&self, clause: &OrderingClause) -> Result<String> {
        let mut sql = String::from(clause.as_str());
        sql.push(' ');
        match clause {
            OrderingClause::OrderBy(items) | OrderingClause::SortBy(items) => {
                sql.push_str(&self.order_by_list(clause.as_str(), items)?);
            }
            OrderingClause::DistributeBy { items, sort_by }
            | OrderingClause::ClusterBy { items, sort_by } => {
                sql.push_str(&self.key_list(clause.as_str(), items)?);
                if let Some(sort_by) = sort_by {
                    sql.push_str(" SORT BY ");
                    sql.push_str(&self.order_by_list("SORT BY", sort_by)?);
                }
            }
        }
        Ok(sql)
    }

    /// Renders ORDER BY / SORT BY / window ORDER BY entries. A missing
    /// direction is written as `ASC`.
    fn order_by_list(&self, clause: &str, items: &[OrderBy]) -> Result<String> {
        if items.is_empty() {
            return Err(invariant(format!("{clause} requires at least one entry")));
        }
        comma_separated(items, |item| {
            let mut sql = self.expr(&item.expr)?;
            sql.push(' ');
            sql.push_str(item.effective_direction().as_str());
            if let Some(nulls) = item.nulls {
                sql.push(' ');
                sql.push_str(nulls.as_str());
            }
            Ok(sql)
        })
    }

    /// Renders DISTRIBUTE BY / CLUSTER BY keys. Directions are never written.
    fn key_list(&self, clause: &str, items: &[OrderBy]) -> Result<String> {
        if items.is_empty() {
            return Err(invariant(format!("{clause} requires at least one entry")));
        }
        comma_separated(items, |item| self.expr(&item.expr))
    }

    /// Quotes an identifier for the dialect.
    fn identifier(&self, name: &str) -> Result<String> {
        if name.is_empty() {
            return Err(invariant("identifiers cannot be empty"));
        }
        Ok(self.dialect.quote_identifier(name))
    }
}

fn invariant(message: impl Into<String>) -> Error {
    Error::InvariantViolation(message.into())
}

fn comma_separated<T>(items: &[T], render: impl FnMut(&T) -> Result<String>) -> Result<String> {
    let rendered = items.iter().map(render).collect::<Result<Vec<_>>>()?;
    Ok(rendered.join(", "))
}
