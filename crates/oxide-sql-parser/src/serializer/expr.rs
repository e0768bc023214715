//! Expression, function call and data type rendering.

use super::{comma_separated, invariant, Serializer};
use crate::ast::{BinaryOp, DataType, Expr, FunctionCall, Literal, UnaryOp, WindowSpec};
use crate::error::Result;
use crate::lexer::{is_bare_word, Keyword};

impl Serializer<'_> {
    /// Renders an expression.
    ///
    /// Binary operands bind at least as tightly as their operator in any
    /// tree the parser produces. For hand-built trees where they do not,
    /// parentheses are added.
    pub(super) fn expr(&self, expr: &Expr) -> Result<String> {
        match expr {
            Expr::Literal(literal) => Ok(literal_sql(literal)),
            Expr::Column { qualifier, name } => {
                let mut parts = qualifier
                    .iter()
                    .map(|part| self.identifier(part))
                    .collect::<Result<Vec<_>>>()?;
                parts.push(self.identifier(name)?);
                Ok(parts.join("."))
            }
            Expr::Wildcard { qualifier } => {
                let mut sql = String::new();
                for part in qualifier {
                    sql.push_str(&self.identifier(part)?);
                    sql.push('.');
                }
                sql.push('*');
                Ok(sql)
            }
            Expr::Binary { left, op, right } => Ok(format!(
                "{} {} {}",
                self.operand(left, *op, false)?,
                op.as_str(),
                self.operand(right, *op, true)?
            )),
            Expr::Unary { op, operand } => {
                let sql = self.unary_operand(*op, operand)?;
                Ok(match op {
                    UnaryOp::Neg => negate(&sql),
                    UnaryOp::Not => format!("NOT {sql}"),
                })
            }
            Expr::Function(call) => self.function_call(call),
            Expr::Subquery(query) => Ok(format!("({})", self.select(query)?)),
            Expr::Exists(query) => Ok(format!("EXISTS ({})", self.select(query)?)),
            Expr::IsNull { expr, negated } => {
                let not = if *negated { "NOT " } else { "" };
                Ok(format!("{} IS {not}NULL", self.expr(expr)?))
            }
            Expr::In {
                expr,
                list,
                negated,
            } => {
                let not = if *negated { "NOT " } else { "" };
                let list = match list.as_slice() {
                    [] => return Err(invariant("IN requires at least one value")),
                    [Expr::Subquery(query)] => self.select(query)?,
                    values => comma_separated(values, |v| self.expr(v))?,
                };
                Ok(format!("{} {not}IN ({list})", self.expr(expr)?))
            }
            Expr::Between {
                expr,
                low,
                high,
                negated,
            } => {
                let not = if *negated { "NOT " } else { "" };
                Ok(format!(
                    "{} {not}BETWEEN {} AND {}",
                    self.expr(expr)?,
                    self.expr(low)?,
                    self.expr(high)?
                ))
            }
            Expr::Case {
                operand,
                when_clauses,
                else_clause,
            } => self.case(operand.as_deref(), when_clauses, else_clause.as_deref()),
            Expr::Cast { expr, data_type } => Ok(format!(
                "CAST({} AS {})",
                self.expr(expr)?,
                self.data_type(data_type)?
            )),
            Expr::Paren(inner) => Ok(format!("({})", self.expr(inner)?)),
        }
    }

    fn case(
        &self,
        operand: Option<&Expr>,
        when_clauses: &[(Expr, Expr)],
        else_clause: Option<&Expr>,
    ) -> Result<String> {
        if when_clauses.is_empty() {
            return Err(invariant("CASE requires at least one WHEN"));
        }
        let mut sql = String::from("CASE");
        if let Some(operand) = operand {
            sql.push(' ');
            sql.push_str(&self.expr(operand)?);
        }
        for (condition, result) in when_clauses {
            sql.push_str(" WHEN ");
            sql.push_str(&self.expr(condition)?);
            sql.push_str(" THEN ");
            sql.push_str(&self.expr(result)?);
        }
        if let Some(else_clause) = else_clause {
            sql.push_str(" ELSE ");
            sql.push_str(&self.expr(else_clause)?);
        }
        sql.push_str(" END");
        Ok(sql)
    }

    /// Renders one side of a binary expression, parenthesized when the tree
    /// shape would otherwise be lost.
    fn operand(&self, operand: &Expr, parent: BinaryOp, right: bool) -> Result<String> {
        let sql = self.expr(operand)?;
        let needs_parens = match operand {
            Expr::Binary { op, .. } => {
                op.precedence() < parent.precedence()
                    || (right && op.precedence() == parent.precedence())
            }
            _ => false,
        };
        Ok(if needs_parens { format!("({sql})") } else { sql })
    }

    /// Renders the operand of a prefix operator, parenthesized when it is a
    /// binary expression the operator would otherwise split. `NOT` binds
    /// looser than comparisons, unary minus tighter than everything.
    fn unary_operand(&self, op: UnaryOp, operand: &Expr) -> Result<String> {
        let sql = self.expr(operand)?;
        let needs_parens = match (op, operand) {
            (UnaryOp::Neg, Expr::Binary { .. }) => true,
            (UnaryOp::Not, Expr::Binary { op: inner, .. }) => {
                inner.precedence() <= BinaryOp::And.precedence()
            }
            _ => false,
        };
        Ok(if needs_parens { format!("({sql})") } else { sql })
    }

    /// Renders `NAME([DISTINCT] args) [IGNORE NULLS] [OVER (...)]`.
    pub(super) fn function_call(&self, call: &FunctionCall) -> Result<String> {
        if call.name.is_empty() {
            return Err(invariant("function name cannot be empty"));
        }
        let mut sql = self.function_name(&call.name);
        sql.push('(');
        if call.distinct {
            if call.args.is_empty() {
                return Err(invariant("DISTINCT requires at least one argument"));
            }
            sql.push_str("DISTINCT ");
        }
        sql.push_str(&comma_separated(&call.args, |arg| self.expr(arg))?);
        sql.push(')');
        if call.ignore_nulls {
            sql.push_str(" IGNORE NULLS");
        }
        if let Some(window) = &call.over {
            sql.push_str(" OVER (");
            sql.push_str(&self.window_spec(window)?);
            sql.push(')');
        }
        Ok(sql)
    }

    fn window_spec(&self, window: &WindowSpec) -> Result<String> {
        let mut parts = vec![];
        if !window.partition_by.is_empty() {
            parts.push(format!(
                "PARTITION BY {}",
                comma_separated(&window.partition_by, |e| self.expr(e))?
            ));
        }
        if !window.order_by.is_empty() {
            parts.push(format!(
                "ORDER BY {}",
                self.order_by_list("ORDER BY", &window.order_by)?
            ));
        }
        Ok(parts.join(" "))
    }

    /// Upper-cases a function name that reads back as a call, and quotes any
    /// other. `LEFT` and `RIGHT` are reserved but still parse as calls.
    fn function_name(&self, name: &str) -> String {
        let reserved = Keyword::from_str(name)
            .is_some_and(|kw| kw.is_reserved() && !matches!(kw, Keyword::Left | Keyword::Right));
        if is_bare_word(name) && !reserved {
            name.to_ascii_uppercase()
        } else {
            self.dialect.quote_identifier(name)
        }
    }

    /// Renders a CAST target by walking the type tree.
    fn data_type(&self, data_type: &DataType) -> Result<String> {
        match data_type {
            DataType::Simple(name) => self.type_name(name),
            DataType::Sized { name, args } => {
                if args.is_empty() {
                    return Err(invariant("a sized type needs parameters"));
                }
                let args = args
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                Ok(format!("{}({args})", self.type_name(name)?))
            }
            DataType::Array(element) => Ok(format!("ARRAY<{}>", self.data_type(element)?)),
            DataType::Map { key, value } => Ok(format!(
                "MAP<{}, {}>",
                self.data_type(key)?,
                self.data_type(value)?
            )),
            DataType::Struct(fields) => {
                let fields = comma_separated(fields, |field| {
                    if field.name.is_empty() {
                        return Err(invariant("STRUCT field names cannot be empty"));
                    }
                    Ok(format!(
                        "{} {}",
                        self.bare_or_quoted(&field.name),
                        self.data_type(&field.data_type)?
                    ))
                })?;
                Ok(format!("STRUCT<{fields}>"))
            }
        }
    }

    /// Type names are upper-case; one that is not a single word is quoted.
    fn type_name(&self, name: &str) -> Result<String> {
        if name.is_empty() {
            return Err(invariant("type name cannot be empty"));
        }
        Ok(if is_bare_word(name) {
            name.to_ascii_uppercase()
        } else {
            self.dialect.quote_identifier(name)
        })
    }

    fn bare_or_quoted(&self, name: &str) -> String {
        if is_bare_word(name) {
            String::from(name)
        } else {
            self.dialect.quote_identifier(name)
        }
    }
}

/// Writes unary minus, keeping it apart from an operand that starts with `-`
/// so the two never lex as a `--` comment.
fn negate(operand: &str) -> String {
    if operand.starts_with('-') {
        format!("- {operand}")
    } else {
        format!("-{operand}")
    }
}

fn literal_sql(literal: &Literal) -> String {
    match literal {
        Literal::Integer(n) => n.to_string(),
        Literal::Number(text) => text.clone(),
        Literal::String { body, quote } => format!("{quote}{body}{quote}"),
        Literal::Boolean(true) => String::from("TRUE"),
        Literal::Boolean(false) => String::from("FALSE"),
        Literal::Null => String::from("NULL"),
    }
}
