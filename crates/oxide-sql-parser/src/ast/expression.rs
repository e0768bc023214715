//! Expression AST types.

use serde::{Deserialize, Serialize};

use super::{DataType, OrderBy, SelectStatement};

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    /// Integer literal.
    Integer(i64),
    /// Non-integer or out-of-range numeric literal, kept as written.
    Number(String),
    /// String literal. `body` is the raw text between the quotes.
    String {
        /// Raw text between the quotes, escape sequences untouched.
        body: String,
        /// The quote character used in the source.
        quote: char,
    },
    /// Boolean literal.
    Boolean(bool),
    /// NULL literal.
    Null,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Pattern matching
    Like,
    NotLike,
    ILike,
    NotILike,
    RLike,
    NotRLike,

    // Logical
    And,
    Or,

    // String
    Concat,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::ILike => "ILIKE",
            Self::NotILike => "NOT ILIKE",
            Self::RLike => "RLIKE",
            Self::NotRLike => "NOT RLIKE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Concat => "||",
        }
    }

    /// Returns the precedence of the operator (higher = binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Eq
            | Self::NotEq
            | Self::Lt
            | Self::LtEq
            | Self::Gt
            | Self::GtEq
            | Self::Like
            | Self::NotLike
            | Self::ILike
            | Self::NotILike
            | Self::RLike
            | Self::NotRLike => 4,
            Self::Add | Self::Sub | Self::Concat => 5,
            Self::Mul | Self::Div | Self::Mod => 6,
        }
    }

    /// Returns the negated form of a pattern-matching operator.
    #[must_use]
    pub const fn negated(&self) -> Option<Self> {
        match self {
            Self::Like => Some(Self::NotLike),
            Self::ILike => Some(Self::NotILike),
            Self::RLike => Some(Self::NotRLike),
            _ => None,
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Negation (-)
    Neg,
    /// Logical NOT
    Not,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "NOT",
        }
    }
}

/// The `OVER (...)` part of a window function call.
///
/// Frames are not modelled; a window is its partitioning and ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowSpec {
    /// PARTITION BY expressions.
    pub partition_by: Vec<Expr>,
    /// ORDER BY entries. A missing direction means ascending.
    pub order_by: Vec<OrderBy>,
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// The function name, as written.
    pub name: String,
    /// The arguments. `COUNT(*)` has a single wildcard argument.
    pub args: Vec<Expr>,
    /// Whether DISTINCT was specified. Applies to the whole argument list.
    pub distinct: bool,
    /// Whether `IGNORE NULLS` follows the argument list.
    pub ignore_nulls: bool,
    /// Window specification, for `... OVER (...)`.
    pub over: Option<WindowSpec>,
}

impl FunctionCall {
    /// Creates a plain function call.
    #[must_use]
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            args,
            distinct: false,
            ignore_nulls: false,
            over: None,
        }
    }

    /// Marks the argument list as DISTINCT.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Adds the `IGNORE NULLS` modifier.
    #[must_use]
    pub const fn ignore_nulls(mut self) -> Self {
        self.ignore_nulls = true;
        self
    }

    /// Attaches a window specification.
    #[must_use]
    pub fn over(mut self, window: WindowSpec) -> Self {
        self.over = Some(window);
        self
    }
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A column reference, optionally qualified (`t.col`, `db.t.col`).
    Column {
        /// Qualifying parts, outermost first.
        qualifier: Vec<String>,
        /// Column name.
        name: String,
    },

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A unary expression.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },

    /// A function call.
    Function(FunctionCall),

    /// A scalar subquery.
    Subquery(Box<SelectStatement>),

    /// `EXISTS (subquery)`.
    Exists(Box<SelectStatement>),

    /// IS NULL expression.
    IsNull {
        /// The expression to check.
        expr: Box<Expr>,
        /// Whether this is IS NOT NULL.
        negated: bool,
    },

    /// IN expression.
    In {
        /// The expression to check.
        expr: Box<Expr>,
        /// The list of values.
        list: Vec<Expr>,
        /// Whether this is NOT IN.
        negated: bool,
    },

    /// BETWEEN expression.
    Between {
        /// The expression to check.
        expr: Box<Expr>,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
        /// Whether this is NOT BETWEEN.
        negated: bool,
    },

    /// CASE expression.
    Case {
        /// The operand (if any).
        operand: Option<Box<Expr>>,
        /// WHEN/THEN clauses.
        when_clauses: Vec<(Expr, Expr)>,
        /// ELSE clause.
        else_clause: Option<Box<Expr>>,
    },

    /// CAST expression.
    Cast {
        /// Expression to cast.
        expr: Box<Expr>,
        /// Target type.
        data_type: DataType,
    },

    /// Parenthesized expression.
    Paren(Box<Expr>),

    /// Wildcard (`*` or `t.*`).
    Wildcard {
        /// Qualifying parts (empty for a bare `*`).
        qualifier: Vec<String>,
    },
}

impl Expr {
    /// Creates a new column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column {
            qualifier: vec![],
            name: name.into(),
        }
    }

    /// Creates a new qualified column reference.
    #[must_use]
    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column {
            qualifier: vec![table.into()],
            name: name.into(),
        }
    }

    /// Creates an unqualified `*`.
    #[must_use]
    pub const fn wildcard() -> Self {
        Self::Wildcard { qualifier: vec![] }
    }

    /// Creates a new integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Creates a single-quoted string literal from its raw body.
    #[must_use]
    pub fn string(body: impl Into<String>) -> Self {
        Self::Literal(Literal::String {
            body: body.into(),
            quote: '\'',
        })
    }

    /// Creates a new boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a CAST expression.
    #[must_use]
    pub fn cast(self, data_type: DataType) -> Self {
        Self::Cast {
            expr: Box::new(self),
            data_type,
        }
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            negated: false,
        }
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list(self, list: Vec<Self>) -> Self {
        Self::In {
            expr: Box::new(self),
            list,
            negated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_precedence() {
        assert!(BinaryOp::Mul.precedence() > BinaryOp::Add.precedence());
        assert!(BinaryOp::And.precedence() > BinaryOp::Or.precedence());
        assert!(BinaryOp::Eq.precedence() > BinaryOp::And.precedence());
        assert_eq!(BinaryOp::ILike.precedence(), BinaryOp::Eq.precedence());
    }

    #[test]
    fn test_pattern_negation() {
        assert_eq!(BinaryOp::Like.negated(), Some(BinaryOp::NotLike));
        assert_eq!(BinaryOp::ILike.negated(), Some(BinaryOp::NotILike));
        assert_eq!(BinaryOp::Eq.negated(), None);
        assert_eq!(BinaryOp::NotILike.as_str(), "NOT ILIKE");
    }

    #[test]
    fn test_function_call_builder() {
        let call = FunctionCall::new("count", vec![Expr::column("a"), Expr::column("b")]).distinct();
        assert!(call.distinct);
        assert!(!call.ignore_nulls);
        assert_eq!(call.args.len(), 2);
        assert!(call.over.is_none());
    }

    #[test]
    fn test_binary_builder_nests_left() {
        let expr = Expr::column("a")
            .binary(BinaryOp::Concat, Expr::string("-"))
            .binary(BinaryOp::Concat, Expr::column("b"));

        let Expr::Binary { left, op, right } = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(op, BinaryOp::Concat);
        assert_eq!(*right, Expr::column("b"));
        assert!(matches!(*left, Expr::Binary { op: BinaryOp::Concat, .. }));
    }
}
