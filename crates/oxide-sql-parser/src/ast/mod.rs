//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! The tree is plain owned data; every node derives `serde` traits so an AST
//! can be inspected or stored as JSON.

mod expression;
mod statement;
mod types;

pub use expression::{BinaryOp, Expr, FunctionCall, Literal, UnaryOp, WindowSpec};
pub use statement::{
    FromClause, GroupByItem, JoinClause, JoinType, LateralView, NullOrdering, OrderBy,
    OrderDirection, OrderingClause, SelectColumn, SelectStatement, Statement, TableRef,
};
pub use types::{DataType, StructField};
