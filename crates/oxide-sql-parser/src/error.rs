//! Error types for parsing and serialization.

use crate::lexer::LexError;
use crate::parser::ParseError;

/// Every failure `astify` or `sqlify` can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input contains an illegal character or an unterminated literal.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// The token stream does not match the grammar.
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),

    /// The `database` option names a dialect this crate does not know.
    #[error("unsupported dialect: {0}")]
    UnsupportedDialect(String),

    /// The serializer was handed a structurally invalid AST.
    #[error("invalid AST: {0}")]
    InvariantViolation(String),
}

impl Error {
    /// Returns the byte offset the error points at, for lex and syntax errors.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.span.start),
            Self::Syntax(e) => Some(e.span.start),
            Self::UnsupportedDialect(_) | Self::InvariantViolation(_) => None,
        }
    }
}

/// Result type alias for parser and serializer operations.
pub type Result<T> = std::result::Result<T, Error>;
