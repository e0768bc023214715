//! Parser error types.

use crate::lexer::{Span, TokenKind};

/// A syntax error: the token stream does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {span}")]
pub struct ParseError {
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: TokenKind, span: Span) -> Self {
        let expected_str: String = expected.into();
        Self {
            message: format!(
                "Unexpected token: expected {}, found {}",
                expected_str,
                found.describe()
            ),
            span,
            expected: Some(expected_str),
            found: Some(found),
        }
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        let expected_str: String = expected.into();
        Self {
            message: format!("Unexpected end of input: expected {expected_str}"),
            span,
            expected: Some(expected_str),
            found: Some(TokenKind::Eof),
        }
    }

    /// Creates an error for a construct the active dialect does not enable.
    #[must_use]
    pub fn unsupported(feature: &str, dialect: &str, span: Span) -> Self {
        Self::new(
            format!("{feature} is not supported by the {dialect} dialect"),
            span,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Keyword;

    #[test]
    fn test_unexpected_message() {
        let err = ParseError::unexpected(
            "identifier",
            TokenKind::Keyword(Keyword::From),
            Span::new(7, 11),
        );
        assert_eq!(err.expected.as_deref(), Some("identifier"));
        assert_eq!(
            err.to_string(),
            "Unexpected token: expected identifier, found keyword FROM at position 7..11"
        );
    }

    #[test]
    fn test_unexpected_eof() {
        let err = ParseError::unexpected_eof("SELECT", Span::at(0));
        assert_eq!(err.found, Some(TokenKind::Eof));
    }
}
