//! Token types for the SQL lexer.

use super::Span;

/// SQL keywords recognized by the grammar.
///
/// Keywords are split into reserved words, which can never be used as a bare
/// identifier, and contextual words such as `SORT` or `DESC`, which the parser
/// accepts as identifiers wherever a keyword would make no sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Query clauses
    Select,
    From,
    Where,
    Group,
    By,
    Having,
    Order,
    Sort,
    Distribute,
    Cluster,
    Limit,
    Distinct,
    All,
    As,

    // Joins
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    Semi,
    Anti,
    On,
    Using,

    // Lateral views
    Lateral,
    View,

    // Logical and comparison operators
    And,
    Or,
    Not,
    In,
    Between,
    Like,
    Ilike,
    Rlike,
    Is,
    Exists,

    // Literals
    Null,
    True,
    False,

    // Ordering
    Asc,
    Desc,
    Nulls,
    First,
    Last,

    // Expressions
    Case,
    When,
    Then,
    Else,
    End,
    Cast,

    // Windows
    Over,
    Partition,
    Ignore,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "GROUP" => Some(Self::Group),
            "BY" => Some(Self::By),
            "HAVING" => Some(Self::Having),
            "ORDER" => Some(Self::Order),
            "SORT" => Some(Self::Sort),
            "DISTRIBUTE" => Some(Self::Distribute),
            "CLUSTER" => Some(Self::Cluster),
            "LIMIT" => Some(Self::Limit),
            "DISTINCT" => Some(Self::Distinct),
            "ALL" => Some(Self::All),
            "AS" => Some(Self::As),
            "JOIN" => Some(Self::Join),
            "INNER" => Some(Self::Inner),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "FULL" => Some(Self::Full),
            "OUTER" => Some(Self::Outer),
            "CROSS" => Some(Self::Cross),
            "SEMI" => Some(Self::Semi),
            "ANTI" => Some(Self::Anti),
            "ON" => Some(Self::On),
            "USING" => Some(Self::Using),
            "LATERAL" => Some(Self::Lateral),
            "VIEW" => Some(Self::View),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IN" => Some(Self::In),
            "BETWEEN" => Some(Self::Between),
            "LIKE" => Some(Self::Like),
            "ILIKE" => Some(Self::Ilike),
            "RLIKE" => Some(Self::Rlike),
            "IS" => Some(Self::Is),
            "EXISTS" => Some(Self::Exists),
            "NULL" => Some(Self::Null),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "NULLS" => Some(Self::Nulls),
            "FIRST" => Some(Self::First),
            "LAST" => Some(Self::Last),
            "CASE" => Some(Self::Case),
            "WHEN" => Some(Self::When),
            "THEN" => Some(Self::Then),
            "ELSE" => Some(Self::Else),
            "END" => Some(Self::End),
            "CAST" => Some(Self::Cast),
            "OVER" => Some(Self::Over),
            "PARTITION" => Some(Self::Partition),
            "IGNORE" => Some(Self::Ignore),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Sort => "SORT",
            Self::Distribute => "DISTRIBUTE",
            Self::Cluster => "CLUSTER",
            Self::Limit => "LIMIT",
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
            Self::As => "AS",
            Self::Join => "JOIN",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Outer => "OUTER",
            Self::Cross => "CROSS",
            Self::Semi => "SEMI",
            Self::Anti => "ANTI",
            Self::On => "ON",
            Self::Using => "USING",
            Self::Lateral => "LATERAL",
            Self::View => "VIEW",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
            Self::Ilike => "ILIKE",
            Self::Rlike => "RLIKE",
            Self::Is => "IS",
            Self::Exists => "EXISTS",
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Nulls => "NULLS",
            Self::First => "FIRST",
            Self::Last => "LAST",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Cast => "CAST",
            Self::Over => "OVER",
            Self::Partition => "PARTITION",
            Self::Ignore => "IGNORE",
        }
    }

    /// Returns true if the keyword can never be used as a bare identifier.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        !matches!(
            self,
            Self::By
                | Self::Sort
                | Self::Distribute
                | Self::Cluster
                | Self::Outer
                | Self::Semi
                | Self::Anti
                | Self::Lateral
                | Self::View
                | Self::Asc
                | Self::Desc
                | Self::Nulls
                | Self::First
                | Self::Last
                | Self::Over
                | Self::Partition
                | Self::Ignore
        )
    }

    /// Returns true if the keyword opens a trailing query clause.
    ///
    /// These words are not reserved, but they are never taken as an implicit
    /// (AS-less) alias.
    #[must_use]
    pub const fn starts_clause(&self) -> bool {
        matches!(
            self,
            Self::Sort | Self::Distribute | Self::Cluster | Self::Lateral
        )
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    /// Integer literal that fits in an `i64` (e.g., 42)
    Integer(i64),
    /// Any other numeric literal, kept as written (e.g., 3.14, 1e10)
    Number(String),
    /// Quoted string. `body` is the raw text between the quotes, escape
    /// sequences untouched.
    String {
        /// Raw text between the quotes.
        body: String,
        /// The quote character, `'` or `"`.
        quote: char,
    },

    // Identifiers and keywords
    /// Identifier, bare or backtick-quoted (quotes removed)
    Identifier(String),
    /// SQL keyword
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// = or ==
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// ||
    Concat,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// :
    Colon,

    // Special
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns a short human-readable description used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Integer(n) => format!("integer {n}"),
            Self::Number(text) => format!("number {text}"),
            Self::String { body, quote } => format!("string {quote}{body}{quote}"),
            Self::Identifier(name) => format!("identifier {name}"),
            Self::Keyword(kw) => format!("keyword {}", kw.as_str()),
            Self::Plus => String::from("'+'"),
            Self::Minus => String::from("'-'"),
            Self::Star => String::from("'*'"),
            Self::Slash => String::from("'/'"),
            Self::Percent => String::from("'%'"),
            Self::Eq => String::from("'='"),
            Self::NotEq => String::from("'!='"),
            Self::Lt => String::from("'<'"),
            Self::LtEq => String::from("'<='"),
            Self::Gt => String::from("'>'"),
            Self::GtEq => String::from("'>='"),
            Self::Concat => String::from("'||'"),
            Self::LeftParen => String::from("'('"),
            Self::RightParen => String::from("')'"),
            Self::Comma => String::from("','"),
            Self::Semicolon => String::from("';'"),
            Self::Dot => String::from("'.'"),
            Self::Colon => String::from("':'"),
            Self::Eof => String::from("end of input"),
        }
    }
}

/// A token with its span and raw lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
    /// The source text of the token, exactly as written.
    pub lexeme: String,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, span: Span, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            lexeme: lexeme.into(),
        }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("distribute"), Some(Keyword::Distribute));
        assert_eq!(Keyword::from_str("RLike"), Some(Keyword::Rlike));
        assert_eq!(Keyword::from_str("explode"), None);
    }

    #[test]
    fn test_keyword_round_trips_through_as_str() {
        for kw in [
            Keyword::Lateral,
            Keyword::Semi,
            Keyword::Anti,
            Keyword::Ignore,
            Keyword::Partition,
        ] {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_reserved_words() {
        assert!(Keyword::Select.is_reserved());
        assert!(Keyword::Left.is_reserved());
        assert!(!Keyword::Desc.is_reserved());
        assert!(!Keyword::Sort.is_reserved());
        assert!(Keyword::Sort.starts_clause());
        assert!(!Keyword::Desc.starts_clause());
    }

    #[test]
    fn test_token_as_keyword() {
        let select = Token::new(TokenKind::Keyword(Keyword::Select), Span::new(0, 6), "select");
        let plus = Token::new(TokenKind::Plus, Span::new(0, 1), "+");
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert_eq!(plus.as_keyword(), None);
        assert!(Token::new(TokenKind::Eof, Span::at(0), "").is_eof());
    }

    #[test]
    fn test_describe() {
        assert_eq!(TokenKind::Eof.describe(), "end of input");
        assert_eq!(
            TokenKind::Keyword(Keyword::From).describe(),
            "keyword FROM"
        );
    }
}
