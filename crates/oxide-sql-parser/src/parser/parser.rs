//! SQL Parser implementation.

use tracing::trace;

use super::error::ParseError;
use super::pratt::{
    infix_binding_power, prefix_binding_power, token_to_binary_op, token_to_unary_op,
    NEG_BINDING_POWER,
};
use crate::ast::{
    BinaryOp, DataType, Expr, FromClause, FunctionCall, GroupByItem, JoinClause, JoinType,
    LateralView, Literal, NullOrdering, OrderBy, OrderDirection, OrderingClause, SelectColumn,
    SelectStatement, Statement, StructField, TableRef, WindowSpec,
};
use crate::dialect::Dialect;
use crate::lexer::{tokenize, Keyword, LexError, Span, Token, TokenKind};

/// SQL Parser.
///
/// The input is tokenized up front, so the parser can look ahead as far as a
/// production needs. Which dialect-specific productions are accepted is
/// decided by the [`Dialect`] given at construction.
pub struct Parser<'d> {
    tokens: Vec<Token>,
    pos: usize,
    dialect: &'d dyn Dialect,
}

impl<'d> Parser<'d> {
    /// Creates a new parser for the given input.
    ///
    /// # Errors
    ///
    /// Returns a `LexError` if the input cannot be tokenized.
    pub fn new(input: &str, dialect: &'d dyn Dialect) -> Result<Self, LexError> {
        Ok(Self::from_tokens(tokenize(input)?, dialect))
    }

    /// Creates a parser over an existing token stream.
    ///
    /// An end-of-input token is appended if the stream lacks one.
    #[must_use]
    pub fn from_tokens(mut tokens: Vec<Token>, dialect: &'d dyn Dialect) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token::new(TokenKind::Eof, Span::at(end), ""));
        }
        Self {
            tokens,
            pos: 0,
            dialect,
        }
    }

    /// Parses a single SQL statement, optionally followed by `;`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid SQL statement or
    /// if anything follows it.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let statement = match self.current().as_keyword() {
            Some(Keyword::Select) => Statement::Select(self.parse_select_statement()?),
            _ => return Err(self.unexpected("SELECT")),
        };
        self.consume(&TokenKind::Semicolon);
        if !self.current().is_eof() {
            return Err(self.unexpected("end of input"));
        }
        Ok(statement)
    }

    /// Parses a SELECT statement.
    fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        self.expect_keyword(Keyword::Select)?;

        let distinct = self.consume_keyword(Keyword::Distinct);
        if !distinct {
            self.consume_keyword(Keyword::All);
        }

        let mut select = SelectStatement::new(self.parse_select_columns()?);
        select.distinct = distinct;

        if self.consume_keyword(Keyword::From) {
            select.from = Some(self.parse_from_clause()?);
            select.lateral_views = self.parse_lateral_views()?;
        }

        if self.consume_keyword(Keyword::Where) {
            select.where_clause = Some(self.parse_expression(0)?);
        }

        if self.consume_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            select.group_by = self.parse_group_by_list()?;
        }

        if self.consume_keyword(Keyword::Having) {
            select.having = Some(self.parse_expression(0)?);
        }

        select.ordering = self.parse_ordering_clause()?;

        if self.consume_keyword(Keyword::Limit) {
            select.limit = Some(self.parse_expression(0)?);
        }

        Ok(select)
    }

    /// Parses SELECT columns.
    fn parse_select_columns(&mut self) -> Result<Vec<SelectColumn>, ParseError> {
        let mut columns = vec![];
        loop {
            let expr = self.parse_expression(0)?;
            let alias = self.parse_optional_alias()?;
            columns.push(SelectColumn { expr, alias });
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(columns)
    }

    /// Parses the relation after FROM and its chain of joins.
    fn parse_from_clause(&mut self) -> Result<FromClause, ParseError> {
        let mut from = FromClause::new(self.parse_table_ref()?);
        while self.is_join_start() {
            from.joins.push(self.parse_join()?);
        }
        Ok(from)
    }

    /// Parses a table reference.
    fn parse_table_ref(&mut self) -> Result<TableRef, ParseError> {
        if self.consume(&TokenKind::LeftParen) {
            if !self.check_keyword(Keyword::Select) {
                return Err(self.unexpected("SELECT"));
            }
            let query = self.parse_select_statement()?;
            self.expect(&TokenKind::RightParen)?;
            let alias = self.parse_optional_alias()?;
            return Ok(TableRef::Subquery {
                query: Box::new(query),
                alias,
            });
        }

        let first = self.expect_identifier()?;
        let (schema, name) = if self.consume(&TokenKind::Dot) {
            (Some(first), self.expect_name()?)
        } else {
            (None, first)
        };
        let alias = self.parse_optional_alias()?;
        Ok(TableRef::Table {
            schema,
            name,
            alias,
        })
    }

    fn is_join_start(&self) -> bool {
        matches!(
            self.current().as_keyword(),
            Some(
                Keyword::Join
                    | Keyword::Inner
                    | Keyword::Left
                    | Keyword::Right
                    | Keyword::Full
                    | Keyword::Cross
            )
        )
    }

    /// Parses one join: type, table, and ON or USING.
    fn parse_join(&mut self) -> Result<JoinClause, ParseError> {
        let join_type = self.parse_join_type()?;
        trace!(dialect = self.dialect.name(), join = join_type.as_str(), "parsing join");
        let table = self.parse_table_ref()?;
        let mut join = JoinClause {
            join_type,
            table,
            on: None,
            using: vec![],
        };

        if join_type != JoinType::Cross {
            if self.consume_keyword(Keyword::On) {
                join.on = Some(self.parse_expression(0)?);
            } else if self.consume_keyword(Keyword::Using) {
                self.expect(&TokenKind::LeftParen)?;
                join.using = self.parse_identifier_list()?;
                self.expect(&TokenKind::RightParen)?;
            }
        }
        Ok(join)
    }

    /// Parses the keywords of a join up to and including JOIN.
    ///
    /// The semi/anti forms are tried before the outer joins so that
    /// `LEFT SEMI JOIN` never reads as a LEFT JOIN.
    fn parse_join_type(&mut self) -> Result<JoinType, ParseError> {
        let join_type = match self.current().as_keyword() {
            Some(Keyword::Join) => {
                self.advance();
                return Ok(JoinType::Inner);
            }
            Some(Keyword::Inner) => {
                self.advance();
                JoinType::Inner
            }
            Some(Keyword::Left) => {
                self.advance();
                match self.current().as_keyword() {
                    Some(kw @ (Keyword::Semi | Keyword::Anti)) => {
                        if !self.dialect.supports_semi_anti_join() {
                            return Err(self.unsupported(&format!("LEFT {} JOIN", kw.as_str())));
                        }
                        self.advance();
                        if kw == Keyword::Semi {
                            JoinType::LeftSemi
                        } else {
                            JoinType::LeftAnti
                        }
                    }
                    _ => {
                        self.consume_keyword(Keyword::Outer);
                        JoinType::Left
                    }
                }
            }
            Some(Keyword::Right) => {
                self.advance();
                self.consume_keyword(Keyword::Outer);
                JoinType::Right
            }
            Some(Keyword::Full) => {
                self.advance();
                self.consume_keyword(Keyword::Outer);
                JoinType::Full
            }
            Some(Keyword::Cross) => {
                self.advance();
                JoinType::Cross
            }
            _ => return Err(self.unexpected("JOIN")),
        };
        self.expect_keyword(Keyword::Join)?;
        Ok(join_type)
    }

    /// Parses zero or more `LATERAL VIEW [OUTER] func(args) alias AS col, ...`.
    fn parse_lateral_views(&mut self) -> Result<Vec<LateralView>, ParseError> {
        let mut views = vec![];
        while self.check_keyword(Keyword::Lateral) {
            if !self.dialect.supports_lateral_view() {
                return Err(self.unsupported("LATERAL VIEW"));
            }
            trace!(dialect = self.dialect.name(), "parsing LATERAL VIEW");
            self.advance();
            self.expect_keyword(Keyword::View)?;
            let outer = self.consume_keyword(Keyword::Outer);
            let name = self.expect_identifier()?;
            let function = self.parse_function_call(name)?;
            let table_alias = self.expect_identifier()?;
            self.expect_keyword(Keyword::As)?;
            let column_aliases = self.parse_identifier_list()?;
            views.push(LateralView {
                outer,
                function,
                table_alias,
                column_aliases,
            });
        }
        Ok(views)
    }

    /// Parses GROUP BY entries. A positive integer literal is an ordinal.
    fn parse_group_by_list(&mut self) -> Result<Vec<GroupByItem>, ParseError> {
        let mut items = vec![];
        loop {
            let item = match self.parse_expression(0)? {
                Expr::Literal(Literal::Integer(n)) if n > 0 => {
                    GroupByItem::Ordinal(n.unsigned_abs())
                }
                expr => GroupByItem::Expr(expr),
            };
            items.push(item);
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    /// Parses the optional trailing ORDER BY / SORT BY / DISTRIBUTE BY /
    /// CLUSTER BY clause.
    fn parse_ordering_clause(&mut self) -> Result<Option<OrderingClause>, ParseError> {
        let clause = match self.current().as_keyword() {
            Some(Keyword::Order) => {
                self.advance();
                self.expect_keyword(Keyword::By)?;
                OrderingClause::OrderBy(self.parse_order_by_list()?)
            }
            Some(kw @ (Keyword::Sort | Keyword::Distribute | Keyword::Cluster)) => {
                if !self.dialect.supports_distribute_sort_cluster() {
                    return Err(self.unsupported(&format!("{} BY", kw.as_str())));
                }
                trace!(
                    dialect = self.dialect.name(),
                    clause = kw.as_str(),
                    "parsing ordering clause"
                );
                self.advance();
                self.expect_keyword(Keyword::By)?;
                self.parse_partitioned_ordering(kw)?
            }
            _ => return Ok(None),
        };

        if let Some(kw @ (Keyword::Order | Keyword::Sort | Keyword::Distribute | Keyword::Cluster)) =
            self.current().as_keyword()
        {
            return Err(ParseError::new(
                format!("{} BY cannot follow {}", kw.as_str(), clause.as_str()),
                self.current().span,
            ));
        }
        Ok(Some(clause))
    }

    /// Parses the body of SORT BY, DISTRIBUTE BY or CLUSTER BY, whose `BY`
    /// has already been consumed.
    fn parse_partitioned_ordering(
        &mut self,
        keyword: Keyword,
    ) -> Result<OrderingClause, ParseError> {
        let rules = self.dialect.ordering_rules();
        match keyword {
            Keyword::Sort => Ok(OrderingClause::SortBy(self.parse_order_by_list()?)),
            Keyword::Distribute => {
                let items = self.parse_key_list()?;
                let sort_by = self.parse_trailing_sort_by(rules.sort_after_distribute, keyword)?;
                Ok(OrderingClause::DistributeBy { items, sort_by })
            }
            _ => {
                let items = self.parse_key_list()?;
                let sort_by = self.parse_trailing_sort_by(rules.sort_after_cluster, keyword)?;
                Ok(OrderingClause::ClusterBy { items, sort_by })
            }
        }
    }

    fn parse_trailing_sort_by(
        &mut self,
        allowed: bool,
        after: Keyword,
    ) -> Result<Option<Vec<OrderBy>>, ParseError> {
        if !self.check_keyword(Keyword::Sort) {
            return Ok(None);
        }
        if !allowed {
            return Err(ParseError::new(
                format!(
                    "SORT BY cannot follow {} BY in the {} dialect",
                    after.as_str(),
                    self.dialect.name()
                ),
                self.current().span,
            ));
        }
        self.advance();
        self.expect_keyword(Keyword::By)?;
        Ok(Some(self.parse_order_by_list()?))
    }

    /// Parses distribution keys, which take no direction.
    fn parse_key_list(&mut self) -> Result<Vec<OrderBy>, ParseError> {
        Ok(self
            .parse_expression_list()?
            .into_iter()
            .map(OrderBy::new)
            .collect())
    }

    /// Parses ORDER BY items.
    fn parse_order_by_list(&mut self) -> Result<Vec<OrderBy>, ParseError> {
        let mut items = vec![];
        loop {
            let expr = self.parse_expression(0)?;
            let direction = if self.consume_keyword(Keyword::Asc) {
                Some(OrderDirection::Asc)
            } else if self.consume_keyword(Keyword::Desc) {
                Some(OrderDirection::Desc)
            } else {
                None
            };
            let nulls = if self.consume_keyword(Keyword::Nulls) {
                if self.consume_keyword(Keyword::First) {
                    Some(NullOrdering::First)
                } else if self.consume_keyword(Keyword::Last) {
                    Some(NullOrdering::Last)
                } else {
                    return Err(self.unexpected("FIRST or LAST"));
                }
            } else {
                None
            };
            items.push(OrderBy {
                expr,
                direction,
                nulls,
            });
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    /// Parses an expression using Pratt parsing.
    fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_prefix()?;

        while let Some((l_bp, r_bp)) = infix_binding_power(&self.current().kind) {
            if l_bp < min_bp {
                break;
            }

            lhs = match self.current().as_keyword() {
                Some(Keyword::Is) => {
                    self.advance();
                    let negated = self.consume_keyword(Keyword::Not);
                    self.expect_keyword(Keyword::Null)?;
                    Expr::IsNull {
                        expr: Box::new(lhs),
                        negated,
                    }
                }
                Some(Keyword::In) => {
                    self.advance();
                    self.parse_in_list(lhs, false)?
                }
                Some(Keyword::Between) => {
                    self.advance();
                    self.parse_between(lhs, false, r_bp)?
                }
                Some(kw @ (Keyword::Like | Keyword::Ilike | Keyword::Rlike)) => {
                    let op = self.pattern_op(kw, false)?;
                    self.advance();
                    lhs.binary(op, self.parse_expression(r_bp)?)
                }
                Some(Keyword::Not) => match self.peek_keyword(1) {
                    Some(Keyword::In) => {
                        self.advance();
                        self.advance();
                        self.parse_in_list(lhs, true)?
                    }
                    Some(Keyword::Between) => {
                        self.advance();
                        self.advance();
                        self.parse_between(lhs, true, r_bp)?
                    }
                    Some(kw @ (Keyword::Like | Keyword::Ilike | Keyword::Rlike)) => {
                        self.advance();
                        let op = self.pattern_op(kw, true)?;
                        self.advance();
                        lhs.binary(op, self.parse_expression(r_bp)?)
                    }
                    _ => break,
                },
                _ => {
                    let Some(op) = token_to_binary_op(&self.current().kind) else {
                        break;
                    };
                    self.advance();
                    lhs.binary(op, self.parse_expression(r_bp)?)
                }
            };
        }

        Ok(lhs)
    }

    /// Resolves a pattern-matching keyword against the dialect.
    fn pattern_op(&self, keyword: Keyword, negated: bool) -> Result<BinaryOp, ParseError> {
        let op = match keyword {
            Keyword::Ilike if self.dialect.supports_ilike() => BinaryOp::ILike,
            Keyword::Rlike if self.dialect.supports_rlike() => BinaryOp::RLike,
            Keyword::Ilike | Keyword::Rlike => return Err(self.unsupported(keyword.as_str())),
            _ => BinaryOp::Like,
        };
        Ok(if negated {
            op.negated().unwrap_or(op)
        } else {
            op
        })
    }

    fn parse_in_list(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let list = if self.check_keyword(Keyword::Select) {
            vec![Expr::Subquery(Box::new(self.parse_select_statement()?))]
        } else {
            self.parse_expression_list()?
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::In {
            expr: Box::new(expr),
            list,
            negated,
        })
    }

    fn parse_between(&mut self, expr: Expr, negated: bool, bp: u8) -> Result<Expr, ParseError> {
        let low = self.parse_expression(bp)?;
        self.expect_keyword(Keyword::And)?;
        let high = self.parse_expression(bp)?;
        Ok(Expr::Between {
            expr: Box::new(expr),
            low: Box::new(low),
            high: Box::new(high),
            negated,
        })
    }

    /// Parses a prefix expression.
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = token_to_unary_op(&self.current().kind) {
            let bp = prefix_binding_power(&self.current().kind).unwrap_or(NEG_BINDING_POWER);
            self.advance();
            let operand = self.parse_expression(bp)?;
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
            });
        }

        self.parse_primary()
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();

        let literal = match token.kind {
            TokenKind::Integer(n) => Some(Expr::integer(n)),
            TokenKind::Number(ref text) => Some(Expr::Literal(Literal::Number(text.clone()))),
            TokenKind::String { ref body, quote }
                if quote != '"' || self.dialect.double_quoted_strings() =>
            {
                Some(Expr::Literal(Literal::String {
                    body: body.clone(),
                    quote,
                }))
            }
            TokenKind::Keyword(Keyword::True) => Some(Expr::boolean(true)),
            TokenKind::Keyword(Keyword::False) => Some(Expr::boolean(false)),
            TokenKind::Keyword(Keyword::Null) => Some(Expr::null()),
            TokenKind::Star => Some(Expr::wildcard()),
            _ => None,
        };
        if let Some(literal) = literal {
            self.advance();
            return Ok(literal);
        }

        match token.kind {
            // Parenthesized expression or subquery
            TokenKind::LeftParen => {
                self.advance();
                if self.check_keyword(Keyword::Select) {
                    let query = self.parse_select_statement()?;
                    self.expect(&TokenKind::RightParen)?;
                    Ok(Expr::Subquery(Box::new(query)))
                } else {
                    let expr = self.parse_expression(0)?;
                    self.expect(&TokenKind::RightParen)?;
                    Ok(Expr::Paren(Box::new(expr)))
                }
            }

            TokenKind::Keyword(Keyword::Cast) => self.parse_cast(),
            TokenKind::Keyword(Keyword::Case) => self.parse_case(),
            TokenKind::Keyword(Keyword::Exists) => {
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let query = self.parse_select_statement()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(Expr::Exists(Box::new(query)))
            }

            // LEFT(s, n) and RIGHT(s, n) are string functions
            TokenKind::Keyword(Keyword::Left | Keyword::Right)
                if *self.peek_kind(1) == TokenKind::LeftParen =>
            {
                self.advance();
                Ok(Expr::Function(self.parse_function_call(token.lexeme)?))
            }

            _ => {
                let Some(name) = self.current_identifier() else {
                    return Err(self.unexpected("expression"));
                };
                self.advance();
                self.parse_identifier_expression(name)
            }
        }
    }

    /// Parses what follows a leading identifier: a call, a qualified column,
    /// or a qualified wildcard.
    fn parse_identifier_expression(&mut self, first: String) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::LeftParen) {
            return Ok(Expr::Function(self.parse_function_call(first)?));
        }

        let mut parts = vec![first];
        while self.consume(&TokenKind::Dot) {
            if self.consume(&TokenKind::Star) {
                return Ok(Expr::Wildcard { qualifier: parts });
            }
            parts.push(self.expect_name()?);
        }
        let name = parts.pop().unwrap_or_default();
        Ok(Expr::Column {
            qualifier: parts,
            name,
        })
    }

    /// Parses `(args)` and any `IGNORE NULLS` / `OVER (...)` suffix of a call
    /// whose name has already been consumed.
    fn parse_function_call(&mut self, name: String) -> Result<FunctionCall, ParseError> {
        self.expect(&TokenKind::LeftParen)?;

        let distinct = self.consume_keyword(Keyword::Distinct);
        if !distinct {
            self.consume_keyword(Keyword::All);
        }

        let args = if !distinct && self.check(&TokenKind::RightParen) {
            vec![]
        } else if self.check(&TokenKind::Star) && *self.peek_kind(1) == TokenKind::RightParen {
            self.advance();
            vec![Expr::wildcard()]
        } else {
            self.parse_expression_list()?
        };
        self.expect(&TokenKind::RightParen)?;

        let mut call = FunctionCall::new(name, args);
        call.distinct = distinct;

        if self.check_keyword(Keyword::Ignore) && self.peek_keyword(1) == Some(Keyword::Nulls) {
            self.advance();
            self.advance();
            call.ignore_nulls = true;
        }

        if self.check_keyword(Keyword::Over) && *self.peek_kind(1) == TokenKind::LeftParen {
            self.advance();
            trace!(function = %call.name, "parsing window specification");
            call.over = Some(self.parse_window_spec()?);
        }

        Ok(call)
    }

    /// Parses `(PARTITION BY ... ORDER BY ...)`. Frames are not accepted.
    fn parse_window_spec(&mut self) -> Result<WindowSpec, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut window = WindowSpec::default();
        if self.consume_keyword(Keyword::Partition) {
            self.expect_keyword(Keyword::By)?;
            window.partition_by = self.parse_expression_list()?;
        }
        if self.consume_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            window.order_by = self.parse_order_by_list()?;
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(window)
    }

    /// Parses a CAST expression.
    fn parse_cast(&mut self) -> Result<Expr, ParseError> {
        self.expect_keyword(Keyword::Cast)?;
        self.expect(&TokenKind::LeftParen)?;
        let expr = self.parse_expression(0)?;
        self.expect_keyword(Keyword::As)?;
        let data_type = self.parse_data_type()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(expr.cast(data_type))
    }

    /// Parses a data type, recursing into ARRAY, MAP and STRUCT.
    fn parse_data_type(&mut self) -> Result<DataType, ParseError> {
        let Some(name) = self.current_name() else {
            return Err(self.unexpected("data type"));
        };
        self.advance();
        let upper = name.to_ascii_uppercase();

        match upper.as_str() {
            "ARRAY" if self.consume(&TokenKind::Lt) => {
                let element = self.parse_data_type()?;
                self.expect(&TokenKind::Gt)?;
                Ok(DataType::array(element))
            }
            "MAP" if self.consume(&TokenKind::Lt) => {
                let key = self.parse_data_type()?;
                self.expect(&TokenKind::Comma)?;
                let value = self.parse_data_type()?;
                self.expect(&TokenKind::Gt)?;
                Ok(DataType::map(key, value))
            }
            // `<>` is lexed as a single not-equal token
            "STRUCT" if self.current().lexeme == "<>" => {
                self.advance();
                Ok(DataType::Struct(vec![]))
            }
            "STRUCT" if self.consume(&TokenKind::Lt) => {
                let mut fields = vec![];
                loop {
                    let field_name = self.expect_name()?;
                    self.consume(&TokenKind::Colon);
                    fields.push(StructField::new(field_name, self.parse_data_type()?));
                    if !self.consume(&TokenKind::Comma) {
                        break;
                    }
                }
                self.expect(&TokenKind::Gt)?;
                Ok(DataType::Struct(fields))
            }
            _ if self.consume(&TokenKind::LeftParen) => {
                let mut args = vec![];
                loop {
                    let token = self.current();
                    let arg = match token.kind {
                        TokenKind::Integer(n) => u32::try_from(n).map_err(|_| {
                            ParseError::new("type parameter out of range", token.span)
                        })?,
                        _ => return Err(self.unexpected("integer")),
                    };
                    self.advance();
                    args.push(arg);
                    if !self.consume(&TokenKind::Comma) {
                        break;
                    }
                }
                self.expect(&TokenKind::RightParen)?;
                Ok(DataType::Sized { name: upper, args })
            }
            _ => Ok(DataType::Simple(upper)),
        }
    }

    /// Parses a CASE expression.
    fn parse_case(&mut self) -> Result<Expr, ParseError> {
        self.expect_keyword(Keyword::Case)?;

        let operand = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expression(0)?))
        };

        let mut when_clauses = vec![];
        while self.consume_keyword(Keyword::When) {
            let condition = self.parse_expression(0)?;
            self.expect_keyword(Keyword::Then)?;
            let result = self.parse_expression(0)?;
            when_clauses.push((condition, result));
        }
        if when_clauses.is_empty() {
            return Err(self.unexpected("WHEN"));
        }

        let else_clause = if self.consume_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expression(0)?))
        } else {
            None
        };

        self.expect_keyword(Keyword::End)?;

        Ok(Expr::Case {
            operand,
            when_clauses,
            else_clause,
        })
    }

    /// Parses a comma-separated list of expressions.
    fn parse_expression_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![self.parse_expression(0)?];
        while self.consume(&TokenKind::Comma) {
            exprs.push(self.parse_expression(0)?);
        }
        Ok(exprs)
    }

    /// Parses a comma-separated list of identifiers.
    fn parse_identifier_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut names = vec![self.expect_identifier()?];
        while self.consume(&TokenKind::Comma) {
            names.push(self.expect_identifier()?);
        }
        Ok(names)
    }

    /// Parses `AS alias`, or a bare alias when the next word can only be one.
    fn parse_optional_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.consume_keyword(Keyword::As) || self.at_implicit_alias() {
            return self.expect_identifier().map(Some);
        }
        Ok(None)
    }

    fn at_implicit_alias(&self) -> bool {
        match self.current().as_keyword() {
            Some(kw) => !kw.is_reserved() && !kw.starts_clause(),
            None => self.current_identifier().is_some(),
        }
    }

    // Token helpers

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_kind(&self, offset: usize) -> &TokenKind {
        let index = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[index].kind
    }

    fn peek_keyword(&self, offset: usize) -> Option<Keyword> {
        match self.peek_kind(offset) {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// Advances to the next token. The end-of-input token is never passed.
    fn advance(&mut self) {
        if !self.current().is_eof() {
            self.pos += 1;
        }
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current().kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current().as_keyword() == Some(keyword)
    }

    fn consume(&mut self, kind: &TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    fn consume_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance();
        }
        matched
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.consume(kind) {
            Ok(())
        } else {
            Err(self.unexpected(&kind.describe()))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.consume_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Returns the name spelled by the current token if it can stand for a
    /// column or table: a bare or backtick-quoted identifier, a non-reserved
    /// keyword, or a double-quoted name where `"` does not delimit strings.
    fn current_identifier(&self) -> Option<String> {
        let token = self.current();
        match &token.kind {
            TokenKind::Identifier(name) => Some(name.clone()),
            TokenKind::Keyword(kw) if !kw.is_reserved() => Some(token.lexeme.clone()),
            TokenKind::String { body, quote: '"' } if !self.dialect.double_quoted_strings() => {
                Some(body.replace("\"\"", "\""))
            }
            _ => None,
        }
    }

    /// Like [`Self::current_identifier`], but reserved keywords are accepted
    /// too. Used after a dot and for struct field names.
    fn current_name(&self) -> Option<String> {
        match &self.current().kind {
            TokenKind::Keyword(_) => Some(self.current().lexeme.clone()),
            _ => self.current_identifier(),
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        let Some(name) = self.current_identifier() else {
            return Err(self.unexpected("identifier"));
        };
        self.advance();
        Ok(name)
    }

    fn expect_name(&mut self) -> Result<String, ParseError> {
        let Some(name) = self.current_name() else {
            return Err(self.unexpected("identifier"));
        };
        self.advance();
        Ok(name)
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        if token.is_eof() {
            ParseError::unexpected_eof(expected, token.span)
        } else {
            ParseError::unexpected(expected, token.kind.clone(), token.span)
        }
    }

    fn unsupported(&self, feature: &str) -> ParseError {
        ParseError::unsupported(feature, self.dialect.name(), self.current().span)
    }
}
