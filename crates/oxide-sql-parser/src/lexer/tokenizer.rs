//! SQL Tokenizer implementation.

use super::{Keyword, LexError, Span, Token, TokenKind};

/// Tokenizes `input` in one pass, ending with an EOF token.
///
/// # Errors
///
/// Returns a `LexError` on the first illegal character, unterminated literal
/// or malformed number.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

/// Returns true if `text` lexes as one bare word: an identifier or a keyword.
#[must_use]
pub fn is_bare_word(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(is_word_start) && chars.all(is_word_part)
}

fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A lexer that tokenizes SQL input.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- line comment
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // /* block comment */
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                let comment_start = self.pos;
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {}
                        None => {
                            return Err(LexError::new(
                                "Unterminated block comment",
                                Span::new(comment_start, self.pos),
                            ));
                        }
                    }
                }
                continue;
            }

            return Ok(());
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span and lexeme.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span(), &self.input[self.start..self.pos])
    }

    /// Creates an error covering the current token.
    fn error(&self, message: impl Into<String>) -> LexError {
        LexError::new(message, self.make_span())
    }

    /// Scans an identifier or keyword.
    fn scan_word(&mut self) -> Token {
        while self.peek().is_some_and(is_word_part) {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(String::from(text))),
        }
    }

    /// Scans a backtick-quoted identifier. A doubled backtick stands for one.
    fn scan_quoted_identifier(&mut self) -> Result<Token, LexError> {
        let mut name = String::new();
        loop {
            match self.advance() {
                Some('`') if self.peek() == Some('`') => {
                    self.advance();
                    name.push('`');
                }
                Some('`') => break,
                Some(c) => name.push(c),
                None => return Err(self.error("Unterminated quoted identifier")),
            }
        }
        Ok(self.make_token(TokenKind::Identifier(name)))
    }

    /// Scans a number (integer or decimal/exponent form).
    fn scan_number(&mut self) -> Result<Token, LexError> {
        let mut is_integer = true;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_integer = false;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            is_integer = false;
            self.advance();
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(self.error("Invalid numeric literal: missing exponent digits"));
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(is_word_start) {
            self.advance();
            return Err(self.error(format!(
                "Invalid numeric literal: {}",
                &self.input[self.start..self.pos]
            )));
        }

        let text = &self.input[self.start..self.pos];
        let kind = if is_integer {
            text.parse::<i64>()
                .map_or_else(|_| TokenKind::Number(String::from(text)), TokenKind::Integer)
        } else {
            TokenKind::Number(String::from(text))
        };
        Ok(self.make_token(kind))
    }

    /// Scans a quoted string. The body is kept raw: a doubled quote and a
    /// backslash escape are both left as written.
    fn scan_string(&mut self, quote: char) -> Result<Token, LexError> {
        let body_start = self.pos;
        loop {
            match self.advance() {
                Some('\\') => {
                    if self.advance().is_none() {
                        return Err(self.error("Unterminated string literal"));
                    }
                }
                Some(c) if c == quote => {
                    if self.peek() == Some(quote) {
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(_) => {}
                None => return Err(self.error("Unterminated string literal")),
            }
        }
        let body = String::from(&self.input[body_start..self.pos - quote.len_utf8()]);
        Ok(self.make_token(TokenKind::String { body, quote }))
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns a `LexError` if the input at the current position is not a
    /// valid token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(self.make_token(TokenKind::Eof));
        };

        let token = match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '.' => self.make_token(TokenKind::Dot),
            ':' => self.make_token(TokenKind::Colon),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Percent),
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                }
                self.make_token(TokenKind::Eq)
            }
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                }
                _ => self.make_token(TokenKind::Lt),
            },
            // `>>` is two tokens so nested `ARRAY<ARRAY<INT>>` closes cleanly.
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else {
                    return Err(self.error("Unexpected character: !"));
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    self.make_token(TokenKind::Concat)
                } else {
                    return Err(self.error("Unexpected character: |"));
                }
            }
            '\'' | '"' => self.scan_string(c)?,
            '`' => self.scan_quoted_identifier()?,
            c if c.is_ascii_digit() => self.scan_number()?,
            c if is_word_start(c) => self.scan_word(),
            _ => return Err(self.error(format!("Unexpected character: {c}"))),
        };
        Ok(token)
    }

    /// Tokenizes the entire input and returns all tokens.
    ///
    /// # Errors
    ///
    /// Returns the first `LexError` encountered.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_words() {
        assert!(is_bare_word("my_udf"));
        assert!(is_bare_word("_x1"));
        assert!(is_bare_word("from"));
        assert!(!is_bare_word(""));
        assert!(!is_bare_word("1st"));
        assert!(!is_bare_word("my udf"));
        assert!(!is_bare_word("a.b"));
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap_or_else(|e| panic!("Failed to tokenize {input}: {e}"))
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn ident(name: &str) -> TokenKind {
        TokenKind::Identifier(String::from(name))
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(token_kinds(""), vec![TokenKind::Eof]);
        assert_eq!(token_kinds("   \n\t  "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            token_kinds("SELECT -- comment\n/* block */ FROM"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = tokenize("SELECT /* oops").unwrap_err();
        assert_eq!(err.span.start, 7);
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            token_kinds("select Lateral vIeW"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::Lateral),
                TokenKind::Keyword(Keyword::View),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexeme_preserves_case() {
        let tokens = tokenize("sElEcT Foo").unwrap();
        assert_eq!(tokens[0].lexeme, "sElEcT");
        assert_eq!(tokens[1].lexeme, "Foo");
    }

    #[test]
    fn test_backtick_identifiers() {
        assert_eq!(
            token_kinds("`user id` `select` `a``b`"),
            vec![ident("user id"), ident("select"), ident("a`b"), TokenKind::Eof]
        );
    }

    #[test]
    fn test_unterminated_backtick() {
        assert!(tokenize("SELECT `abc").is_err());
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            token_kinds("42 3.14 1e10 2.5E-3"),
            vec![
                TokenKind::Integer(42),
                TokenKind::Number(String::from("3.14")),
                TokenKind::Number(String::from("1e10")),
                TokenKind::Number(String::from("2.5E-3")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_oversized_integer_kept_as_number() {
        assert_eq!(
            token_kinds("99999999999999999999"),
            vec![
                TokenKind::Number(String::from("99999999999999999999")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_malformed_numbers() {
        assert!(tokenize("1e").is_err());
        assert!(tokenize("12abc").is_err());
    }

    #[test]
    fn test_strings_keep_raw_body() {
        assert_eq!(
            token_kinds(r#"'it''s' "say \"hi\"" 'a\'b'"#),
            vec![
                TokenKind::String {
                    body: String::from("it''s"),
                    quote: '\'',
                },
                TokenKind::String {
                    body: String::from(r#"say \"hi\""#),
                    quote: '"',
                },
                TokenKind::String {
                    body: String::from(r"a\'b"),
                    quote: '\'',
                },
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("SELECT 'abc").unwrap_err();
        assert_eq!(err.span, Span::new(7, 11));
        assert!(err.message.contains("Unterminated string"));
    }

    #[test]
    fn test_illegal_character() {
        let err = tokenize("SELECT a # b").unwrap_err();
        assert_eq!(err.span, Span::new(9, 10));
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds("+ - * / % = == != <> < <= > >= ||"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Eq,
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::NotEq,
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Concat,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_nested_angle_brackets_split() {
        assert_eq!(
            token_kinds("ARRAY<ARRAY<INT>>"),
            vec![
                ident("ARRAY"),
                TokenKind::Lt,
                ident("ARRAY"),
                TokenKind::Lt,
                ident("INT"),
                TokenKind::Gt,
                TokenKind::Gt,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("SELECT id").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(7, 9));
        assert_eq!(tokens[2].span, Span::at(9));
    }
}
