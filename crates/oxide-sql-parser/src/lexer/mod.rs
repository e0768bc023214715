//! SQL Lexer/Tokenizer
//!
//! Turns SQL text into a flat sequence of tokens. Lexing does not depend on
//! the dialect: keywords are classified here, but whether a keyword may act
//! as an identifier is decided by the parser.

mod error;
mod span;
mod token;
mod tokenizer;

pub use error::LexError;
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::{is_bare_word, tokenize, Lexer};
