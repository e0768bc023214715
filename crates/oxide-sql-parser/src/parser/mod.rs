//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! Dialect-specific productions are enabled by the [`Dialect`] passed to
//! [`Parser::new`].
//!
//! [`Dialect`]: crate::dialect::Dialect

mod error;
#[allow(clippy::module_inception)]
mod parser;
mod pratt;

pub use error::ParseError;
pub use parser::Parser;
