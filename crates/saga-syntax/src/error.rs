//! Crate-level errors.

use thiserror::Error;

use crate::lexer::LexError;
use crate::parser::SyntaxError;

/// Any error that aborts a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source could not be tokenized.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// The token stream does not match the grammar.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl Error {
    /// Returns the 1-based `(line, column)` of the offending token.
    #[must_use]
    pub fn position(&self) -> (u32, u32) {
        match self {
            Self::Lex(err) => (err.line, err.column),
            Self::Syntax(err) => (err.line, err.column),
        }
    }
}

/// Errors reading a [`crate::ParserConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Malformed TOML or a value of the wrong type.
    #[error("invalid parser config: {0}")]
    Toml(String),

    /// A well-typed value outside its allowed range.
    #[error("invalid parser config: {0}")]
    Invalid(String),
}
