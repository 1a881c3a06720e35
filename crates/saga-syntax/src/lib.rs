//! `saga-syntax` - Lexer, parser, and concrete syntax tree for the saga
//! scripting language.
//!
//! Saga scripts are indentation-structured: a block header such as
//! `if ready` or `foreach items as item` is followed by an indented body.
//! This crate turns source text into a tree that later stages query by
//! rule name:
//!
//! - **Lexer**: Tokenizes source text and turns indentation into
//!   `INDENT`/`DEDENT` tokens
//! - **Parser**: Builds a concrete syntax tree (CST) from tokens
//! - **Syntax Tree**: Lossless representation of the source code, with a
//!   [`Tree`] view addressed by dotted rule-name paths
//!
//! # Design Principles
//!
//! This crate follows the design of `rust-analyzer` and uses the `rowan` library
//! for building lossless syntax trees. Key design decisions:
//!
//! - **Lossless**: All source text is preserved, including whitespace and comments
//! - **Fail-fast**: The first lexical or syntax error is returned; there is
//!   no partial tree
//! - **Immutable**: Parse results share their green tree and are `Send + Sync`
//!
//! # Example
//!
//! ```
//! use saga_syntax::{parse, TokenKind};
//!
//! let tree = parse("if ready\n\tcount = 3 + 4\n").unwrap().tree();
//!
//! let statement = tree.node("block.if_block.if_statement").unwrap();
//! assert_eq!(statement.child(1).unwrap(), (TokenKind::Ident, "ready"));
//!
//! let operation = tree.node("nested_block.block.line.assignments.operation").unwrap();
//! assert_eq!(operation.node("operator").unwrap().text(), "+");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod syntax;
mod token_kinds;

pub use config::{IndentationPolicy, ParserConfig};
pub use error::{ConfigError, Error};
pub use lexer::{lex, tokenize, tokenize_with, LexError, LexErrorKind, Lexer, Token, TokenKind};
pub use parser::{parse, parse_tokens, parse_with, Parse, SyntaxError};
pub use syntax::{Child, Leaf, QueryError, SagaLanguage, SyntaxKind, SyntaxNode, SyntaxToken, Tree};
