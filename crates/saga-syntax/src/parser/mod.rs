//! Parser for the saga scripting language.
//!
//! This module provides a hand-written recursive descent parser that builds
//! a lossless concrete syntax tree (CST) using the `rowan` library.
//!
//! # Design
//!
//! - **Fail-fast**: the first syntax error aborts the parse; no partial tree
//!   is ever returned
//! - **Lossless**: the tree preserves all source text including whitespace
//! - **Committed alternatives**: rules are chosen by bounded lookahead, and
//!   once a keyword is consumed the rule never falls back to another one
//!
//! # Architecture
//!
//! The parser uses a three-phase approach:
//!
//! 1. **Lexing**: Tokenize source text, resolving indentation (see `lexer` module)
//! 2. **Parsing**: Build a flat stream of events (start node, add token, finish node)
//! 3. **Tree Building**: Convert events into a `rowan` green tree

#![allow(clippy::module_inception)]

pub mod event;
pub mod grammar;
mod parser;
mod sink;
mod source;

pub use parser::{parse, parse_tokens, parse_with};
pub(crate) use parser::{CompletedMarker, Parser};

use std::sync::Arc;

use thiserror::Error;

use crate::syntax::{LineIndex, SyntaxNode, Tree};

/// Result of parsing source text.
#[derive(Debug, Clone)]
pub struct Parse {
    /// The root green node.
    green_node: rowan::GreenNode,
    /// Line/column lookup over the parsed text.
    lines: Arc<LineIndex>,
}

impl Parse {
    /// Returns the root syntax node.
    #[must_use]
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green_node.clone())
    }

    /// Returns the query view of the root `start` node.
    #[must_use]
    pub fn tree(&self) -> Tree {
        Tree::new(self.syntax(), Arc::clone(&self.lines))
    }

    /// Returns the underlying green tree.
    #[must_use]
    pub fn green(&self) -> &rowan::GreenNode {
        &self.green_node
    }
}

/// A token sequence that matches no grammar alternative.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found} at {line}:{column}")]
pub struct SyntaxError {
    /// 1-based line of the offending token.
    pub line: u32,
    /// 1-based column of the offending token.
    pub column: u32,
    /// What the grammar expected at this position.
    pub expected: String,
    /// The token actually found.
    pub found: String,
}
