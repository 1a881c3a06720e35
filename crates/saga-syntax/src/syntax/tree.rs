//! Read-only query view over the syntax tree.
//!
//! The `rowan` tree is lossless; [`Tree`] exposes only the children that
//! carry meaning for later stages, so positions line up with the grammar:
//! `if_statement` is `[IF, NAME]`, `for_statement` is `[NAME, NAME]` and a
//! list is just its `values`. Layout tokens, delimiters and the
//! `for`/`in`/`foreach`/`as` keywords are skipped.
//!
//! Navigation is by dotted rule-name paths:
//!
//! ```
//! use saga_syntax::parse;
//!
//! let tree = parse("var = 3\n").unwrap().tree();
//! let path = tree.node("start.block.line.assignments.path").unwrap();
//! assert_eq!(path.text(), "var");
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::{LineIndex, SyntaxKind, SyntaxNode, SyntaxToken};
use crate::lexer::{Token, TokenKind};

/// Failure to navigate the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A path segment matched no node.
    #[error("no `{segment}` node on path `{path}`")]
    PathNotFound {
        /// The full dotted path.
        path: String,
        /// The first segment that could not be resolved.
        segment: String,
    },

    /// A child index past the visible children.
    #[error("child {index} out of range, node has {len} children")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of visible children.
        len: usize,
    },
}

/// A grammar rule node.
#[derive(Clone)]
pub struct Tree {
    node: SyntaxNode,
    lines: Arc<LineIndex>,
}

impl Tree {
    pub(crate) fn new(node: SyntaxNode, lines: Arc<LineIndex>) -> Self {
        Self { node, lines }
    }

    /// Returns the underlying lossless node.
    #[must_use]
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    /// Returns the rule kind.
    #[must_use]
    pub fn kind(&self) -> SyntaxKind {
        self.node.kind()
    }

    /// Returns the rule name, e.g. `if_block`.
    #[must_use]
    pub fn rule_name(&self) -> &'static str {
        self.kind().rule_name()
    }

    /// Returns the visible children in source order.
    #[must_use]
    pub fn children(&self) -> Vec<Child> {
        self.node
            .children_with_tokens()
            .filter_map(|element| match element {
                rowan::NodeOrToken::Node(node) => Some(Child::Tree(self.with_node(node))),
                rowan::NodeOrToken::Token(token) if !token.kind().is_hidden() => {
                    Some(Child::Token(Leaf {
                        token,
                        lines: Arc::clone(&self.lines),
                    }))
                }
                rowan::NodeOrToken::Token(_) => None,
            })
            .collect()
    }

    /// Returns the number of visible children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children().len()
    }

    /// Returns `true` if the node has no visible children, like `[]`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the visible child at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::IndexOutOfRange`] past the last child.
    pub fn child(&self, index: usize) -> Result<Child, QueryError> {
        let mut children = self.children();
        let len = children.len();
        if index < len {
            Ok(children.swap_remove(index))
        } else {
            Err(QueryError::IndexOutOfRange { index, len })
        }
    }

    /// Resolves a dotted path of rule names.
    ///
    /// The first segment may name this node itself. Every other segment
    /// resolves to the shallowest matching descendant of the previous one,
    /// earlier children first.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::PathNotFound`] naming the first segment with
    /// no match.
    pub fn node(&self, path: &str) -> Result<Tree, QueryError> {
        let mut current = self.clone();
        for (index, segment) in path.split('.').enumerate() {
            let not_found = || QueryError::PathNotFound {
                path: path.to_string(),
                segment: segment.to_string(),
            };
            let kind = SyntaxKind::from_rule_name(segment).ok_or_else(not_found)?;
            if index == 0 && current.kind() == kind {
                continue;
            }
            current = current.find(kind).ok_or_else(not_found)?;
        }
        Ok(current)
    }

    /// Returns the source text of the node without surrounding whitespace.
    #[must_use]
    pub fn text(&self) -> String {
        let tokens: Vec<SyntaxToken> = self
            .node
            .descendants_with_tokens()
            .filter_map(|element| element.into_token())
            .collect();
        let first = tokens.iter().position(|token| !token.kind().is_trivia());
        let last = tokens.iter().rposition(|token| !token.kind().is_trivia());
        match (first, last) {
            (Some(first), Some(last)) => tokens[first..=last]
                .iter()
                .map(|token| token.text())
                .collect(),
            _ => String::new(),
        }
    }

    /// Returns the number of `nested_block`s enclosing this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.node
            .ancestors()
            .skip(1)
            .filter(|node| node.kind() == SyntaxKind::NestedBlock)
            .count()
    }

    /// Renders the visible tree, one child per line.
    ///
    /// ```text
    /// start
    ///   block
    ///     line
    ///       values
    ///         number
    ///           INT "3"
    /// ```
    #[must_use]
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.format_into(&mut out, 0);
        out
    }

    fn format_into(&self, out: &mut String, depth: usize) {
        out.push_str(&format!("{}{}\n", "  ".repeat(depth), self.rule_name()));
        for child in self.children() {
            match child {
                Child::Tree(tree) => tree.format_into(out, depth + 1),
                Child::Token(leaf) => out.push_str(&format!(
                    "{}{} {:?}\n",
                    "  ".repeat(depth + 1),
                    leaf.kind(),
                    leaf.text()
                )),
            }
        }
    }

    /// Breadth-first search for the shallowest descendant of `kind`.
    fn find(&self, kind: SyntaxKind) -> Option<Tree> {
        let mut queue: VecDeque<SyntaxNode> = self.node.children().collect();
        while let Some(node) = queue.pop_front() {
            if node.kind() == kind {
                return Some(self.with_node(node));
            }
            queue.extend(node.children());
        }
        None
    }

    fn with_node(&self, node: SyntaxNode) -> Tree {
        Tree::new(node, Arc::clone(&self.lines))
    }
}

/// Trees are equal when their rules and visible children are.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.children() == other.children()
    }
}

impl Eq for Tree {}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?}", self.rule_name(), self.node.text_range())
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}

/// A token in the query view.
#[derive(Clone)]
pub struct Leaf {
    token: SyntaxToken,
    lines: Arc<LineIndex>,
}

impl Leaf {
    /// Returns the token kind.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.token.kind().to_token_kind().unwrap_or(TokenKind::Error)
    }

    /// Returns the token text, delimiters included.
    #[must_use]
    pub fn text(&self) -> &str {
        self.token.text()
    }

    /// Returns the 1-based line of the token.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.position().0
    }

    /// Returns the 1-based column (in characters) of the token.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.position().1
    }

    /// Returns the underlying lossless token.
    #[must_use]
    pub fn syntax(&self) -> &SyntaxToken {
        &self.token
    }

    /// Converts to a lexer token with its source position.
    #[must_use]
    pub fn to_token(&self) -> Token {
        let (line, column) = self.position();
        Token::at(
            self.kind(),
            self.text(),
            self.token.text_range(),
            line,
            column,
        )
    }

    fn position(&self) -> (u32, u32) {
        self.lines.line_col(self.token.text_range().start())
    }
}

impl PartialEq for Leaf {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.text() == other.text()
    }
}

impl Eq for Leaf {}

impl PartialEq<Token> for Leaf {
    fn eq(&self, other: &Token) -> bool {
        self.kind() == other.kind && self.text() == other.text
    }
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?}@{}:{}",
            self.kind(),
            self.text(),
            self.line(),
            self.column()
        )
    }
}

/// A visible child: a rule node or a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// A grammar rule node.
    Tree(Tree),
    /// A token.
    Token(Leaf),
}

impl Child {
    /// Returns the rule name for nodes and the token name for tokens.
    #[must_use]
    pub fn rule_name(&self) -> &'static str {
        match self {
            Self::Tree(tree) => tree.rule_name(),
            Self::Token(leaf) => leaf.kind().name(),
        }
    }

    /// Returns the source text of the child.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Tree(tree) => tree.text(),
            Self::Token(leaf) => leaf.text().to_string(),
        }
    }

    /// Returns the node, if this child is one.
    #[must_use]
    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Token(_) => None,
        }
    }

    /// Returns the token, if this child is one.
    #[must_use]
    pub fn as_token(&self) -> Option<&Leaf> {
        match self {
            Self::Tree(_) => None,
            Self::Token(leaf) => Some(leaf),
        }
    }

    /// [`Tree::node`] on a node child. A token has no descendants.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::PathNotFound`] if the path cannot be resolved.
    pub fn node(&self, path: &str) -> Result<Tree, QueryError> {
        match self {
            Self::Tree(tree) => tree.node(path),
            Self::Token(_) => Err(QueryError::PathNotFound {
                path: path.to_string(),
                segment: path.split('.').next().unwrap_or_default().to_string(),
            }),
        }
    }

    /// [`Tree::child`] on a node child. A token has no children.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::IndexOutOfRange`] if there is no such child.
    pub fn child(&self, index: usize) -> Result<Child, QueryError> {
        match self {
            Self::Tree(tree) => tree.child(index),
            Self::Token(_) => Err(QueryError::IndexOutOfRange { index, len: 0 }),
        }
    }
}

impl PartialEq<Token> for Child {
    fn eq(&self, other: &Token) -> bool {
        matches!(self, Self::Token(leaf) if leaf == other)
    }
}

impl PartialEq<(TokenKind, &str)> for Child {
    fn eq(&self, (kind, text): &(TokenKind, &str)) -> bool {
        matches!(self, Self::Token(leaf) if leaf.kind() == *kind && leaf.text() == *text)
    }
}
