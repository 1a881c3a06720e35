//! Syntax tree types for the saga language.
//!
//! This module provides the `rowan`-based syntax tree implementation,
//! including the `SyntaxKind` enum that covers both tokens and grammar rules,
//! and the read-only [`Tree`] query view used by downstream stages.

mod line_index;
mod tree;

pub use line_index::LineIndex;
pub use tree::{Child, Leaf, QueryError, Tree};

use crate::lexer::TokenKind;
use crate::token_kinds::for_each_token_kind;

macro_rules! define_syntax_kind {
    ($($token:ident),* $(,)?) => {
        /// All syntax node and token kinds in the saga language.
        ///
        /// This enum includes both token kinds (from the lexer) and grammar
        /// rule kinds (produced by the parser).
        // Variants mirror lexer/token names; documenting each would be noisy.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum SyntaxKind {
            // =========================================================================
            // TOKEN KINDS (mirrors TokenKind)
            // =========================================================================
            $($token,)*

            // GRAMMAR RULE KINDS (produced by parser)
            // =========================================================================
            /// Root node: one or more blocks
            Start,

            /// A line or a compound block (`if`, `for`, `foreach`, `wait`)
            Block,

            /// Indented body: `INDENT block+ DEDENT`
            NestedBlock,

            /// A simple statement on a single line
            Line,

            /// `# text`
            Comment,

            /// `next name` or ``next `path` ``
            Next,

            /// `org/container-name args --flag value`
            Command,

            /// One name of a command: `org`
            Segment,

            /// A command name separator: `/` or `-`
            Separator,

            /// A positional command argument
            Arguments,

            /// Command flags: `--name value ...`
            Options,

            /// `path = value`
            Assignments,

            /// `root.field[0]`
            Path,

            /// One accessor of a path: `.field` or `[0]`
            PathFragment,

            /// Binary or unary operation
            Operation,

            /// Wraps the operator token of an operation
            Operator,

            /// A literal value
            Values,

            /// Integer literal
            Number,

            /// Quoted string literal
            String,

            /// `true` / `false`
            Boolean,

            /// `[a, b]`
            List,

            /// `{'k': v}`
            Objects,

            /// `'k': v`
            KeyValue,

            /// `if` with its body and continuations
            IfBlock,

            /// `if name`
            IfStatement,

            /// `else if` with its body
            ElseifBlock,

            /// `else if name`
            ElseifStatement,

            /// `else` with its body
            ElseBlock,

            /// `else`
            ElseStatement,

            /// `for` with its body
            ForBlock,

            /// `for name in name`
            ForStatement,

            /// `foreach` with its body
            ForeachBlock,

            /// `foreach name as name`
            ForeachStatement,

            /// `wait` with its body
            WaitBlock,

            /// `wait name` or `wait "string"`
            WaitStatement,
        }
    };
}

for_each_token_kind!(define_syntax_kind);

/// Grammar rule kinds paired with their stable rule names.
const RULES: &[(SyntaxKind, &str)] = &[
    (SyntaxKind::Start, "start"),
    (SyntaxKind::Block, "block"),
    (SyntaxKind::NestedBlock, "nested_block"),
    (SyntaxKind::Line, "line"),
    (SyntaxKind::Comment, "comment"),
    (SyntaxKind::Next, "next"),
    (SyntaxKind::Command, "command"),
    (SyntaxKind::Segment, "segment"),
    (SyntaxKind::Separator, "separator"),
    (SyntaxKind::Arguments, "arguments"),
    (SyntaxKind::Options, "options"),
    (SyntaxKind::Assignments, "assignments"),
    (SyntaxKind::Path, "path"),
    (SyntaxKind::PathFragment, "path_fragment"),
    (SyntaxKind::Operation, "operation"),
    (SyntaxKind::Operator, "operator"),
    (SyntaxKind::Values, "values"),
    (SyntaxKind::Number, "number"),
    (SyntaxKind::String, "string"),
    (SyntaxKind::Boolean, "boolean"),
    (SyntaxKind::List, "list"),
    (SyntaxKind::Objects, "objects"),
    (SyntaxKind::KeyValue, "key_value"),
    (SyntaxKind::IfBlock, "if_block"),
    (SyntaxKind::IfStatement, "if_statement"),
    (SyntaxKind::ElseifBlock, "elseif_block"),
    (SyntaxKind::ElseifStatement, "elseif_statement"),
    (SyntaxKind::ElseBlock, "else_block"),
    (SyntaxKind::ElseStatement, "else_statement"),
    (SyntaxKind::ForBlock, "for_block"),
    (SyntaxKind::ForStatement, "for_statement"),
    (SyntaxKind::ForeachBlock, "foreach_block"),
    (SyntaxKind::ForeachStatement, "foreach_statement"),
    (SyntaxKind::WaitBlock, "wait_block"),
    (SyntaxKind::WaitStatement, "wait_statement"),
];

impl SyntaxKind {
    /// Returns `true` if this is a trivia kind.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Returns `true` if this is a token kind (not a grammar rule).
    #[must_use]
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::Eof as u16)
    }

    /// Returns `true` if this is a grammar rule kind.
    #[must_use]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns `true` for tokens the query view does not expose as children:
    /// trivia, layout, delimiters and the `for`/`in`/`foreach`/`as` keywords.
    #[must_use]
    pub fn is_hidden(self) -> bool {
        matches!(
            self,
            Self::Whitespace
                | Self::Newline
                | Self::Indent
                | Self::Dedent
                | Self::LBracket
                | Self::RBracket
                | Self::LBrace
                | Self::RBrace
                | Self::Comma
                | Self::Colon
                | Self::Dot
                | Self::KwFor
                | Self::KwIn
                | Self::KwForeach
                | Self::KwAs
        )
    }

    /// Returns the stable name of this kind: the rule name (`if_block`) for
    /// grammar rules, the token name (`NAME`) for tokens.
    #[must_use]
    pub fn rule_name(self) -> &'static str {
        if let Some(token) = self.to_token_kind() {
            return token.name();
        }
        RULES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map_or("error", |(_, name)| name)
    }

    /// Looks up a grammar rule kind by its rule name.
    #[must_use]
    pub fn from_rule_name(name: &str) -> Option<Self> {
        RULES
            .iter()
            .find(|(_, rule)| *rule == name)
            .map(|(kind, _)| *kind)
    }
}

macro_rules! map_token_kinds {
    ($($name:ident),* $(,)?) => {
        impl From<TokenKind> for SyntaxKind {
            fn from(kind: TokenKind) -> Self {
                match kind {
                    $(TokenKind::$name => SyntaxKind::$name,)*
                }
            }
        }

        impl SyntaxKind {
            /// Converts back to the lexer token kind, if this is a token.
            #[must_use]
            pub fn to_token_kind(self) -> Option<TokenKind> {
                match self {
                    $(SyntaxKind::$name => Some(TokenKind::$name),)*
                    _ => None,
                }
            }
        }
    };
}

for_each_token_kind!(map_token_kinds);

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The language type for saga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SagaLanguage {}

macro_rules! define_syntax_kinds {
    ($($token:ident),* $(,)?) => {
        const SYNTAX_KINDS: &[SyntaxKind] = &[
            $(SyntaxKind::$token,)*
            SyntaxKind::Start,
            SyntaxKind::Block,
            SyntaxKind::NestedBlock,
            SyntaxKind::Line,
            SyntaxKind::Comment,
            SyntaxKind::Next,
            SyntaxKind::Command,
            SyntaxKind::Segment,
            SyntaxKind::Separator,
            SyntaxKind::Arguments,
            SyntaxKind::Options,
            SyntaxKind::Assignments,
            SyntaxKind::Path,
            SyntaxKind::PathFragment,
            SyntaxKind::Operation,
            SyntaxKind::Operator,
            SyntaxKind::Values,
            SyntaxKind::Number,
            SyntaxKind::String,
            SyntaxKind::Boolean,
            SyntaxKind::List,
            SyntaxKind::Objects,
            SyntaxKind::KeyValue,
            SyntaxKind::IfBlock,
            SyntaxKind::IfStatement,
            SyntaxKind::ElseifBlock,
            SyntaxKind::ElseifStatement,
            SyntaxKind::ElseBlock,
            SyntaxKind::ElseStatement,
            SyntaxKind::ForBlock,
            SyntaxKind::ForStatement,
            SyntaxKind::ForeachBlock,
            SyntaxKind::ForeachStatement,
            SyntaxKind::WaitBlock,
            SyntaxKind::WaitStatement,
        ];
    };
}

for_each_token_kind!(define_syntax_kinds);

impl rowan::Language for SagaLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SYNTAX_KINDS
            .get(raw.0 as usize)
            .copied()
            .unwrap_or(SyntaxKind::Error)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A syntax node in the saga syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<SagaLanguage>;

/// A syntax token in the saga syntax tree.
pub type SyntaxToken = rowan::SyntaxToken<SagaLanguage>;

/// A syntax element (either node or token) in the saga syntax tree.
pub type SyntaxElement = rowan::SyntaxElement<SagaLanguage>;
