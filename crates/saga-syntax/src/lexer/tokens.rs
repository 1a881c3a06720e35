//! Token definitions for the saga scripting language.
//!
//! This module defines all lexical tokens that can appear in saga source.
//! The token kinds are designed to work with both the `logos` lexer generator
//! and the `rowan` lossless syntax tree library.
//!
//! `Indent`, `Dedent` and the significant `Newline` tokens are structural:
//! logos only produces raw line breaks, the indentation pass turns them into
//! block delimiters (see [`super::indentation`]).

use logos::Logos;

/// All token kinds in the saga language.
///
/// Token kinds are divided into categories:
/// - Trivia and layout (whitespace, line breaks, indentation)
/// - Punctuation and operators
/// - Keywords (reserved words)
/// - Literals (numbers, strings, filepaths)
/// - Identifiers
/// - Special tokens (errors, EOF)
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[derive(Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA AND LAYOUT
    // =========================================================================
    /// Spaces and tabs inside a line, or a whole blank line.
    #[regex(r"[ \t]+")]
    Whitespace,

    /// End of a content line.
    #[regex(r"\r?\n")]
    Newline,

    /// Start of a deeper indentation level (zero width).
    Indent,

    /// End of an indentation level (zero width).
    Dedent,

    /// Comment: `#` to end of line, text kept verbatim.
    #[regex(r"#[^\r\n]*", allow_greedy = true)]
    LineComment,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `:`
    #[token(":")]
    Colon,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    // =========================================================================
    // OPERATORS - Assignment and comparison
    // =========================================================================
    /// `=`
    #[token("=")]
    Assign,

    /// `==`
    #[token("==")]
    EqEq,

    /// `!=`
    #[token("!=")]
    Neq,

    /// `<`
    #[token("<")]
    Lt,

    /// `<=`
    #[token("<=")]
    LtEq,

    /// `>`
    #[token(">")]
    Gt,

    /// `>=`
    #[token(">=")]
    GtEq,

    // =========================================================================
    // OPERATORS - Arithmetic
    // =========================================================================
    /// `+`
    #[token("+")]
    Plus,

    /// `-` (also a command name separator and option prefix)
    #[token("-")]
    Minus,

    /// `*`
    #[token("*")]
    Star,

    /// `/` (also a command name separator)
    #[token("/")]
    Slash,

    /// `%`
    #[token("%")]
    Percent,

    /// `**`
    #[token("**")]
    Power,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    /// `if`
    #[token("if")]
    KwIf,

    /// `else`
    #[token("else")]
    KwElse,

    /// `for`
    #[token("for")]
    KwFor,

    /// `foreach`
    #[token("foreach")]
    KwForeach,

    /// `as`
    #[token("as")]
    KwAs,

    /// `in`
    #[token("in")]
    KwIn,

    /// `wait`
    #[token("wait")]
    KwWait,

    /// `next`
    #[token("next")]
    KwNext,

    /// `true`
    #[token("true")]
    KwTrue,

    /// `false`
    #[token("false")]
    KwFalse,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Integer literal: a maximal digit run.
    #[regex(r"[0-9]+")]
    IntLiteral,

    /// Single-quoted string: 'red'. Escapes are kept verbatim.
    #[regex(r"'([^'\\\r\n]|\\[^\r\n])*'")]
    SingleQuoted,

    /// Double-quoted string: "red". Escapes are kept verbatim.
    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*""#)]
    DoubleQuoted,

    /// Backtick filepath: `/path/to/file`
    #[regex(r"`[^`\r\n]*`")]
    Filepath,

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    /// Identifier: starts with letter or underscore, contains letters, digits, underscores
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // =========================================================================
    // SPECIAL TOKENS
    // =========================================================================
    /// Lexer error - unrecognized character or unterminated literal
    #[regex(r"'([^'\\\r\n]|\\[^\r\n])*", priority = 1)]
    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*"#, priority = 1)]
    #[regex(r"`[^`\r\n]*", priority = 1)]
    #[default]
    Error,

    /// End of file marker (not produced by lexer, added by parser)
    Eof,
}

impl TokenKind {
    /// Returns `true` if this token is trivia (insignificant whitespace).
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Returns `true` if this token is a keyword.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::KwIf
                | Self::KwElse
                | Self::KwFor
                | Self::KwForeach
                | Self::KwAs
                | Self::KwIn
                | Self::KwWait
                | Self::KwNext
                | Self::KwTrue
                | Self::KwFalse
        )
    }

    /// Returns `true` if this token is a string literal of either quote style.
    pub fn is_string(self) -> bool {
        matches!(self, Self::SingleQuoted | Self::DoubleQuoted)
    }

    /// Returns `true` if this token can start a `values` node.
    pub fn can_start_value(self) -> bool {
        matches!(
            self,
            Self::IntLiteral
                | Self::SingleQuoted
                | Self::DoubleQuoted
                | Self::KwTrue
                | Self::KwFalse
                | Self::LBracket
                | Self::LBrace
                | Self::Filepath
        )
    }

    /// Returns `true` if this token can start an operation or a bare value.
    pub fn can_start_expr(self) -> bool {
        self.can_start_value() || self == Self::Minus
    }

    /// Returns `true` if this token separates the segments of a command name.
    pub fn is_command_separator(self) -> bool {
        matches!(self, Self::Slash | Self::Minus)
    }

    /// Returns `true` if this token is a comparison operator.
    pub fn is_comparison_op(self) -> bool {
        matches!(
            self,
            Self::EqEq | Self::Neq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }

    /// Returns the binding power for Pratt parsing (left, right).
    /// Returns None if not an infix operator.
    pub fn infix_binding_power(self) -> Option<(u8, u8)> {
        Some(match self {
            Self::EqEq | Self::Neq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => (1, 2),
            Self::Plus | Self::Minus => (3, 4),
            Self::Star | Self::Slash | Self::Percent => (5, 6),
            Self::Power => (8, 7), // Right associative
            _ => return None,
        })
    }

    /// Returns the binding power for prefix operators.
    pub fn prefix_binding_power(self) -> Option<u8> {
        Some(match self {
            Self::Minus => 9,
            _ => return None,
        })
    }

    /// Returns the grammar-level name of this token kind (`NAME`, `INT`, ...).
    ///
    /// These names are the stable token vocabulary used in tree dumps and
    /// error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Whitespace => "WS",
            Self::Newline => "NEWLINE",
            Self::Indent => "INDENT",
            Self::Dedent => "DEDENT",
            Self::LineComment => "COMMENT",
            Self::Colon => "COLON",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::LBracket => "LSQB",
            Self::RBracket => "RSQB",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Assign => "EQUALS",
            Self::EqEq => "EQUALITY",
            Self::Neq => "NOT_EQUAL",
            Self::Lt => "LESSER",
            Self::LtEq => "LESSER_EQUAL",
            Self::Gt => "GREATER",
            Self::GtEq => "GREATER_EQUAL",
            Self::Plus => "PLUS",
            Self::Minus => "DASH",
            Self::Star => "MULTIPLIER",
            Self::Slash => "BSLASH",
            Self::Percent => "MODULUS",
            Self::Power => "POWER",
            Self::KwIf => "IF",
            Self::KwElse => "ELSE",
            Self::KwFor => "FOR",
            Self::KwForeach => "FOREACH",
            Self::KwAs => "AS",
            Self::KwIn => "IN",
            Self::KwWait => "WAIT",
            Self::KwNext => "NEXT",
            Self::KwTrue => "TRUE",
            Self::KwFalse => "FALSE",
            Self::IntLiteral => "INT",
            Self::SingleQuoted => "SINGLE_QUOTED",
            Self::DoubleQuoted => "DOUBLE_QUOTED",
            Self::Filepath => "FILEPATH",
            Self::Ident => "NAME",
            Self::Error => "ERROR",
            Self::Eof => "EOF",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<TokenKind> for rowan::SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        Self(kind as u16)
    }
}
