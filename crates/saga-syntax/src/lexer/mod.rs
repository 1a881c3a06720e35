//! Lexer for the saga scripting language.
//!
//! Lexing happens in two steps:
//!
//! 1. [`Lexer`] scans the raw token stream with `logos`, attaching text and
//!    line/column positions. Unrecognized input becomes `TokenKind::Error`.
//! 2. [`tokenize`] runs the indentation pass over the raw stream, turning
//!    leading whitespace into `Indent`/`Dedent` tokens and reporting the
//!    first malformed token as a [`LexError`].

mod indentation;
mod tokens;

pub use tokens::TokenKind;

use logos::Logos;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use thiserror::Error;

use crate::config::ParserConfig;
use indentation::IndentationMapper;

/// A token produced by the lexer.
///
/// Equality is structural: two tokens are equal when their kind and text
/// match, wherever they appear in the source.
#[derive(Debug, Clone, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The source text of the token, delimiters included.
    pub text: SmolStr,
    /// The byte range of the token in the source text.
    pub range: TextRange,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column (in characters) of the first character.
    pub column: u32,
}

impl Token {
    /// Creates a token without a source position, for comparisons.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            text: text.into(),
            range: TextRange::empty(TextSize::from(0)),
            line: 0,
            column: 0,
        }
    }

    /// Creates a token at a known source position.
    #[must_use]
    pub fn at(
        kind: TokenKind,
        text: impl Into<SmolStr>,
        range: TextRange,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
            line,
            column,
        }
    }

    /// Returns the length of the token in bytes.
    #[must_use]
    pub fn len(&self) -> TextSize {
        self.range.len()
    }

    /// Returns true if the token has zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

/// What went wrong while lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A quoted string without its closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A backtick filepath without its closing backtick.
    #[error("unterminated filepath literal")]
    UnterminatedFilepath,

    /// A character that starts no token.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),

    /// A dedent to a width that matches no enclosing indentation level.
    #[error("dedent does not match any outer indentation level")]
    Dedent,

    /// Indentation that mixes tabs and spaces inconsistently, or uses a
    /// character the configured policy forbids.
    #[error("inconsistent use of tabs and spaces in indentation")]
    MixedIndentation,

    /// More open indentation levels than the configured maximum.
    #[error("indentation deeper than {0} levels")]
    TooDeep(usize),
}

/// A lexical error with the position of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {line}:{column}")]
pub struct LexError {
    /// The kind of error.
    pub kind: LexErrorKind,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

impl LexError {
    pub(crate) fn at(kind: LexErrorKind, token: &Token) -> Self {
        Self {
            kind,
            line: token.line,
            column: token.column,
        }
    }

    /// Classifies an `Error` token produced by the raw lexer.
    pub(crate) fn from_error_token(token: &Token) -> Self {
        let kind = match token.text.chars().next() {
            Some('\'' | '"') => LexErrorKind::UnterminatedString,
            Some('`') => LexErrorKind::UnterminatedFilepath,
            Some(other) => LexErrorKind::UnexpectedCharacter(other),
            None => LexErrorKind::UnexpectedCharacter('\0'),
        };
        Self::at(kind, token)
    }
}

/// Raw lexer for saga source code.
///
/// The lexer is an iterator over tokens. It never fails: any unrecognized
/// input is returned as `TokenKind::Error`, and no indentation structure is
/// produced. Use [`tokenize`] for the parser-ready stream.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    line: u32,
    line_start: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            line: 1,
            line_start: 0,
        }
    }

    /// Returns the source text being lexed.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the text of the current token.
    #[must_use]
    pub fn slice(&self) -> &'src str {
        self.inner.slice()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?;
        let span = self.inner.span();

        let kind = kind.unwrap_or(TokenKind::Error);
        let range = TextRange::new(
            TextSize::from(span.start as u32),
            TextSize::from(span.end as u32),
        );
        let column = self.source[self.line_start..span.start].chars().count() as u32 + 1;
        let token = Token::at(kind, &self.source[span.clone()], range, self.line, column);

        if kind == TokenKind::Newline {
            self.line += 1;
            self.line_start = span.end;
        }

        Some(token)
    }
}

/// Lex the entire source and return all raw tokens.
///
/// This is a convenience function for testing and simple use cases.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Lex source and return raw tokens paired with their text.
///
/// Useful for debugging and testing.
#[must_use]
pub fn lex_with_text(source: &str) -> Vec<(Token, &str)> {
    Lexer::new(source)
        .map(|token| {
            let text = &source[usize::from(token.range.start())..usize::from(token.range.end())];
            (token, text)
        })
        .collect()
}

/// Tokenize source into the parser-ready stream with the default configuration.
///
/// # Errors
///
/// Returns a [`LexError`] on an unterminated string or filepath literal, an
/// unexpected character, or inconsistent indentation.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, &ParserConfig::default())
}

/// Tokenize source into the parser-ready stream.
///
/// The stream keeps every source character (whitespace as trivia tokens),
/// ends every content line with a `Newline`, and brackets indented bodies
/// with `Indent`/`Dedent`.
///
/// # Errors
///
/// See [`tokenize`].
pub fn tokenize_with(source: &str, config: &ParserConfig) -> Result<Vec<Token>, LexError> {
    IndentationMapper::new(config).map(Lexer::new(source))
}
