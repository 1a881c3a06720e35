//! Token source for the parser.
//!
//! This module provides the `Source` struct that wraps a token stream
//! and provides lookahead and consumption operations.

use crate::lexer::{Token, TokenKind};

/// A token source that provides tokens to the parser.
pub struct Source<'t> {
    tokens: &'t [Token],
    /// Raw index just past the last consumed token.
    cursor: usize,
}

impl<'t> Source<'t> {
    /// Creates a new source from tokens.
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Returns the current token kind, or `Eof` if at end.
    pub fn current(&self) -> TokenKind {
        self.peek_kind_n(0)
    }

    /// Returns the current token, or `None` if at end.
    pub fn current_token(&self) -> Option<&'t Token> {
        self.peek_token_n(0)
    }

    /// Returns the last token of the stream, used to position errors at end of input.
    pub fn last_token(&self) -> Option<&'t Token> {
        self.tokens.last()
    }

    /// Peeks at the nth non-trivia token ahead (0 = current).
    pub fn peek_kind_n(&self, n: usize) -> TokenKind {
        self.peek_token_n(n).map_or(TokenKind::Eof, |token| token.kind)
    }

    /// Peeks at the nth non-trivia token ahead and returns the token.
    pub fn peek_token_n(&self, n: usize) -> Option<&'t Token> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .filter(|token| !token.kind.is_trivia())
            .nth(n)
    }

    /// Advances past the current token.
    pub fn bump(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            self.cursor += 1;
            if !token.kind.is_trivia() {
                break;
            }
        }
    }

    /// Returns `true` if at end of input.
    pub fn at_end(&self) -> bool {
        self.peek_kind_n(0) == TokenKind::Eof
    }

    /// Skips the rest of the input.
    pub fn abort(&mut self) {
        self.cursor = self.tokens.len();
    }

    /// Returns `true` if no trivia separates the previously consumed token
    /// from the current one.
    pub fn current_is_joined(&self) -> bool {
        self.cursor > 0
            && self
                .tokens
                .get(self.cursor)
                .is_some_and(|token| !token.kind.is_trivia())
    }

    /// Returns `true` if no trivia separates the current token from the next one.
    pub fn next_is_joined(&self) -> bool {
        let Some(offset) = self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .position(|token| !token.kind.is_trivia())
        else {
            return false;
        };
        self.tokens
            .get(self.cursor + offset + 1)
            .is_some_and(|token| !token.kind.is_trivia())
    }

    /// Returns true if there is a top-level `=` before the end of the line.
    pub fn has_assign_ahead(&self) -> bool {
        let mut bracket_depth = 0u32;

        for token in &self.tokens[self.cursor.min(self.tokens.len())..] {
            if token.kind.is_trivia() {
                continue;
            }

            match token.kind {
                TokenKind::LBracket | TokenKind::LBrace => bracket_depth += 1,
                TokenKind::RBracket | TokenKind::RBrace => {
                    bracket_depth = bracket_depth.saturating_sub(1);
                }
                TokenKind::Assign if bracket_depth == 0 => return true,
                TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent => return false,
                _ => {}
            }
        }

        false
    }
}
