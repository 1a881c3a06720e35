//! Indentation pass: raw token stream to block-structured token stream.
//!
//! The raw lexer reports leading whitespace as plain `Whitespace` tokens.
//! This pass tracks a stack of open indentation strings and replaces
//! indentation changes with zero-width `Indent` and `Dedent` tokens:
//!
//! 1. Blank lines (only whitespace) are trivia; their line break is
//!    re-tagged as `Whitespace` and they never change the indentation.
//! 2. On the first significant token of a line the leading whitespace is
//!    compared with the top of the stack:
//!    - longer and extending it: push, emit one `Indent`
//!    - shorter and a prefix of it: pop until equal, one `Dedent` per pop
//!    - anything else is a [`LexError`]
//! 3. Inside `[...]` or `{...}` line breaks are trivia and continuation
//!    lines carry no indentation meaning.
//! 4. At end of input a `Newline` is synthesized for an unterminated last
//!    line and every open level is closed with a `Dedent`.
//!
//! Indentation strings are compared character by character, so a level
//! opened with a tab can only be extended or closed by a line starting with
//! that same tab.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use tracing::trace;

use super::{LexError, LexErrorKind, Token, TokenKind};
use crate::config::{IndentationPolicy, ParserConfig};

/// Converts leading whitespace into `Indent`/`Dedent` tokens.
pub(crate) struct IndentationMapper<'c> {
    config: &'c ParserConfig,
    /// Open indentation strings; the bottom entry is the empty top level.
    stack: Vec<SmolStr>,
    bracket_depth: usize,
    at_line_start: bool,
    /// Leading whitespace of the current line, held until the line turns
    /// out to be blank or significant.
    pending: Vec<Token>,
    output: Vec<Token>,
}

impl<'c> IndentationMapper<'c> {
    pub(crate) fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            stack: vec![SmolStr::default()],
            bracket_depth: 0,
            at_line_start: true,
            pending: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Runs the pass over a raw token stream.
    pub(crate) fn map(
        mut self,
        tokens: impl IntoIterator<Item = Token>,
    ) -> Result<Vec<Token>, LexError> {
        for token in tokens {
            if self.at_line_start {
                match token.kind {
                    TokenKind::Whitespace => {
                        self.pending.push(token);
                        continue;
                    }
                    TokenKind::Newline => {
                        self.output.append(&mut self.pending);
                        self.output.push(Token {
                            kind: TokenKind::Whitespace,
                            ..token
                        });
                        continue;
                    }
                    _ => {
                        self.begin_line(&token)?;
                    }
                }
            }
            self.content(token)?;
        }
        self.finish();
        Ok(self.output)
    }

    /// Handles the first significant token of a line.
    fn begin_line(&mut self, first: &Token) -> Result<(), LexError> {
        self.at_line_start = false;
        let indent: SmolStr = self
            .pending
            .iter()
            .map(|token| token.text.as_str())
            .collect();
        self.output.append(&mut self.pending);

        if self.bracket_depth > 0 {
            return Ok(());
        }
        self.check_policy(&indent, first)?;

        let top = self.top().clone();
        if indent == top {
            return Ok(());
        }

        if indent.starts_with(top.as_str()) {
            let depth = self.stack.len();
            if depth > self.config.max_depth {
                return Err(LexError::at(
                    LexErrorKind::TooDeep(self.config.max_depth),
                    first,
                ));
            }
            trace!(depth, indent = ?indent, "indent");
            self.stack.push(indent);
            self.output.push(structural(TokenKind::Indent, first));
            return Ok(());
        }

        if top.starts_with(indent.as_str()) {
            while self.top().len() > indent.len() {
                self.stack.pop();
                trace!(depth = self.stack.len() - 1, "dedent");
                self.output.push(structural(TokenKind::Dedent, first));
            }
            if *self.top() != indent {
                return Err(LexError::at(LexErrorKind::Dedent, first));
            }
            return Ok(());
        }

        Err(LexError::at(LexErrorKind::MixedIndentation, first))
    }

    /// Handles a token inside a line.
    fn content(&mut self, token: Token) -> Result<(), LexError> {
        match token.kind {
            TokenKind::Error => return Err(LexError::from_error_token(&token)),
            TokenKind::LBracket | TokenKind::LBrace => self.bracket_depth += 1,
            TokenKind::RBracket | TokenKind::RBrace => {
                self.bracket_depth = self.bracket_depth.saturating_sub(1);
            }
            TokenKind::Newline => {
                self.at_line_start = true;
                if self.bracket_depth > 0 {
                    self.output.push(Token {
                        kind: TokenKind::Whitespace,
                        ..token
                    });
                    return Ok(());
                }
            }
            _ => {}
        }
        self.output.push(token);
        Ok(())
    }

    fn finish(&mut self) {
        let (offset, line, column) = self.end_position();
        let at_end = |kind| {
            Token::at(
                kind,
                SmolStr::default(),
                TextRange::empty(offset),
                line,
                column,
            )
        };

        if !self.at_line_start {
            self.output.push(at_end(TokenKind::Newline));
        }
        self.output.append(&mut self.pending);
        while self.stack.len() > 1 {
            self.stack.pop();
            self.output.push(at_end(TokenKind::Dedent));
        }
    }

    /// Offset, line and column just past the last token.
    fn end_position(&self) -> (TextSize, u32, u32) {
        let last = self.pending.last().or_else(|| self.output.last());
        match last {
            None => (TextSize::from(0), 1, 1),
            Some(token) if token.text.ends_with('\n') => (token.range.end(), token.line + 1, 1),
            Some(token) => (
                token.range.end(),
                token.line,
                token.column + token.text.chars().count() as u32,
            ),
        }
    }

    fn check_policy(&self, indent: &str, first: &Token) -> Result<(), LexError> {
        let allowed = |c: char| match self.config.indentation {
            IndentationPolicy::Any => c == ' ' || c == '\t',
            IndentationPolicy::Spaces => c == ' ',
            IndentationPolicy::Tabs => c == '\t',
        };
        if indent.chars().all(allowed) {
            Ok(())
        } else {
            Err(LexError::at(LexErrorKind::MixedIndentation, first))
        }
    }

    fn top(&self) -> &SmolStr {
        // The empty top level is never popped.
        &self.stack[self.stack.len() - 1]
    }
}

/// A zero-width structural token placed before `at`.
fn structural(kind: TokenKind, at: &Token) -> Token {
    Token::at(
        kind,
        SmolStr::default(),
        TextRange::empty(at.range.start()),
        at.line,
        at.column,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{tokenize, tokenize_with};

    fn layout(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia())
            .collect()
    }

    #[test]
    fn test_single_level() {
        use TokenKind::*;
        assert_eq!(
            layout("if x\n\tvar=3\n"),
            vec![KwIf, Ident, Newline, Indent, Ident, Assign, IntLiteral, Newline, Dedent]
        );
    }

    #[test]
    fn test_multiple_dedents_at_once() {
        use TokenKind::*;
        assert_eq!(
            layout("a\n  b\n    c\nd\n"),
            vec![
                Ident, Newline, Indent, Ident, Newline, Indent, Ident, Newline, Dedent, Dedent,
                Ident, Newline
            ]
        );
    }

    #[test]
    fn test_blank_lines_are_trivia() {
        use TokenKind::*;
        assert_eq!(
            layout("a\n\n   \n  b\n"),
            vec![Ident, Newline, Indent, Ident, Newline, Dedent]
        );
    }

    #[test]
    fn test_brackets_join_lines() {
        use TokenKind::*;
        assert_eq!(
            layout("x = [1,\n    2]\n"),
            vec![Ident, Assign, LBracket, IntLiteral, Comma, IntLiteral, RBracket, Newline]
        );
    }

    #[test]
    fn test_dedent_to_unknown_level() {
        let err = tokenize("a\n    b\n  c\n").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::Dedent);
        assert_eq!((err.line, err.column), (3, 3));
    }

    #[test]
    fn test_tab_then_spaces_is_inconsistent() {
        let err = tokenize("a\n\tb\n    c\n").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::MixedIndentation);
    }

    #[test]
    fn test_policy_rejects_tabs() {
        let config = ParserConfig {
            indentation: IndentationPolicy::Spaces,
            ..ParserConfig::default()
        };
        let err = tokenize_with("a\n\tb\n", &config).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::MixedIndentation);
        assert!(tokenize_with("a\n  b\n", &config).is_ok());
    }

    #[test]
    fn test_depth_limit() {
        let config = ParserConfig {
            max_depth: 2,
            ..ParserConfig::default()
        };
        assert!(tokenize_with("a\n b\n  c\n", &config).is_ok());
        let err = tokenize_with("a\n b\n  c\n   d\n", &config).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::TooDeep(2));
    }

    #[test]
    fn test_lossless() {
        let source = "if x\n\n\tvar = [1,\n 2]  \n# done";
        let text: String = tokenize(source)
            .unwrap()
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(text, source);
    }

    #[test]
    fn test_dedents_closed_at_end_without_newline() {
        use TokenKind::*;
        assert_eq!(
            layout("a\n\tb"),
            vec![Ident, Newline, Indent, Ident, Newline, Dedent]
        );
    }
}
