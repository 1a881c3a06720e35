//! Single-line statements.
//!
//! A `line` is one of, in priority order:
//! - `comment`: `# text`
//! - `next`: `next name` or ``next `file` ``
//! - `assignments`: `path = value`, chosen when the line has a top-level `=`
//! - `command`: any other line starting with a name
//! - `operation` / `values`: a line starting with a literal or `-`

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::Parser;

impl Parser<'_, '_> {
    /// Parse a single line, without its terminating `NEWLINE`.
    pub(crate) fn parse_line(&mut self) {
        self.start_node(SyntaxKind::Line);
        match self.current() {
            TokenKind::LineComment => self.bump_node(SyntaxKind::Comment),
            TokenKind::KwNext => self.parse_next(),
            TokenKind::Ident if self.source.has_assign_ahead() => self.parse_assignments(),
            TokenKind::Ident => self.parse_command(),
            kind if kind.can_start_expr() => {
                self.parse_expression();
            }
            _ => self.error("line"),
        }
        self.finish_node();
    }

    fn parse_next(&mut self) {
        self.start_node(SyntaxKind::Next);
        self.bump(); // next
        match self.current() {
            TokenKind::Ident | TokenKind::Filepath => self.bump(),
            _ => self.error("NAME or FILEPATH"),
        }
        self.finish_node();
    }

    /// Parse `path = value`.
    fn parse_assignments(&mut self) {
        self.start_node(SyntaxKind::Assignments);
        self.parse_path();
        if self.expect(TokenKind::Assign) {
            if self.current().can_start_expr() {
                self.parse_expression();
            } else {
                self.error("value");
            }
        }
        self.finish_node();
    }

    /// Parse `name`, `name.field` and `name[0]` accessor chains.
    pub(crate) fn parse_path(&mut self) {
        self.start_node(SyntaxKind::Path);
        self.expect(TokenKind::Ident);

        loop {
            match self.current() {
                TokenKind::Dot => {
                    self.bump();
                    if self.at(TokenKind::Ident) {
                        self.bump_node(SyntaxKind::PathFragment);
                    } else {
                        self.error("NAME");
                    }
                }
                TokenKind::LBracket => {
                    self.bump();
                    if matches!(self.current(), TokenKind::IntLiteral | TokenKind::Ident) {
                        self.bump_node(SyntaxKind::PathFragment);
                    } else {
                        self.error("INT or NAME");
                    }
                    self.expect(TokenKind::RBracket);
                }
                _ => break,
            }
        }

        self.finish_node();
    }
}
