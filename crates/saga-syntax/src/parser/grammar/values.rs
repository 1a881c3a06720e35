//! Literal values.
//!
//! `values` wraps exactly one of:
//! - `number`: `3`
//! - `string`: `'red'` or `"red"`
//! - `boolean`: `true` / `false`
//! - `list`: `[values, ...]`
//! - `objects`: `{'key': values, ...}`
//! - a bare `FILEPATH` token: `` `/path` ``

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::CompletedMarker;
use super::super::Parser;

impl Parser<'_, '_> {
    pub(crate) fn parse_values(&mut self) -> CompletedMarker {
        let marker = self.start();
        match self.current() {
            TokenKind::IntLiteral => self.bump_node(SyntaxKind::Number),
            TokenKind::SingleQuoted | TokenKind::DoubleQuoted => {
                self.bump_node(SyntaxKind::String);
            }
            TokenKind::KwTrue | TokenKind::KwFalse => self.bump_node(SyntaxKind::Boolean),
            TokenKind::LBracket => self.parse_list(),
            TokenKind::LBrace => self.parse_objects(),
            TokenKind::Filepath => self.bump(),
            _ => self.error("value"),
        }
        marker.complete(self, SyntaxKind::Values)
    }

    fn parse_list(&mut self) {
        self.start_node(SyntaxKind::List);
        self.bump(); // [
        if self.enter_nesting() {
            if !self.at(TokenKind::RBracket) {
                self.parse_values();
                while self.at(TokenKind::Comma) {
                    self.bump();
                    self.parse_values();
                }
            }
            self.leave_nesting();
        }
        self.expect(TokenKind::RBracket);
        self.finish_node();
    }

    fn parse_objects(&mut self) {
        self.start_node(SyntaxKind::Objects);
        self.bump(); // {
        if self.enter_nesting() {
            if !self.at(TokenKind::RBrace) {
                self.parse_key_value();
                while self.at(TokenKind::Comma) {
                    self.bump();
                    self.parse_key_value();
                }
            }
            self.leave_nesting();
        }
        self.expect(TokenKind::RBrace);
        self.finish_node();
    }

    /// Parse `'key': values`.
    fn parse_key_value(&mut self) {
        self.start_node(SyntaxKind::KeyValue);
        if self.current().is_string() {
            self.bump_node(SyntaxKind::String);
        } else {
            self.error("string");
        }
        self.expect(TokenKind::Colon);
        self.parse_values();
        self.finish_node();
    }

    /// Opens one list/object level, reporting an error past
    /// `max_depth` open levels.
    pub(crate) fn enter_nesting(&mut self) -> bool {
        if self.nesting >= self.max_depth() {
            let expected = format!("at most {} nested values", self.max_depth());
            self.error(&expected);
            return false;
        }
        self.nesting += 1;
        true
    }

    pub(crate) fn leave_nesting(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }
}
