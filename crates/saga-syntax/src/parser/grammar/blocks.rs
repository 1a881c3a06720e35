//! Block structure.
//!
//! - `start`: one or more blocks
//! - `block`: a line terminated by `NEWLINE`, or a compound block
//! - `nested_block`: `INDENT block+ DEDENT`
//! - `if`/`else if`/`else`, `for`, `foreach` and `wait` blocks, each a
//!   one-line header followed by a nested block

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::Parser;

impl Parser<'_, '_> {
    /// Parse the whole token stream.
    pub(crate) fn parse_start(&mut self) {
        self.start_node(SyntaxKind::Start);
        if self.at_end() {
            self.error("block");
        }
        while !self.at_end() {
            self.parse_block();
        }
        self.finish_node();
    }

    /// Parse a single block.
    pub(crate) fn parse_block(&mut self) {
        self.start_node(SyntaxKind::Block);
        match self.current() {
            TokenKind::KwIf => self.parse_if_block(),
            TokenKind::KwFor => self.parse_for_block(),
            TokenKind::KwForeach => self.parse_foreach_block(),
            TokenKind::KwWait => self.parse_wait_block(),
            kind if can_start_line(kind) => {
                self.parse_line();
                self.expect(TokenKind::Newline);
            }
            _ => self.error("block"),
        }
        self.finish_node();
    }

    /// Parse an indented body.
    fn parse_nested_block(&mut self) {
        self.start_node(SyntaxKind::NestedBlock);
        if self.expect(TokenKind::Indent) {
            self.parse_block();
            while !self.at(TokenKind::Dedent) && !self.at_end() {
                self.parse_block();
            }
            self.expect(TokenKind::Dedent);
        }
        self.finish_node();
    }

    /// Parse the end of a block header and the body below it.
    fn parse_body(&mut self) {
        self.expect(TokenKind::Newline);
        self.parse_nested_block();
    }

    /// Parse `if name` with its body and any `else if`/`else` continuations.
    fn parse_if_block(&mut self) {
        self.start_node(SyntaxKind::IfBlock);

        self.start_node(SyntaxKind::IfStatement);
        self.bump(); // if
        self.expect(TokenKind::Ident);
        self.finish_node();
        self.parse_body();

        while self.at(TokenKind::KwElse) {
            if self.peek_kind_n(1) == TokenKind::KwIf {
                self.parse_elseif_block();
            } else {
                self.parse_else_block();
                break;
            }
        }

        self.finish_node();
    }

    fn parse_elseif_block(&mut self) {
        self.start_node(SyntaxKind::ElseifBlock);
        self.start_node(SyntaxKind::ElseifStatement);
        self.bump(); // else
        self.bump(); // if
        self.expect(TokenKind::Ident);
        self.finish_node();
        self.parse_body();
        self.finish_node();
    }

    fn parse_else_block(&mut self) {
        self.start_node(SyntaxKind::ElseBlock);
        self.bump_node(SyntaxKind::ElseStatement);
        self.parse_body();
        self.finish_node();
    }

    /// Parse `for item in items` with its body.
    fn parse_for_block(&mut self) {
        self.start_node(SyntaxKind::ForBlock);
        self.start_node(SyntaxKind::ForStatement);
        self.bump(); // for
        if self.expect(TokenKind::Ident) && self.expect(TokenKind::KwIn) {
            self.expect(TokenKind::Ident);
        }
        self.finish_node();
        self.parse_body();
        self.finish_node();
    }

    /// Parse `foreach items as item` with its body.
    fn parse_foreach_block(&mut self) {
        self.start_node(SyntaxKind::ForeachBlock);
        self.start_node(SyntaxKind::ForeachStatement);
        self.bump(); // foreach
        if self.expect(TokenKind::Ident) && self.expect(TokenKind::KwAs) {
            self.expect(TokenKind::Ident);
        }
        self.finish_node();
        self.parse_body();
        self.finish_node();
    }

    /// Parse `wait name` or `wait "string"` with its body.
    fn parse_wait_block(&mut self) {
        self.start_node(SyntaxKind::WaitBlock);
        self.start_node(SyntaxKind::WaitStatement);
        self.bump(); // wait
        match self.current() {
            TokenKind::Ident => self.bump(),
            kind if kind.is_string() => self.bump_node(SyntaxKind::String),
            _ => self.error("NAME or string"),
        }
        self.finish_node();
        self.parse_body();
        self.finish_node();
    }
}

/// Returns `true` if a simple line may start with this token.
fn can_start_line(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::LineComment | TokenKind::KwNext | TokenKind::Ident
    ) || kind.can_start_expr()
}
