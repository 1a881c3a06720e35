//! Sink for converting parser events into a syntax tree.
//!
//! The sink takes the flat event stream and builds a proper `rowan` green tree.

use crate::lexer::Token;
use crate::parser::event::Event;
use crate::syntax::SyntaxKind;

/// Builds a syntax tree from parser events.
pub struct Sink<'t> {
    tokens: &'t [Token],
    events: Vec<Event>,
    cursor: usize,
    builder: rowan::GreenNodeBuilder<'static>,
}

impl<'t> Sink<'t> {
    /// Creates a new sink.
    pub fn new(tokens: &'t [Token], events: Vec<Event>) -> Self {
        Self {
            tokens,
            events,
            cursor: 0,
            builder: rowan::GreenNodeBuilder::new(),
        }
    }

    /// Consumes the sink and returns the green tree.
    pub fn finish(mut self) -> rowan::GreenNode {
        for i in 0..self.events.len() {
            match std::mem::replace(&mut self.events[i], Event::Placeholder) {
                Event::Start {
                    kind,
                    forward_parent,
                } => {
                    // Handle forward parent chain
                    let mut kinds = vec![kind];
                    let mut idx = i;
                    let mut fp = forward_parent;

                    while let Some(fp_idx) = fp {
                        idx += fp_idx as usize;
                        if let Event::Start {
                            kind,
                            forward_parent,
                        } = std::mem::replace(&mut self.events[idx], Event::Placeholder)
                        {
                            kinds.push(kind);
                            fp = forward_parent;
                        } else {
                            break;
                        }
                    }

                    for kind in kinds.into_iter().rev() {
                        self.builder.start_node(kind.into());
                    }
                }
                Event::Token { kind } => {
                    self.eat_trivia();
                    self.token(kind);
                }
                Event::Finish => {
                    self.eat_trivia();
                    self.builder.finish_node();
                }
                Event::Placeholder => {}
            }
        }

        self.builder.finish()
    }

    /// Adds trivia (whitespace, blank lines) to the tree.
    fn eat_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            if !token.kind.is_trivia() {
                break;
            }
            self.token(SyntaxKind::from(token.kind));
        }
    }

    /// Adds a token to the tree.
    fn token(&mut self, kind: SyntaxKind) {
        if let Some(token) = self.tokens.get(self.cursor) {
            self.builder.token(kind.into(), token.text.as_str());
            self.cursor += 1;
        }
    }
}
