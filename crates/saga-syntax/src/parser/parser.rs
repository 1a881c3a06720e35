//! Main parser implementation.

use std::sync::Arc;

use drop_bomb::DropBomb;
use tracing::debug;

use crate::config::ParserConfig;
use crate::error::Error;
use crate::lexer::{tokenize_with, Token, TokenKind};
use crate::parser::event::Event;
use crate::parser::sink::Sink;
use crate::parser::source::Source;
use crate::parser::{Parse, SyntaxError};
use crate::syntax::{LineIndex, SyntaxKind};

/// Parses source text into a syntax tree with the default configuration.
///
/// # Errors
///
/// Returns [`Error::Lex`] if the source cannot be tokenized and
/// [`Error::Syntax`] if the tokens match no grammar rule.
pub fn parse(source: &str) -> Result<Parse, Error> {
    parse_with(source, &ParserConfig::default())
}

/// Parses source text into a syntax tree.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with(source: &str, config: &ParserConfig) -> Result<Parse, Error> {
    let tokens = tokenize_with(source, config)?;
    let parse = build(&tokens, config)?;
    Ok(parse)
}

/// Parses an already tokenized stream (as produced by [`crate::lexer::tokenize`]).
///
/// # Errors
///
/// Returns the first [`SyntaxError`].
pub fn parse_tokens(tokens: &[Token]) -> Result<Parse, SyntaxError> {
    build(tokens, &ParserConfig::default())
}

fn build(tokens: &[Token], config: &ParserConfig) -> Result<Parse, SyntaxError> {
    debug!(tokens = tokens.len(), "parsing");
    let parser = Parser::new(tokens, config);
    let events = parser.parse().inspect_err(|err| debug!(%err, "parse failed"))?;

    let green_node = Sink::new(tokens, events).finish();
    let text: String = tokens.iter().map(|token| token.text.as_str()).collect();
    debug!(bytes = text.len(), "parsed");

    Ok(Parse {
        green_node,
        lines: Arc::new(LineIndex::new(&text)),
    })
}

/// The parser state.
pub(crate) struct Parser<'t, 'c> {
    pub(crate) source: Source<'t>,
    pub(crate) events: Vec<Event>,
    config: &'c ParserConfig,
    /// Current list/object literal nesting.
    pub(crate) nesting: usize,
    /// Current operand recursion inside an operation.
    pub(crate) operand_depth: usize,
    error: Option<SyntaxError>,
}

pub(crate) struct Marker {
    pos: usize,
    bomb: DropBomb,
}

impl Marker {
    pub(crate) fn complete(mut self, parser: &mut Parser<'_, '_>, kind: SyntaxKind) -> CompletedMarker {
        self.bomb.defuse();
        match parser.events.get_mut(self.pos) {
            Some(Event::Placeholder) => {
                parser.events[self.pos] = Event::Start {
                    kind,
                    forward_parent: None,
                };
            }
            Some(Event::Start {
                kind: existing_kind,
                ..
            }) => {
                *existing_kind = kind;
            }
            _ => {}
        }
        parser.events.push(Event::Finish);
        CompletedMarker { pos: self.pos }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CompletedMarker {
    pub(crate) pos: usize,
}

impl CompletedMarker {
    pub(crate) fn precede(self, parser: &mut Parser<'_, '_>) -> Marker {
        let new_pos = parser.events.len();
        parser.events.push(Event::Placeholder);
        set_forward_parent(&mut parser.events, self.pos, new_pos);
        Marker {
            pos: new_pos,
            bomb: DropBomb::new("uncompleted marker"),
        }
    }
}

fn set_forward_parent(events: &mut [Event], from: usize, to: usize) {
    let mut current = from;
    loop {
        match &mut events[current] {
            Event::Start {
                forward_parent: Some(fp),
                ..
            } => {
                current += *fp as usize;
            }
            Event::Start { forward_parent, .. } => {
                *forward_parent = Some((to - current) as u32);
                break;
            }
            _ => break,
        }
    }
}

impl<'t, 'c> Parser<'t, 'c> {
    fn new(tokens: &'t [Token], config: &'c ParserConfig) -> Self {
        Self {
            source: Source::new(tokens),
            events: Vec::new(),
            config,
            nesting: 0,
            operand_depth: 0,
            error: None,
        }
    }

    fn parse(mut self) -> Result<Vec<Event>, SyntaxError> {
        self.parse_start();
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.events),
        }
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    pub(crate) fn current(&self) -> TokenKind {
        self.source.current()
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.source.current() == kind
    }

    pub(crate) fn at_end(&self) -> bool {
        self.source.at_end()
    }

    pub(crate) fn peek_kind_n(&self, n: usize) -> TokenKind {
        self.source.peek_kind_n(n)
    }

    pub(crate) fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    pub(crate) fn bump(&mut self) {
        if self.at_end() {
            return;
        }
        let kind = self.source.current();
        self.events.push(Event::token(SyntaxKind::from(kind)));
        self.source.bump();
    }

    /// Consumes the current token if it has the given kind, otherwise
    /// reports it as unexpected.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            self.error(kind.name());
            false
        }
    }

    /// Wraps the current token in a node of its own.
    pub(crate) fn bump_node(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.finish_node();
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            bomb: DropBomb::new("uncompleted marker"),
        }
    }

    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.events.push(Event::start(kind));
    }

    pub(crate) fn finish_node(&mut self) {
        self.events.push(Event::Finish);
    }

    /// Records a syntax error at the current token and abandons the rest of
    /// the input. Only the first error is kept.
    pub(crate) fn error(&mut self, expected: &str) {
        if self.error.is_some() {
            return;
        }

        let (line, column, found) = match self.source.current_token() {
            Some(token) => (token.line, token.column, describe(token)),
            None => {
                let (line, column) = self.source.last_token().map_or((1, 1), end_of);
                (line, column, "end of input".to_string())
            }
        };

        self.error = Some(SyntaxError {
            line,
            column,
            expected: expected.to_string(),
            found,
        });
        self.source.abort();
    }
}

/// Line and column just past `token`.
fn end_of(token: &Token) -> (u32, u32) {
    if token.text.ends_with('\n') {
        (token.line + 1, 1)
    } else {
        (token.line, token.column + token.text.chars().count() as u32)
    }
}

fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent => token.kind.name().to_string(),
        kind => format!("{} {:?}", kind.name(), token.text.as_str()),
    }
}
