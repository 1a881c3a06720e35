//! Parser events.
//!
//! Grammar rules never build tree nodes directly. They push events, and the
//! sink replays the stream into a green tree once the whole input is
//! accepted. When a rule fails the stream is dropped, so a
//! partially built `start` never reaches the caller.
//!
//! `operation` nodes wrap an operand that was already parsed: the operand's
//! `Start` event points at a later `Start` through `forward_parent`, and the
//! sink opens the outer node first.

use crate::syntax::SyntaxKind;

/// One step of tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens a rule node.
    Start {
        /// Rule kind of the node.
        kind: SyntaxKind,
        /// Offset to the `Start` of the node that wraps this one.
        forward_parent: Option<u32>,
    },
    /// Consumes the next significant token, with leading whitespace.
    Token {
        /// Kind recorded for the token.
        kind: SyntaxKind,
    },
    /// Closes the innermost open node.
    Finish,
    /// Slot reserved by an unfinished marker, or a `Start` already replayed
    /// through a forward parent.
    Placeholder,
}

impl Event {
    /// A `Start` not yet wrapped by another node.
    #[must_use]
    pub fn start(kind: SyntaxKind) -> Self {
        Self::Start {
            kind,
            forward_parent: None,
        }
    }

    /// A `Token` event for `kind`.
    #[must_use]
    pub fn token(kind: SyntaxKind) -> Self {
        Self::Token { kind }
    }
}
