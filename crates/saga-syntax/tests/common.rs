//! Shared helpers for lexer and parser tests.
#![allow(dead_code, unused_imports)]

pub use saga_syntax::lexer::{tokenize, Token, TokenKind};
pub use saga_syntax::parser::parse;
pub use saga_syntax::syntax::{Child, QueryError, Tree};

/// Installs a test subscriber so `RUST_LOG=saga_syntax=trace` shows the
/// parser's logs next to a failing test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parses `source` and returns the root `start` node.
pub fn tree(source: &str) -> Tree {
    init_tracing();
    match parse(source) {
        Ok(parse) => parse.tree(),
        Err(err) => panic!("failed to parse {source:?}: {err}"),
    }
}

/// Helper to format a parse result for snapshot testing.
pub fn snapshot_parse(source: &str) -> String {
    init_tracing();
    match parse(source) {
        Ok(parse) => parse.tree().pretty(),
        Err(err) => format!("{err}\n"),
    }
}

/// Position-free token for comparisons.
pub fn token(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text)
}

/// Kinds and texts of the significant tokens of `source`.
pub fn significant(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| (t.kind, t.text.to_string()))
        .collect()
}
