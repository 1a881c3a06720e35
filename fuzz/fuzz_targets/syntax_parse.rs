#![no_main]

use libfuzzer_sys::fuzz_target;
use saga_syntax::{parse_with, tokenize_with, IndentationPolicy, ParserConfig};

const MAX_SOURCE_BYTES: usize = 4096;

fn decode_source(bytes: &[u8]) -> String {
    let capped = &bytes[..bytes.len().min(MAX_SOURCE_BYTES)];
    String::from_utf8_lossy(capped).into_owned()
}

fn config_for(seed: u8) -> ParserConfig {
    let indentation = match seed % 3 {
        0 => IndentationPolicy::Any,
        1 => IndentationPolicy::Spaces,
        _ => IndentationPolicy::Tabs,
    };
    ParserConfig {
        indentation,
        max_depth: usize::from(seed % 16) + 1,
    }
}

fn walk(tree: &saga_syntax::Tree) {
    let _ = tree.text();
    let _ = tree.depth();
    for child in tree.children() {
        if let Some(child) = child.as_tree() {
            walk(child);
        }
    }
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let config = config_for(data[0]);
    let source = decode_source(&data[1..]);

    match parse_with(&source, &config) {
        Ok(parse) => {
            assert_eq!(parse.syntax().text().to_string(), source);
            let tree = parse.tree();
            walk(&tree);
            let _ = tree.node("start.block.line");
            let _ = tree.pretty();
        }
        Err(saga_syntax::Error::Lex(_)) => {}
        Err(saga_syntax::Error::Syntax(_)) => {
            // Syntax errors only happen on lexically valid input.
            assert!(tokenize_with(&source, &config).is_ok());
        }
    }
});
