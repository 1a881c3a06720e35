//! Command parsing.
//!
//! ```text
//! org/container-name arg "value" --flag yes --count 3
//! ```
//!
//! The command name is a run of names joined by `/` or `-` with no
//! whitespace in between. Each name becomes a `segment` node and each joint
//! a `separator` node. Positional arguments follow, then `--name [value]`
//! option groups collected in a single `options` node.

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::Parser;

impl Parser<'_, '_> {
    pub(crate) fn parse_command(&mut self) {
        self.start_node(SyntaxKind::Command);
        self.bump_node(SyntaxKind::Segment);

        while self.at_name_separator() {
            self.bump_node(SyntaxKind::Separator);
            self.bump_node(SyntaxKind::Segment);
        }

        loop {
            match self.current() {
                TokenKind::Ident => self.bump_node(SyntaxKind::Arguments),
                kind if kind.can_start_value() => {
                    self.start_node(SyntaxKind::Arguments);
                    self.parse_values();
                    self.finish_node();
                }
                _ => break,
            }
        }

        if self.at_option() {
            self.parse_options();
        }

        self.finish_node();
    }

    /// `/` or `-` glued between two names.
    fn at_name_separator(&self) -> bool {
        self.current().is_command_separator()
            && self.source.current_is_joined()
            && self.source.next_is_joined()
            && self.peek_kind_n(1) == TokenKind::Ident
    }

    fn at_option(&self) -> bool {
        self.at(TokenKind::Minus) && self.peek_kind_n(1) == TokenKind::Minus
    }

    fn parse_options(&mut self) {
        self.start_node(SyntaxKind::Options);
        while self.at_option() {
            self.bump(); // -
            self.bump(); // -
            self.expect(TokenKind::Ident);
            match self.current() {
                TokenKind::Ident => self.bump(),
                kind if kind.can_start_value() => {
                    self.parse_values();
                }
                _ => {}
            }
        }
        self.finish_node();
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::TokenKind;
    use crate::parser::parse;

    #[test]
    fn test_spaced_slash_is_not_a_separator() {
        // `/` with whitespace around it cannot continue the name or start
        // an argument.
        assert!(parse("org / name\n").is_err());
    }

    #[test]
    fn test_flag_without_value() {
        let tree = parse("run --verbose --level 3\n").unwrap().tree();
        let options = tree.node("command.options").unwrap();
        assert_eq!(options.len(), 7);
        assert_eq!(options.child(2).unwrap(), (TokenKind::Ident, "verbose"));
        assert_eq!(options.child(5).unwrap(), (TokenKind::Ident, "level"));
        assert_eq!(options.child(6).unwrap().rule_name(), "values");
    }

    #[test]
    fn test_arguments_mix_names_and_values() {
        let tree = parse("run fast [1] 'x'\n").unwrap().tree();
        let command = tree.node("command").unwrap();
        assert_eq!(command.len(), 4);
        assert!(command.child(2).unwrap().node("values.list").is_ok());
        assert!(command.child(3).unwrap().node("values.string").is_ok());
    }
}
