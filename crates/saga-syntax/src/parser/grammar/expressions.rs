//! Operation parsing using Pratt parsing.
//!
//! Operator precedence (low to high):
//! - ==, !=, <, <=, >, >= (1-2)
//! - +, - (3-4)
//! - *, /, % (5-6)
//! - ** (8-7, right associative)
//! - unary - (9)
//!
//! A binary operation is `operation[left, operator, right]` and a unary one
//! `operation[operator, operand]`. Operands are `values` or nested
//! operations; a lone operand is returned as its `values` node.
//!
//! Only operands that recurse (the right side of `**`, operands of a tighter
//! operator, unary chains) count towards [`MAX_OPERAND_DEPTH`]. Flat
//! left-associative chains stay at depth one.

use crate::syntax::SyntaxKind;

use super::super::CompletedMarker;
use super::super::Parser;

/// Deepest operand recursion accepted inside a single operation.
pub(crate) const MAX_OPERAND_DEPTH: usize = 256;

impl Parser<'_, '_> {
    /// Parse an operation, or a bare value.
    pub(crate) fn parse_expression(&mut self) -> CompletedMarker {
        self.parse_expr_bp(0)
    }

    /// Parse operation with minimum binding power.
    fn parse_expr_bp(&mut self, min_bp: u8) -> CompletedMarker {
        let mut lhs = if let Some(bp) = self.current().prefix_binding_power() {
            let marker = self.start();
            self.bump_node(SyntaxKind::Operator);
            self.parse_operand(bp);
            marker.complete(self, SyntaxKind::Operation)
        } else {
            self.parse_values()
        };

        loop {
            let Some((l_bp, r_bp)) = self.current().infix_binding_power() else {
                break;
            };
            if l_bp < min_bp {
                break;
            }

            let marker = lhs.precede(self);
            self.bump_node(SyntaxKind::Operator);
            self.parse_operand(r_bp);
            lhs = marker.complete(self, SyntaxKind::Operation);
        }

        lhs
    }

    fn parse_operand(&mut self, min_bp: u8) {
        if self.operand_depth >= MAX_OPERAND_DEPTH {
            let expected = format!("at most {MAX_OPERAND_DEPTH} nested operations");
            self.error(&expected);
            return;
        }
        self.operand_depth += 1;
        self.parse_expr_bp(min_bp);
        self.operand_depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::MAX_OPERAND_DEPTH;
    use crate::config::ParserConfig;
    use crate::lexer::TokenKind;
    use crate::parser::{parse, parse_with};
    use crate::syntax::Tree;

    fn operation(source: &str) -> Tree {
        parse(source).unwrap().tree().node("line.operation").unwrap()
    }

    fn operator(tree: &Tree) -> String {
        tree.node("operator").unwrap().text()
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let tree = operation("1 + 2 * 3\n");
        assert_eq!(operator(&tree), "+");
        assert_eq!(tree.child(0).unwrap().rule_name(), "values");
        let right = tree.child(2).unwrap().as_tree().cloned().unwrap();
        assert_eq!(right.rule_name(), "operation");
        assert_eq!(operator(&right), "*");
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let tree = operation("5 - 2 - 1\n");
        let left = tree.child(0).unwrap().as_tree().cloned().unwrap();
        assert_eq!(left.rule_name(), "operation");
        assert_eq!(left.text(), "5 - 2");
        assert_eq!(tree.child(2).unwrap().rule_name(), "values");
    }

    #[test]
    fn test_power_is_right_associative() {
        let tree = operation("2 ** 3 ** 2\n");
        assert_eq!(tree.child(0).unwrap().rule_name(), "values");
        let right = tree.child(2).unwrap().as_tree().cloned().unwrap();
        assert_eq!(right.text(), "3 ** 2");
    }

    #[test]
    fn test_comparison_is_loosest() {
        let tree = operation("1 + 1 == 2\n");
        assert_eq!(operator(&tree), "==");
        assert_eq!(tree.child(0).unwrap().rule_name(), "operation");
    }

    #[test]
    fn test_unary_minus() {
        let tree = operation("-3\n");
        assert_eq!(tree.len(), 2);
        let op = tree.child(0).unwrap();
        assert_eq!(op.rule_name(), "operator");
        assert_eq!(op.child(0).unwrap(), (TokenKind::Minus, "-"));
        assert_eq!(tree.child(1).unwrap().rule_name(), "values");
    }

    #[test]
    fn test_unary_binds_tighter_than_power() {
        let tree = operation("-2 ** 2\n");
        assert_eq!(operator(&tree), "**");
        assert_eq!(tree.child(0).unwrap().text(), "-2");
    }

    #[test]
    fn test_missing_right_operand() {
        let err = parse("1 +\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "syntax error: expected value, found NEWLINE at 1:4"
        );
    }

    #[test]
    fn test_flat_operation_at_depth_one() {
        let config = ParserConfig {
            max_depth: 1,
            ..ParserConfig::default()
        };
        let tree = parse_with("3 + 3\n", &config).unwrap().tree();
        assert_eq!(operator(&tree.node("operation").unwrap()), "+");
        assert!(parse_with("1 - 2 * 3 - 4\n", &config).is_ok());
    }

    #[test]
    fn test_long_power_chain() {
        let source = format!("x = {}2\n", "2 ** ".repeat(70));
        let tree = parse(&source).unwrap().tree();
        assert_eq!(operator(&tree.node("assignments.operation").unwrap()), "**");
    }

    #[test]
    fn test_operand_depth_limit() {
        let within = format!("{}1\n", "-".repeat(MAX_OPERAND_DEPTH));
        assert!(parse(&within).is_ok());
        let beyond = format!("{}1\n", "-".repeat(MAX_OPERAND_DEPTH + 1));
        let err = parse(&beyond).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "syntax error: expected at most {MAX_OPERAND_DEPTH} nested operations, found INT \"1\" at 1:{}",
                MAX_OPERAND_DEPTH + 2
            )
        );
    }
}
