mod common;
use common::*;

use expect_test::expect;
use saga_syntax::parser::parse_tokens;

const SCRIPT: &str = "\
# deploy
image = 'alpine'
foreach hosts as host
    wait host
        alpine/ssh host --command 'uptime'
    if ready
        next `report`
";

#[test]
fn test_navigate_script() {
    let root = tree(SCRIPT);
    assert_eq!(root.rule_name(), "start");
    assert_eq!(root.len(), 3);

    let comment = root.node("block.line.comment").unwrap();
    assert_eq!(comment.text(), "# deploy");

    let value = root.node("assignments").unwrap().child(2).unwrap();
    assert_eq!(value.node("string").unwrap().text(), "'alpine'");

    let command = root.node("foreach_block.nested_block.wait_block.command").unwrap();
    assert_eq!(command.text(), "alpine/ssh host --command 'uptime'");
    assert_eq!(command.depth(), 2);
    assert_eq!(command.len(), 5);

    let next = root.node("foreach_block.if_block.next").unwrap();
    assert_eq!(next.child(1).unwrap(), token(TokenKind::Filepath, "`report`"));
}

#[test]
fn test_path_not_found_names_segment() {
    let err = tree(SCRIPT).node("foreach_block.for_statement").unwrap_err();
    assert_eq!(
        err,
        QueryError::PathNotFound {
            path: "foreach_block.for_statement".into(),
            segment: "for_statement".into(),
        }
    );
    insta::assert_snapshot!(
        err.to_string(),
        @"no `for_statement` node on path `foreach_block.for_statement`"
    );
}

#[test]
fn test_unknown_rule_name() {
    let err = tree("3\n").node("start.nonsense").unwrap_err();
    assert!(matches!(
        err,
        QueryError::PathNotFound { ref segment, .. } if segment == "nonsense"
    ));
}

#[test]
fn test_index_out_of_range() {
    let statement = tree("wait t\n\tx=1\n").node("wait_statement").unwrap();
    assert_eq!(statement.len(), 2);
    assert_eq!(
        statement.child(2).unwrap_err(),
        QueryError::IndexOutOfRange { index: 2, len: 2 }
    );
    insta::assert_snapshot!(
        statement.child(5).unwrap_err().to_string(),
        @"child 5 out of range, node has 2 children"
    );
}

#[test]
fn test_child_chaining() {
    let root = tree("if a\n\tx=1\nelse\n\tx=2\n");
    let else_keyword = root
        .node("if_block")
        .unwrap()
        .child(2)
        .unwrap()
        .child(0)
        .unwrap()
        .child(0)
        .unwrap();
    assert_eq!(else_keyword, (TokenKind::KwElse, "else"));
    assert_eq!(else_keyword.rule_name(), "ELSE");
    assert!(else_keyword.as_tree().is_none());
    let leaf = else_keyword.as_token().unwrap();
    assert_eq!((leaf.line(), leaf.column()), (3, 1));
    assert_eq!(leaf.kind(), TokenKind::KwElse);
}

#[test]
fn test_tree_equality_is_structural() {
    let spaced = tree("x   =   [ 1 ,2 ]\n");
    let compact = tree("x=[1,2]\n");
    assert_eq!(spaced, compact);
    assert_ne!(tree("x=[1,2]\n"), tree("x=[1,3]\n"));
}

#[test]
fn test_display_matches_pretty() {
    let root = tree("next a\n");
    assert_eq!(root.to_string(), root.pretty());
    expect![[r#"
start
  block
    line
      next
        NEXT "next"
        NAME "a"
"#]]
    .assert_eq(&root.pretty());
}

#[test]
fn test_parse_tokens_matches_parse() {
    let tokens = tokenize(SCRIPT).unwrap();
    let from_tokens = parse_tokens(&tokens).unwrap().tree();
    assert_eq!(from_tokens, tree(SCRIPT));
    assert_eq!(from_tokens.syntax().text().to_string(), SCRIPT);
}

#[test]
fn test_tree_crosses_threads() {
    let parse = parse(SCRIPT).unwrap();
    let handle = std::thread::spawn(move || parse.tree().node("wait_statement").unwrap().text());
    assert_eq!(handle.join().unwrap(), "wait host");
}
