mod common;
use common::*;
use expect_test::expect;

fn name(text: &str) -> Token {
    token(TokenKind::Ident, text)
}

// Assignments
#[test]
fn test_assignment_string() {
    let node = tree("var=\"hello\"\n").node("start.block.line.assignments").unwrap();
    assert_eq!(node.node("path").unwrap().child(0).unwrap(), name("var"));
    assert_eq!(node.child(1).unwrap(), token(TokenKind::Assign, "="));
    assert_eq!(
        node.child(2).unwrap().node("string").unwrap().child(0).unwrap(),
        token(TokenKind::DoubleQuoted, "\"hello\"")
    );
}

#[test]
fn test_assignment_int() {
    let node = tree("var=3\n").node("start.block.line.assignments").unwrap();
    assert_eq!(node.node("path").unwrap().child(0).unwrap(), name("var"));
    assert_eq!(node.child(1).unwrap(), token(TokenKind::Assign, "="));
    assert_eq!(
        node.child(2).unwrap().node("number").unwrap().child(0).unwrap(),
        token(TokenKind::IntLiteral, "3")
    );
}

#[test]
fn test_path_assignment() {
    let node = tree("rainbow.colors[0]=\"blue\"\n")
        .node("start.block.line.assignments.path")
        .unwrap();
    assert_eq!(node.child(0).unwrap(), name("rainbow"));
    assert_eq!(node.child(1).unwrap().child(0).unwrap(), name("colors"));
    assert_eq!(
        node.child(2).unwrap().child(0).unwrap(),
        token(TokenKind::IntLiteral, "0")
    );
}

#[test]
fn test_path_shape() {
    expect![[r#"
start
  block
    line
      assignments
        path
          NAME "a"
          path_fragment
            NAME "b"
          path_fragment
            NAME "c"
        EQUALS "="
        values
          list
"#]]
    .assert_eq(&snapshot_parse("a.b[c] = []\n"));
}

// Operations
#[test]
fn test_sum() {
    let node = tree("3 + 3\n").node("start.block.line.operation").unwrap();
    let three = token(TokenKind::IntLiteral, "3");
    assert_eq!(node.node("values.number").unwrap().child(0).unwrap(), three);
    assert_eq!(
        node.node("operator").unwrap().child(0).unwrap(),
        token(TokenKind::Plus, "+")
    );
    assert_eq!(node.child(2).unwrap().node("number").unwrap().child(0).unwrap(), three);
}

#[test]
fn test_sum_shape() {
    expect![[r#"
start
  block
    line
      operation
        values
          number
            INT "3"
        operator
          PLUS "+"
        values
          number
            INT "3"
"#]]
    .assert_eq(&snapshot_parse("3 + 3\n"));
}

#[test]
fn test_precedence_shape() {
    expect![[r#"
start
  block
    line
      operation
        operation
          operator
            DASH "-"
          values
            number
              INT "1"
        operator
          LESSER "<"
        operation
          values
            number
              INT "2"
          operator
            MULTIPLIER "*"
          values
            number
              INT "3"
"#]]
    .assert_eq(&snapshot_parse("-1 < 2 * 3\n"));
}

#[test]
fn test_every_binary_operator() {
    for (source, kind) in [
        ("1 + 2\n", TokenKind::Plus),
        ("1 - 2\n", TokenKind::Minus),
        ("1 * 2\n", TokenKind::Star),
        ("1 / 2\n", TokenKind::Slash),
        ("1 % 2\n", TokenKind::Percent),
        ("1 ** 2\n", TokenKind::Power),
        ("1 == 2\n", TokenKind::EqEq),
        ("1 != 2\n", TokenKind::Neq),
        ("1 < 2\n", TokenKind::Lt),
        ("1 <= 2\n", TokenKind::LtEq),
        ("1 > 2\n", TokenKind::Gt),
        ("1 >= 2\n", TokenKind::GtEq),
    ] {
        let operator = tree(source).node("operation.operator").unwrap();
        let leaf = operator.child(0).unwrap();
        assert_eq!(leaf.as_token().unwrap().kind(), kind, "{source:?}");
    }
}

// next
#[test]
fn test_next() {
    let node = tree("next word\n").node("start.block.line.next").unwrap();
    assert_eq!(node.child(0).unwrap(), token(TokenKind::KwNext, "next"));
    assert_eq!(node.child(1).unwrap(), name("word"));
}

#[test]
fn test_next_filepath() {
    let node = tree("next `path`\n").node("start.block.line.next").unwrap();
    assert_eq!(node.child(0).unwrap(), token(TokenKind::KwNext, "next"));
    assert_eq!(node.child(1).unwrap(), token(TokenKind::Filepath, "`path`"));
}

// Commands
#[test]
fn test_command() {
    let node = tree("org/container-name\n").node("start.block.line.command").unwrap();
    assert_eq!(node.child(0).unwrap().child(0).unwrap(), name("org"));
    assert_eq!(
        node.child(1).unwrap().child(0).unwrap(),
        token(TokenKind::Slash, "/")
    );
    assert_eq!(node.child(2).unwrap().child(0).unwrap(), name("container"));
    assert_eq!(
        node.child(3).unwrap().child(0).unwrap(),
        token(TokenKind::Minus, "-")
    );
    assert_eq!(node.child(4).unwrap().child(0).unwrap(), name("name"));
}

#[test]
fn test_command_option() {
    let node = tree("container --awesome yes\n")
        .node("start.block.line.command")
        .unwrap()
        .child(1)
        .unwrap()
        .node("options")
        .unwrap();
    assert_eq!(node.child(0).unwrap(), token(TokenKind::Minus, "-"));
    assert_eq!(node.child(1).unwrap(), token(TokenKind::Minus, "-"));
    assert_eq!(node.child(2).unwrap(), name("awesome"));
    assert_eq!(node.child(3).unwrap(), name("yes"));
}

#[test]
fn test_command_arguments() {
    let node = tree("container command \"secret\"\n")
        .node("start.block.line.command")
        .unwrap();
    assert_eq!(node.child(1).unwrap().child(0).unwrap(), name("command"));
    let value = node
        .child(2)
        .unwrap()
        .node("values.string")
        .unwrap()
        .child(0)
        .unwrap();
    assert_eq!(value, token(TokenKind::DoubleQuoted, "\"secret\""));
}

#[test]
fn test_command_shape() {
    expect![[r#"
start
  block
    line
      command
        segment
          NAME "alpine"
        arguments
          NAME "echo"
        arguments
          values
            number
              INT "1"
        options
          DASH "-"
          DASH "-"
          NAME "tag"
          values
            string
              SINGLE_QUOTED "'x'"
          DASH "-"
          DASH "-"
          NAME "quiet"
"#]]
    .assert_eq(&snapshot_parse("alpine echo 1 --tag 'x' --quiet\n"));
}

// Comments
#[test]
fn test_comment() {
    for comment in ["# one", "#one"] {
        let node = tree(&format!("{comment}\n"))
            .node("start.block.line.comment")
            .unwrap();
        assert_eq!(node.child(0).unwrap(), token(TokenKind::LineComment, comment));
    }
}

#[test]
fn test_comment_without_trailing_newline() {
    let node = tree("# last").node("comment").unwrap();
    assert_eq!(node.text(), "# last");
}
