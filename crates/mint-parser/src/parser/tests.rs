//! Unit tests for the tree arena and parser recovery.

use mint_scanner::SyntaxKind;

use crate::parser::node::{NodeIndex, NodeKind};
use crate::parser::state::{Parse, parse_source};

fn nodes_of_kind(parse: &Parse, kind: NodeKind) -> Vec<NodeIndex> {
    parse
        .arena
        .iter()
        .filter(|(_, node)| node.kind == kind)
        .map(|(idx, _)| idx)
        .collect()
}

#[test]
fn parses_a_function_without_errors() {
    let parse = parse_source("fun test() {\n    doSomething()\n}");
    assert_eq!(parse.error_count(), 0);
    let root = parse.arena.get(parse.root).unwrap();
    assert_eq!(root.kind, NodeKind::SourceFile);
    assert_eq!(nodes_of_kind(&parse, NodeKind::FunctionDecl).len(), 1);
    assert_eq!(nodes_of_kind(&parse, NodeKind::CallExpr).len(), 1);
}

#[test]
fn parses_variables_as_variable_reads() {
    let parse = parse_source("x");
    assert_eq!(parse.error_count(), 0);
    assert_eq!(nodes_of_kind(&parse, NodeKind::VariableRead).len(), 1);
}

#[test]
fn parses_postfix_on_a_variable_read() {
    let parse = parse_source("x++");
    assert_eq!(parse.error_count(), 0);
    let postfix = nodes_of_kind(&parse, NodeKind::PostfixExpr);
    assert_eq!(postfix.len(), 1);
    let node = parse.arena.get(postfix[0]).unwrap();
    let first_child = parse.arena.get(node.children[0]).unwrap();
    assert_eq!(first_child.kind, NodeKind::VariableRead);
}

#[test]
fn parses_parenthesized_variables_as_variable_reads() {
    let parse = parse_source("(x)");
    assert_eq!(parse.error_count(), 0);
    let paren = nodes_of_kind(&parse, NodeKind::ParenExpr);
    assert_eq!(paren.len(), 1);
    assert_eq!(nodes_of_kind(&parse, NodeKind::VariableRead).len(), 1);
}

#[test]
fn parses_call_callees_as_plain_identifiers() {
    // The callee of `f()` is not a variable-read position.
    let parse = parse_source("f()");
    assert_eq!(parse.error_count(), 0);
    assert_eq!(nodes_of_kind(&parse, NodeKind::CallExpr).len(), 1);
    assert!(nodes_of_kind(&parse, NodeKind::VariableRead).is_empty());
}

#[test]
fn recovers_from_a_malformed_for_header() {
    let parse = parse_source("fun test() {\n    for(i on foo) {\n        doSomething()\n    } \n}");
    assert!(parse.error_count() > 0);
    // The tree still exists and covers the input.
    assert!(parse.arena.get(parse.root).is_some());
    assert_eq!(nodes_of_kind(&parse, NodeKind::ForStmt).len(), 1);
    // Every significant token is reachable from the stream.
    assert_eq!(
        parse.tokens.last().map(|t| t.kind),
        Some(SyntaxKind::EndOfFile)
    );
}

#[test]
fn recovers_from_missing_closing_brace() {
    let parse = parse_source("fun test() {\n    val x = 1\n");
    assert!(parse.error_count() > 0);
    assert_eq!(nodes_of_kind(&parse, NodeKind::VarDecl).len(), 1);
}

#[test]
fn bounds_nesting_depth_without_panicking() {
    let mut source = String::from("val x = ");
    for _ in 0..500 {
        source.push('(');
    }
    source.push('1');
    for _ in 0..500 {
        source.push(')');
    }
    let parse = parse_source(&source);
    assert!(parse.error_count() > 0);
    assert!(parse.arena.get(parse.root).is_some());
}

#[test]
fn find_node_at_prefers_the_deepest_cover() {
    let source = "fun test() { val x = 1 }";
    let parse = parse_source(source);
    // Offset of `x` in the declaration.
    let offset = source.find("x").unwrap() as u32;
    let found = parse.arena.find_node_at(offset);
    assert!(found.is_some());
    let node = parse.arena.get(found).unwrap();
    assert_eq!(node.kind, NodeKind::TokenNode);
    let mut saw_var_decl = false;
    for ancestor in parse.arena.ancestors(found) {
        if parse.arena.get(ancestor).unwrap().kind == NodeKind::VarDecl {
            saw_var_decl = true;
        }
    }
    assert!(saw_var_decl);
}

#[test]
fn every_token_node_has_a_parent() {
    let parse = parse_source("fun test() { if (a > 1) { b() } }");
    for (idx, node) in parse.arena.iter() {
        if idx != parse.root {
            assert!(
                node.parent.is_some(),
                "node {idx:?} of kind {:?} is unparented",
                node.kind
            );
        }
    }
}
