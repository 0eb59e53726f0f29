//! Tests for the grammar search behind candidate collection.

use rustc_hash::FxHashSet;

use mint_common::CaretPosition;
use mint_completion::{CandidateCollector, compute_token_position};
use mint_parser::{Grammar, RuleId, parse_source};
use mint_scanner::SyntaxKind;

fn ignored() -> FxHashSet<SyntaxKind> {
    [
        SyntaxKind::LeftParen,
        SyntaxKind::RightParen,
        SyntaxKind::LeftBrace,
        SyntaxKind::RightBrace,
        SyntaxKind::IntegerLiteral,
        SyntaxKind::StringLiteral,
    ]
    .into_iter()
    .collect()
}

fn preferred() -> FxHashSet<RuleId> {
    [RuleId::VariableRead, RuleId::Argument].into_iter().collect()
}

fn collect_at(source: &str, line: u32, column: u32) -> mint_completion::CandidateSet {
    let parse = parse_source(source);
    let grammar = Grammar::mint();
    let position = compute_token_position(
        &parse.arena,
        &parse.tokens,
        source,
        CaretPosition::new(line, column),
    )
    .unwrap();
    let ignored = ignored();
    let preferred = preferred();
    CandidateCollector::new(&grammar, &parse.tokens, &ignored, &preferred, position.index)
        .collect()
}

#[test]
fn statement_starts_admit_declaration_keywords() {
    let candidates = collect_at("val x = 1\n", 2, 0);
    for kind in [
        SyntaxKind::FunKeyword,
        SyntaxKind::ValKeyword,
        SyntaxKind::VarKeyword,
        SyntaxKind::IfKeyword,
        SyntaxKind::TryKeyword,
    ] {
        assert!(candidates.tokens.contains_key(&kind), "{kind:?} missing");
    }
    // Ignored terminals stay out even when the grammar admits them.
    assert!(!candidates.tokens.contains_key(&SyntaxKind::IntegerLiteral));
    assert!(!candidates.tokens.contains_key(&SyntaxKind::LeftParen));
}

#[test]
fn a_variable_position_reports_the_preferred_rule_not_its_terminals() {
    // Caret right after `= `, where an expression begins.
    let candidates = collect_at("val x = ", 1, 8);
    assert!(candidates.rules.contains(&RuleId::VariableRead));
    // The identifier terminal is still reachable through the call-expression
    // path; the variable-read path itself was pruned at the rule.
    assert!(candidates.tokens.contains_key(&SyntaxKind::TrueKeyword));
}

#[test]
fn argument_positions_report_the_argument_rule() {
    // Caret at the end of the partially typed argument `y`.
    let candidates = collect_at("val x = notify(y", 1, 16);
    assert!(candidates.rules.contains(&RuleId::Argument));
}

#[test]
fn keywords_carry_their_fixed_follow_sequence_as_a_hint() {
    let candidates = collect_at("", 1, 0);
    let follow = candidates
        .tokens
        .get(&SyntaxKind::FunKeyword)
        .expect("fun must be admissible in an empty file");
    assert_eq!(
        follow.as_slice(),
        &[SyntaxKind::Identifier, SyntaxKind::LeftParen]
    );
}

#[test]
fn membership_operators_appear_after_a_complete_operand() {
    // `x ` then caret: the comparison tier may continue.
    let candidates = collect_at("val ready = x ", 1, 14);
    assert!(candidates.tokens.contains_key(&SyntaxKind::InKeyword));
    assert!(candidates.tokens.contains_key(&SyntaxKind::NotIn));
}

#[test]
fn paths_that_die_on_syntax_errors_produce_no_candidates_not_panics() {
    let source = "fun test() {\n    for(i on foo) {\n        doSomething()\n    } \n}";
    let candidates = collect_at(source, 4, 7);
    // The prefix is unparseable, so nothing is admissible; the search just
    // returns empty sets.
    assert!(candidates.rules.is_empty());
    assert!(candidates.tokens.is_empty());
}

#[test]
fn collection_at_end_of_file_explores_the_tail_of_every_open_rule() {
    let source = "fun test() {\n    try {\n        doSomething()\n    } \n}";
    let candidates = collect_at(source, 4, 7);
    assert!(candidates.tokens.contains_key(&SyntaxKind::CatchKeyword));
    assert!(candidates.tokens.contains_key(&SyntaxKind::FinallyKeyword));
    assert!(candidates.rules.contains(&RuleId::VariableRead));
}
