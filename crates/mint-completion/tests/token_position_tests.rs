//! Tests for caret-to-token-position resolution.

use mint_common::CaretPosition;
use mint_completion::compute_token_position;
use mint_parser::parse_source;
use mint_scanner::SyntaxKind;

const NESTED_TRY: &str = "fun test() {\n    try {\n        doSomething()\n    } \n}";

#[test]
fn resolves_a_caret_on_a_whitespace_padded_closing_line() {
    let parse = parse_source(NESTED_TRY);
    assert_eq!(parse.error_count(), 0);
    // Line 4 is `    } ` - the caret sits past the brace in trailing
    // whitespace, so the position is the next real token: the `}` on line 5.
    let position = compute_token_position(
        &parse.arena,
        &parse.tokens,
        NESTED_TRY,
        CaretPosition::new(4, 7),
    )
    .unwrap();
    assert_eq!(position.index, 11);
    assert_eq!(position.text, "");
    let token = parse.tokens[position.index];
    assert_eq!(token.kind, SyntaxKind::RightBrace);
    assert_eq!(token.line, 5);
}

#[test]
fn includes_the_partial_text_of_a_keyword() {
    let parse = parse_source(NESTED_TRY);
    let position = compute_token_position(
        &parse.arena,
        &parse.tokens,
        NESTED_TRY,
        CaretPosition::new(1, 2),
    )
    .unwrap();
    assert_eq!(position.index, 0);
    assert_eq!(position.text, "fu");
}

#[test]
fn includes_the_partial_text_of_an_identifier() {
    let parse = parse_source(NESTED_TRY);
    let position = compute_token_position(
        &parse.arena,
        &parse.tokens,
        NESTED_TRY,
        CaretPosition::new(1, 7),
    )
    .unwrap();
    assert_eq!(position.index, 1);
    assert_eq!(position.text, "tes");
}

#[test]
fn a_caret_on_a_trailing_edge_belongs_to_the_token() {
    let parse = parse_source(NESTED_TRY);
    // Column 3 touches the end of `fun`: the whole keyword is the prefix.
    let position = compute_token_position(
        &parse.arena,
        &parse.tokens,
        NESTED_TRY,
        CaretPosition::new(1, 3),
    )
    .unwrap();
    assert_eq!(position.index, 0);
    assert_eq!(position.text, "fun");
}

#[test]
fn a_caret_on_a_leading_edge_belongs_to_the_gap() {
    let parse = parse_source(NESTED_TRY);
    // Column 4 on line 1 is where `test` starts; that resolves as a
    // between-token position at the identifier's index with no prefix.
    let position = compute_token_position(
        &parse.arena,
        &parse.tokens,
        NESTED_TRY,
        CaretPosition::new(1, 4),
    )
    .unwrap();
    assert_eq!(position.index, 1);
    assert_eq!(position.text, "");
}

#[test]
fn resolves_past_the_last_token_to_end_of_file() {
    let parse = parse_source(NESTED_TRY);
    let position = compute_token_position(
        &parse.arena,
        &parse.tokens,
        NESTED_TRY,
        CaretPosition::new(5, 30),
    )
    .unwrap();
    assert_eq!(
        parse.tokens[position.index].kind,
        SyntaxKind::EndOfFile
    );
    assert_eq!(position.text, "");
}

#[test]
fn resolves_even_when_the_stream_has_errors() {
    let source = "fun test() {\n    for(i on foo) {\n        doSomething()\n    } \n}";
    let parse = parse_source(source);
    assert!(parse.error_count() > 0);
    let position =
        compute_token_position(&parse.arena, &parse.tokens, source, CaretPosition::new(4, 7))
            .unwrap();
    assert_eq!(position.index, 16);
    let token = parse.tokens[position.index];
    assert_eq!(token.kind, SyntaxKind::RightBrace);
    assert_eq!(token.line, 5);
}

#[test]
fn rejects_carets_outside_the_file() {
    let parse = parse_source(NESTED_TRY);
    for caret in [CaretPosition::new(0, 0), CaretPosition::new(99, 0)] {
        assert_eq!(
            compute_token_position(&parse.arena, &parse.tokens, NESTED_TRY, caret),
            None
        );
    }
}

#[test]
fn resolves_inside_an_empty_file() {
    let parse = parse_source("");
    let position =
        compute_token_position(&parse.arena, &parse.tokens, "", CaretPosition::new(1, 0)).unwrap();
    assert_eq!(position.index, 0);
    assert_eq!(parse.tokens[position.index].kind, SyntaxKind::EndOfFile);
    assert!(position.context.is_some());
}
