//! Tests for scope construction and symbol visibility.

use mint_parser::parse_source;

use crate::{BinderState, ContainerKind, ScopeId, symbol_flags};

fn bind(source: &str) -> (mint_parser::Parse, BinderState) {
    let parse = parse_source(source);
    let binder = BinderState::bind_source_file(&parse, source);
    (parse, binder)
}

fn visible_names(binder: &BinderState, scope: ScopeId, mask: u32) -> Vec<String> {
    binder
        .visible_symbols(scope, mask)
        .into_iter()
        .map(|id| binder.symbol(id).name.clone())
        .collect()
}

fn innermost_scope_of_kind(binder: &BinderState, kind: ContainerKind) -> ScopeId {
    (0..binder.scope_count() as u32)
        .map(ScopeId)
        .filter(|&id| binder.scope(id).kind == kind)
        .next_back()
        .expect("no scope of requested kind")
}

#[test]
fn declares_file_level_symbols_in_the_file_scope() {
    let (_, binder) = bind("val a = 1\nvar b = 2\nfun helper() {}");
    let names = visible_names(&binder, binder.file_scope(), symbol_flags::VARIABLE);
    assert_eq!(names, vec!["a", "b"]);
    let functions = visible_names(&binder, binder.file_scope(), symbol_flags::FUNCTION);
    assert_eq!(functions, vec!["helper"]);
}

#[test]
fn parameters_bind_inside_the_function_scope() {
    let (_, binder) = bind("fun add(a: Int, b: Int) { return a + b }");
    // Parameters are not visible at file level...
    assert!(visible_names(&binder, binder.file_scope(), symbol_flags::PARAMETER).is_empty());
    // ...but are visible from the function scope.
    let function = innermost_scope_of_kind(&binder, ContainerKind::Function);
    assert_eq!(
        visible_names(&binder, function, symbol_flags::SUGGESTABLE),
        vec!["a", "b"]
    );
}

#[test]
fn inner_scopes_list_their_symbols_before_outer_ones() {
    let source = "fun test() {\n    val outer = 1\n    if (outer > 0) {\n        val inner = 2\n    }\n}";
    let (_, binder) = bind(source);
    let block = innermost_scope_of_kind(&binder, ContainerKind::Block);
    assert_eq!(
        visible_names(&binder, block, symbol_flags::SUGGESTABLE),
        vec!["inner", "outer"]
    );
}

#[test]
fn shadowed_names_are_kept_not_collapsed() {
    let source = "val x = 1\nfun test() {\n    val x = 2\n    use(x)\n}";
    let (_, binder) = bind(source);
    let block = innermost_scope_of_kind(&binder, ContainerKind::Block);
    let names = visible_names(&binder, block, symbol_flags::VARIABLE);
    assert_eq!(names, vec!["x", "x"]);
}

#[test]
fn loop_and_catch_variables_open_their_own_scopes() {
    let source = "for (item in items) { use(item) }\ntry { f() } catch (error) { log(error) }";
    let (_, binder) = bind(source);

    let loop_scope = innermost_scope_of_kind(&binder, ContainerKind::Loop);
    assert_eq!(
        visible_names(&binder, loop_scope, symbol_flags::VARIABLE),
        vec!["item"]
    );

    let catch_scope = innermost_scope_of_kind(&binder, ContainerKind::Catch);
    assert_eq!(
        visible_names(&binder, catch_scope, symbol_flags::VARIABLE),
        vec!["error"]
    );

    // Neither escapes to file level.
    assert!(visible_names(&binder, binder.file_scope(), symbol_flags::VARIABLE).is_empty());
}

#[test]
fn enclosing_scope_resolves_through_non_scope_nodes() {
    let source = "fun test() {\n    val a = compute()\n}";
    let (parse, binder) = bind(source);
    // Resolve from the token of `compute` - nested in a call expression,
    // which opens no scope of its own.
    let offset = source.find("compute").unwrap() as u32;
    let node = parse.arena.find_node_at(offset);
    assert!(node.is_some());
    let scope = binder.enclosing_scope(&parse.arena, node);
    assert_eq!(binder.scope(scope).kind, ContainerKind::Block);
    assert_eq!(
        visible_names(&binder, scope, symbol_flags::VARIABLE),
        vec!["a"]
    );
}

#[test]
fn binding_survives_syntax_errors() {
    let source = "fun test() {\n    for(i on foo) {\n        val x = 1\n    } \n}";
    let (parse, binder) = bind(source);
    assert!(parse.error_count() > 0);
    // The malformed loop still declares its variable; binding never fails.
    let names: Vec<String> = (0..binder.scope_count() as u32)
        .map(ScopeId)
        .flat_map(|id| visible_names(&binder, id, symbol_flags::VARIABLE))
        .collect();
    assert!(names.contains(&"i".to_string()));
    assert!(names.contains(&"x".to_string()));
}
