//! The completion orchestrator.
//!
//! `Completions` wires the pieces together for one request: candidate
//! collection at the resolved token index, variable suggestions through the
//! binder when a variable position was reached, terminal-to-text
//! translation, and prefix filtering. Variables always precede syntactic
//! tokens in the output; within each group no text appears twice, and no
//! deduplication happens across the groups.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};

use mint_binder::{BinderState, symbol_flags};
use mint_parser::{Grammar, NodeIndex, NodeKind, Parse, RuleId, parse_source};
use mint_scanner::SyntaxKind;

use mint_common::CaretPosition;

use crate::token_position::{TokenPosition, TokenPositionFn};
use crate::candidates::CandidateCollector;

pub mod filters;
use filters::{MatcherStrategy, default_matcher, filter_candidates};

/// Terminals excluded from the syntactic candidate set: literals and
/// comments (their text is free-form), identifiers' lexical siblings that
/// the semantic path handles, and plain punctuation, which is not useful to
/// suggest verbatim. Keyword-shaped operators with a display override stay
/// suggestable.
static IGNORED_TOKENS: Lazy<FxHashSet<SyntaxKind>> = Lazy::new(|| {
    let mut ignored: FxHashSet<SyntaxKind> = [
        SyntaxKind::Unknown,
        SyntaxKind::LeftParen,
        SyntaxKind::RightParen,
        SyntaxKind::LeftBrace,
        SyntaxKind::RightBrace,
        SyntaxKind::Comma,
        SyntaxKind::Colon,
        SyntaxKind::Semicolon,
        SyntaxKind::Plus,
        SyntaxKind::Minus,
        SyntaxKind::Star,
        SyntaxKind::Slash,
        SyntaxKind::Bang,
        SyntaxKind::Equals,
        SyntaxKind::EqualsEquals,
        SyntaxKind::BangEquals,
        SyntaxKind::LessThan,
        SyntaxKind::GreaterThan,
        SyntaxKind::LessThanEquals,
        SyntaxKind::GreaterThanEquals,
        SyntaxKind::AmpersandAmpersand,
        SyntaxKind::BarBar,
        SyntaxKind::PlusPlus,
        SyntaxKind::MinusMinus,
        SyntaxKind::IntegerLiteral,
        SyntaxKind::FloatLiteral,
        SyntaxKind::StringLiteral,
        SyntaxKind::LineComment,
        SyntaxKind::BlockComment,
    ]
    .into_iter()
    .collect();
    for (kind, _) in TOKEN_DISPLAY_OVERRIDES {
        ignored.remove(kind);
    }
    ignored
});

/// Grammar rules that mark semantically special positions: reaching one
/// during collection defers to scope resolution instead of suggesting a raw
/// identifier terminal.
static PREFERRED_RULES: Lazy<FxHashSet<RuleId>> =
    Lazy::new(|| [RuleId::VariableRead, RuleId::Argument].into_iter().collect());

/// Operators rendered with their literal spelling instead of a symbolic
/// name. Listing a kind here also exempts it from the ignored set.
const TOKEN_DISPLAY_OVERRIDES: &[(SyntaxKind, &str)] = &[(SyntaxKind::NotIn, "!in")];

/// One completion request over an already-parsed file. Borrows everything;
/// nothing survives the request.
pub struct Completions<'a> {
    parse: &'a Parse,
    binder: &'a BinderState,
    grammar: &'a Grammar,
    matcher: MatcherStrategy,
}

impl<'a> Completions<'a> {
    /// A provider using the process-wide default matcher strategy.
    pub fn new(parse: &'a Parse, binder: &'a BinderState, grammar: &'a Grammar) -> Completions<'a> {
        Completions::with_matcher(parse, binder, grammar, default_matcher())
    }

    /// A provider with an explicit matcher strategy.
    pub fn with_matcher(
        parse: &'a Parse,
        binder: &'a BinderState,
        grammar: &'a Grammar,
        matcher: MatcherStrategy,
    ) -> Completions<'a> {
        Completions {
            parse,
            binder,
            grammar,
            matcher,
        }
    }

    /// All suggestions for a resolved token position: visible variables
    /// first (when the grammar admits a variable there), then syntactic
    /// tokens, each group filtered against the relevant prefix.
    pub fn suggestions_at(&self, position: &TokenPosition) -> Vec<String> {
        let collector = CandidateCollector::new(
            self.grammar,
            &self.parse.tokens,
            &IGNORED_TOKENS,
            &PREFERRED_RULES,
            position.index,
        );
        let candidates = collector.collect();

        let mut completions = Vec::new();
        if candidates.rules.contains(&RuleId::VariableRead)
            || candidates.rules.contains(&RuleId::Argument)
        {
            completions.extend(self.suggest_variables(position));
        }

        // Translate terminal candidates to display text. Identifier is
        // excluded - the variable path above already covers it. Kinds are
        // sorted numerically first so the output is deterministic, and a
        // terminal reachable through several grammar paths appears once.
        let overrides: FxHashMap<SyntaxKind, &str> =
            TOKEN_DISPLAY_OVERRIDES.iter().copied().collect();
        let mut kinds: Vec<SyntaxKind> = candidates.tokens.keys().copied().collect();
        kinds.sort_by_key(|&k| k as u16);
        let mut token_texts = Vec::new();
        let mut seen = FxHashSet::default();
        for kind in kinds {
            if kind == SyntaxKind::Identifier {
                continue;
            }
            let display = match overrides.get(&kind) {
                Some(text) => *text,
                // A terminal with no canonical display name is skipped, not
                // reported.
                None => match kind.display_text() {
                    Some(text) => text,
                    None => continue,
                },
            };
            let text = display.to_lowercase();
            if seen.insert(text.clone()) {
                token_texts.push(text);
            }
        }

        // Completing inside an ignored token (a string literal, say) must
        // not filter keywords by the literal's contents.
        let effective_prefix = if self.context_is_ignored_token(position) {
            ""
        } else {
            position.text.as_str()
        };
        completions.extend(filter_candidates(
            self.matcher,
            effective_prefix,
            &token_texts,
        ));
        completions
    }

    /// Names visible from the caret's scope, inner declarations first,
    /// filtered by the prefix of the variable-read construct under the
    /// caret (not an unrelated sibling token).
    fn suggest_variables(&self, position: &TokenPosition) -> Vec<String> {
        let scope = self
            .binder
            .enclosing_scope(&self.parse.arena, position.context);
        let names: Vec<String> = self
            .binder
            .visible_symbols(scope, symbol_flags::SUGGESTABLE)
            .into_iter()
            .map(|id| self.binder.symbol(id).name.clone())
            .collect();
        let prefix = if self.within_variable_read(position.context) {
            position.text.as_str()
        } else {
            ""
        };
        filter_candidates(self.matcher, prefix, &names)
    }

    fn within_variable_read(&self, node: NodeIndex) -> bool {
        self.parse
            .arena
            .ancestors(node)
            .any(|idx| {
                self.parse
                    .arena
                    .get(idx)
                    .is_some_and(|n| n.kind == NodeKind::VariableRead)
            })
    }

    fn context_is_ignored_token(&self, position: &TokenPosition) -> bool {
        let Some(node) = self.parse.arena.get(position.context) else {
            return false;
        };
        if node.kind != NodeKind::TokenNode {
            return false;
        }
        node.token
            .and_then(|i| self.parse.tokens.get(i as usize))
            .is_some_and(|t| IGNORED_TOKENS.contains(&t.kind))
    }
}

/// Parse `code`, resolve `caret` with the supplied resolution function, and
/// produce suggestions. An unresolvable caret yields an empty list; syntax
/// errors never abort. Identical inputs give identical output - there is no
/// hidden state, so re-invocation is the retry.
pub fn get_suggestions(
    code: &str,
    caret: CaretPosition,
    compute_position: TokenPositionFn,
) -> Vec<String> {
    let parse = parse_source(code);
    let Some(position) = compute_position(&parse.arena, &parse.tokens, code, caret) else {
        return Vec::new();
    };
    let binder = BinderState::bind_source_file(&parse, code);
    let grammar = Grammar::mint();
    Completions::new(&parse, &binder, &grammar).suggestions_at(&position)
}
