//! Candidate collection: which terminals and semantic categories are
//! admissible at a token index.
//!
//! This is a static search over the grammar's rule/transition structure, not
//! an execution of the parser: starting from the entry rule it follows every
//! path through the rule table, consuming real tokens from the stream until
//! a path either dies on a mismatch (syntax errors simply kill paths) or
//! reaches the caret index. There, every directly reachable non-ignored
//! terminal is recorded, and every reachable preferred rule is recorded
//! without descending into it - those positions are handed to scope
//! resolution instead. An explicit memo table plus an in-progress set guard
//! against cyclic rule references, and a global visit budget bounds
//! pathological inputs.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;
use tracing::warn;

use mint_common::limits::MAX_COLLECT_VISITS;
use mint_parser::{Grammar, GrammarElement, RuleId};
use mint_scanner::{SyntaxKind, Token};

/// The admissible-candidate sets for one token position. `tokens` maps each
/// reachable terminal to the fixed terminals that must follow it on that
/// path (empty when paths disagree past the first token).
#[derive(Debug, Default, Clone)]
pub struct CandidateSet {
    pub rules: FxHashSet<RuleId>,
    pub tokens: FxHashMap<SyntaxKind, Vec<SyntaxKind>>,
}

pub struct CandidateCollector<'a> {
    grammar: &'a Grammar,
    tokens: &'a [Token],
    caret: usize,
    ignored: &'a FxHashSet<SyntaxKind>,
    preferred: &'a FxHashSet<RuleId>,
    candidates: CandidateSet,
    memo: FxHashMap<(RuleId, usize), Vec<usize>>,
    in_progress: FxHashSet<(RuleId, usize)>,
    visits: u32,
}

impl<'a> CandidateCollector<'a> {
    pub fn new(
        grammar: &'a Grammar,
        tokens: &'a [Token],
        ignored: &'a FxHashSet<SyntaxKind>,
        preferred: &'a FxHashSet<RuleId>,
        caret: usize,
    ) -> CandidateCollector<'a> {
        CandidateCollector {
            grammar,
            tokens,
            caret,
            ignored,
            preferred,
            candidates: CandidateSet::default(),
            memo: FxHashMap::default(),
            in_progress: FxHashSet::default(),
            visits: 0,
        }
    }

    /// Run the search and return the collected candidates.
    pub fn collect(mut self) -> CandidateSet {
        let entry = self.grammar.entry_rule();
        self.process_rule(entry, 0);
        if self.visits > MAX_COLLECT_VISITS {
            warn!(
                caret = self.caret,
                "candidate search exceeded its visit budget; results may be partial"
            );
        }
        self.candidates
    }

    /// All token indices at which `rule` can end when started at `at`,
    /// memoized per (rule, index). Candidate recording happens on the way;
    /// it only depends on the same key, so replaying from the memo is sound.
    fn process_rule(&mut self, rule: RuleId, at: usize) -> Vec<usize> {
        if let Some(cached) = self.memo.get(&(rule, at)) {
            return cached.clone();
        }
        if !self.in_progress.insert((rule, at)) {
            // Cyclic rule reference; the non-cyclic expansion of the same
            // rule covers every candidate this path could add.
            return Vec::new();
        }
        let grammar = self.grammar;
        let mut ends = BTreeSet::new();
        for alternative in grammar.alternatives(rule) {
            ends.extend(self.process_seq(alternative, at));
        }
        self.in_progress.remove(&(rule, at));
        let ends: Vec<usize> = ends.into_iter().collect();
        self.memo.insert((rule, at), ends.clone());
        ends
    }

    /// All token indices at which `seq` can end when started at `at`.
    fn process_seq(&mut self, seq: &[GrammarElement], at: usize) -> BTreeSet<usize> {
        self.visits += 1;
        if self.visits > MAX_COLLECT_VISITS {
            return BTreeSet::new();
        }
        let Some((first, rest)) = seq.split_first() else {
            return BTreeSet::from([at]);
        };
        let mut ends = BTreeSet::new();
        match first {
            GrammarElement::Tok(kind) => {
                if at >= self.caret {
                    // No real input past the caret can disambiguate this
                    // path; record the terminal and stop exploring.
                    self.record_token(*kind, rest);
                } else if self.tokens.get(at).is_some_and(|t| t.kind == *kind) {
                    ends.extend(self.process_seq(rest, at + 1));
                }
            }
            GrammarElement::Rule(rule) => {
                if at >= self.caret && self.preferred.contains(rule) {
                    self.candidates.rules.insert(*rule);
                } else {
                    for end in self.process_rule(*rule, at) {
                        ends.extend(self.process_seq(rest, end));
                    }
                }
            }
            GrammarElement::Opt(inner) => {
                ends.extend(self.process_seq(rest, at));
                for end in self.process_seq_owned(inner, at) {
                    ends.extend(self.process_seq(rest, end));
                }
            }
            GrammarElement::Star(inner) => {
                let mut positions = BTreeSet::from([at]);
                let mut work = vec![at];
                while let Some(position) = work.pop() {
                    for end in self.process_seq_owned(inner, position) {
                        if positions.insert(end) {
                            work.push(end);
                        }
                    }
                }
                for position in positions {
                    ends.extend(self.process_seq(rest, position));
                }
            }
            GrammarElement::Choice(alternatives) => {
                for alternative in alternatives {
                    for end in self.process_seq_owned(alternative, at) {
                        ends.extend(self.process_seq(rest, end));
                    }
                }
            }
        }
        ends
    }

    fn process_seq_owned(&mut self, seq: &[GrammarElement], at: usize) -> Vec<usize> {
        self.process_seq(seq, at).into_iter().collect()
    }

    /// Record a terminal reachable at the caret, with the fixed terminals
    /// that follow it in its sequence as the substitution hint.
    fn record_token(&mut self, kind: SyntaxKind, rest: &[GrammarElement]) {
        if self.ignored.contains(&kind) {
            return;
        }
        let mut follow = Vec::new();
        for element in rest {
            match element {
                GrammarElement::Tok(next) => follow.push(*next),
                _ => break,
            }
        }
        self.candidates
            .tokens
            .entry(kind)
            .and_modify(|existing| {
                // Keep only the follow prefix every path agrees on.
                let agreed = existing
                    .iter()
                    .zip(follow.iter())
                    .take_while(|(a, b)| a == b)
                    .count();
                existing.truncate(agreed);
            })
            .or_insert(follow);
    }
}
