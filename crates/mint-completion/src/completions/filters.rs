//! Suggestion filtering and ranking strategies.
//!
//! Two interchangeable strategies narrow candidates against the partially
//! typed prefix. `Prefix` keeps case-insensitive prefix matches in their
//! original order; `Fuzzy` scores subsequence matches and ranks best-first.
//! Every prefix match is also a fuzzy match (a prefix is a maximal
//! consecutive subsequence), so switching strategies reorders but never
//! shrinks the result for the same prefix.

use once_cell::sync::OnceCell;
use tracing::warn;

/// Matching strategy, selectable per provider or process-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatcherStrategy {
    #[default]
    Prefix,
    Fuzzy,
}

/// The process-wide default strategy. Set once during initialization, read
/// by every provider constructed without an explicit strategy; readers take
/// no lock.
static DEFAULT_MATCHER: OnceCell<MatcherStrategy> = OnceCell::new();

/// Configure the process-wide default matcher. Returns `false` (and logs)
/// if a default was already set or read; the first value wins.
pub fn set_default_matcher(strategy: MatcherStrategy) -> bool {
    let accepted = DEFAULT_MATCHER.set(strategy).is_ok();
    if !accepted {
        warn!(?strategy, "default matcher already configured; ignoring");
    }
    accepted
}

/// The process-wide default matcher; `Prefix` when never configured.
pub fn default_matcher() -> MatcherStrategy {
    DEFAULT_MATCHER.get().copied().unwrap_or_default()
}

/// Filter `candidates` against `prefix` under `strategy`. Pure function of
/// its inputs; an empty or whitespace-only prefix returns the candidates
/// unchanged.
pub fn filter_candidates(
    strategy: MatcherStrategy,
    prefix: &str,
    candidates: &[String],
) -> Vec<String> {
    if prefix.trim().is_empty() {
        return candidates.to_vec();
    }
    match strategy {
        MatcherStrategy::Prefix => candidates
            .iter()
            .filter(|c| starts_with_ignore_case(c, prefix))
            .cloned()
            .collect(),
        MatcherStrategy::Fuzzy => {
            let mut scored: Vec<(i32, usize, &String)> = candidates
                .iter()
                .enumerate()
                .filter_map(|(order, c)| fuzzy_score(prefix, c).map(|s| (s, order, c)))
                .collect();
            // Best score first; original order breaks ties (stable ranking).
            scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
            scored.into_iter().map(|(_, _, c)| c.clone()).collect()
        }
    }
}

fn starts_with_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate.to_lowercase().starts_with(&prefix.to_lowercase())
}

const WORD_START_BONUS: i32 = 8;
const CONSECUTIVE_BONUS: i32 = 4;
const GAP_PENALTY: i32 = 1;

/// Score `candidate` against `pattern` as a case-insensitive subsequence
/// match. `None` when the pattern is not a subsequence at all. Consecutive
/// runs and word starts score up, gaps score down, so `vlu` ranks `value`
/// above `visibleResult` while both survive.
fn fuzzy_score(pattern: &str, candidate: &str) -> Option<i32> {
    let pattern: Vec<char> = pattern.chars().flat_map(|c| c.to_lowercase()).collect();
    let chars: Vec<char> = candidate.chars().collect();
    let lower: Vec<char> = candidate
        .chars()
        .flat_map(|c| c.to_lowercase())
        .collect();
    if pattern.is_empty() {
        return Some(0);
    }
    // Mixed-width lowercasing is rare enough to ignore; bail to a plain
    // containment check when the widths diverge.
    if lower.len() != chars.len() {
        return lower
            .iter()
            .collect::<String>()
            .contains(&pattern.iter().collect::<String>())
            .then_some(0);
    }

    let mut score = 0i32;
    let mut pi = 0usize;
    let mut previous_matched = false;
    for (ci, &ch) in lower.iter().enumerate() {
        if pi < pattern.len() && ch == pattern[pi] {
            score += 1;
            if ci == 0 || is_word_start(&chars, ci) {
                score += WORD_START_BONUS;
            }
            if previous_matched {
                score += CONSECUTIVE_BONUS;
            }
            previous_matched = true;
            pi += 1;
            if pi == pattern.len() {
                break;
            }
        } else {
            if pi > 0 {
                score -= GAP_PENALTY;
            }
            previous_matched = false;
        }
    }
    (pi == pattern.len()).then_some(score)
}

/// A character position that begins a "word": after a separator, or an
/// uppercase letter following a lowercase one (camelCase hump).
fn is_word_start(chars: &[char], at: usize) -> bool {
    if at == 0 {
        return true;
    }
    let prev = chars[at - 1];
    let current = chars[at];
    prev == '_' || prev == '-' || (current.is_uppercase() && prev.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_prefix_returns_candidates_unchanged() {
        let candidates = strings(&["beta", "alpha"]);
        for strategy in [MatcherStrategy::Prefix, MatcherStrategy::Fuzzy] {
            assert_eq!(
                filter_candidates(strategy, "", &candidates),
                candidates,
                "{strategy:?}"
            );
            assert_eq!(filter_candidates(strategy, "   ", &candidates), candidates);
        }
    }

    #[test]
    fn prefix_strategy_is_case_insensitive_and_order_preserving() {
        let candidates = strings(&["Value", "vacant", "other", "VALID"]);
        assert_eq!(
            filter_candidates(MatcherStrategy::Prefix, "va", &candidates),
            strings(&["Value", "vacant", "VALID"])
        );
    }

    #[test]
    fn fuzzy_strategy_accepts_subsequences_and_ranks_tight_matches_first() {
        let candidates = strings(&["visibleResult", "value"]);
        let filtered = filter_candidates(MatcherStrategy::Fuzzy, "vlu", &candidates);
        assert_eq!(filtered, strings(&["value", "visibleResult"]));
    }

    #[test]
    fn fuzzy_rejects_non_subsequences() {
        let candidates = strings(&["alpha"]);
        assert!(filter_candidates(MatcherStrategy::Fuzzy, "xq", &candidates).is_empty());
    }

    #[test]
    fn every_prefix_match_is_a_fuzzy_match() {
        let candidates = strings(&["visible", "value", "vacant", "other", "Violet"]);
        for prefix in ["v", "va", "vi", "Vio"] {
            let by_prefix = filter_candidates(MatcherStrategy::Prefix, prefix, &candidates);
            let by_fuzzy = filter_candidates(MatcherStrategy::Fuzzy, prefix, &candidates);
            for item in &by_prefix {
                assert!(
                    by_fuzzy.contains(item),
                    "{item:?} accepted by prefix but not fuzzy for {prefix:?}"
                );
            }
        }
    }

    #[test]
    fn default_matcher_starts_as_prefix() {
        assert_eq!(default_matcher(), MatcherStrategy::Prefix);
    }
}
