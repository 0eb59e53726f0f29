//! Centralized limits and thresholds.
//!
//! Shared constants for recursion depths and operation counts used throughout
//! the workspace. Editor-facing tools see adversarial input (deeply nested or
//! machine-generated source), so every recursive or exploratory algorithm is
//! bounded here rather than ad hoc at each call site.

/// Maximum nesting depth the recursive-descent parser will follow before it
/// abandons the current construct with a diagnostic. Deeper input still
/// parses; the over-deep subtree is consumed as flat tokens.
pub const MAX_PARSE_DEPTH: u32 = 200;

/// Maximum number of parent links an upward tree walk will follow. The parse
/// tree is built with strictly nested spans, so this is only reachable
/// through a corrupted arena; walks bail out rather than loop.
pub const MAX_ANCESTOR_WALK: u32 = 10_000;

/// Global visit budget for the candidate collector's grammar search. The
/// memoized search is polynomial on well-formed grammars; the budget caps
/// pathological rule/token combinations.
pub const MAX_COLLECT_VISITS: u32 = 200_000;
