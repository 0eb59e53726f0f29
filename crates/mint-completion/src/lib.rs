//! Grammar-aware code completion for mint.
//!
//! Given source text and a caret location, produces a ranked list of textual
//! suggestions appropriate at that exact point - tolerating incomplete and
//! syntactically invalid input, since completion is most valuable on
//! unfinished code. The pipeline per request:
//!
//! 1. scan + parse (`mint-parser`), errors recorded, never fatal
//! 2. resolve the caret to a token index and partial prefix
//!    (`token_position`)
//! 3. search the grammar for admissible terminals and semantically special
//!    rules at that index (`candidates`)
//! 4. resolve visible variables when a variable position was reached
//!    (`mint-binder`) and filter everything against the typed prefix
//!    (`completions::filters`)
//!
//! Each call owns its token stream, tree, and scope table; nothing is cached
//! across calls.

pub mod token_position;
pub use token_position::{TokenPosition, TokenPositionFn, compute_token_position};

pub mod candidates;
pub use candidates::{CandidateCollector, CandidateSet};

pub mod completions;
pub use completions::filters::{MatcherStrategy, default_matcher, set_default_matcher};
pub use completions::{Completions, get_suggestions};
