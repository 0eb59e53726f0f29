//! Mapping a caret location onto the token stream.
//!
//! The caret may sit mid-token, between tokens, in trailing whitespace, at
//! end-of-input, or over a region the parser could not make sense of; all of
//! those resolve. Boundary rule: a caret touching a token's trailing edge is
//! inside it (`val|` completes "val"), while a caret at a token's leading
//! edge belongs to the gap before it and resolves as a between-token
//! position.

use mint_common::{CaretPosition, LineMap};
use mint_parser::{NodeArena, NodeIndex};
use mint_scanner::{SyntaxKind, Token};

/// A caret resolved against one token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPosition {
    /// Index into the token stream; the `EndOfFile` token's index when the
    /// caret is past every real token.
    pub index: usize,
    /// Deepest parse-tree node covering the caret, for scope resolution.
    pub context: NodeIndex,
    /// The part of the token actually typed up to the caret; empty for
    /// between-token positions.
    pub text: String,
}

/// Pluggable resolution strategy. Hosts that need different boundary or
/// whitespace behavior pass their own function to
/// [`get_suggestions`](crate::get_suggestions).
pub type TokenPositionFn =
    fn(&NodeArena, &[Token], &str, CaretPosition) -> Option<TokenPosition>;

/// Resolve `caret` to a lexical position. Returns `None` only for carets
/// outside the file entirely (line 0, or past the last line); everything
/// else - including carets over syntax-error regions - resolves, so callers
/// treat `None` as "no suggestions" rather than an error.
pub fn compute_token_position(
    arena: &NodeArena,
    tokens: &[Token],
    source: &str,
    caret: CaretPosition,
) -> Option<TokenPosition> {
    let line_map = LineMap::build(source);
    if caret.line == 0 || caret.line > line_map.line_count() {
        return None;
    }

    // A token strictly containing the caret (trailing edge inclusive).
    for (index, token) in tokens.iter().enumerate() {
        if token.kind == SyntaxKind::EndOfFile {
            break;
        }
        if token.line == caret.line
            && token.column < caret.column
            && caret.column <= token.end_column(source)
        {
            let typed = (caret.column - token.column) as usize;
            let text: String = token.text(source).chars().take(typed).collect();
            return Some(TokenPosition {
                index,
                context: context_node(arena, token.start),
                text,
            });
        }
    }

    // Between tokens, in whitespace, or at end of input: synthesize a
    // position at the next token (EndOfFile included), so rule and scope
    // context stay meaningful even though no real token sits there.
    let index = tokens
        .iter()
        .position(|t| {
            t.line > caret.line || (t.line == caret.line && t.column >= caret.column)
        })
        .unwrap_or(tokens.len().saturating_sub(1));

    let offset = line_map
        .caret_to_offset(caret)
        .map(|o| o.min(source.len() as u32))
        .unwrap_or(source.len() as u32);
    Some(TokenPosition {
        index,
        context: context_node(arena, offset),
        text: String::new(),
    })
}

/// Deepest node covering `offset`, the root as fallback so resolution never
/// fails on trailing whitespace past the tree's span.
fn context_node(arena: &NodeArena, offset: u32) -> NodeIndex {
    let found = arena.find_node_at(offset);
    if found.is_some() {
        found
    } else {
        // The root is finished last, so it is the arena's final node.
        arena
            .iter()
            .last()
            .map(|(idx, _)| idx)
            .unwrap_or(NodeIndex::NONE)
    }
}
