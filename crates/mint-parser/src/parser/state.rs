//! Parser state: token cursor, node construction, and recovery helpers.
//!
//! The grammar-specific parse methods live in `state_statements` and
//! `state_expressions`; everything here is shared plumbing. Recovery policy:
//! on unexpected input record a diagnostic and either skip one token (inside
//! statement lists) or leave the token for an enclosing construct (missing
//! closers). A parse never fails and never consumes past `EndOfFile`.

use mint_common::limits::MAX_PARSE_DEPTH;
use mint_common::{Diagnostic, Span};
use mint_scanner::{SyntaxKind, Token, scan_tokens};
use tracing::debug;

use super::node::{NodeArena, NodeIndex, NodeKind};

/// The outcome of parsing one source text: the tree, the token stream it was
/// built from, and every diagnostic encountered along the way. The
/// diagnostics vector doubles as the syntax-error count.
#[derive(Debug)]
pub struct Parse {
    pub arena: NodeArena,
    pub root: NodeIndex,
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parse {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }
}

/// Scan and parse `source`, tolerating any input.
pub fn parse_source(source: &str) -> Parse {
    let (tokens, scan_diagnostics) = scan_tokens(source);
    let mut state = ParserState::new(tokens, scan_diagnostics);
    let root = state.parse_source_file();
    debug!(
        nodes = state.arena.len(),
        errors = state.diagnostics.len(),
        "parse finished"
    );
    Parse {
        arena: state.arena,
        root,
        tokens: state.tokens,
        diagnostics: state.diagnostics,
    }
}

pub struct ParserState {
    pub(super) tokens: Vec<Token>,
    pub(super) arena: NodeArena,
    pub(super) pos: usize,
    pub(super) diagnostics: Vec<Diagnostic>,
    pub(super) depth: u32,
}

impl ParserState {
    pub fn new(tokens: Vec<Token>, scan_diagnostics: Vec<Diagnostic>) -> ParserState {
        debug_assert!(
            tokens.last().is_some_and(|t| t.kind == SyntaxKind::EndOfFile),
            "token stream must end with EndOfFile"
        );
        ParserState {
            tokens,
            arena: NodeArena::new(),
            pos: 0,
            diagnostics: scan_diagnostics,
            depth: 0,
        }
    }

    // ===== token cursor =====

    pub(super) fn current(&self) -> Token {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current().kind == kind
    }

    pub(super) fn next_kind(&self) -> SyntaxKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(SyntaxKind::EndOfFile, |t| t.kind)
    }

    pub(super) fn at_eof(&self) -> bool {
        self.at(SyntaxKind::EndOfFile)
    }

    /// Consume the current token into a `TokenNode` and push it on `children`.
    pub(super) fn bump(&mut self, children: &mut Vec<NodeIndex>) {
        let token = self.current();
        if token.kind == SyntaxKind::EndOfFile {
            return;
        }
        let node = self
            .arena
            .add_token_node(token.span(), self.pos as u32);
        children.push(node);
        self.pos += 1;
    }

    /// Consume the current token if it matches.
    pub(super) fn eat(&mut self, kind: SyntaxKind, children: &mut Vec<NodeIndex>) -> bool {
        if self.at(kind) {
            self.bump(children);
            true
        } else {
            false
        }
    }

    /// Consume `kind` or record a diagnostic at the current token. The
    /// unexpected token is left in place for an enclosing construct.
    pub(super) fn expect(&mut self, kind: SyntaxKind, children: &mut Vec<NodeIndex>) -> bool {
        if self.eat(kind, children) {
            return true;
        }
        let current = self.current();
        let expected = kind.display_text().unwrap_or(describe(kind));
        self.diagnostics.push(Diagnostic::error(
            current.span(),
            format!("expected `{expected}`, found {}", describe(current.kind)),
        ));
        false
    }

    // ===== node construction =====

    /// Create a node of `kind` covering `children`. An empty child list
    /// yields an empty span anchored at the current token.
    pub(super) fn finish(&mut self, kind: NodeKind, children: Vec<NodeIndex>) -> NodeIndex {
        let anchor = match children.first().and_then(|&c| self.arena.get(c)) {
            Some(first) => first.span,
            None => Span::empty(self.current().start),
        };
        let node = self.arena.add(kind, anchor);
        self.arena.attach(node, children);
        node
    }

    /// Record a diagnostic and swallow the current token into an error node
    /// so statement lists always make progress.
    pub(super) fn error_and_skip(&mut self, message: impl Into<String>) -> NodeIndex {
        let current = self.current();
        self.diagnostics
            .push(Diagnostic::error(current.span(), message.into()));
        let mut children = Vec::new();
        self.bump(&mut children);
        self.finish(NodeKind::ErrorNode, children)
    }

    /// Depth guard for the recursive parse methods. When the limit is hit the
    /// current construct degrades to an error node.
    pub(super) fn enter_depth(&mut self) -> bool {
        if self.depth >= MAX_PARSE_DEPTH {
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_depth(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Human-readable token description for diagnostics.
pub(super) fn describe(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::Identifier => "identifier",
        SyntaxKind::IntegerLiteral | SyntaxKind::FloatLiteral => "number",
        SyntaxKind::StringLiteral => "string",
        SyntaxKind::EndOfFile => "end of file",
        SyntaxKind::Unknown => "unknown character",
        other => other.display_text().unwrap_or("token"),
    }
}
