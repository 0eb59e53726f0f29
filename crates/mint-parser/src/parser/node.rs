//! Parse tree nodes and the arena that owns them.
//!
//! The tree is a flat `Vec<Node>` addressed by `NodeIndex`. Every node is
//! tagged with a `NodeKind` (a grammar-rule application, or `TokenNode` for
//! terminal leaves), carries a byte span, one parent link, and an ordered
//! child list. The whole arena is owned by one completion request and
//! immutable once parsing finishes.

use mint_common::Span;
use mint_common::limits::MAX_ANCESTOR_WALK;
use serde::{Deserialize, Serialize};

/// Grammar-rule and terminal identities for tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum NodeKind {
    SourceFile = 0,
    FunctionDecl,
    ParamList,
    Param,
    TypeRef,
    Block,
    VarDecl,
    IfStmt,
    ForStmt,
    WhileStmt,
    TryStmt,
    CatchClause,
    FinallyClause,
    ReturnStmt,
    ExprStmt,
    BinaryExpr,
    UnaryExpr,
    PostfixExpr,
    ParenExpr,
    CallExpr,
    ArgList,
    Argument,
    VariableRead,
    LiteralExpr,
    /// Recovery node wrapping tokens the parser could not place.
    ErrorNode,
    /// Terminal leaf holding one token of the stream.
    TokenNode,
}

/// Index of a node in the arena. `NONE` is the null sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    pub fn is_none(self) -> bool {
        self == NodeIndex::NONE
    }

    pub fn is_some(self) -> bool {
        self != NodeIndex::NONE
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    pub parent: NodeIndex,
    pub children: Vec<NodeIndex>,
    /// Index into the token stream, for `TokenNode` leaves only.
    pub token: Option<u32>,
}

#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }

    pub(crate) fn add(&mut self, kind: NodeKind, span: Span) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            span,
            parent: NodeIndex::NONE,
            children: Vec::new(),
            token: None,
        });
        idx
    }

    pub(crate) fn add_token_node(&mut self, span: Span, token_index: u32) -> NodeIndex {
        let idx = self.add(NodeKind::TokenNode, span);
        self.nodes[idx.0 as usize].token = Some(token_index);
        idx
    }

    /// Attach `children` to `parent`, widening the parent's span to cover
    /// them. Children must not already have a parent.
    pub(crate) fn attach(&mut self, parent: NodeIndex, children: Vec<NodeIndex>) {
        let mut span = self.nodes[parent.0 as usize].span;
        for &child in &children {
            debug_assert!(self.nodes[child.0 as usize].parent.is_none());
            self.nodes[child.0 as usize].parent = parent;
            span = span.cover(self.nodes[child.0 as usize].span);
        }
        let node = &mut self.nodes[parent.0 as usize];
        node.span = span;
        node.children = children;
    }

    /// The deepest node whose span covers `offset` (span ends inclusive, so
    /// a caret on a closing edge still resolves). `NONE` when the offset is
    /// outside every node.
    pub fn find_node_at(&self, offset: u32) -> NodeIndex {
        let mut best = NodeIndex::NONE;
        let mut best_len = u32::MAX;
        for (i, node) in self.nodes.iter().enumerate() {
            if node.span.contains_inclusive(offset) {
                let len = node.span.len();
                // Children are allocated before their parents, so among
                // equal spans the first hit is the most deeply nested node.
                if len < best_len {
                    best_len = len;
                    best = NodeIndex(i as u32);
                }
            }
        }
        best
    }

    /// Iterate `idx` and its ancestors up to the root. The walk is iterative
    /// and bounded, so hostile tree shapes cannot overflow the stack.
    pub fn ancestors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        let mut current = idx;
        let mut steps = 0u32;
        std::iter::from_fn(move || {
            if current.is_none() || steps >= MAX_ANCESTOR_WALK {
                return None;
            }
            steps += 1;
            let result = current;
            current = self.get(current).map_or(NodeIndex::NONE, |n| n.parent);
            Some(result)
        })
    }

    /// First direct `TokenNode` child with the given token kind, resolved
    /// through `tokens`. Used by the binder to pick declaration names.
    pub fn first_token_child(
        &self,
        idx: NodeIndex,
        tokens: &[mint_scanner::Token],
        kind: mint_scanner::SyntaxKind,
    ) -> Option<mint_scanner::Token> {
        let node = self.get(idx)?;
        for &child in &node.children {
            let child_node = self.get(child)?;
            if child_node.kind == NodeKind::TokenNode
                && let Some(token_index) = child_node.token
                && let Some(token) = tokens.get(token_index as usize)
                && token.kind == kind
            {
                return Some(*token);
            }
        }
        None
    }
}
