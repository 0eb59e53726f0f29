//! Scope and symbol binding for the mint completion engine.
//!
//! One `BinderState` is built per parse by walking the tree once. Scopes
//! live in an arena addressed by `ScopeId`; each scope holds the symbols
//! declared directly in it and an index (never a pointer) back to its
//! enclosing scope, so there is no cyclic ownership and upward walks are
//! O(depth). Nothing is shared or cached across requests.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use mint_parser::{NodeArena, NodeIndex};

mod state_binding;

/// Symbol classification flags. Only `VARIABLE` and `PARAMETER` symbols
/// participate in completion suggestions.
pub mod symbol_flags {
    pub const VARIABLE: u32 = 1 << 0;
    pub const PARAMETER: u32 = 1 << 1;
    pub const FUNCTION: u32 = 1 << 2;

    /// The kinds offered when a variable is expected at the caret.
    pub const SUGGESTABLE: u32 = VARIABLE | PARAMETER;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeId(pub u32);

/// A declared name. `scope` is the declaring scope, as an index into the
/// binder's arena.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub flags: u32,
    pub decl: NodeIndex,
    pub scope: ScopeId,
}

/// What kind of construct opened a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    File,
    Function,
    Block,
    Loop,
    Catch,
}

#[derive(Debug)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    pub node: NodeIndex,
    pub kind: ContainerKind,
    symbols: SmallVec<[SymbolId; 8]>,
}

impl Scope {
    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
    }
}

/// The scope tree for one parse.
#[derive(Debug)]
pub struct BinderState {
    scopes: Vec<Scope>,
    symbols: Vec<Symbol>,
    node_scopes: FxHashMap<u32, ScopeId>,
    scope_stack: Vec<ScopeId>,
}

impl BinderState {
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0 as usize]
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0 as usize]
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// The outermost scope. Always present after binding.
    pub fn file_scope(&self) -> ScopeId {
        ScopeId(0)
    }

    /// The scope directly anchored at `node`, if that node opened one.
    pub fn scope_for_node(&self, node: NodeIndex) -> Option<ScopeId> {
        self.node_scopes.get(&node.0).copied()
    }

    /// The scope a position inside `node` resolves to: the nearest ancestor
    /// (the node itself included) that opened a scope, or the file scope.
    /// The walk is iterative, so deeply nested input cannot overflow the
    /// stack.
    pub fn enclosing_scope(&self, arena: &NodeArena, node: NodeIndex) -> ScopeId {
        for ancestor in arena.ancestors(node) {
            if let Some(scope) = self.scope_for_node(ancestor) {
                return scope;
            }
        }
        self.file_scope()
    }

    /// All symbols matching `mask` visible from `scope`: those declared
    /// directly in it first, then the enclosing scopes', out to the file
    /// scope. Shadowed names appear once per declaration - ranking is the
    /// caller's concern, not collapsing.
    pub fn visible_symbols(&self, scope: ScopeId, mask: u32) -> Vec<SymbolId> {
        let mut out = Vec::new();
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = self.scope(id);
            for &sym in scope.symbols() {
                if self.symbol(sym).flags & mask != 0 {
                    out.push(sym);
                }
            }
            current = scope.parent;
        }
        out
    }
}

#[cfg(test)]
mod tests;
