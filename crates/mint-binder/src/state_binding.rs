//! The binding walk: one pass over the parse tree building scopes and
//! declaring symbols.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use mint_parser::{NodeIndex, NodeKind, Parse};
use mint_scanner::SyntaxKind;

use crate::{BinderState, ContainerKind, Scope, ScopeId, Symbol, SymbolId, symbol_flags};

impl BinderState {
    /// Build the scope tree for one parse. Scopes are opened by the source
    /// file, function declarations (parameters land there), blocks, `for`
    /// statements (the loop variable), and `catch` clauses (the exception
    /// name).
    pub fn bind_source_file(parse: &Parse, source: &str) -> BinderState {
        let mut state = BinderState {
            scopes: Vec::new(),
            symbols: Vec::new(),
            node_scopes: FxHashMap::default(),
            scope_stack: Vec::new(),
        };
        state.enter_scope(ContainerKind::File, parse.root);
        state.bind_node(parse, source, parse.root);
        state.scope_stack.pop();
        debug!(
            scopes = state.scopes.len(),
            symbols = state.symbols.len(),
            "binding finished"
        );
        state
    }

    fn bind_node(&mut self, parse: &Parse, source: &str, idx: NodeIndex) {
        let Some(node) = parse.arena.get(idx) else {
            return;
        };
        match node.kind {
            NodeKind::FunctionDecl => {
                // The function's name goes in the enclosing scope; its
                // parameters and body bind inside the new one.
                self.declare_named(parse, source, idx, symbol_flags::FUNCTION);
                self.enter_scope(ContainerKind::Function, idx);
                self.bind_children(parse, source, idx);
                self.scope_stack.pop();
            }
            NodeKind::VarDecl => {
                self.declare_named(parse, source, idx, symbol_flags::VARIABLE);
                self.bind_children(parse, source, idx);
            }
            NodeKind::Param => {
                self.declare_named(parse, source, idx, symbol_flags::PARAMETER);
            }
            NodeKind::Block => {
                self.enter_scope(ContainerKind::Block, idx);
                self.bind_children(parse, source, idx);
                self.scope_stack.pop();
            }
            NodeKind::ForStmt => {
                self.enter_scope(ContainerKind::Loop, idx);
                self.declare_named(parse, source, idx, symbol_flags::VARIABLE);
                self.bind_children(parse, source, idx);
                self.scope_stack.pop();
            }
            NodeKind::CatchClause => {
                self.enter_scope(ContainerKind::Catch, idx);
                self.declare_named(parse, source, idx, symbol_flags::VARIABLE);
                self.bind_children(parse, source, idx);
                self.scope_stack.pop();
            }
            _ => self.bind_children(parse, source, idx),
        }
    }

    fn bind_children(&mut self, parse: &Parse, source: &str, idx: NodeIndex) {
        let Some(node) = parse.arena.get(idx) else {
            return;
        };
        // Children are cloned indices, not nodes; the arena stays shared.
        let children: Vec<NodeIndex> = node.children.clone();
        for child in children {
            self.bind_node(parse, source, child);
        }
    }

    fn enter_scope(&mut self, kind: ContainerKind, node: NodeIndex) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            parent: self.scope_stack.last().copied(),
            node,
            kind,
            symbols: SmallVec::new(),
        });
        self.node_scopes.insert(node.0, id);
        self.scope_stack.push(id);
        id
    }

    /// Declare a symbol named by the first identifier token directly under
    /// `idx`. Error recovery can leave a declaration nameless; those simply
    /// declare nothing.
    fn declare_named(&mut self, parse: &Parse, source: &str, idx: NodeIndex, flags: u32) {
        let Some(name_token) =
            parse
                .arena
                .first_token_child(idx, &parse.tokens, SyntaxKind::Identifier)
        else {
            return;
        };
        self.declare_symbol(name_token.text(source).to_string(), flags, idx);
    }

    fn declare_symbol(&mut self, name: String, flags: u32, decl: NodeIndex) -> SymbolId {
        let scope = *self
            .scope_stack
            .last()
            .expect("declaration outside any scope");
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol {
            name,
            flags,
            decl,
            scope,
        });
        self.scopes[scope.0 as usize].symbols.push(id);
        id
    }
}
