//! Error-tolerant parser for the mint language.
//!
//! This crate provides the syntactic analysis phase:
//! - `NodeKind`, `Node`, `NodeArena`, `NodeIndex` - the parse tree (the
//!   stable rule identifier space lives in `NodeKind`)
//! - `ParserState` / `parse_source` - recursive-descent parsing that records
//!   diagnostics and keeps going instead of aborting
//! - `grammar` - the declarative transition network the completion engine
//!   searches for syntactically admissible candidates

pub mod parser;
pub use parser::node::{Node, NodeArena, NodeIndex, NodeKind};
pub use parser::state::{Parse, ParserState, parse_source};

pub mod grammar;
pub use grammar::{Grammar, GrammarElement, RuleId};
