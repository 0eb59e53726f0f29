//! Scanner/tokenizer for the mint completion engine.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types (the stable terminal identifier space)
//! - `Token` - One lexical unit with byte span and line/column stamp
//! - `Scanner` - Tokenizer state machine; records diagnostics instead of
//!   failing on malformed input

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod scanner;
pub use scanner::{Scanner, Token, scan_tokens};
