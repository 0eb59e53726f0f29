//! Common types and utilities for the mint completion engine.
//!
//! This crate provides foundational types used across all mint crates:
//! - Source spans (`Span`)
//! - Caret/line-map positions (`CaretPosition`, `LineMap`)
//! - Parse diagnostics (`Diagnostic`, `DiagnosticCategory`)
//! - Centralized limits and thresholds

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Caret and line/column <-> offset conversion
pub mod position;
pub use position::{CaretPosition, LineMap};

// Parse and scan diagnostics
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Centralized limits and thresholds
pub mod limits;
