//! Common types and utilities for the tmplc template compiler.
//!
//! This crate provides foundational types used across all tmplc crates:
//! - Source spans (`FileId`, `Span`)
//! - Line/column positions (`LineMap`, `Position`)
//! - Diagnostics (`Diagnostic`, codes and message templates)
//! - Unicode format-character classification

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::{FileId, Span};

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Diagnostic types and message lookup
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Unicode character classification
pub mod unicode;
