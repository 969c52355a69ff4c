//! tmplc: intermediate representation for a template-language compiler.
//!
//! The crates are re-exported here so that hosts only need one dependency:
//! - [`common`] - spans, positions and diagnostics
//! - [`ast`] - the node model (`Node`, `ImportNode`, `CopyState`, ...)
//! - [`jssrc`] - identifier safety tables and escaping for JavaScript output

pub use tmplc_ast as ast;
pub use tmplc_common as common;
pub use tmplc_jssrc as jssrc;

pub use tmplc_ast::{
    CopyState, ExprNode, FileNode, ImportNode, ImportType, Node, NodeId, NodeKind, SyntaxNode,
    deep_copy,
};
pub use tmplc_common::{Diagnostic, Span};

// Tracing subscriber setup for hosts embedding the compiler
pub mod tracing_config;
