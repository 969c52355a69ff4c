//! Template IR node model for the tmplc compiler.
//!
//! Every node carries a process-unique `NodeId`, a source `Span`, and a
//! `NodeKind` tag. The catalog is a closed sum type (`Node` for statements,
//! `ExprNode` for expressions) so passes dispatch with an exhaustive `match`
//! instead of downcasting.
//!
//! Nodes are immutable once built and deliberately do not implement `Clone`.
//! A pass that needs its own subtree calls `SyntaxNode::copy` with a
//! `CopyState`, which hands out fresh identities and relinks references
//! (`VarRefNode::defn`) to the copied declarations.

pub mod node_id;
pub use node_id::NodeId;

pub mod kind;
pub use kind::NodeKind;

pub mod copy_state;
pub use copy_state::CopyState;

pub mod error;
pub use error::internal_error;

pub mod defn;
pub use defn::{ImportedVar, VarDefn};

pub mod expr;
pub use expr::{ExprNode, StringNode, VarRefNode};

pub mod import_node;
pub use import_node::{ImportNode, ImportType, import_type_for_path};

pub mod node;
pub use node::{FileNode, Node, PrintNode, SyntaxNode, deep_copy};

pub mod walk;
pub use walk::{NodeRef, walk_preorder};
