//! The node contract and statement-level nodes.

use tmplc_common::Span;
use tracing::debug;

use crate::copy_state::CopyState;
use crate::expr::ExprNode;
use crate::import_node::ImportNode;
use crate::kind::NodeKind;
use crate::node_id::NodeId;

/// Contract shared by every concrete node.
pub trait SyntaxNode {
    /// Identity assigned at construction.
    fn id(&self) -> NodeId;

    /// Source location; synthetic for compiler-generated nodes.
    fn span(&self) -> Span;

    fn kind(&self) -> NodeKind;

    /// Deep copy with fresh identities.
    ///
    /// Every copied node is registered in `copy_state`, and references are
    /// relinked through it. Original and copy share no mutable state.
    fn copy(&self, copy_state: &mut CopyState) -> Self
    where
        Self: Sized;

    /// Canonical source form, for debug dumps and diagnostics.
    fn to_source_string(&self) -> String;
}

/// Copy `node` with a fresh `CopyState`.
pub fn deep_copy<N: SyntaxNode>(node: &N) -> N {
    let mut copy_state = CopyState::new();
    let copy = node.copy(&mut copy_state);
    debug!(
        kind = %node.kind(),
        original = %node.id(),
        copy = %copy.id(),
        nodes = copy_state.len(),
        "deep_copy"
    );
    copy
}

/// `{print expr}`
#[derive(Debug)]
pub struct PrintNode {
    id: NodeId,
    span: Span,
    expr: ExprNode,
}

impl PrintNode {
    pub fn new(span: Span, expr: ExprNode) -> PrintNode {
        PrintNode {
            id: NodeId::fresh(),
            span,
            expr,
        }
    }

    pub fn expr(&self) -> &ExprNode {
        &self.expr
    }
}

impl SyntaxNode for PrintNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Print
    }

    fn copy(&self, copy_state: &mut CopyState) -> PrintNode {
        let copy = PrintNode {
            id: NodeId::fresh(),
            span: self.span,
            expr: self.expr.copy(copy_state),
        };
        copy_state.register(self.id, copy.id);
        copy
    }

    fn to_source_string(&self) -> String {
        format!("{{print {}}}", self.expr.to_source_string())
    }
}

/// Root of one source file. Owns its statements in source order.
#[derive(Debug)]
pub struct FileNode {
    id: NodeId,
    span: Span,
    path: String,
    children: Vec<Node>,
}

impl FileNode {
    pub fn new(path: impl Into<String>, span: Span, children: Vec<Node>) -> FileNode {
        FileNode {
            id: NodeId::fresh(),
            span,
            path: path.into(),
            children,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn imports(&self) -> impl Iterator<Item = &ImportNode> {
        self.children.iter().filter_map(|child| match child {
            Node::Import(import) => Some(import),
            _ => None,
        })
    }
}

impl SyntaxNode for FileNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::File
    }

    fn copy(&self, copy_state: &mut CopyState) -> FileNode {
        // Imports are copied first so that references to their bindings can
        // be relinked wherever they appear in the file. Statements cannot
        // nest files, so these are all the declarations in the tree.
        let mut slots: Vec<Option<Node>> = self.children.iter().map(|_| None).collect();
        for (slot, child) in slots.iter_mut().zip(&self.children) {
            if let Node::Import(import) = child {
                *slot = Some(Node::Import(import.copy(copy_state)));
            }
        }
        for (slot, child) in slots.iter_mut().zip(&self.children) {
            if slot.is_none() {
                *slot = Some(child.copy(copy_state));
            }
        }
        let copy = FileNode {
            id: NodeId::fresh(),
            span: self.span,
            path: self.path.clone(),
            children: slots.into_iter().flatten().collect(),
        };
        copy_state.register(self.id, copy.id);
        copy
    }

    fn to_source_string(&self) -> String {
        self.children
            .iter()
            .map(|child| child.to_source_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Statement-level sum type.
///
/// Files are roots, never statements, so every declaration a statement can
/// refer to is a direct child of the enclosing `FileNode`.
#[derive(Debug)]
pub enum Node {
    Import(ImportNode),
    Print(PrintNode),
}

impl SyntaxNode for Node {
    fn id(&self) -> NodeId {
        match self {
            Node::Import(node) => node.id(),
            Node::Print(node) => node.id(),
        }
    }

    fn span(&self) -> Span {
        match self {
            Node::Import(node) => node.span(),
            Node::Print(node) => node.span(),
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Node::Import(node) => node.kind(),
            Node::Print(node) => node.kind(),
        }
    }

    fn copy(&self, copy_state: &mut CopyState) -> Node {
        match self {
            Node::Import(node) => Node::Import(node.copy(copy_state)),
            Node::Print(node) => Node::Print(node.copy(copy_state)),
        }
    }

    fn to_source_string(&self) -> String {
        match self {
            Node::Import(node) => node.to_source_string(),
            Node::Print(node) => node.to_source_string(),
        }
    }
}

impl From<ImportNode> for Node {
    fn from(node: ImportNode) -> Self {
        Node::Import(node)
    }
}

impl From<PrintNode> for Node {
    fn from(node: PrintNode) -> Self {
        Node::Print(node)
    }
}

#[cfg(test)]
#[path = "../tests/node_tests.rs"]
mod tests;
