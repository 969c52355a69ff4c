//! Preorder traversal over every node kind.

use tmplc_common::Span;

use crate::defn::ImportedVar;
use crate::expr::{ExprNode, StringNode, VarRefNode};
use crate::import_node::ImportNode;
use crate::kind::NodeKind;
use crate::node::{FileNode, Node, PrintNode, SyntaxNode};
use crate::node_id::NodeId;

/// Borrowed view of any node, statement, expression or declaration.
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'a> {
    File(&'a FileNode),
    Import(&'a ImportNode),
    Print(&'a PrintNode),
    String(&'a StringNode),
    VarRef(&'a VarRefNode),
    ImportedVar(&'a ImportedVar),
}

impl<'a> NodeRef<'a> {
    pub fn id(self) -> NodeId {
        match self {
            NodeRef::File(node) => node.id(),
            NodeRef::Import(node) => node.id(),
            NodeRef::Print(node) => node.id(),
            NodeRef::String(node) => node.id(),
            NodeRef::VarRef(node) => node.id(),
            NodeRef::ImportedVar(node) => node.id(),
        }
    }

    pub fn kind(self) -> NodeKind {
        match self {
            NodeRef::File(node) => node.kind(),
            NodeRef::Import(node) => node.kind(),
            NodeRef::Print(node) => node.kind(),
            NodeRef::String(node) => node.kind(),
            NodeRef::VarRef(node) => node.kind(),
            NodeRef::ImportedVar(node) => node.kind(),
        }
    }

    pub fn span(self) -> Span {
        match self {
            NodeRef::File(node) => node.span(),
            NodeRef::Import(node) => node.span(),
            NodeRef::Print(node) => node.span(),
            NodeRef::String(node) => node.span(),
            NodeRef::VarRef(node) => node.span(),
            NodeRef::ImportedVar(node) => node.span(),
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Import(node) => NodeRef::Import(node),
            Node::Print(node) => NodeRef::Print(node),
        }
    }
}

impl<'a> From<&'a ExprNode> for NodeRef<'a> {
    fn from(node: &'a ExprNode) -> Self {
        match node {
            ExprNode::String(node) => NodeRef::String(node),
            ExprNode::VarRef(node) => NodeRef::VarRef(node),
        }
    }
}

/// Visit `node` and all of its descendants, parents before children.
///
/// Import bindings are visited before the import path, matching source order.
pub fn walk_preorder<'a>(node: NodeRef<'a>, f: &mut impl FnMut(NodeRef<'a>)) {
    f(node);
    match node {
        NodeRef::File(file) => {
            for child in file.children() {
                walk_preorder(child.into(), f);
            }
        }
        NodeRef::Import(import) => {
            for defn in import.identifiers() {
                walk_preorder(NodeRef::ImportedVar(defn), f);
            }
            walk_preorder(NodeRef::String(import.path_node()), f);
        }
        NodeRef::Print(print) => walk_preorder(print.expr().into(), f),
        NodeRef::String(_) | NodeRef::VarRef(_) | NodeRef::ImportedVar(_) => {}
    }
}

#[cfg(test)]
#[path = "../tests/walk_tests.rs"]
mod tests;
