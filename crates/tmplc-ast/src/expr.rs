//! Expression nodes.
//!
//! Only the expressions the import statement and its references need are
//! modelled here: string literals and variable references.

use std::fmt::Write;

use tmplc_common::Span;
use tmplc_common::unicode::is_format_char;
use tracing::trace;

use crate::copy_state::CopyState;
use crate::defn::VarDefn;
use crate::kind::NodeKind;
use crate::node::SyntaxNode;
use crate::node_id::NodeId;

/// A string literal.
#[derive(Debug)]
pub struct StringNode {
    id: NodeId,
    span: Span,
    value: String,
}

impl StringNode {
    pub fn new(value: impl Into<String>, span: Span) -> StringNode {
        StringNode {
            id: NodeId::fresh(),
            span,
            value: value.into(),
        }
    }

    /// The unquoted, unescaped value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl SyntaxNode for StringNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::StringLiteral
    }

    fn copy(&self, copy_state: &mut CopyState) -> StringNode {
        let copy = StringNode::new(self.value.clone(), self.span);
        copy_state.register(self.id, copy.id);
        copy
    }

    fn to_source_string(&self) -> String {
        let mut out = String::with_capacity(self.value.len() + 2);
        out.push('\'');
        for ch in self.value.chars() {
            match ch {
                '\'' => out.push_str("\\'"),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\0' => out.push_str("\\0"),
                c if (c as u32) < 0x20
                    || c == '\x7F'
                    || c == '\u{2028}'
                    || c == '\u{2029}'
                    || is_format_char(c) =>
                {
                    let mut units = [0u16; 2];
                    for unit in c.encode_utf16(&mut units) {
                        let _ = write!(out, "\\u{:04X}", unit);
                    }
                }
                c => out.push(c),
            }
        }
        out.push('\'');
        out
    }
}

/// A reference to a declaration, linked by the declaration's identity.
#[derive(Debug)]
pub struct VarRefNode {
    id: NodeId,
    span: Span,
    name: String,
    defn: NodeId,
}

impl VarRefNode {
    pub fn new(name: impl Into<String>, defn: NodeId, span: Span) -> VarRefNode {
        VarRefNode {
            id: NodeId::fresh(),
            span,
            name: name.into(),
            defn,
        }
    }

    /// A reference to `defn` under its declared name.
    pub fn to_defn(defn: &impl VarDefn, span: Span) -> VarRefNode {
        VarRefNode::new(defn.name(), defn.id(), span)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity of the referenced declaration.
    pub fn defn(&self) -> NodeId {
        self.defn
    }
}

impl SyntaxNode for VarRefNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::VarRef
    }

    fn copy(&self, copy_state: &mut CopyState) -> VarRefNode {
        let defn = copy_state.resolve_reference(self.defn, self.span);
        trace!(original = %self.defn, relinked = %defn, name = %self.name, "var_ref.copy");
        let copy = VarRefNode::new(self.name.clone(), defn, self.span);
        copy_state.register(self.id, copy.id);
        copy
    }

    fn to_source_string(&self) -> String {
        self.name.clone()
    }
}

/// Expression sum type.
#[derive(Debug)]
pub enum ExprNode {
    String(StringNode),
    VarRef(VarRefNode),
}

impl ExprNode {
    pub fn as_string(&self) -> Option<&StringNode> {
        match self {
            ExprNode::String(node) => Some(node),
            ExprNode::VarRef(_) => None,
        }
    }
}

impl SyntaxNode for ExprNode {
    fn id(&self) -> NodeId {
        match self {
            ExprNode::String(node) => node.id(),
            ExprNode::VarRef(node) => node.id(),
        }
    }

    fn span(&self) -> Span {
        match self {
            ExprNode::String(node) => node.span(),
            ExprNode::VarRef(node) => node.span(),
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            ExprNode::String(node) => node.kind(),
            ExprNode::VarRef(node) => node.kind(),
        }
    }

    fn copy(&self, copy_state: &mut CopyState) -> ExprNode {
        match self {
            ExprNode::String(node) => ExprNode::String(node.copy(copy_state)),
            ExprNode::VarRef(node) => ExprNode::VarRef(node.copy(copy_state)),
        }
    }

    fn to_source_string(&self) -> String {
        match self {
            ExprNode::String(node) => node.to_source_string(),
            ExprNode::VarRef(node) => node.to_source_string(),
        }
    }
}

impl From<StringNode> for ExprNode {
    fn from(node: StringNode) -> Self {
        ExprNode::String(node)
    }
}

impl From<VarRefNode> for ExprNode {
    fn from(node: VarRefNode) -> Self {
        ExprNode::VarRef(node)
    }
}

#[cfg(test)]
#[path = "../tests/expr_tests.rs"]
mod tests;
