//! Node kind discriminator.

use std::fmt;

/// Closed set of node kinds.
///
/// Adding a variant here makes every exhaustive `match` over `NodeKind`,
/// `Node`, `ExprNode` and `NodeRef` fail to compile until it is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Statements
    File,
    Import,
    Print,
    // Expressions
    StringLiteral,
    VarRef,
    // Declarations
    ImportedVar,
}

impl NodeKind {
    pub const ALL: [NodeKind; 6] = [
        NodeKind::File,
        NodeKind::Import,
        NodeKind::Print,
        NodeKind::StringLiteral,
        NodeKind::VarRef,
        NodeKind::ImportedVar,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::File => "FILE_NODE",
            NodeKind::Import => "IMPORT_NODE",
            NodeKind::Print => "PRINT_NODE",
            NodeKind::StringLiteral => "STRING_NODE",
            NodeKind::VarRef => "VAR_REF_NODE",
            NodeKind::ImportedVar => "IMPORTED_VAR",
        }
    }

    pub const fn is_expression(self) -> bool {
        matches!(self, NodeKind::StringLiteral | NodeKind::VarRef)
    }

    pub const fn is_declaration(self) -> bool {
        matches!(self, NodeKind::ImportedVar)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
