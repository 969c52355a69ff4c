//! The `import` statement.
//!
//! ```text
//! import {Foo,Bar} from 'path/to/file.proto'
//! import 'path/to/styles.gss'
//! ```

use std::fmt;

use tmplc_common::Span;
use tmplc_common::diagnostics::{Diagnostic, diagnostic_codes};
use tracing::{debug, trace};

use crate::copy_state::CopyState;
use crate::defn::{ImportedVar, VarDefn};
use crate::expr::{ExprNode, StringNode};
use crate::kind::NodeKind;
use crate::node::SyntaxNode;
use crate::node_id::NodeId;

/// What an import path refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImportType {
    Css,
    Proto,
    Unknown,
}

impl ImportType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ImportType::Css => "CSS",
            ImportType::Proto => "PROTO",
            ImportType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ImportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an import path by its exact, case-sensitive suffix.
///
/// Unrecognized suffixes are `Unknown`, not an error; whether such an
/// import is allowed is decided by a later validation pass.
pub fn import_type_for_path(path: &str) -> ImportType {
    if path.ends_with(".gss") || path.ends_with(".scss") {
        ImportType::Css
    } else if path.ends_with(".proto") {
        ImportType::Proto
    } else {
        ImportType::Unknown
    }
}

/// An `import` statement.
#[derive(Debug)]
pub struct ImportNode {
    id: NodeId,
    span: Span,
    path: StringNode,
    identifiers: Vec<ImportedVar>,
    /// Computed once from `path` and carried through copies.
    import_type: ImportType,
}

impl ImportNode {
    pub fn new(span: Span, path: StringNode, identifiers: Vec<ImportedVar>) -> ImportNode {
        let import_type = import_type_for_path(path.value());
        debug!(path = path.value(), %import_type, bound = identifiers.len(), "import.classify");
        ImportNode {
            id: NodeId::fresh(),
            span,
            path,
            identifiers,
            import_type,
        }
    }

    /// Build from a parsed path expression, which must be a string literal.
    pub fn from_path_expr(
        span: Span,
        path: ExprNode,
        identifiers: Vec<ImportedVar>,
    ) -> Result<ImportNode, Diagnostic> {
        match path {
            ExprNode::String(path) => Ok(ImportNode::new(span, path, identifiers)),
            other => Err(Diagnostic::from_code(
                other.span(),
                diagnostic_codes::IMPORT_PATH_MUST_BE_A_STRING_LITERAL,
                &[],
            )),
        }
    }

    /// True when the import binds no names and is kept only for its effect.
    pub fn is_side_effect_import(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn import_type(&self) -> ImportType {
        self.import_type
    }

    pub fn path(&self) -> &str {
        self.path.value()
    }

    pub fn path_span(&self) -> Span {
        self.path.span()
    }

    pub fn path_node(&self) -> &StringNode {
        &self.path
    }

    pub fn identifiers(&self) -> &[ImportedVar] {
        &self.identifiers
    }
}

impl SyntaxNode for ImportNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Import
    }

    fn copy(&self, copy_state: &mut CopyState) -> ImportNode {
        let identifiers = self
            .identifiers
            .iter()
            .map(|defn| defn.copy(copy_state))
            .collect();
        let copy = ImportNode {
            id: NodeId::fresh(),
            span: self.span,
            path: self.path.copy(copy_state),
            identifiers,
            import_type: self.import_type,
        };
        trace!(original = %self.id, copy = %copy.id, path = self.path(), "import.copy");
        copy_state.register(self.id, copy.id);
        copy
    }

    fn to_source_string(&self) -> String {
        let mut out = String::from("import ");
        if !self.identifiers.is_empty() {
            out.push('{');
            for (i, defn) in self.identifiers.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(defn.name());
            }
            out.push_str("} from ");
        }
        out.push('\'');
        out.push_str(self.path.value());
        out.push('\'');
        out
    }
}

impl fmt::Display for ImportNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source_string())
    }
}

#[cfg(test)]
#[path = "../tests/import_node_tests.rs"]
mod tests;
