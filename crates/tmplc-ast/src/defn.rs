//! Variable declarations bound by the tree.

use tmplc_common::Span;

use crate::copy_state::CopyState;
use crate::kind::NodeKind;
use crate::node::SyntaxNode;
use crate::node_id::NodeId;

/// A declaration that expressions can refer to by identity.
pub trait VarDefn: SyntaxNode {
    /// The name as written in source.
    fn name(&self) -> &str;
}

/// A name bound by an `import {...} from '...'` statement.
///
/// This is only the declaration as written; symbol resolution records
/// pointing back at it are owned by whichever pass creates them.
#[derive(Debug)]
pub struct ImportedVar {
    id: NodeId,
    span: Span,
    name: String,
}

impl ImportedVar {
    pub fn new(name: impl Into<String>, span: Span) -> ImportedVar {
        ImportedVar {
            id: NodeId::fresh(),
            span,
            name: name.into(),
        }
    }
}

impl SyntaxNode for ImportedVar {
    fn id(&self) -> NodeId {
        self.id
    }

    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::ImportedVar
    }

    fn copy(&self, copy_state: &mut CopyState) -> ImportedVar {
        let copy = ImportedVar::new(self.name.clone(), self.span);
        copy_state.register(self.id, copy.id);
        copy
    }

    fn to_source_string(&self) -> String {
        self.name.clone()
    }
}

impl VarDefn for ImportedVar {
    fn name(&self) -> &str {
        &self.name
    }
}
