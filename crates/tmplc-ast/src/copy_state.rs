//! Scoped state for a single structural copy.

use rustc_hash::{FxHashMap, FxHashSet};
use tmplc_common::Span;
use tracing::trace;

use crate::error::internal_error;
use crate::node_id::NodeId;

/// Maps original node identities to their copies for the duration of one
/// copy operation.
///
/// Every copied node registers itself here, so by the time a reference is
/// copied its target (which precedes it in tree order) already has a
/// counterpart. References to declarations that live outside the copied
/// subtree must be declared with [`CopyState::allow_external`]; anything
/// else is a dangling link and aborts the copy.
///
/// A `CopyState` belongs to one copy call. Parallel copies each need their own.
#[derive(Debug, Default)]
pub struct CopyState {
    mapping: FxHashMap<NodeId, NodeId>,
    external: FxHashSet<NodeId>,
}

impl CopyState {
    pub fn new() -> CopyState {
        CopyState::default()
    }

    /// State whose references may point at the given out-of-tree declarations.
    pub fn with_external(ids: impl IntoIterator<Item = NodeId>) -> CopyState {
        CopyState {
            mapping: FxHashMap::default(),
            external: ids.into_iter().collect(),
        }
    }

    /// Allow references to `id` to survive the copy unchanged.
    pub fn allow_external(&mut self, id: NodeId) {
        self.external.insert(id);
    }

    /// Record that `copy` is the counterpart of `original`.
    pub fn register(&mut self, original: NodeId, copy: NodeId) {
        trace!(%original, %copy, "copy_state.register");
        let previous = self.mapping.insert(original, copy);
        debug_assert!(
            previous.is_none(),
            "node {original} copied twice in one copy operation"
        );
    }

    /// The counterpart of `original`, if it has been copied already.
    pub fn resolve(&self, original: NodeId) -> Option<NodeId> {
        self.mapping.get(&original).copied()
    }

    /// Resolve a cross-link for a node being copied.
    ///
    /// `span` is the location of the referencing node and is only used for
    /// the internal error report.
    pub fn resolve_reference(&self, original: NodeId, span: Span) -> NodeId {
        if let Some(copy) = self.resolve(original) {
            return copy;
        }
        if self.external.contains(&original) {
            trace!(%original, "copy_state.external_reference");
            return original;
        }
        internal_error(
            span,
            &format!("reference to node {original} which is not part of the copied tree"),
        )
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/copy_state_tests.rs"]
mod tests;
