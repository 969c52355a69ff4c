//! Node identities.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for node identities. Starts at 1 so that 0 never names a
/// real node. 64 bits cannot wrap within the life of a process.
static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a node, assigned at construction.
///
/// Identities are never reused, so passes can key side tables on them
/// without relying on structural equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Allocate the next identity.
    #[inline]
    pub fn fresh() -> NodeId {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
#[path = "../tests/node_id_tests.rs"]
mod tests;
