use std::fmt;

/// A handle to a node stored in a [`Graph`](crate::Graph).
///
/// Handles are plain arena indices: they are cheap to copy, hash and compare,
/// and two handles are equal exactly when they refer to the same node. Labels
/// never take part in node identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The position of the node in its graph's collection.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}
