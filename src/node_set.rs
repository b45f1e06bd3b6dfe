use std::fmt;

use bitvec::vec::BitVec;

use crate::{graph::Graph, id::NodeId};

/// A duplicate-free collection of node handles, keyed by identity.
///
/// Backed by a bit vector indexed by handle, so membership checks are O(1)
/// and iteration yields handles in ascending order.
#[derive(Clone, Default)]
pub struct NodeSet {
    bits: BitVec,
    len: usize,
}

impl NodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set sized for a graph with `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, capacity),
            len: 0,
        }
    }

    /// Adds a node, returning `false` if it was already present.
    pub fn insert(&mut self, node: NodeId) -> bool {
        if node.0 >= self.bits.len() {
            self.bits.resize(node.0 + 1, false);
        }
        if self.bits[node.0] {
            return false;
        }
        self.bits.set(node.0, true);
        self.len += 1;
        true
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.bits.get(node.0).is_some_and(|bit| *bit)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.bits.iter_ones().map(NodeId)
    }

    /// Checks whether both sets hold exactly the same nodes.
    pub fn same_as(&self, other: &NodeSet) -> bool {
        self.len == other.len && self.iter().all(|node| other.contains(node))
    }

    /// The members' labels, sorted.
    pub fn labels<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        let mut labels: Vec<_> = self.iter().map(|node| graph.label(node)).collect();
        labels.sort_unstable();
        labels
    }

    /// Renders the set as its sorted labels joined with `", "`.
    pub fn display<'a>(&'a self, graph: &'a Graph) -> impl fmt::Display + 'a {
        DisplayNodeSet { set: self, graph }
    }
}

impl PartialEq for NodeSet {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for NodeSet {}

impl fmt::Debug for NodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<NodeId> for NodeSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let mut set = NodeSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<NodeId> for NodeSet {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        for node in iter {
            self.insert(node);
        }
    }
}

struct DisplayNodeSet<'a> {
    set: &'a NodeSet,
    graph: &'a Graph,
}

impl fmt::Display for DisplayNodeSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.set.labels(self.graph).join(", "))
    }
}
