use std::ops::Deref;

use crate::{attributes::Attributes, direction::Direction, id::NodeId, node_set::NodeSet};

/// A labelled vertex with an ordered adjacency list.
///
/// Labels are for rendering only and need not be unique.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub label: String,
    pub attributes: Attributes,
    pub(crate) edges: Edges,
}

impl Node {
    pub fn new(label: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            label: label.into(),
            attributes,
            edges: Edges::default(),
        }
    }

    /// The node's edge records in insertion order.
    pub fn edges(&self) -> &Edges {
        &self.edges
    }
}

/// One side of a connection: a reference to the node at the other end and
/// the orientation as seen from the storing node.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub direction: Direction,
    pub name: Option<String>,
    pub attributes: Attributes,
}

impl Edge {
    pub fn new(target: NodeId, direction: Direction) -> Self {
        Self {
            target,
            direction,
            name: None,
            attributes: Attributes::default(),
        }
    }
}

/// An ordered list of edge records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Edges(Vec<Edge>);

impl Edges {
    pub(crate) fn push(&mut self, edge: Edge) {
        self.0.push(edge);
    }

    /// Records tagged exactly `In`.
    pub fn incoming(&self) -> impl Iterator<Item = &Edge> {
        self.0.iter().filter(|e| e.direction == Direction::In)
    }

    /// Records tagged exactly `Out`.
    pub fn outgoing(&self) -> impl Iterator<Item = &Edge> {
        self.0.iter().filter(|e| e.direction == Direction::Out)
    }

    /// Records whose tag satisfies `queried` under [`Direction::matches`].
    pub fn matching(&self, queried: Direction) -> impl Iterator<Item = &Edge> {
        self.0.iter().filter(move |e| e.direction.matches(queried))
    }

    /// Targets of every record, in order and with repeats.
    pub fn targets(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().map(|e| e.target)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.0.iter().any(|e| e.target == node)
    }

    /// Records whose target is not `node`.
    pub fn but_not_with(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        self.0.iter().filter(move |e| e.target != node)
    }

    /// The distinct nodes this list refers to.
    pub fn adjacent_nodes(&self) -> NodeSet {
        self.targets().collect()
    }

    /// True only if every one of `nodes` is the target of some record.
    pub fn adjacent_to(&self, nodes: &[NodeId]) -> bool {
        nodes.iter().all(|&node| self.contains(node))
    }
}

impl Deref for Edges {
    type Target = [Edge];

    fn deref(&self) -> &[Edge] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Edges {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
