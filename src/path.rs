use std::{fmt, ops::ControlFlow};

use crate::{
    direction::Direction, graph::Graph, id::NodeId, node_set::NodeSet,
    tracing_support::info_span,
};

/// A path in a graph, represented as the sequence of nodes walked from the
/// first to the last.
///
/// Equality compares node handles. [`Path::identical`] and
/// [`PathsExt::contains_path`] compare rendered labels instead, so there
/// paths through distinct nodes that share labels count as the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// Creates a single-node path starting at `start`.
    pub fn new(start: NodeId) -> Self {
        Self { nodes: vec![start] }
    }

    pub fn push(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    pub fn first_node(&self) -> NodeId {
        *self.nodes.first().expect("Path has no nodes")
    }

    pub fn last_node(&self) -> NodeId {
        *self.nodes.last().expect("Path has no nodes")
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Renders the path's labels joined with `" → "`, e.g. `a → b → c`.
    pub fn render(&self, graph: &Graph) -> String {
        self.nodes
            .iter()
            .map(|&node| graph.label(node))
            .collect::<Vec<_>>()
            .join(" → ")
    }

    pub fn display<'a>(&'a self, graph: &'a Graph) -> impl fmt::Display + 'a {
        DisplayPath { path: self, graph }
    }

    /// Checks whether two paths render identically. This is a label-based
    /// approximation of path identity.
    pub fn identical(&self, other: &Path, graph: &Graph) -> bool {
        self.render(graph) == other.render(graph)
    }
}

impl FromIterator<NodeId> for Path {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

struct DisplayPath<'a> {
    path: &'a Path,
    graph: &'a Graph,
}

impl fmt::Display for DisplayPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path.render(self.graph))
    }
}

/// An ordered collection of paths.
pub type Paths = Vec<Path>;

/// Queries over a collection of paths.
pub trait PathsExt {
    /// Checks whether any path renders identically to `path`.
    fn contains_path(&self, path: &Path, graph: &Graph) -> bool;

    fn contains_node(&self, node: NodeId) -> bool;
}

impl PathsExt for [Path] {
    fn contains_path(&self, path: &Path, graph: &Graph) -> bool {
        let rendered = path.render(graph);
        self.iter().any(|p| p.render(graph) == rendered)
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.iter().any(|p| p.contains_node(node))
    }
}

impl Graph {
    /// Finds a path from `start` to `end` along outgoing edges.
    ///
    /// The walk is a single depth-first traversal from `start`. Each visited
    /// node is appended to the path; as soon as a visited node has a record
    /// pointing at `end` (any tag except `In`), `end` is appended and the
    /// walk stops. The result is therefore the visitation prefix plus `end`,
    /// which may include dead-end branches explored before `end` was seen.
    ///
    /// Returns `None` if `end` is not reachable. `start == end` asks for a
    /// cycle back to `start`.
    pub fn path_to(&self, start: NodeId, end: NodeId) -> Option<Path> {
        let _span = info_span!("path_to", %start, %end).entered();
        let mut nodes = Vec::new();
        let mut visited = NodeSet::with_capacity(self.num_nodes());
        let flow = self.walk(start, &mut visited, Direction::Out, |node| {
            nodes.push(node);
            let reaches_end = self
                .edges(node)
                .iter()
                .any(|e| e.target == end && e.direction != Direction::In);
            if reaches_end {
                nodes.push(end);
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        flow.is_break().then(|| Path { nodes })
    }

    pub fn has_path(&self, start: NodeId, end: NodeId) -> bool {
        self.path_to(start, end).is_some()
    }

    /// Checks that the path found by [`Self::path_to`] avoids `without`.
    /// When there is no path at all, nothing is used, so this is `true`.
    pub fn path_to_without(&self, start: NodeId, end: NodeId, without: NodeId) -> bool {
        self.path_to(start, end)
            .is_none_or(|path| !path.contains_node(without))
    }

    /// Finds a path from `start` to `end` with the fewest outgoing hops,
    /// using breadth-first search. `start == end` yields the single-node
    /// path.
    #[cfg(feature = "pathfinding")]
    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> Option<Path> {
        use pathfinding::prelude::bfs;

        let _span = info_span!("shortest_path", %start, %end).entered();
        bfs(
            &start,
            |&node| {
                self.edges(node)
                    .matching(Direction::Out)
                    .map(|e| e.target)
                    .collect::<Vec<_>>()
            },
            |&node| node == end,
        )
        .map(|nodes| Path { nodes })
    }
}
