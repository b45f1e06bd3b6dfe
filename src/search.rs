//! The traversal engine.
//!
//! [`Graph::walk`] is the single depth-first walk every analysis is built
//! on. It visits each node at most once, crosses edges in adjacency order,
//! and stops as soon as the callback breaks. It keeps an explicit frame stack
//! instead of recursing, so deep graphs cannot exhaust the call stack; the
//! visiting order is the same as the recursive formulation.
//!
//! [`DfsIterator`] and [`BfsIterator`] cover a whole node collection,
//! restarting from every node that no earlier traversal reached.

use std::{collections::VecDeque, ops::ControlFlow};

use derivative::Derivative;

use crate::{
    direction::Direction, graph::Graph, id::NodeId, node_set::NodeSet,
    tracing_support::info_span,
};

impl Graph {
    /// Walks depth-first from `root`, calling `f` on each newly reached node.
    ///
    /// `selector` picks the records that are crossed: `Out` follows `Out`
    /// and `Both` records, `In` follows `In` and `Both` records, and any
    /// other selector follows every record regardless of its tag. Nodes
    /// already in `visited` are neither reported nor entered, and every
    /// reported node is added to it.
    ///
    /// Returns `ControlFlow::Break` if `f` stopped the walk. Callback
    /// invocations made before the stop are not undone.
    pub fn walk<F>(
        &self,
        root: NodeId,
        visited: &mut NodeSet,
        selector: Direction,
        mut f: F,
    ) -> ControlFlow<()>
    where
        F: FnMut(NodeId) -> ControlFlow<()>,
    {
        if !visited.insert(root) {
            return ControlFlow::Continue(());
        }
        f(root)?;

        // Each frame is a node and the index of its next edge record.
        let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;
            let edges = self.edges(node);
            let Some(edge) = edges.get(next) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;
            if !selector.crosses(edge.direction) {
                continue;
            }
            if visited.insert(edge.target) {
                f(edge.target)?;
                stack.push((edge.target, 0));
            }
        }
        ControlFlow::Continue(())
    }

    /// Visits everything reachable from `root` along outgoing edges.
    pub fn visit(&self, root: NodeId, mut f: impl FnMut(NodeId)) {
        let mut visited = NodeSet::with_capacity(self.num_nodes());
        let _ = self.walk(root, &mut visited, Direction::Out, |node| {
            f(node);
            ControlFlow::Continue(())
        });
    }

    /// Visits everything connected to `root`, crossing edges in either
    /// direction.
    pub fn visit_all(&self, root: NodeId, mut f: impl FnMut(NodeId)) {
        let mut visited = NodeSet::with_capacity(self.num_nodes());
        let _ = self.walk(root, &mut visited, Direction::Both, |node| {
            f(node);
            ControlFlow::Continue(())
        });
    }

    /// Depth-first search over the whole collection along outgoing edges.
    pub fn dfs(&self) -> DfsIterator<'_> {
        let _span = info_span!("dfs", nodes = self.num_nodes()).entered();
        DfsIterator::new(self, self.node_ids().collect())
    }

    /// Breadth-first search over the whole collection along outgoing edges.
    pub fn bfs(&self) -> BfsIterator<'_> {
        let _span = info_span!("bfs", nodes = self.num_nodes()).entered();
        BfsIterator::new(self, self.node_ids().collect())
    }

    fn out_targets(&self, node: NodeId) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.edges(node).iter().filter(|e| e.direction == Direction::Out).map(|e| e.target)
    }
}

/// Depth-first iterator over a node collection. Out-neighbors are explored
/// in adjacency order; each node is yielded once.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct DfsIterator<'g> {
    #[derivative(Debug = "ignore")]
    graph: &'g Graph,
    visited: NodeSet,
    stack: Vec<NodeId>,
    roots: std::vec::IntoIter<NodeId>,
}

impl<'g> DfsIterator<'g> {
    /// Creates an iterator that restarts from each of `roots`, in order.
    pub fn new(graph: &'g Graph, roots: Vec<NodeId>) -> Self {
        Self {
            graph,
            visited: NodeSet::with_capacity(graph.num_nodes()),
            stack: Vec::new(),
            roots: roots.into_iter(),
        }
    }
}

impl Iterator for DfsIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while let Some(nid) = self.stack.pop() {
                if self.visited.insert(nid) {
                    self.stack.extend(self.graph.out_targets(nid).rev());
                    return Some(nid);
                }
            }
            self.stack.push(self.roots.next()?);
        }
    }
}

/// Breadth-first iterator over a node collection, using a FIFO frontier of
/// Out-neighbors. Each node is yielded once.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct BfsIterator<'g> {
    #[derivative(Debug = "ignore")]
    graph: &'g Graph,
    visited: NodeSet,
    queue: VecDeque<NodeId>,
    roots: std::vec::IntoIter<NodeId>,
}

impl<'g> BfsIterator<'g> {
    /// Creates an iterator that restarts from each of `roots`, in order.
    pub fn new(graph: &'g Graph, roots: Vec<NodeId>) -> Self {
        Self {
            graph,
            visited: NodeSet::with_capacity(graph.num_nodes()),
            queue: VecDeque::new(),
            roots: roots.into_iter(),
        }
    }
}

impl Iterator for BfsIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while let Some(nid) = self.queue.pop_front() {
                if self.visited.insert(nid) {
                    for neighbor in self.graph.out_targets(nid) {
                        if !self.visited.contains(neighbor) {
                            self.queue.push_back(neighbor);
                        }
                    }
                    return Some(nid);
                }
            }
            self.queue.push_back(self.roots.next()?);
        }
    }
}
