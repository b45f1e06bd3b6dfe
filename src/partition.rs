//! Greedy k-class partitioning, used for bipartite and multipartite tests.

use crate::{graph::Graph, id::NodeId, node_set::NodeSet, tracing_support::info_span};

/// An ordered list of node classes.
pub type NodeSets = Vec<NodeSet>;

/// Queries over an ordered list of node classes.
pub trait NodeSetsExt {
    /// The index of the first class none of whose members is adjacent to
    /// `node`.
    fn set_not_adjacent_with(&self, graph: &Graph, node: NodeId) -> Option<usize>;
}

impl NodeSetsExt for [NodeSet] {
    fn set_not_adjacent_with(&self, graph: &Graph, node: NodeId) -> Option<usize> {
        let edges = graph.edges(node);
        self.iter()
            .position(|set| !set.iter().any(|member| edges.contains(member)))
    }
}

/// Assigns `order` to classes greedily and reports whether exactly `k`
/// classes were needed.
pub(crate) fn is_multipartite_in_order(
    graph: &Graph,
    order: impl IntoIterator<Item = NodeId>,
    k: usize,
) -> bool {
    let _span = info_span!("is_multipartite", k).entered();
    let mut classes = NodeSets::new();

    for node in order {
        match classes.set_not_adjacent_with(graph, node) {
            Some(index) => {
                classes[index].insert(node);
            }
            None => {
                classes.push(std::iter::once(node).collect());
                if classes.len() > k {
                    return false;
                }
            }
        }
    }

    classes.len() == k
}

impl Graph {
    /// Checks whether the nodes split into exactly `k` classes with no
    /// adjacency inside a class.
    ///
    /// ```text
    /// a   b   c
    ///  ↘ ↙ ↘ ↙      bipartite: {a, b, c}, {d, e}
    ///   d   e
    /// ```
    ///
    /// Nodes are taken in collection order and each joins the first class
    /// with no member adjacent to it, or opens a new class. This is a
    /// greedy coloring: it can need more classes than an optimal one, and
    /// a graph that fits in fewer than `k` classes is rejected.
    pub fn is_multipartite(&self, k: usize) -> bool {
        is_multipartite_in_order(self, self.node_ids(), k)
    }

    pub fn is_bipartite(&self) -> bool {
        self.is_multipartite(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> (Graph, Vec<NodeId>) {
        let mut graph = Graph::new("g");
        let nodes = graph.add_nodes(["a", "b", "c", "d", "e"]);
        let [a, b, c, d, e] = [0, 1, 2, 3, 4].map(|i| nodes[i]);
        graph.add_edge(a, d);
        graph.add_edge(b, d);
        graph.add_edge(b, e);
        graph.add_edge(c, e);
        (graph, nodes)
    }

    #[test]
    fn test_bipartite() {
        let (graph, _) = zigzag();
        assert!(graph.is_bipartite());
        assert!(!graph.is_multipartite(3));
        assert!(!graph.is_multipartite(1));
    }

    #[test]
    fn test_extra_edge_breaks_bipartite() {
        let (mut graph, nodes) = zigzag();
        graph.add_edge(nodes[3], nodes[4]);
        assert!(!graph.is_multipartite(2));
        assert!(graph.is_multipartite(3));
    }

    #[test]
    fn test_triangle_with_tail_is_not_bipartite() {
        let mut graph = Graph::new("g");
        let nodes = graph.add_nodes(["a", "b", "c", "d", "e"]);
        let [a, b, c, d, e] = [0, 1, 2, 3, 4].map(|i| nodes[i]);
        graph.connect_nodes(&[a, b, c, d, a]);
        graph.add_edge(c, e);
        graph.add_edge(e, d);
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn test_set_not_adjacent_with() {
        let (graph, nodes) = zigzag();
        let classes: NodeSets = vec![
            [nodes[0], nodes[1]].into_iter().collect(),
            [nodes[3]].into_iter().collect(),
        ];
        assert_eq!(classes.set_not_adjacent_with(&graph, nodes[2]), Some(0));
        assert_eq!(classes.set_not_adjacent_with(&graph, nodes[4]), Some(1));
        assert_eq!(classes.set_not_adjacent_with(&graph, nodes[3]), Some(1));
        assert_eq!(classes[..1].set_not_adjacent_with(&graph, nodes[3]), None);
    }

    #[test]
    fn test_empty_graph_has_zero_classes() {
        let graph = Graph::new("empty");
        assert!(graph.is_multipartite(0));
        assert!(!graph.is_bipartite());
    }
}
