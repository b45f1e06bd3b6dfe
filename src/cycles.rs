//! Per-node cycle membership, computed from reachability on every call.

use crate::{graph::Graph, id::NodeId};

impl Graph {
    /// Checks whether `node` lies on a cycle, i.e. some Out-neighbor has an
    /// outgoing path back to it.
    ///
    /// ```text
    /// a → b → c → a   cycle
    /// a → b → c       no cycle
    /// ```
    pub fn has_cycles(&self, node: NodeId) -> bool {
        self.edges(node)
            .outgoing()
            .any(|edge| self.has_path(edge.target, node))
    }

    /// Checks whether some path from an Out-neighbor of `node` back to `node`
    /// passes through `member`.
    pub fn has_cycle_containing(&self, node: NodeId, member: NodeId) -> bool {
        self.edges(node).outgoing().any(|edge| {
            self.path_to(edge.target, node)
                .is_some_and(|path| path.contains_node(member))
        })
    }

    /// True if no node in the collection lies on a cycle.
    pub fn is_acyclic(&self) -> bool {
        !self.node_ids().any(|node| self.has_cycles(node))
    }

    /// True if exactly one node in the collection reports a cycle.
    ///
    /// This counts nodes, not cycles: every member of a cycle reports it, so
    /// a graph whose only cycle has three nodes is not unicyclic here.
    pub fn is_unicyclic(&self) -> bool {
        self.node_ids()
            .filter(|&node| self.has_cycles(node))
            .take(2)
            .count()
            == 1
    }
}

#[cfg(test)]
mod tests {
    use crate::{Graph, NodeId};

    fn cycle_with_tail() -> (Graph, Vec<NodeId>) {
        //        c
        //      ↗   ↘
        // a → b  ←  d
        let mut graph = Graph::new("g");
        let nodes = graph.add_nodes(["a", "b", "c", "d"]);
        graph.connect_nodes(&nodes);
        graph.add_edge(nodes[3], nodes[1]);
        (graph, nodes)
    }

    #[test]
    fn test_has_cycles() {
        let (graph, nodes) = cycle_with_tail();
        assert!(!graph.has_cycles(nodes[0]));
        assert!(graph.has_cycles(nodes[1]));
        assert!(graph.has_cycles(nodes[2]));
        assert!(graph.has_cycles(nodes[3]));
    }

    #[test]
    fn test_has_cycle_containing() {
        let (graph, nodes) = cycle_with_tail();
        assert!(graph.has_cycle_containing(nodes[1], nodes[2]));
        assert!(graph.has_cycle_containing(nodes[1], nodes[3]));
        assert!(!graph.has_cycle_containing(nodes[1], nodes[0]));
        assert!(!graph.has_cycle_containing(nodes[0], nodes[1]));
    }

    #[test]
    fn test_is_acyclic() {
        let (graph, _) = cycle_with_tail();
        assert!(!graph.is_acyclic());

        let mut tree = Graph::new("tree");
        let nodes = tree.add_nodes(["a", "b", "c"]);
        tree.add_edge(nodes[0], nodes[1]);
        tree.add_edge(nodes[0], nodes[2]);
        assert!(tree.is_acyclic());
        assert!(!tree.is_unicyclic());
    }

    #[test]
    fn test_is_unicyclic_counts_nodes() {
        let mut graph = Graph::new("g");
        let nodes = graph.add_nodes(["a"]);
        graph.add_edge(nodes[0], nodes[0]);
        assert!(graph.is_unicyclic());

        let (graph, _) = cycle_with_tail();
        assert!(!graph.is_unicyclic());
    }
}
