use crate::{graph::Graph, id::NodeId, node_set::NodeSet, tracing_support::info_span};

/// A set of nodes in which every two distinct members are adjacent.
pub type Clique = NodeSet;

/// An ordered collection of cliques.
pub type Cliques = Vec<Clique>;

/// Queries over a collection of cliques.
pub trait CliquesExt {
    /// Checks whether a clique with exactly the same members is present.
    fn contains_clique(&self, clique: &Clique) -> bool;

    fn contains_node(&self, node: NodeId) -> bool;

    /// The index of the first clique containing `node`.
    fn position_of(&self, node: NodeId) -> Option<usize>;
}

impl CliquesExt for [Clique] {
    fn contains_clique(&self, clique: &Clique) -> bool {
        self.iter().any(|c| c.same_as(clique))
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.iter().any(|c| c.contains(node))
    }

    fn position_of(&self, node: NodeId) -> Option<usize> {
        self.iter().position(|c| c.contains(node))
    }
}

impl Graph {
    /// Finds cliques of at least `min_size` nodes in the component containing
    /// `root`.
    ///
    /// ```text
    ///           b
    ///         ↙   ↖
    ///       c       a
    ///     ↙   ↘   ↗
    ///    e  →   d
    ///
    /// Cliques: {c, e, d}
    /// ```
    ///
    /// This is a greedy, local search rather than an exhaustive enumeration.
    /// Every node `n` reached by an undirected walk seeds a candidate `{n}`;
    /// then for each pair of `n`'s records pointing at different nodes, the
    /// second record's target joins the candidate if it is adjacent to every
    /// current member. Candidates that are large enough and not already
    /// found (as a set) are reported in visiting order. Results depend on
    /// adjacency order and can miss cliques.
    pub fn find_cliques(&self, root: NodeId, min_size: usize) -> Cliques {
        let _span = info_span!("find_cliques", %root, min_size).entered();
        let mut cliques = Cliques::new();

        self.visit_all(root, |n| {
            let edges = self.edges(n);
            if edges.is_empty() {
                return;
            }

            let mut clique = Clique::new();
            clique.insert(n);
            for edge in edges {
                for other in edges.but_not_with(edge.target) {
                    let members: Vec<NodeId> = clique.iter().collect();
                    if self.edges(other.target).adjacent_to(&members) {
                        clique.insert(other.target);
                    }
                }
            }

            if clique.len() >= min_size && !cliques.contains_clique(&clique) {
                cliques.push(clique);
            }
        });

        cliques
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(graph: &Graph, cliques: &[Clique]) -> Vec<String> {
        cliques.iter().map(|c| c.display(graph).to_string()).collect()
    }

    #[test]
    fn test_single_clique() {
        //           b
        //         ↙   ↖
        //       c       a
        //     ↙   ↘   ↗
        //    e  →   d
        let mut graph = Graph::new("g");
        let nodes = graph.add_nodes(["a", "b", "c", "d", "e"]);
        let [a, b, c, d, e] = [0, 1, 2, 3, 4].map(|i| nodes[i]);
        graph.connect_nodes(&[a, b, c, d, a]);
        graph.add_edge(c, e);
        graph.add_edge(e, d);

        let cliques = graph.find_cliques(a, 3);
        assert_eq!(cliques.len(), 1);
        let expected: Clique = [c, e, d].into_iter().collect();
        assert!(cliques[0].same_as(&expected));
        assert_eq!(labelled(&graph, &cliques), vec!["c, d, e"]);
        assert_eq!(cliques.position_of(e), Some(0));
        assert!(!cliques.contains_node(a));
    }

    #[test]
    fn test_min_size_filters() {
        let mut graph = Graph::new("g");
        let nodes = graph.add_nodes(["a", "b"]);
        graph.add_edge(nodes[0], nodes[1]);
        assert!(graph.find_cliques(nodes[0], 3).is_empty());
        // A single connection never grows past its seed: the only other
        // record points at the same neighbor.
        assert!(graph.find_cliques(nodes[0], 2).is_empty());
        assert_eq!(graph.find_cliques(nodes[0], 1).len(), 2);
    }

    #[test]
    fn test_isolated_node_is_skipped() {
        let mut graph = Graph::new("g");
        let a = graph.add_node("a");
        assert!(graph.find_cliques(a, 0).is_empty());
    }

    #[test]
    fn test_mesh_is_one_clique() {
        let mut graph = Graph::new("g");
        let nodes = graph.add_nodes(["a", "b", "c", "d"]);
        graph.mesh_nodes(&nodes);
        let cliques = graph.find_cliques(nodes[0], 3);
        assert_eq!(labelled(&graph, &cliques), vec!["a, b, c, d"]);
    }

    #[test]
    fn test_triangles_sharing_a_node() {
        // a, b, c and c, d, e are triangles sharing c.
        let mut graph = Graph::new("g");
        let nodes = graph.add_nodes(["a", "b", "c", "d", "e"]);
        let [a, b, c, d, e] = [0, 1, 2, 3, 4].map(|i| nodes[i]);
        graph.connect_nodes(&[a, b, c, a]);
        graph.connect_nodes(&[c, d, e, c]);

        let cliques = graph.find_cliques(a, 3);
        let found = labelled(&graph, &cliques);
        assert!(found.contains(&"a, b, c".to_string()));
        assert!(found.contains(&"c, d, e".to_string()));
    }
}
