use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::{Direction, Graph, NodeId};

impl Arbitrary for Direction {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Direction::ALL).unwrap()
    }
}

/// A random graph mixing plain directed edges, links, and edges with
/// arbitrary direction tags. Labels come from a small alphabet, so they
/// collide.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 40;

        let mut graph = Graph::new("arb");
        let nodes: Vec<_> = (0..num_nodes)
            .map(|_| graph.add_node(*g.choose(&["a", "b", "c", "d", "e"]).unwrap()))
            .collect();

        for _ in 0..num_edges {
            if nodes.is_empty() {
                break;
            }
            let from = nodes[usize::arbitrary(g) % nodes.len()];
            let to = nodes[usize::arbitrary(g) % nodes.len()];
            match usize::arbitrary(g) % 4 {
                0 => graph.add_link(from, to),
                1 => graph.add_edge_with_direction(from, to, Direction::arbitrary(g)),
                _ => graph.add_edge(from, to),
            }
        }

        ArbGraph { graph }
    }
}

/// A random tree with uniquely labelled nodes. Each edge is oriented at
/// random.
#[derive(Debug, Clone)]
pub struct ArbTree {
    pub graph: Graph,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Arbitrary for ArbTree {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = 1 + usize::arbitrary(g) % 15;

        let mut graph = Graph::new("tree");
        let nodes = graph.add_nodes((0..num_nodes).map(|i| format!("n{i}")));
        let mut edges = Vec::new();
        for i in 1..num_nodes {
            let parent = nodes[usize::arbitrary(g) % i];
            let edge = if bool::arbitrary(g) {
                (parent, nodes[i])
            } else {
                (nodes[i], parent)
            };
            graph.add_edge(edge.0, edge.1);
            edges.push(edge);
        }

        ArbTree { graph, edges }
    }
}

/// Copies the nodes of `graph` and its exact `Out` connections, dropping
/// every other record.
#[cfg(feature = "pathfinding")]
pub fn directed_only(graph: &Graph) -> Graph {
    let mut copy = Graph::new(graph.name());
    let nodes = copy.add_nodes(graph.node_ids().map(|n| graph.label(n).to_string()));
    for from in graph.node_ids() {
        for edge in graph.edges(from).outgoing() {
            copy.add_edge(nodes[from.index()], nodes[edge.target.index()]);
        }
    }
    copy
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks that every edge record has a back-record with the complementary
/// tag, counting parallel records.
pub fn check_graph_consistency(graph: &Graph) {
    let mut records: HashMap<(NodeId, NodeId, Direction), isize> = HashMap::new();
    for from in graph.node_ids() {
        for edge in graph.edges(from) {
            *records.entry((from, edge.target, edge.direction)).or_default() += 1;
        }
    }

    for (&(from, to, direction), &count) in &records {
        let back = records
            .get(&(to, from, direction.complement()))
            .copied()
            .unwrap_or_default();
        assert_eq!(
            count, back,
            "{from} has {count} {direction} records for {to} but {back} back-records"
        );
    }

    assert_eq!(graph.is_empty(), graph.num_nodes() == 0);
    assert!(graph.num_nodes() > 0 || graph.num_edge_records() == 0);
}
