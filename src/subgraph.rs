use crate::{
    attributes::Attributes,
    graph::Graph,
    id::NodeId,
    partition::is_multipartite_in_order,
    search::{BfsIterator, DfsIterator},
    tracing_support::info_span,
};

/// A named view over an ordered subset of a graph's nodes.
///
/// Collection-order operations run over the members only. Traversals still
/// follow edges that leave the subset, since members keep their adjacency
/// in the underlying graph.
#[derive(Debug, Clone)]
pub struct Subgraph<'g> {
    graph: &'g Graph,
    name: String,
    attributes: Attributes,
    members: Vec<NodeId>,
}

impl<'g> Subgraph<'g> {
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// The member nodes, in the order they were given.
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }

    pub fn dfs(&self) -> DfsIterator<'g> {
        let _span = info_span!("dfs", nodes = self.members.len()).entered();
        DfsIterator::new(self.graph, self.members.clone())
    }

    pub fn bfs(&self) -> BfsIterator<'g> {
        let _span = info_span!("bfs", nodes = self.members.len()).entered();
        BfsIterator::new(self.graph, self.members.clone())
    }

    /// Like [`Graph::is_multipartite`], taking members in subgraph order.
    pub fn is_multipartite(&self, k: usize) -> bool {
        is_multipartite_in_order(self.graph, self.members.iter().copied(), k)
    }

    pub fn is_bipartite(&self) -> bool {
        self.is_multipartite(2)
    }

    pub fn is_acyclic(&self) -> bool {
        !self.members.iter().any(|&node| self.graph.has_cycles(node))
    }
}

impl Graph {
    /// Creates a view over `nodes`. Duplicate handles are kept once, at
    /// their first position.
    ///
    /// # Panics
    ///
    /// Panics if a handle does not belong to this graph.
    pub fn subgraph(
        &self,
        name: impl Into<String>,
        nodes: impl IntoIterator<Item = NodeId>,
    ) -> Subgraph<'_> {
        let mut members = Vec::new();
        for node in nodes {
            self.assert_valid_node_id(node);
            if !members.contains(&node) {
                members.push(node);
            }
        }
        Subgraph {
            graph: self,
            name: name.into(),
            attributes: Attributes::default(),
            members,
        }
    }
}
