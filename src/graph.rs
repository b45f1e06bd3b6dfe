//! The node arena and the edge-construction operations.
//!
//! A [`Graph`] owns every node it creates. Nodes are addressed by [`NodeId`]
//! handles and edges store handles rather than references, so cyclic
//! structures need no shared ownership. Mutation is append-only: nodes and
//! edge records can be added but never removed.
//!
//! Every connection is stored as two [`Edge`] records, one on each end, with
//! complementary [`Direction`] tags. All the analysis algorithms rely on this
//! symmetry to walk a graph against the direction of its edges.

use crate::{
    attributes::Attributes,
    direction::Direction,
    error::GraphError,
    id::NodeId,
    node::{Edge, Edges, Node},
};

/// A named collection of nodes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    name: String,
    attributes: Attributes,
    nodes: Vec<Node>,
}

/// One request for [`Graph::add_edges`]. A missing direction means a plain
/// [`Graph::add_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub direction: Option<Direction>,
}

impl EdgeSpec {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to,
            direction: None,
        }
    }

    pub fn with_direction(from: NodeId, to: NodeId, direction: Direction) -> Self {
        Self {
            from,
            to,
            direction: Some(direction),
        }
    }
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a graph holding one unconnected node per label.
    pub fn with_labels<I, S>(name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new(name);
        graph.add_nodes(labels);
        graph
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
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

    /// # Nodes

    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        self.insert_node(Node::new(label, Attributes::default()))
    }

    pub fn add_node_with_attributes(
        &mut self,
        label: impl Into<String>,
        attributes: Attributes,
    ) -> NodeId {
        self.insert_node(Node::new(label, attributes))
    }

    pub fn add_nodes<I, S>(&mut self, labels: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels.into_iter().map(|label| self.add_node(label)).collect()
    }

    fn insert_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn assert_valid_node_id(&self, id: NodeId) {
        assert!(
            id.0 < self.nodes.len(),
            "NodeId {id} does not belong to graph {:?}",
            self.name
        );
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.assert_valid_node_id(id);
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.assert_valid_node_id(id);
        &mut self.nodes[id.0]
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.node(id).label
    }

    pub fn edges(&self, id: NodeId) -> &Edges {
        &self.node(id).edges
    }

    /// Handles of every node, in collection (insertion) order.
    pub fn node_ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Looks up a node by its position in the collection.
    pub fn node_at(&self, index: usize) -> Result<NodeId, GraphError> {
        if index < self.nodes.len() {
            Ok(NodeId(index))
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                len: self.nodes.len(),
            })
        }
    }

    /// The position of a node in the collection, if it belongs to it.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        (id.0 < self.nodes.len()).then_some(id.0)
    }

    /// Every node carrying `label`, in collection order.
    pub fn nodes_labelled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        self.node_ids().filter(move |&id| self.nodes[id.0].label == label)
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The number of stored edge records; each connection contributes two.
    pub fn num_edge_records(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Calls `f` on every node in collection order, without traversing edges.
    pub fn for_each(&self, mut f: impl FnMut(NodeId)) {
        self.node_ids().for_each(&mut f);
    }

    /// # Edges

    /// Adds a directed connection `from → to`: an `Out` record on `from` and
    /// an `In` record on `to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.add_edge_with_direction(from, to, Direction::Out);
    }

    /// Adds two directed connections, `from → to` and `to → from`. This is
    /// four edge records in total and is not the same as a single `Both`
    /// connection.
    pub fn add_link(&mut self, from: NodeId, to: NodeId) {
        self.add_edge(from, to);
        self.add_edge(to, from);
    }

    /// Adds a connection whose tag on `from` is `direction`; `to` receives
    /// the complementary tag.
    pub fn add_edge_with_direction(&mut self, from: NodeId, to: NodeId, direction: Direction) {
        self.add_named_edge(from, to, direction, None, Attributes::default());
    }

    /// Like [`Self::add_edge_with_direction`], additionally naming the
    /// connection and attaching attributes to both records.
    pub fn add_named_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        direction: Direction,
        name: Option<String>,
        attributes: Attributes,
    ) {
        self.assert_valid_node_id(from);
        self.assert_valid_node_id(to);
        let back = Edge {
            target: from,
            direction: direction.complement(),
            name: name.clone(),
            attributes: attributes.clone(),
        };
        self.nodes[from.0].edges.push(Edge {
            target: to,
            direction,
            name,
            attributes,
        });
        self.nodes[to.0].edges.push(back);
    }

    /// Appends a single record to `from` without its back-record. Only used
    /// by importers whose input already lists both sides of each connection.
    #[cfg(feature = "json")]
    pub(crate) fn push_edge_record(&mut self, from: NodeId, edge: Edge) {
        self.assert_valid_node_id(from);
        self.assert_valid_node_id(edge.target);
        self.nodes[from.0].edges.push(edge);
    }

    pub fn add_edges(&mut self, specs: &[EdgeSpec]) {
        for request in specs {
            match request.direction {
                Some(direction) => self.add_edge_with_direction(request.from, request.to, direction),
                None => self.add_edge(request.from, request.to),
            }
        }
    }

    /// Chains the nodes in order: `a → b → c → …`.
    pub fn connect_nodes(&mut self, nodes: &[NodeId]) {
        for pair in nodes.windows(2) {
            self.add_edge(pair[0], pair[1]);
        }
    }

    /// Links every pair of the given nodes in both directions.
    pub fn mesh_nodes(&mut self, nodes: &[NodeId]) {
        for (i, &x) in nodes.iter().enumerate() {
            for &y in &nodes[i + 1..] {
                self.add_link(x, y);
            }
        }
    }
}
