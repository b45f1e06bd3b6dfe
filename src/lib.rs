//! Directed graphs and structural analysis over them.
//!
//! A [`Graph`] is an arena of labelled [`Node`]s addressed by [`NodeId`]
//! handles. Every connection is stored on both of its ends, so algorithms
//! can walk a graph with or against the direction of its edges. On top of
//! the traversal engine in [`search`] sit reachability ([`path`]), cycle
//! detection ([`cycles`]), bridge finding ([`bridges`]), clique finding
//! ([`cliques`]) and k-partite testing ([`partition`]).
//!
//! ```
//! use graphwalk::Graph;
//!
//! let mut graph = Graph::new("example");
//! let nodes = graph.add_nodes(["a", "b", "c"]);
//! graph.connect_nodes(&nodes);
//!
//! let path = graph.path_to(nodes[0], nodes[2]).unwrap();
//! assert_eq!(path.render(&graph), "a → b → c");
//! assert_eq!(graph.find_bridges(nodes[0]).len(), 2);
//! ```

pub mod attributes;
pub mod bridges;
pub mod cliques;
pub mod cycles;
pub mod direction;
pub mod dot;
pub mod error;
pub mod graph;
pub mod id;
#[cfg(feature = "json")]
pub mod json;
pub mod node;
pub mod node_set;
pub mod partition;
pub mod path;
pub mod prelude;
pub mod search;
pub mod subgraph;
pub mod tracing_support;

#[cfg(test)]
mod graph_test_support;

pub use attributes::{AttrValue, Attributes, FromAttr};
pub use cliques::{Clique, Cliques, CliquesExt};
pub use direction::Direction;
pub use error::{AttributeError, DotError, GraphError};
#[cfg(feature = "json")]
pub use error::JsonError;
pub use graph::{EdgeSpec, Graph};
pub use id::NodeId;
pub use node::{Edge, Edges, Node};
pub use node_set::NodeSet;
pub use partition::{NodeSets, NodeSetsExt};
pub use path::{Path, Paths, PathsExt};
pub use search::{BfsIterator, DfsIterator};
pub use subgraph::Subgraph;
