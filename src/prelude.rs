//! The graph type, its handles, and the extension traits the analyses
//! return collections of.
pub use crate::attributes::FromAttr;
pub use crate::cliques::CliquesExt;
pub use crate::direction::Direction;
pub use crate::graph::Graph;
pub use crate::id::NodeId;
pub use crate::partition::NodeSetsExt;
pub use crate::path::PathsExt;
