use std::io;

/// Errors returned by the typed attribute accessors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum AttributeError {
    /// No attribute is stored under the requested name.
    #[error("attribute {name:?} doesn't exist")]
    NotFound { name: String },
    /// The stored value has a different type than requested.
    #[error("attribute {name:?} is of type {found} not {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors raised when addressing a node collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError {
    /// A positional lookup fell outside the collection.
    #[error("invalid index {index} for nodes of size {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors that can occur while writing or reading DOT text.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DotError {
    /// IO error while writing.
    #[error("failed to encode DOT: {0}")]
    Io(#[from] io::Error),
    /// The input is not valid DOT.
    #[error("failed to parse DOT: {0}")]
    Parse(String),
}

/// Errors that can occur while encoding or decoding the JSON interchange
/// format.
#[cfg(feature = "json")]
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum JsonError {
    /// IO error while writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Malformed or mistyped JSON.
    #[error("failed to decode nodes and edges JSON: {0}")]
    Serde(#[from] serde_json::Error),
    /// An edge addressed a node index outside the node list.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// An edge record has no matching record on its other end.
    #[error("edge {from_index} {direction} {to_index} has no matching back-record")]
    UnpairedRecord {
        from_index: usize,
        direction: crate::direction::Direction,
        to_index: usize,
    },
}
