//! Error types for the digraph library.

use thiserror::Error;

use super::VertexKey;

/// Errors reported by the fallible graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is not a member of the graph.
    #[error("Vertex {0} not found in graph")]
    VertexNotFound(VertexKey),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
