//! The directed edge struct.

use super::VertexKey;

/// A directed arc to another vertex.
///
/// The source is implicit: it is the vertex whose edge list holds this edge.
/// The target is stored by key and resolved through the owning graph, so an
/// edge never keeps its target alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Key of the vertex this edge points at.
    pub target: VertexKey,
    /// Optional weight. Carried but not consumed by any traversal.
    pub weight: Option<i64>,
}

impl Edge {
    /// Create an unweighted edge.
    pub fn new(target: VertexKey) -> Self {
        Self {
            target,
            weight: None,
        }
    }

    /// Create an edge with an explicit weight.
    pub fn with_weight(target: VertexKey, weight: i64) -> Self {
        Self {
            target,
            weight: Some(weight),
        }
    }
}
