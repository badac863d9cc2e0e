//! All data types for the digraph library.

pub mod edge;
pub mod error;
pub mod key;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use key::VertexKey;
pub use vertex::Vertex;

/// Number of vertex slots a fresh [`GraphBuilder`](crate::GraphBuilder) reserves.
pub const DEFAULT_VERTEX_CAPACITY: usize = 16;
