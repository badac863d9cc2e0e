//! digraph-adt — a generic in-memory directed graph.
//!
//! Vertices carry an arbitrary payload and are identified by a generated
//! [`VertexKey`]. Edges are directed, optionally weighted, and refer to their
//! target by key. Reachable vertices can be walked breadth-first or
//! depth-first, either through a callback or as a lazy iterator.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{BreadthFirst, DepthFirst, Graph, GraphBuilder};
pub use types::{Edge, GraphError, GraphResult, Vertex, VertexKey, DEFAULT_VERTEX_CAPACITY};
