//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod digraph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use digraph::Graph;
pub use traversal::{BreadthFirst, DepthFirst};
