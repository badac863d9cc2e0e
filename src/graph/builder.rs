//! Fluent API for building Graph instances.

use crate::types::{GraphResult, Vertex, VertexKey, DEFAULT_VERTEX_CAPACITY};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Links are recorded as given and validated when [`GraphBuilder::build`] runs.
pub struct GraphBuilder<T> {
    vertices: Vec<Vertex<T>>,
    links: Vec<(VertexKey, VertexKey, Option<i64>)>,
}

impl<T> GraphBuilder<T> {
    /// Create a new builder with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_VERTEX_CAPACITY)
    }

    /// Create a new builder with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            links: Vec::new(),
        }
    }

    /// Add a vertex holding `data`, returning its key.
    pub fn vertex(&mut self, data: T) -> VertexKey {
        let vertex = Vertex::new(data);
        let key = vertex.key();
        self.vertices.push(vertex);
        key
    }

    /// Add an unweighted edge between two vertices.
    pub fn link(&mut self, from: VertexKey, to: VertexKey) -> &mut Self {
        self.links.push((from, to, None));
        self
    }

    /// Add a weighted edge between two vertices.
    pub fn link_weighted(&mut self, from: VertexKey, to: VertexKey, weight: i64) -> &mut Self {
        self.links.push((from, to, Some(weight)));
        self
    }

    /// Build the final Graph.
    ///
    /// Fails with [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound)
    /// if a link names a key this builder did not produce.
    pub fn build(self) -> GraphResult<Graph<T>> {
        let mut graph = Graph::with_capacity(self.vertices.len());
        for vertex in self.vertices {
            graph.add(vertex);
        }
        for (from, to, weight) in self.links {
            graph.try_add_edge(from, to, weight)?;
        }
        log::debug!(
            "built graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
