//! Core graph structure — a key-indexed vertex registry.

use std::collections::HashMap;

use crate::types::{Edge, GraphError, GraphResult, Vertex, VertexKey};

use super::traversal::{BreadthFirst, DepthFirst};

/// A directed graph over payloads of type `T`.
///
/// The graph is the only owner of its vertices. Edges live in their source
/// vertex's edge list and refer to targets by [`VertexKey`].
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// All member vertices, indexed by key.
    vertices: HashMap<VertexKey, Vertex<T>>,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(capacity),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges across all edge lists.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Add a vertex, returning its key.
    ///
    /// Adding a vertex whose key is already present replaces the old one.
    pub fn add(&mut self, vertex: Vertex<T>) -> VertexKey {
        let key = vertex.key();
        self.vertices.insert(key, vertex);
        key
    }

    /// Wrap `data` in a fresh vertex and add it.
    pub fn add_value(&mut self, data: T) -> VertexKey {
        self.add(Vertex::new(data))
    }

    /// Get a vertex by key.
    pub fn vertex(&self, key: VertexKey) -> Option<&Vertex<T>> {
        self.vertices.get(&key)
    }

    /// Get a vertex by key (mutable).
    pub fn vertex_mut(&mut self, key: VertexKey) -> Option<&mut Vertex<T>> {
        self.vertices.get_mut(&key)
    }

    pub fn contains(&self, key: VertexKey) -> bool {
        self.vertices.contains_key(&key)
    }

    /// All vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.values()
    }

    /// All member keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = VertexKey> + '_ {
        self.vertices.keys().copied()
    }

    /// Outgoing edges of `key`, or an empty slice if it is not a member.
    pub fn edges_from(&self, key: VertexKey) -> &[Edge] {
        match self.vertices.get(&key) {
            Some(vertex) => vertex.edges(),
            None => &[],
        }
    }

    /// Add a directed edge `from -> to`.
    ///
    /// # Panics
    /// Panics if either endpoint is not a member of the graph.
    pub fn add_edge(&mut self, from: VertexKey, to: VertexKey, weight: Option<i64>) {
        if let Err(err) = self.try_add_edge(from, to, weight) {
            panic!("add_edge({from} -> {to}): {err}");
        }
    }

    /// Add a directed edge `from -> to`, reporting a missing endpoint as an error.
    ///
    /// Parallel edges and self-loops are allowed.
    pub fn try_add_edge(
        &mut self,
        from: VertexKey,
        to: VertexKey,
        weight: Option<i64>,
    ) -> GraphResult<()> {
        if !self.contains(to) {
            return Err(GraphError::VertexNotFound(to));
        }
        let source = self
            .vertices
            .get_mut(&from)
            .ok_or(GraphError::VertexNotFound(from))?;
        source.edges.push(Edge { target: to, weight });
        Ok(())
    }

    /// Remove a vertex and every edge pointing at it.
    ///
    /// Returns the removed vertex with its own outgoing edges, or `None` if
    /// `key` was not a member.
    pub fn remove(&mut self, key: VertexKey) -> Option<Vertex<T>> {
        let removed = self.vertices.remove(&key)?;

        let mut purged = 0;
        for vertex in self.vertices.values_mut() {
            let before = vertex.edges.len();
            vertex.edges.retain(|e| e.target != key);
            purged += before - vertex.edges.len();
        }
        log::debug!("removed vertex {key}, purged {purged} incoming edges");

        Some(removed)
    }

    /// Lazily walk the graph breadth-first from `start`.
    ///
    /// With `start == None` an arbitrary member is used. The iterator is empty
    /// if the graph is empty or `start` is not a member.
    pub fn breadth_first(&self, start: Option<VertexKey>) -> BreadthFirst<'_, T> {
        BreadthFirst::new(self, self.resolve_start(start))
    }

    /// Lazily walk the graph depth-first (pre-order) from `start`.
    ///
    /// Start selection follows [`Graph::breadth_first`].
    pub fn depth_first(&self, start: Option<VertexKey>) -> DepthFirst<'_, T> {
        DepthFirst::new(self, self.resolve_start(start))
    }

    /// Call `on_visit` once per vertex reachable from `start`, in level order.
    pub fn breadth_first_traversal<F>(&self, start: Option<VertexKey>, mut on_visit: F)
    where
        F: FnMut(&T),
    {
        for vertex in self.breadth_first(start) {
            on_visit(vertex.data());
        }
    }

    /// Call `on_visit` once per vertex reachable from `start`, in depth-first pre-order.
    pub fn depth_first_traversal<F>(&self, start: Option<VertexKey>, mut on_visit: F)
    where
        F: FnMut(&T),
    {
        for vertex in self.depth_first(start) {
            on_visit(vertex.data());
        }
    }

    fn resolve_start(&self, start: Option<VertexKey>) -> Option<VertexKey> {
        match start {
            Some(key) if self.contains(key) => Some(key),
            Some(_) => None,
            None => self.vertices.keys().next().copied(),
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
