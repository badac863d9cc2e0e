//! The vertex struct.

use super::{Edge, VertexKey};

/// A node holding a payload and its ordered outgoing edges.
///
/// Identity comes from the [`VertexKey`] generated in [`Vertex::new`], never
/// from the payload, so `T` needs no `Eq` or `Hash`.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    key: VertexKey,
    data: T,
    pub(crate) edges: Vec<Edge>,
}

impl<T> Vertex<T> {
    /// Create a detached vertex with a fresh key and no edges.
    pub fn new(data: T) -> Self {
        Self {
            key: VertexKey::next(),
            data,
            edges: Vec::new(),
        }
    }

    pub fn key(&self) -> VertexKey {
        self.key
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Consume the vertex, returning its payload.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Outgoing edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vertex_is_detached() {
        let v = Vertex::new("a");
        assert_eq!(*v.data(), "a");
        assert_eq!(v.out_degree(), 0);
    }

    #[test]
    fn equal_payloads_get_distinct_keys() {
        let a = Vertex::new(7);
        let b = Vertex::new(7);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn payload_is_mutable_key_is_not() {
        let mut v = Vertex::new(1);
        let key = v.key();
        *v.data_mut() += 1;
        assert_eq!(*v.data(), 2);
        assert_eq!(v.key(), key);
        assert_eq!(v.into_data(), 2);
    }
}
