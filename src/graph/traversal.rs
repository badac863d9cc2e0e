//! Graph traversal algorithms (BFS, DFS).
//!
//! Both walks are lazy iterators over `&Vertex<T>`. Each reachable vertex is
//! yielded exactly once; targets that no longer resolve in the graph are
//! skipped.

use std::collections::{HashSet, VecDeque};

use crate::types::{Vertex, VertexKey};

use super::Graph;

/// Breadth-first iterator returned by [`Graph::breadth_first`].
pub struct BreadthFirst<'g, T> {
    graph: &'g Graph<T>,
    queue: VecDeque<VertexKey>,
    /// Keys that are visited or currently queued.
    discovered: HashSet<VertexKey>,
}

impl<'g, T> BreadthFirst<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>, start: Option<VertexKey>) -> Self {
        let mut queue = VecDeque::new();
        let mut discovered = HashSet::new();
        if let Some(start) = start {
            log::trace!("breadth-first traversal from {start}");
            queue.push_back(start);
            discovered.insert(start);
        }
        Self {
            graph,
            queue,
            discovered,
        }
    }
}

impl<'g, T> Iterator for BreadthFirst<'g, T> {
    type Item = &'g Vertex<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Some(key) = self.queue.pop_front() {
            let Some(vertex) = graph.vertex(key) else {
                continue;
            };
            for edge in vertex.edges() {
                if graph.contains(edge.target) && self.discovered.insert(edge.target) {
                    self.queue.push_back(edge.target);
                }
            }
            return Some(vertex);
        }
        None
    }
}

/// Depth-first pre-order iterator returned by [`Graph::depth_first`].
///
/// Uses an explicit stack of `(vertex, next edge index)` frames, so the order
/// matches the recursive formulation without consuming thread stack.
pub struct DepthFirst<'g, T> {
    graph: &'g Graph<T>,
    start: Option<VertexKey>,
    stack: Vec<(VertexKey, usize)>,
    visited: HashSet<VertexKey>,
}

impl<'g, T> DepthFirst<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>, start: Option<VertexKey>) -> Self {
        let mut visited = HashSet::new();
        if let Some(start) = start {
            log::trace!("depth-first traversal from {start}");
            visited.insert(start);
        }
        Self {
            graph,
            start,
            stack: Vec::new(),
            visited,
        }
    }
}

impl<'g, T> Iterator for DepthFirst<'g, T> {
    type Item = &'g Vertex<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;

        if let Some(start) = self.start.take() {
            let vertex = graph.vertex(start)?;
            self.stack.push((start, 0));
            return Some(vertex);
        }

        while let Some(&(key, mut cursor)) = self.stack.last() {
            let edges = graph.edges_from(key);
            let mut descend = None;
            while cursor < edges.len() {
                let target = edges[cursor].target;
                cursor += 1;
                if self.visited.contains(&target) {
                    continue;
                }
                if let Some(vertex) = graph.vertex(target) {
                    descend = Some(vertex);
                    break;
                }
            }

            if let Some(top) = self.stack.last_mut() {
                top.1 = cursor;
            }

            match descend {
                Some(vertex) => {
                    self.visited.insert(vertex.key());
                    self.stack.push((vertex.key(), 0));
                    return Some(vertex);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
