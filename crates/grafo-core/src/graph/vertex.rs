//! Vertex and neighbor records.

use grafo_common::types::{VertexId, Weight};
use grafo_common::utils::error::{Error, Result};
use smallvec::SmallVec;
use std::sync::Arc;

/// Number of neighbors stored inline before the list spills to the heap.
pub const INLINE_NEIGHBORS: usize = 4;

/// One half of an undirected edge, stored in the adjacency list of the
/// other endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// The adjacent vertex.
    pub target: VertexId,
    /// Weight of the edge.
    pub weight: Weight,
}

impl Neighbor {
    /// Creates a neighbor entry.
    #[inline]
    #[must_use]
    pub const fn new(target: VertexId, weight: Weight) -> Self {
        Self { target, weight }
    }
}

/// A named vertex and its adjacency list.
#[derive(Debug, Clone)]
pub struct Vertex {
    name: Arc<str>,
    neighbors: SmallVec<[Neighbor; INLINE_NEIGHBORS]>,
}

impl Vertex {
    /// Creates an isolated vertex, reserving room for `neighbor_capacity`
    /// neighbors up front.
    pub(crate) fn new(name: Arc<str>, neighbor_capacity: usize) -> Result<Self> {
        let mut neighbors = SmallVec::new();
        if neighbor_capacity > INLINE_NEIGHBORS {
            neighbors
                .try_reserve(neighbor_capacity)
                .map_err(|_| Error::allocation("neighbor list", neighbor_capacity))?;
        }
        Ok(Self { name, neighbors })
    }

    /// Returns the vertex name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a shared handle to the vertex name.
    #[inline]
    #[must_use]
    pub fn name_arc(&self) -> &Arc<str> {
        &self.name
    }

    /// Returns the adjacency list in insertion order.
    #[inline]
    #[must_use]
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    /// Returns the number of neighbors.
    #[inline]
    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns the entry pointing at `target`, if any.
    #[must_use]
    pub fn neighbor(&self, target: VertexId) -> Option<&Neighbor> {
        self.neighbors.iter().find(|n| n.target == target)
    }

    /// Makes room for one more neighbor without touching the list.
    pub(crate) fn reserve_neighbor(&mut self) -> Result<()> {
        self.neighbors
            .try_reserve(1)
            .map_err(|_| Error::allocation("neighbor list", 1))
    }

    /// Appends a neighbor. Callers check for duplicates and reserve first.
    pub(crate) fn push_neighbor(&mut self, neighbor: Neighbor) {
        self.neighbors.push(neighbor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_neighbors() {
        let mut v = Vertex::new(Arc::from("a"), 0).unwrap();
        assert_eq!(v.name(), "a");
        assert_eq!(v.degree(), 0);

        v.reserve_neighbor().unwrap();
        v.push_neighbor(Neighbor::new(VertexId::new(3), 7));

        assert_eq!(v.degree(), 1);
        assert_eq!(v.neighbor(VertexId::new(3)).map(|n| n.weight), Some(7));
        assert!(v.neighbor(VertexId::new(4)).is_none());
    }

    #[test]
    fn test_vertex_spills_past_inline_capacity() {
        let mut v = Vertex::new(Arc::from("hub"), 16).unwrap();
        for i in 0..10 {
            v.reserve_neighbor().unwrap();
            v.push_neighbor(Neighbor::new(VertexId::new(i), 1));
        }
        let targets: Vec<u32> = v.neighbors().iter().map(|n| n.target.as_u32()).collect();
        assert_eq!(targets, (0..10).collect::<Vec<_>>());
    }
}
