//! Binary min-heap of vertices keyed by tentative distance.
//!
//! The keys live outside the heap (in the caller's distance table) because
//! Dijkstra lowers them in place during relaxation. Every operation that may
//! reorder elements therefore takes the distance table as an argument, and
//! [`MinHeap::decrease_key`] must be called after a key is lowered.
//!
//! A position table maps each vertex to its slot, so locating a vertex for
//! decrease-key is O(1) and the whole operation O(log n).

use grafo_common::types::{Distance, VertexId};
use grafo_common::utils::error::{Error, Result};

const ABSENT: u32 = u32::MAX;

/// Array-backed binary min-heap over vertex ids.
#[derive(Debug)]
pub struct MinHeap {
    /// Heap-ordered vertex ids.
    items: Vec<VertexId>,
    /// Slot of each vertex in `items`, or `ABSENT`.
    positions: Vec<u32>,
}

impl MinHeap {
    /// Creates an empty heap able to hold any vertex of a graph with
    /// `vertex_count` vertices.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the tables cannot be reserved.
    pub fn with_vertex_count(vertex_count: usize) -> Result<Self> {
        let mut positions = Vec::new();
        positions
            .try_reserve_exact(vertex_count)
            .map_err(|_| Error::allocation("heap position table", vertex_count))?;
        positions.resize(vertex_count, ABSENT);

        let mut items = Vec::new();
        items
            .try_reserve(vertex_count)
            .map_err(|_| Error::allocation("heap", vertex_count))?;

        Ok(Self { items, positions })
    }

    /// Returns the number of queued vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if `vertex` is queued.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.positions
            .get(vertex.index())
            .is_some_and(|&p| p != ABSENT)
    }

    /// Returns the queued vertex with the smallest distance without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<VertexId> {
        self.items.first().copied()
    }

    /// Queues `vertex` with its current distance.
    ///
    /// Pushing a vertex that is already queued only re-sifts it.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the heap cannot grow, and
    /// [`Error::Internal`] if `vertex` is outside the vertex range the heap
    /// was created for.
    pub fn push(&mut self, vertex: VertexId, dist: &[Distance]) -> Result<()> {
        let Some(&position) = self.positions.get(vertex.index()) else {
            return Err(Error::Internal(format!(
                "vertex {vertex} outside heap range of {}",
                self.positions.len()
            )));
        };
        if position != ABSENT {
            self.decrease_key(vertex, dist);
            return Ok(());
        }
        self.items
            .try_reserve(1)
            .map_err(|_| Error::allocation("heap", 1))?;

        let slot = self.items.len();
        self.items.push(vertex);
        self.positions[vertex.index()] = slot as u32;
        self.sift_up(slot, dist);
        Ok(())
    }

    /// Removes and returns the vertex with the smallest distance.
    pub fn pop_min(&mut self, dist: &[Distance]) -> Option<VertexId> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.swap(0, last);
        let min = self.items.pop()?;
        self.positions[min.index()] = ABSENT;
        if !self.items.is_empty() {
            self.sift_down(0, dist);
        }
        Some(min)
    }

    /// Restores heap order after `vertex`'s distance was lowered.
    ///
    /// Returns `false` if the vertex is not queued (already popped, or never
    /// pushed), in which case nothing happens.
    pub fn decrease_key(&mut self, vertex: VertexId, dist: &[Distance]) -> bool {
        match self.positions.get(vertex.index()) {
            Some(&slot) if slot != ABSENT => {
                self.sift_up(slot as usize, dist);
                true
            }
            _ => false,
        }
    }

    /// Removes every queued vertex.
    pub fn clear(&mut self) {
        for v in self.items.drain(..) {
            self.positions[v.index()] = ABSENT;
        }
    }

    fn key(&self, slot: usize, dist: &[Distance]) -> Distance {
        dist[self.items[slot].index()]
    }

    fn sift_up(&mut self, mut slot: usize, dist: &[Distance]) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.key(parent, dist) <= self.key(slot, dist) {
                break;
            }
            self.swap(parent, slot);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize, dist: &[Distance]) {
        let len = self.items.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.key(left, dist) < self.key(smallest, dist) {
                smallest = left;
            }
            if right < len && self.key(right, dist) < self.key(smallest, dist) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.positions[self.items[a].index()] = a as u32;
        self.positions[self.items[b].index()] = b as u32;
    }
}
