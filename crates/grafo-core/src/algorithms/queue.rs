//! FIFO work queue for breadth-first traversals.

use grafo_common::types::VertexId;
use grafo_common::utils::error::{Error, Result};
use std::collections::VecDeque;

/// A growable FIFO of vertex ids.
///
/// Each breadth-first traversal owns one queue and drops it on return, early
/// exits included.
#[derive(Debug, Default)]
pub struct TraversalQueue {
    items: VecDeque<VertexId>,
}

impl TraversalQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue with room for `capacity` vertices.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the buffer cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut items = VecDeque::new();
        items
            .try_reserve(capacity)
            .map_err(|_| Error::allocation("traversal queue", capacity))?;
        Ok(Self { items })
    }

    /// Appends a vertex at the back.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the queue cannot grow.
    pub fn push(&mut self, vertex: VertexId) -> Result<()> {
        self.items
            .try_reserve(1)
            .map_err(|_| Error::allocation("traversal queue", 1))?;
        self.items.push_back(vertex);
        Ok(())
    }

    /// Removes the vertex at the front.
    pub fn pop(&mut self) -> Option<VertexId> {
        self.items.pop_front()
    }

    /// Returns the number of queued vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every queued vertex, keeping the buffer.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = TraversalQueue::new();
        for i in 0..5 {
            queue.push(VertexId::new(i)).unwrap();
        }
        assert_eq!(queue.len(), 5);

        let popped: Vec<u32> = std::iter::from_fn(|| queue.pop()).map(VertexId::as_u32).collect();
        assert_eq!(popped, vec![0, 1, 2, 3, 4]);
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut queue = TraversalQueue::with_capacity(2).unwrap();
        queue.push(VertexId::new(1)).unwrap();
        queue.push(VertexId::new(2)).unwrap();
        assert_eq!(queue.pop(), Some(VertexId::new(1)));
        queue.push(VertexId::new(3)).unwrap();
        assert_eq!(queue.pop(), Some(VertexId::new(2)));
        assert_eq!(queue.pop(), Some(VertexId::new(3)));

        queue.push(VertexId::new(4)).unwrap();
        queue.clear();
        assert!(queue.is_empty());
    }
}
