//! Shared algorithm traits and result types.

use crate::graph::Graph;
use grafo_common::types::{Distance, INFINITE_DISTANCE, VertexId};
use grafo_common::utils::error::Result;

/// A graph algorithm that can be run on demand, bypassing the graph's cache.
pub trait GraphAlgorithm {
    /// The algorithm's result type.
    type Output;

    /// Short identifier, e.g. `"bridges"`.
    fn name(&self) -> &'static str;

    /// One-line description.
    fn description(&self) -> &'static str;

    /// Runs the algorithm on `graph`.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if a work buffer cannot grow.
    fn run(&self, graph: &Graph) -> Result<Self::Output>;
}

/// Shortest-path distances from a single source.
///
/// Vertices outside the source's component are unreachable and report `None`.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    source: VertexId,
    distances: Vec<Distance>,
}

impl DistanceMap {
    pub(crate) fn new(source: VertexId, distances: Vec<Distance>) -> Self {
        Self { source, distances }
    }

    /// Returns the source vertex.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the distance to `vertex`, or `None` if it is unreachable.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.distances
            .get(vertex.index())
            .copied()
            .filter(|&d| d != INFINITE_DISTANCE)
    }

    /// Returns the largest finite distance, i.e. the source's eccentricity.
    #[must_use]
    pub fn eccentricity(&self) -> Distance {
        self.iter().map(|(_, d)| d).max().unwrap_or(0)
    }

    /// Iterates over `(vertex, distance)` for every reachable vertex.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Distance)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d != INFINITE_DISTANCE)
            .map(|(i, &d)| (VertexId::new(i as u32), d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_map() {
        let map = DistanceMap::new(VertexId::new(0), vec![0, 4, INFINITE_DISTANCE, 2]);
        assert_eq!(map.source(), VertexId::new(0));
        assert_eq!(map.distance(VertexId::new(1)), Some(4));
        assert_eq!(map.distance(VertexId::new(2)), None);
        assert_eq!(map.distance(VertexId::new(10)), None);
        assert_eq!(map.eccentricity(), 4);
        assert_eq!(map.iter().count(), 3);
    }
}
