//! Single-source shortest paths within a component (Dijkstra).

use super::components::ComponentLabels;
use super::heap::MinHeap;
use super::traits::DistanceMap;
use crate::graph::Graph;
use grafo_common::types::{Distance, INFINITE_DISTANCE, VertexId};
use grafo_common::utils::error::{Error, Result};

/// Reusable Dijkstra workspace.
///
/// The distance table and heap are sized for the whole graph once and reused
/// across runs; each run only resets the vertices the previous run touched,
/// so running from every vertex of many small components stays linear in
/// the total work.
pub struct EccentricityEngine<'g> {
    graph: &'g Graph,
    dist: Vec<Distance>,
    heap: MinHeap,
    touched: Vec<VertexId>,
}

impl<'g> EccentricityEngine<'g> {
    /// Creates a workspace for `graph`.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the tables cannot be reserved.
    pub fn new(graph: &'g Graph) -> Result<Self> {
        let n = graph.vertex_count();
        let mut dist = Vec::new();
        dist.try_reserve_exact(n)
            .map_err(|_| Error::allocation("distance table", n))?;
        dist.resize(n, INFINITE_DISTANCE);

        Ok(Self {
            graph,
            dist,
            heap: MinHeap::with_vertex_count(n)?,
            touched: Vec::new(),
        })
    }

    /// Computes distances from `source` to every vertex in `members` and
    /// returns the largest one.
    ///
    /// `members` must be the component containing `source`; every member
    /// starts at infinity except the source, and all of them are queued.
    /// Only members are ever written, so a later run never sees distances
    /// from this one.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the heap cannot grow, and
    /// [`Error::Internal`] if `source` is not among `members`.
    pub fn run(&mut self, source: VertexId, members: &[VertexId]) -> Result<Distance> {
        for v in self.touched.drain(..) {
            self.dist[v.index()] = INFINITE_DISTANCE;
        }
        self.heap.clear();
        self.touched
            .try_reserve(members.len())
            .map_err(|_| Error::allocation("distance table", members.len()))?;

        for &v in members {
            self.touched.push(v);
            self.heap.push(v, &self.dist)?;
        }
        if !self.heap.contains(source) {
            self.heap.clear();
            return Err(Error::Internal(format!(
                "source {source} is not a member of the searched component"
            )));
        }
        self.dist[source.index()] = 0;
        self.heap.decrease_key(source, &self.dist);

        while let Some(u) = self.heap.pop_min(&self.dist) {
            let du = self.dist[u.index()];
            if du == INFINITE_DISTANCE {
                // Everything left is unreachable from the source.
                break;
            }
            for neighbor in self.graph.neighbors(u) {
                let v = neighbor.target;
                let candidate = du.saturating_add(Distance::from(neighbor.weight));
                if self.heap.contains(v) && candidate < self.dist[v.index()] {
                    self.dist[v.index()] = candidate;
                    self.heap.decrease_key(v, &self.dist);
                }
            }
        }

        Ok(members
            .iter()
            .map(|v| self.dist[v.index()])
            .filter(|&d| d != INFINITE_DISTANCE)
            .max()
            .unwrap_or(0))
    }

    /// Returns the distance to `vertex` computed by the last run.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.dist
            .get(vertex.index())
            .copied()
            .filter(|&d| d != INFINITE_DISTANCE)
    }

    /// Consumes the workspace, keeping the last run's distances.
    #[must_use]
    pub fn into_distance_map(self, source: VertexId) -> DistanceMap {
        DistanceMap::new(source, self.dist)
    }
}

/// Shortest-path distances from `source` to every vertex of its component.
///
/// # Errors
///
/// Returns an allocation error if the distance table or heap cannot grow.
///
/// # Panics
///
/// Panics if `source` is not a vertex of the labelled graph.
pub fn dijkstra(graph: &Graph, labels: &ComponentLabels, source: VertexId) -> Result<DistanceMap> {
    let mut engine = EccentricityEngine::new(graph)?;
    engine.run(source, labels.members(labels.component_of(source)))?;
    Ok(engine.into_distance_map(source))
}
