//! Graph store implementation.

use super::vertex::{Neighbor, Vertex};
use crate::algorithms::{
    Bridge, ComponentLabels, CutSets, DistanceMap, component_diameters, cut_sets, dijkstra,
    is_bipartite, label_components,
};
use grafo_common::types::{DEFAULT_WEIGHT, Distance, VertexId, Weight};
use grafo_common::utils::error::{Error, Result};
use grafo_common::utils::hash::{FastHashMap, new_map};
use std::sync::{Arc, OnceLock};
use tracing::{debug, trace};

/// Configuration for the graph store.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Initial capacity of the vertex table.
    pub initial_vertex_capacity: usize,
    /// Neighbor slots reserved for each new vertex.
    pub initial_neighbor_capacity: usize,
}

impl GraphConfig {
    /// Sets the initial capacity of the vertex table.
    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.initial_vertex_capacity = capacity;
        self
    }

    /// Sets the number of neighbor slots reserved per vertex.
    pub fn with_neighbor_capacity(mut self, capacity: usize) -> Self {
        self.initial_neighbor_capacity = capacity;
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            initial_vertex_capacity: 36,
            initial_neighbor_capacity: 4,
        }
    }
}

/// Lazily computed analysis results.
///
/// Every cell is filled at most once; any structural change to the graph
/// replaces the whole block.
#[derive(Debug, Default)]
struct Analysis {
    components: OnceLock<ComponentLabels>,
    cuts: OnceLock<CutSets>,
    diameters: OnceLock<Vec<Distance>>,
}

/// Fills `cell` with the result of `init` unless it already holds a value.
fn get_or_try_init<T>(cell: &OnceLock<T>, init: impl FnOnce() -> Result<T>) -> Result<&T> {
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let value = init()?;
    Ok(cell.get_or_init(|| value))
}

/// An undirected, weighted graph with named vertices.
///
/// Vertices live in a flat table indexed by [`VertexId`] in insertion order;
/// adjacency lists refer to neighbors by id. Insertion is idempotent for both
/// vertices and edges. Structural queries (components, cut sets, diameters)
/// are computed on first use and cached until the graph changes.
#[derive(Debug)]
pub struct Graph {
    /// Configuration.
    config: GraphConfig,

    /// Graph name.
    name: Arc<str>,

    /// Vertex records indexed by VertexId.
    vertices: Vec<Vertex>,

    /// Vertex name to id mapping.
    index: FastHashMap<Arc<str>, VertexId>,

    /// Cached analysis results.
    analysis: Analysis,
}

impl Graph {
    /// Creates an empty graph with default configuration.
    ///
    /// Nothing is allocated until the first vertex is inserted.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self::empty(name.into(), GraphConfig::default())
    }

    /// Creates an empty graph with custom configuration, reserving the
    /// initial vertex table up front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the vertex table or the name
    /// index cannot hold `initial_vertex_capacity` entries.
    pub fn with_config(name: impl Into<Arc<str>>, config: GraphConfig) -> Result<Self> {
        let capacity = config.initial_vertex_capacity;
        let mut graph = Self::empty(name.into(), config);
        graph.reserve_vertices(capacity)?;
        Ok(graph)
    }

    fn empty(name: Arc<str>, config: GraphConfig) -> Self {
        Self {
            name,
            vertices: Vec::new(),
            index: new_map(),
            analysis: Analysis::default(),
            config,
        }
    }

    /// Returns the graph name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the store configuration.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // === Vertex Operations ===

    /// Inserts a vertex, returning its id.
    ///
    /// If a vertex with this name already exists its id is returned and the
    /// graph is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the vertex table cannot grow and
    /// [`Error::TooManyVertices`] if the id space is exhausted.
    pub fn insert_vertex(&mut self, name: &str) -> Result<VertexId> {
        if let Some(&id) = self.index.get(name) {
            return Ok(id);
        }

        let id = VertexId::from_index(self.vertices.len())
            .ok_or(Error::TooManyVertices(self.vertices.len()))?;

        let additional = if self.vertices.capacity() == 0 {
            self.config.initial_vertex_capacity.max(1)
        } else {
            1
        };
        self.reserve_vertices(additional)?;

        let name: Arc<str> = Arc::from(name);
        let vertex = Vertex::new(Arc::clone(&name), self.config.initial_neighbor_capacity)?;
        self.vertices.push(vertex);
        self.index.insert(name, id);
        self.invalidate();

        trace!(vertex = %id, "inserted vertex");
        Ok(id)
    }

    /// Returns the id of the vertex with the given name.
    #[must_use]
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// Returns the vertex with the given id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Returns the name of the vertex with the given id.
    #[must_use]
    pub fn vertex_name(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(Vertex::name)
    }

    /// Shared handle to a vertex name, for results that outlive the borrow.
    pub(crate) fn name_handle(&self, id: VertexId) -> &Arc<str> {
        self.vertices[id.index()].name_arc()
    }

    /// Returns an iterator over all vertices in id order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i as u32), v))
    }

    /// Returns an iterator over all vertex ids.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        (0..self.vertices.len() as u32).map(VertexId::new)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // === Edge Operations ===

    /// Inserts an undirected edge between two named vertices.
    ///
    /// Missing endpoints are created. Returns `false` if the edge already
    /// existed, in which case nothing changes (the original weight is kept).
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelfLoop`] if both names are equal, or an allocation
    /// error if a table cannot grow. A failed insertion never leaves a
    /// one-sided edge behind.
    pub fn insert_edge(&mut self, a: &str, b: &str, weight: Weight) -> Result<bool> {
        if a == b {
            return Err(Error::SelfLoop(a.to_string()));
        }

        let ia = self.insert_vertex(a)?;
        let ib = self.insert_vertex(b)?;

        // Adjacency is symmetric, so one side is enough.
        if self.vertices[ia.index()].neighbor(ib).is_some() {
            return Ok(false);
        }

        self.vertices[ia.index()].reserve_neighbor()?;
        self.vertices[ib.index()].reserve_neighbor()?;
        self.vertices[ia.index()].push_neighbor(Neighbor::new(ib, weight));
        self.vertices[ib.index()].push_neighbor(Neighbor::new(ia, weight));
        self.invalidate();

        trace!(a = %ia, b = %ib, weight, "inserted edge");
        Ok(true)
    }

    /// Inserts an undirected edge with the default weight.
    ///
    /// # Errors
    ///
    /// See [`Graph::insert_edge`].
    pub fn insert_unit_edge(&mut self, a: &str, b: &str) -> Result<bool> {
        self.insert_edge(a, b, DEFAULT_WEIGHT)
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
    }

    /// Returns `true` if the two named vertices are adjacent.
    #[must_use]
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Returns the weight of the edge between two named vertices.
    #[must_use]
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<Weight> {
        let ia = self.vertex_id(a)?;
        let ib = self.vertex_id(b)?;
        self.vertices[ia.index()].neighbor(ib).map(|n| n.weight)
    }

    // === Traversal ===

    /// Returns the adjacency list of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, id: VertexId) -> &[Neighbor] {
        self.vertices[id.index()].neighbors()
    }

    /// Returns the number of neighbors of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    #[must_use]
    pub fn degree(&self, id: VertexId) -> usize {
        self.vertices[id.index()].degree()
    }

    // === Analysis ===

    /// Returns the component labelling, computing it on first use.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the traversal queue cannot grow.
    pub fn components(&self) -> Result<&ComponentLabels> {
        get_or_try_init(&self.analysis.components, || {
            let labels = label_components(self)?;
            debug!(graph = %self.name, components = labels.count(), "labelled components");
            Ok(labels)
        })
    }

    /// Returns the number of connected components.
    ///
    /// # Errors
    ///
    /// See [`Graph::components`].
    pub fn component_count(&self) -> Result<usize> {
        self.components().map(ComponentLabels::count)
    }

    /// Returns `true` if the vertices can be split into two sides with every
    /// edge crossing between them.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the traversal queue cannot grow.
    pub fn is_bipartite(&self) -> Result<bool> {
        is_bipartite(self)
    }

    /// Returns the articulation points and bridges, computing them on first use.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the search stack cannot grow.
    pub fn cut_sets(&self) -> Result<&CutSets> {
        get_or_try_init(&self.analysis.cuts, || {
            let cuts = cut_sets(self)?;
            debug!(
                graph = %self.name,
                articulation_points = cuts.articulation_points.len(),
                bridges = cuts.bridges.len(),
                "computed cut sets"
            );
            Ok(cuts)
        })
    }

    /// Returns the names of all articulation points in lexicographic order.
    ///
    /// # Errors
    ///
    /// See [`Graph::cut_sets`].
    pub fn articulation_points(&self) -> Result<&[Arc<str>]> {
        self.cut_sets().map(|c| c.articulation_points.as_slice())
    }

    /// Returns all bridges, sorted by first then second endpoint name.
    ///
    /// # Errors
    ///
    /// See [`Graph::cut_sets`].
    pub fn bridges(&self) -> Result<&[Bridge]> {
        self.cut_sets().map(|c| c.bridges.as_slice())
    }

    /// Returns the diameter of every component in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the priority queue cannot grow.
    pub fn diameters(&self) -> Result<&[Distance]> {
        get_or_try_init(&self.analysis.diameters, || {
            let labels = self.components()?;
            let diameters = component_diameters(self, labels)?;
            debug!(graph = %self.name, diameters = ?diameters, "computed diameters");
            Ok(diameters)
        })
        .map(Vec::as_slice)
    }

    /// Returns shortest-path distances from `source` to every vertex of its
    /// component.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the priority queue cannot grow.
    ///
    /// # Panics
    ///
    /// Panics if `source` does not belong to this graph.
    pub fn shortest_distances(&self, source: VertexId) -> Result<DistanceMap> {
        dijkstra(self, self.components()?, source)
    }

    /// Computes and caches every structural property.
    ///
    /// # Errors
    ///
    /// Returns the first allocation error encountered.
    pub fn analyze(&self) -> Result<()> {
        self.cut_sets()?;
        self.diameters()?;
        Ok(())
    }

    /// Returns `true` if all cached results have been computed.
    #[must_use]
    pub fn is_analyzed(&self) -> bool {
        self.analysis.components.get().is_some()
            && self.analysis.cuts.get().is_some()
            && self.analysis.diameters.get().is_some()
    }

    // === Internal Helpers ===

    fn reserve_vertices(&mut self, additional: usize) -> Result<()> {
        self.vertices
            .try_reserve(additional)
            .map_err(|_| Error::allocation("vertex table", additional))?;
        self.index
            .try_reserve(additional)
            .map_err(|_| Error::allocation("vertex name index", additional))
    }

    fn invalidate(&mut self) {
        if self.analysis.components.get().is_some()
            || self.analysis.cuts.get().is_some()
            || self.analysis.diameters.get().is_some()
        {
            debug!(graph = %self.name, "graph changed, dropping cached analysis");
            self.analysis = Analysis::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(names: &[&str]) -> Graph {
        let mut g = Graph::new("path");
        for pair in names.windows(2) {
            g.insert_unit_edge(pair[0], pair[1]).unwrap();
        }
        g
    }

    #[test]
    fn test_insert_vertex_is_idempotent() {
        let mut g = Graph::new("g");

        let a = g.insert_vertex("a").unwrap();
        let b = g.insert_vertex("b").unwrap();
        assert_eq!(a, VertexId::new(0));
        assert_eq!(b, VertexId::new(1));

        assert_eq!(g.insert_vertex("a").unwrap(), a);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.vertex_name(b), Some("b"));
        assert_eq!(g.vertex_id("b"), Some(b));
        assert_eq!(g.vertex_id("zz"), None);
    }

    #[test]
    fn test_insert_edge_creates_endpoints() {
        let mut g = Graph::new("g");

        assert!(g.insert_edge("x", "y", 5).unwrap());
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge_weight("x", "y"), Some(5));
        assert_eq!(g.edge_weight("y", "x"), Some(5));
    }

    #[test]
    fn test_insert_edge_is_idempotent() {
        let mut g = Graph::new("g");
        g.insert_edge("a", "b", 2).unwrap();

        assert!(!g.insert_edge("a", "b", 9).unwrap());
        assert!(!g.insert_edge("b", "a", 9).unwrap());

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(g.vertex_id("a").unwrap()), 1);
        assert_eq!(g.degree(g.vertex_id("b").unwrap()), 1);
        assert_eq!(g.edge_weight("a", "b"), Some(2));
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut g = Graph::new("g");
        let err = g.insert_edge("a", "a", 1).unwrap_err();
        assert!(matches!(err, Error::SelfLoop(ref name) if name == "a"));
        assert_eq!(g.vertex_count(), 0);
    }

    #[test]
    fn test_edge_count_matches_adjacency() {
        let mut g = Graph::new("g");
        g.insert_unit_edge("a", "b").unwrap();
        g.insert_unit_edge("b", "c").unwrap();
        g.insert_unit_edge("c", "a").unwrap();
        g.insert_vertex("lonely").unwrap();

        let half_edges: usize = g.vertices().map(|(_, v)| v.degree()).sum();
        assert_eq!(g.edge_count(), half_edges / 2);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_neighbors_in_insertion_order() {
        let mut g = Graph::new("g");
        g.insert_unit_edge("hub", "c").unwrap();
        g.insert_unit_edge("hub", "a").unwrap();
        g.insert_unit_edge("hub", "b").unwrap();

        let hub = g.vertex_id("hub").unwrap();
        let names: Vec<&str> = g
            .neighbors(hub)
            .iter()
            .map(|n| g.vertex_name(n.target).unwrap())
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_path_analysis() {
        let g = path(&["A", "B", "C", "D"]);

        assert_eq!(g.component_count().unwrap(), 1);
        assert!(g.is_bipartite().unwrap());

        let points: Vec<&str> = g.articulation_points().unwrap().iter().map(|s| &**s).collect();
        assert_eq!(points, vec!["B", "C"]);
        assert_eq!(g.bridges().unwrap().len(), 3);
        assert_eq!(g.diameters().unwrap(), &[3]);
    }

    #[test]
    fn test_analysis_is_cached() {
        let g = path(&["a", "b", "c"]);
        assert!(!g.is_analyzed());

        g.analyze().unwrap();
        assert!(g.is_analyzed());

        let first = g.articulation_points().unwrap().as_ptr();
        let second = g.articulation_points().unwrap().as_ptr();
        assert_eq!(first, second);
        assert_eq!(g.component_count().unwrap(), g.component_count().unwrap());
    }

    #[test]
    fn test_mutation_drops_cache() {
        let mut g = path(&["a", "b", "c"]);
        assert_eq!(g.articulation_points().unwrap().len(), 1);

        g.insert_unit_edge("c", "a").unwrap();
        assert!(!g.is_analyzed());
        assert!(g.articulation_points().unwrap().is_empty());

        // A duplicate edge keeps the cache.
        g.analyze().unwrap();
        g.insert_unit_edge("a", "c").unwrap();
        assert!(g.is_analyzed());
    }

    #[test]
    fn test_shortest_distances() {
        let mut g = Graph::new("g");
        g.insert_edge("a", "b", 4).unwrap();
        g.insert_edge("b", "c", 1).unwrap();
        g.insert_edge("a", "c", 2).unwrap();
        g.insert_vertex("other").unwrap();

        let a = g.vertex_id("a").unwrap();
        let dist = g.shortest_distances(a).unwrap();
        assert_eq!(dist.distance(g.vertex_id("b").unwrap()), Some(3));
        assert_eq!(dist.distance(g.vertex_id("c").unwrap()), Some(2));
        assert_eq!(dist.distance(g.vertex_id("other").unwrap()), None);
        assert_eq!(dist.eccentricity(), 3);
    }

    #[test]
    fn test_custom_config() {
        let config = GraphConfig::default()
            .with_vertex_capacity(2)
            .with_neighbor_capacity(8);
        let mut g = Graph::with_config("small", config).unwrap();
        for i in 0..10 {
            g.insert_vertex(&i.to_string()).unwrap();
        }
        assert_eq!(g.vertex_count(), 10);
        assert_eq!(g.config().initial_neighbor_capacity, 8);
    }

    #[test]
    fn test_oversized_config_reports_allocation_failure() {
        let config = GraphConfig::default().with_vertex_capacity(usize::MAX / 8);
        let err = Graph::with_config("big", config).unwrap_err();
        assert!(matches!(
            err,
            Error::AllocationFailed {
                what: "vertex table",
                ..
            }
        ));
    }

    #[test]
    fn test_first_insert_reserves_initial_capacity() {
        let mut g = Graph::new("g");
        g.insert_vertex("a").unwrap();
        assert!(g.vertices.capacity() >= GraphConfig::default().initial_vertex_capacity);
    }
}
