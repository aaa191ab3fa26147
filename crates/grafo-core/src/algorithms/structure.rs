//! Biconnectivity: articulation points and bridges.
//!
//! Depth-first search assigns every vertex its depth in the DFS tree
//! (`level`) and a low-link: the smallest level reachable from the vertex's
//! subtree through at most one back edge. For a tree edge `(p, c)`:
//!
//! - `low[c] >= level[p]` and `p` is not a root: `p` is an articulation point;
//! - `low[c] > level[p]`: the edge is a bridge.
//!
//! A root is an articulation point iff it has more than one DFS child.
//!
//! The search keeps its own stack of `(vertex, next neighbor)` frames rather
//! than recursing, so path-like graphs of any length are fine.

use super::traits::GraphAlgorithm;
use crate::graph::Graph;
use grafo_common::types::VertexId;
use grafo_common::utils::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A bridge, stored as its two endpoint names in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Bridge {
    first: Arc<str>,
    second: Arc<str>,
}

impl Bridge {
    /// Creates a bridge between two vertices, ordering the names.
    #[must_use]
    pub fn new(a: Arc<str>, b: Arc<str>) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// Returns the lexicographically smaller endpoint.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns the lexicographically larger endpoint.
    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }
}

impl fmt::Display for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

/// Articulation points and bridges of a graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CutSets {
    /// Articulation point names, sorted, without duplicates.
    pub articulation_points: Vec<Arc<str>>,
    /// Bridges sorted by first then second endpoint.
    pub bridges: Vec<Bridge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    cursor: usize,
}

/// Per-vertex scratch state for one search.
struct LowLink<'g> {
    graph: &'g Graph,
    state: Vec<VisitState>,
    level: Vec<u32>,
    low: Vec<u32>,
    parent: Vec<VertexId>,
    children: Vec<u32>,
    recorded: Vec<bool>,
    stack: Vec<Frame>,
    articulation: Vec<VertexId>,
    bridges: Vec<(VertexId, VertexId)>,
}

impl<'g> LowLink<'g> {
    fn new(graph: &'g Graph) -> Result<Self> {
        let n = graph.vertex_count();
        Ok(Self {
            graph,
            state: filled(n, VisitState::Unvisited)?,
            level: filled(n, 0)?,
            low: filled(n, 0)?,
            parent: filled(n, VertexId::INVALID)?,
            children: filled(n, 0)?,
            recorded: filled(n, false)?,
            stack: Vec::new(),
            articulation: Vec::new(),
            bridges: Vec::new(),
        })
    }

    fn run(mut self) -> Result<CutSets> {
        for root in self.graph.vertex_ids() {
            if self.state[root.index()] == VisitState::Unvisited {
                self.search_from(root)?;
            }
        }
        Ok(self.into_cut_sets())
    }

    fn search_from(&mut self, root: VertexId) -> Result<()> {
        let r = root.index();
        self.level[r] = 0;
        self.low[r] = 0;
        self.parent[r] = VertexId::INVALID;
        self.state[r] = VisitState::InProgress;
        self.push_frame(root)?;

        while let Some(frame) = self.stack.last_mut() {
            let v = frame.vertex;
            let neighbors = self.graph.neighbors(v);

            if frame.cursor < neighbors.len() {
                let w = neighbors[frame.cursor].target;
                frame.cursor += 1;
                self.visit_edge(v, w)?;
                continue;
            }

            self.stack.pop();
            self.finish(v);
        }

        Ok(())
    }

    /// Handles the edge `v -> w` while `v` is on top of the stack.
    fn visit_edge(&mut self, v: VertexId, w: VertexId) -> Result<()> {
        let (vi, wi) = (v.index(), w.index());
        match self.state[wi] {
            VisitState::InProgress => {
                // Back edge to an ancestor other than the tree parent.
                if w != self.parent[vi] && self.level[wi] < self.low[vi] {
                    self.low[vi] = self.level[wi];
                }
            }
            VisitState::Unvisited => {
                self.parent[wi] = v;
                self.level[wi] = self.level[vi] + 1;
                self.low[wi] = self.level[wi];
                self.state[wi] = VisitState::InProgress;
                self.children[vi] += 1;
                self.push_frame(w)?;
            }
            VisitState::Done => {}
        }
        Ok(())
    }

    /// Closes `v` after all its neighbors were handled and reports the tree
    /// edge to its parent.
    fn finish(&mut self, v: VertexId) {
        let vi = v.index();
        self.state[vi] = VisitState::Done;

        let p = self.parent[vi];
        if !p.is_valid() {
            if self.children[vi] > 1 {
                self.record_articulation(v);
            }
            return;
        }

        let pi = p.index();
        if self.parent[pi].is_valid() && self.low[vi] >= self.level[pi] {
            self.record_articulation(p);
        }
        if self.low[vi] > self.level[pi] {
            self.bridges.push((p, v));
        }
        if self.low[vi] < self.low[pi] {
            self.low[pi] = self.low[vi];
        }
    }

    fn record_articulation(&mut self, v: VertexId) {
        if !self.recorded[v.index()] {
            self.recorded[v.index()] = true;
            self.articulation.push(v);
        }
    }

    fn push_frame(&mut self, vertex: VertexId) -> Result<()> {
        self.stack
            .try_reserve(1)
            .map_err(|_| Error::allocation("search stack", 1))?;
        self.stack.push(Frame { vertex, cursor: 0 });
        Ok(())
    }

    fn into_cut_sets(self) -> CutSets {
        let graph = self.graph;
        let name = |v: VertexId| Arc::clone(graph.name_handle(v));

        let mut articulation_points: Vec<Arc<str>> =
            self.articulation.into_iter().map(name).collect();
        articulation_points.sort();
        articulation_points.dedup();

        let mut bridges: Vec<Bridge> = self
            .bridges
            .into_iter()
            .map(|(a, b)| Bridge::new(name(a), name(b)))
            .collect();
        bridges.sort();
        bridges.dedup();

        CutSets {
            articulation_points,
            bridges,
        }
    }
}

fn filled<T: Clone>(n: usize, value: T) -> Result<Vec<T>> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(n)
        .map_err(|_| Error::allocation("search state table", n))?;
    table.resize(n, value);
    Ok(table)
}

/// Computes articulation points and bridges in one depth-first pass.
///
/// # Errors
///
/// Returns an allocation error if the scratch tables or the search stack
/// cannot grow.
pub fn cut_sets(graph: &Graph) -> Result<CutSets> {
    LowLink::new(graph)?.run()
}

/// Returns the sorted names of all articulation points.
///
/// # Errors
///
/// See [`cut_sets`].
pub fn articulation_points(graph: &Graph) -> Result<Vec<Arc<str>>> {
    cut_sets(graph).map(|c| c.articulation_points)
}

/// Returns all bridges, sorted.
///
/// # Errors
///
/// See [`cut_sets`].
pub fn bridges(graph: &Graph) -> Result<Vec<Bridge>> {
    cut_sets(graph).map(|c| c.bridges)
}

/// Articulation points as a [`GraphAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticulationPointsAlgorithm;

impl GraphAlgorithm for ArticulationPointsAlgorithm {
    type Output = Vec<Arc<str>>;

    fn name(&self) -> &'static str {
        "articulation_points"
    }

    fn description(&self) -> &'static str {
        "Find vertices whose removal disconnects their component"
    }

    fn run(&self, graph: &Graph) -> Result<Self::Output> {
        articulation_points(graph)
    }
}

/// Bridges as a [`GraphAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BridgesAlgorithm;

impl GraphAlgorithm for BridgesAlgorithm {
    type Output = Vec<Bridge>;

    fn name(&self) -> &'static str {
        "bridges"
    }

    fn description(&self) -> &'static str {
        "Find edges whose removal disconnects their component"
    }

    fn run(&self, graph: &Graph) -> Result<Self::Output> {
        bridges(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &str)]) -> Graph {
        let mut g = Graph::new("test");
        for &(a, b) in edges {
            g.insert_unit_edge(a, b).unwrap();
        }
        g
    }

    fn names(points: &[Arc<str>]) -> Vec<&str> {
        points.iter().map(|s| &**s).collect()
    }

    fn pairs(bridges: &[Bridge]) -> Vec<(&str, &str)> {
        bridges.iter().map(|b| (b.first(), b.second())).collect()
    }

    #[test]
    fn test_bridge_orders_endpoints() {
        let bridge = Bridge::new(Arc::from("z"), Arc::from("a"));
        assert_eq!(bridge.first(), "a");
        assert_eq!(bridge.second(), "z");
        assert_eq!(bridge.to_string(), "a z");
    }

    #[test]
    fn test_path_scenario() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "D")]);
        let cuts = cut_sets(&g).unwrap();

        assert_eq!(names(&cuts.articulation_points), vec!["B", "C"]);
        assert_eq!(
            pairs(&cuts.bridges),
            vec![("A", "B"), ("B", "C"), ("C", "D")]
        );
    }

    #[test]
    fn test_short_paths() {
        let g = graph(&[("a", "b")]);
        let cuts = cut_sets(&g).unwrap();
        assert!(cuts.articulation_points.is_empty());
        assert_eq!(pairs(&cuts.bridges), vec![("a", "b")]);

        let mut single = Graph::new("single");
        single.insert_vertex("a").unwrap();
        let cuts = cut_sets(&single).unwrap();
        assert!(cuts.articulation_points.is_empty());
        assert!(cuts.bridges.is_empty());
    }

    #[test]
    fn test_cycle_has_no_cuts() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("e", "a")]);
        let cuts = cut_sets(&g).unwrap();
        assert!(cuts.articulation_points.is_empty());
        assert!(cuts.bridges.is_empty());
    }

    #[test]
    fn test_star_center_is_root() {
        // The center is the first vertex, so it is a DFS root with many children.
        let g = graph(&[("c", "l1"), ("c", "l2"), ("c", "l3"), ("c", "l4")]);
        let cuts = cut_sets(&g).unwrap();
        assert_eq!(names(&cuts.articulation_points), vec!["c"]);
        assert_eq!(cuts.bridges.len(), 4);
    }

    #[test]
    fn test_star_center_is_not_root() {
        // The DFS starts at a leaf, so the center qualifies through the child rule
        // for several children and must still be recorded once.
        let g = graph(&[("l1", "c"), ("c", "l2"), ("c", "l3"), ("c", "l4")]);
        let cuts = cut_sets(&g).unwrap();
        assert_eq!(names(&cuts.articulation_points), vec!["c"]);
        assert_eq!(
            pairs(&cuts.bridges),
            vec![("c", "l1"), ("c", "l2"), ("c", "l3"), ("c", "l4")]
        );
    }

    #[test]
    fn test_bowtie() {
        // Two triangles sharing "m".
        let g = graph(&[
            ("a", "b"),
            ("b", "m"),
            ("m", "a"),
            ("m", "x"),
            ("x", "y"),
            ("y", "m"),
        ]);
        let cuts = cut_sets(&g).unwrap();
        assert_eq!(names(&cuts.articulation_points), vec!["m"]);
        assert!(cuts.bridges.is_empty());
    }

    #[test]
    fn test_triangle_with_tail() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d"), ("d", "e")]);
        let cuts = cut_sets(&g).unwrap();
        assert_eq!(names(&cuts.articulation_points), vec!["c", "d"]);
        assert_eq!(pairs(&cuts.bridges), vec![("c", "d"), ("d", "e")]);
    }

    #[test]
    fn test_disconnected_components() {
        let mut g = graph(&[("a", "b"), ("b", "c"), ("x", "y"), ("y", "z"), ("z", "x")]);
        g.insert_vertex("solo").unwrap();
        let cuts = cut_sets(&g).unwrap();
        assert_eq!(names(&cuts.articulation_points), vec!["b"]);
        assert_eq!(pairs(&cuts.bridges), vec![("a", "b"), ("b", "c")]);
    }

    #[test]
    fn test_long_path_does_not_overflow() {
        let n = 100_000;
        let mut g = Graph::new("long");
        for i in 0..n - 1 {
            g.insert_unit_edge(&format!("v{i:06}"), &format!("v{:06}", i + 1))
                .unwrap();
        }
        let cuts = cut_sets(&g).unwrap();
        assert_eq!(cuts.articulation_points.len(), n - 2);
        assert_eq!(cuts.bridges.len(), n - 1);
    }

    #[test]
    fn test_algorithm_wrappers() {
        let g = graph(&[("a", "b"), ("b", "c")]);
        assert_eq!(ArticulationPointsAlgorithm.run(&g).unwrap().len(), 1);
        assert_eq!(BridgesAlgorithm.run(&g).unwrap().len(), 2);
        assert_eq!(BridgesAlgorithm.name(), "bridges");
    }
}
