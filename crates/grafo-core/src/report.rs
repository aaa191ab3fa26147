//! Analysis summary and plain-text rendering.
//!
//! The renderers produce the space-separated forms used by the text
//! interface: `"B C"` for articulation points, `"A B B C C D"` for bridges
//! and `"3"` for diameters. An empty list renders as an empty string.

use crate::algorithms::Bridge;
use crate::graph::Graph;
use grafo_common::types::Distance;
use grafo_common::utils::error::Result;
use serde::Serialize;
use std::fmt::Write as _;
use std::sync::Arc;

/// Joins vertex names with single spaces.
#[must_use]
pub fn render_names(names: &[Arc<str>]) -> String {
    names.join(" ")
}

/// Renders each bridge as its two endpoints, all separated by single spaces.
#[must_use]
pub fn render_bridges(bridges: &[Bridge]) -> String {
    let mut out = String::new();
    for bridge in bridges {
        if !out.is_empty() {
            out.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{bridge}");
    }
    out
}

/// Renders diameters as decimal integers separated by single spaces.
#[must_use]
pub fn render_diameters(diameters: &[Distance]) -> String {
    let mut out = String::new();
    for d in diameters {
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = write!(out, "{d}");
    }
    out
}

/// Text renderings of the list-valued results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedResults {
    /// Articulation points, e.g. `"B C"`.
    pub articulation_points: String,
    /// Bridges, e.g. `"A B B C"`.
    pub bridges: String,
    /// Diameters, e.g. `"2 5"`.
    pub diameters: String,
}

/// Every structural property of a graph in one serializable value.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    /// Graph name.
    pub name: Arc<str>,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
    /// Vertex count of the largest component.
    pub largest_component: usize,
    /// Whether the graph is two-colourable.
    pub bipartite: bool,
    /// Sorted articulation point names.
    pub articulation_points: Vec<Arc<str>>,
    /// Sorted bridges.
    pub bridges: Vec<Bridge>,
    /// Component diameters, ascending.
    pub diameters: Vec<Distance>,
    /// Text forms of the three lists.
    pub rendered: RenderedResults,
}

impl GraphReport {
    /// Builds a report, computing any analysis not yet cached on `graph`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an analysis.
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        let components = graph.components()?;
        let articulation_points = graph.articulation_points()?.to_vec();
        let bridges = graph.bridges()?.to_vec();
        let diameters = graph.diameters()?.to_vec();

        let rendered = RenderedResults {
            articulation_points: render_names(&articulation_points),
            bridges: render_bridges(&bridges),
            diameters: render_diameters(&diameters),
        };

        Ok(Self {
            name: Arc::from(graph.name()),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            component_count: components.count(),
            largest_component: components.largest(),
            bipartite: graph.is_bipartite()?,
            articulation_points,
            bridges,
            diameters,
            rendered,
        })
    }
}
