//! # Grafo
//!
//! Structural analysis of undirected weighted graphs.
//!
//! Start with [`Graph`] to build a graph by vertex name, or with
//! [`read_graph_from_path`] to load one from the line-oriented text format.
//! Every analysis is computed on first use and cached on the graph:
//!
//! | Query | Result |
//! | ----- | ------ |
//! | [`Graph::component_count`] | number of connected components |
//! | [`Graph::is_bipartite`] | whether the graph is two-colourable |
//! | [`Graph::articulation_points`] | sorted cut vertices |
//! | [`Graph::bridges`] | sorted cut edges |
//! | [`Graph::diameters`] | weighted diameter of each component, ascending |
//!
//! ## Quick Start
//!
//! ```rust
//! use grafo::{Graph, report};
//!
//! let mut graph = Graph::new("path");
//! graph.insert_unit_edge("A", "B")?;
//! graph.insert_unit_edge("B", "C")?;
//! graph.insert_unit_edge("C", "D")?;
//!
//! assert_eq!(report::render_names(graph.articulation_points()?), "B C");
//! assert_eq!(report::render_bridges(graph.bridges()?), "A B B C C D");
//! assert_eq!(report::render_diameters(graph.diameters()?), "3");
//! # Ok::<(), grafo::Error>(())
//! ```

// Re-export the graph store and its configuration
pub use grafo_core::graph::{Graph, GraphConfig, Neighbor, Vertex};

// Re-export analysis results
pub use grafo_core::algorithms::{Bridge, ComponentLabels, CutSets, DistanceMap, GraphAlgorithm};
pub use grafo_core::report::{self, GraphReport};

// Re-export core types - you'll need these for working with ids and weights
pub use grafo_common::types::{ComponentId, DEFAULT_WEIGHT, Distance, VertexId, Weight};
pub use grafo_common::utils::error::{Error, ParseError, ParseErrorKind, Result};

// Re-export the reader
pub use grafo_adapters::reader::{
    GraphReader, ReaderConfig, read_graph, read_graph_from_path, read_graph_from_str,
};

/// Lower-level building blocks, for running analyses without the cache.
pub mod algorithms {
    pub use grafo_core::algorithms::*;
}
