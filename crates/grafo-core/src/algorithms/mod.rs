//! Graph algorithms for Grafo.
//!
//! Every algorithm works on a [`Graph`](crate::graph::Graph) and keeps its
//! scratch state (visit marks, depths, low-links, distances) in tables local
//! to the run, so the graph itself is never mutated by an analysis.
//!
//! ## Algorithm Categories
//!
//! - [`components`](label_components) - Connected component labelling
//! - [`bipartite`](is_bipartite) - Two-colouring by BFS depth parity
//! - [`structure`](cut_sets) - Articulation points and bridges
//! - [`shortest_path`](dijkstra) - Dijkstra within a component
//! - [`diameter`](component_diameters) - Per-component weighted diameters
//!
//! ## Usage
//!
//! ```
//! use grafo_core::algorithms::{BridgesAlgorithm, GraphAlgorithm};
//! use grafo_core::graph::Graph;
//!
//! let mut graph = Graph::new("path");
//! graph.insert_unit_edge("a", "b").unwrap();
//! graph.insert_unit_edge("b", "c").unwrap();
//!
//! let bridges = BridgesAlgorithm.run(&graph).unwrap();
//! assert_eq!(bridges.len(), 2);
//! ```

mod bipartite;
mod components;
mod diameter;
mod heap;
mod queue;
mod shortest_path;
mod structure;
mod traits;

// Core traits
pub use traits::{DistanceMap, GraphAlgorithm};

// Work queues
pub use heap::MinHeap;
pub use queue::TraversalQueue;

// Component algorithms
pub use components::{
    ComponentLabels, ConnectedComponentsAlgorithm, connected_component_count, label_components,
};

// Bipartiteness
pub use bipartite::{BipartitenessAlgorithm, is_bipartite};

// Structural algorithms
pub use structure::{
    ArticulationPointsAlgorithm, Bridge, BridgesAlgorithm, CutSets, articulation_points, bridges,
    cut_sets,
};

// Shortest paths and diameters
pub use diameter::{DiameterAlgorithm, component_diameters, diameters_by_component};
pub use shortest_path::{EccentricityEngine, dijkstra};
