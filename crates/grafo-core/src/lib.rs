//! # grafo-core
//!
//! Core layer for Grafo: the graph store and the structural analyses run on it.
//!
//! This crate depends only on `grafo-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Arena-backed undirected weighted graph with a name index
//! - [`algorithms`] - Components, bipartiteness, cut sets, shortest paths, diameters
//! - [`report`] - Summary of every analysis plus the plain-text renderings

pub mod algorithms;
pub mod graph;
pub mod report;

// Re-export commonly used types
pub use algorithms::{Bridge, ComponentLabels, CutSets, DistanceMap, GraphAlgorithm};
pub use graph::{Graph, GraphConfig, Neighbor, Vertex};
pub use report::GraphReport;
