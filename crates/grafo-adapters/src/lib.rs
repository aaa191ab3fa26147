//! # grafo-adapters
//!
//! Adapters layer for Grafo: turns external graph descriptions into a
//! [`Graph`](grafo_core::graph::Graph).
//!
//! ## Modules
//!
//! - [`reader`] - Line-oriented text format reader

pub mod reader;

pub use reader::{
    GraphReader, ReaderConfig, read_graph, read_graph_from_path, read_graph_from_str,
};
