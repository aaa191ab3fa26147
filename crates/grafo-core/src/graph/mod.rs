//! Undirected weighted graph model.
//!
//! Vertices live in an arena indexed by [`VertexId`](grafo_common::types::VertexId)
//! and are looked up by name through a hash index. Each vertex owns its
//! neighbor list; an edge is stored once on each endpoint.

mod store;
mod vertex;

pub use store::{Graph, GraphConfig};
pub use vertex::{INLINE_NEIGHBORS, Neighbor, Vertex};
