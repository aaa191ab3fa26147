//! Core type definitions for Grafo.
//!
//! This module contains the fundamental types shared by the store, the
//! algorithms and the reader:
//! - Identifier types ([`VertexId`], [`ComponentId`])
//! - Edge and path metrics ([`Weight`], [`Distance`])

mod id;

pub use id::{ComponentId, VertexId};

/// Weight of an undirected edge. Negative weights are not representable.
pub type Weight = u32;

/// Length of a shortest path. Wide enough that summing `Weight`s never wraps
/// on graphs that fit in memory.
pub type Distance = u64;

/// Weight given to edges declared without one.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Tentative distance of a vertex that has not been reached yet.
pub const INFINITE_DISTANCE: Distance = Distance::MAX;
