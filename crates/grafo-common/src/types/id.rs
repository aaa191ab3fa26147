//! Identifier types.

use serde::Serialize;
use std::fmt;

/// Index of a vertex inside its graph.
///
/// Vertex ids are dense: the n-th distinct vertex inserted into a graph gets
/// id `n - 1`, and ids never change for the lifetime of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Sentinel used for "no vertex" in scratch tables.
    pub const INVALID: Self = Self(u32::MAX);

    /// Creates a vertex id from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Creates a vertex id from a table index.
    ///
    /// Returns `None` if the index does not fit the id space.
    #[inline]
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .filter(|&raw| raw != u32::MAX)
            .map(Self)
    }

    /// Returns the raw id value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the id as an index into per-vertex tables.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` unless this is [`VertexId::INVALID`].
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Identifier of a connected component.
///
/// Components are numbered from 1 in the order their first vertex appears in
/// the vertex table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentId(u32);

impl ComponentId {
    /// The first component id handed out.
    pub const FIRST: Self = Self(1);

    /// Creates a component id from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the zero-based position of this component in per-component tables.
    #[inline]
    #[must_use]
    pub const fn slot(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns the id following this one.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
