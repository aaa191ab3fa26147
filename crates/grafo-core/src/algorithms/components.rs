//! Connected component labelling.

use super::queue::TraversalQueue;
use super::traits::GraphAlgorithm;
use crate::graph::Graph;
use grafo_common::types::{ComponentId, VertexId};
use grafo_common::utils::error::{Error, Result};
use tracing::trace;

/// Component membership of every vertex.
///
/// Components are numbered `1..=count()` in the order their lowest-indexed
/// vertex appears in the graph.
#[derive(Debug, Clone, Default)]
pub struct ComponentLabels {
    /// Component of each vertex, indexed by vertex id.
    component_of: Vec<ComponentId>,
    /// Members of each component in discovery order, indexed by `ComponentId::slot`.
    members: Vec<Vec<VertexId>>,
}

impl ComponentLabels {
    /// Returns the number of components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Returns the component of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` was not part of the labelled graph.
    #[must_use]
    pub fn component_of(&self, vertex: VertexId) -> ComponentId {
        self.component_of[vertex.index()]
    }

    /// Returns the vertices of `component` in BFS discovery order.
    ///
    /// # Panics
    ///
    /// Panics if `component` is out of range.
    #[must_use]
    pub fn members(&self, component: ComponentId) -> &[VertexId] {
        &self.members[component.slot()]
    }

    /// Iterates over `(component, members)` in ascending component order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, &[VertexId])> + '_ {
        self.members
            .iter()
            .enumerate()
            .map(|(slot, m)| (ComponentId::new(slot as u32 + 1), m.as_slice()))
    }

    /// Returns the size of the largest component.
    #[must_use]
    pub fn largest(&self) -> usize {
        self.members.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Labels every vertex with its connected component.
///
/// Breadth-first search is seeded from each unlabelled vertex in id order.
/// Vertices are marked when enqueued, so each enters the queue once.
///
/// # Errors
///
/// Returns an allocation error if the queue or the label table cannot grow.
pub fn label_components(graph: &Graph) -> Result<ComponentLabels> {
    let n = graph.vertex_count();
    let mut component_of: Vec<Option<ComponentId>> = Vec::new();
    component_of
        .try_reserve_exact(n)
        .map_err(|_| Error::allocation("component table", n))?;
    component_of.resize(n, None);

    let mut members: Vec<Vec<VertexId>> = Vec::new();
    let mut queue = TraversalQueue::new();
    let mut next = ComponentId::FIRST;

    for seed in graph.vertex_ids() {
        if component_of[seed.index()].is_some() {
            continue;
        }

        let current = next;
        next = next.next();
        component_of[seed.index()] = Some(current);
        queue.push(seed)?;

        let mut found = Vec::new();
        while let Some(v) = queue.pop() {
            found
                .try_reserve(1)
                .map_err(|_| Error::allocation("component member list", 1))?;
            found.push(v);

            for neighbor in graph.neighbors(v) {
                let slot = &mut component_of[neighbor.target.index()];
                if slot.is_none() {
                    *slot = Some(current);
                    queue.push(neighbor.target)?;
                }
            }
        }

        trace!(component = %current, size = found.len(), "labelled component");
        members
            .try_reserve(1)
            .map_err(|_| Error::allocation("component list", 1))?;
        members.push(found);
    }

    let component_of = component_of
        .into_iter()
        .map(|c| c.ok_or_else(|| Error::Internal("vertex left unlabelled".to_string())))
        .collect::<Result<Vec<_>>>()?;

    Ok(ComponentLabels {
        component_of,
        members,
    })
}

/// Returns the number of connected components without caching.
///
/// # Errors
///
/// See [`label_components`].
pub fn connected_component_count(graph: &Graph) -> Result<usize> {
    label_components(graph).map(|labels| labels.count())
}

/// Connected components as a [`GraphAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectedComponentsAlgorithm;

impl GraphAlgorithm for ConnectedComponentsAlgorithm {
    type Output = ComponentLabels;

    fn name(&self) -> &'static str {
        "connected_components"
    }

    fn description(&self) -> &'static str {
        "Label every vertex with its connected component"
    }

    fn run(&self, graph: &Graph) -> Result<Self::Output> {
        label_components(graph)
    }
}
