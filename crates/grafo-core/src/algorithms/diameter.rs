//! Component diameters by repeated Dijkstra.

use super::components::{ComponentLabels, label_components};
use super::shortest_path::EccentricityEngine;
use super::traits::GraphAlgorithm;
use crate::graph::Graph;
use grafo_common::types::{ComponentId, Distance};
use grafo_common::utils::error::{Error, Result};
use tracing::trace;

/// Returns the diameter of each component, in component order.
///
/// The diameter of a component is the largest eccentricity among its
/// vertices, so Dijkstra runs once from every vertex. An isolated vertex has
/// diameter 0.
///
/// # Errors
///
/// Returns an allocation error if a work table cannot grow.
pub fn diameters_by_component(
    graph: &Graph,
    labels: &ComponentLabels,
) -> Result<Vec<(ComponentId, Distance)>> {
    let mut engine = EccentricityEngine::new(graph)?;
    let mut out = Vec::new();
    out.try_reserve_exact(labels.count())
        .map_err(|_| Error::allocation("diameter list", labels.count()))?;

    for (component, members) in labels.iter() {
        let mut diameter = 0;
        for &v in members {
            diameter = diameter.max(engine.run(v, members)?);
        }
        trace!(%component, size = members.len(), diameter, "component diameter");
        out.push((component, diameter));
    }

    Ok(out)
}

/// Returns one diameter per component, sorted ascending.
///
/// # Errors
///
/// See [`diameters_by_component`].
pub fn component_diameters(graph: &Graph, labels: &ComponentLabels) -> Result<Vec<Distance>> {
    let mut diameters: Vec<Distance> = diameters_by_component(graph, labels)?
        .into_iter()
        .map(|(_, d)| d)
        .collect();
    diameters.sort_unstable();
    Ok(diameters)
}

/// Component diameters as a [`GraphAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DiameterAlgorithm;

impl GraphAlgorithm for DiameterAlgorithm {
    type Output = Vec<Distance>;

    fn name(&self) -> &'static str {
        "diameters"
    }

    fn description(&self) -> &'static str {
        "Compute the weighted diameter of every connected component"
    }

    fn run(&self, graph: &Graph) -> Result<Self::Output> {
        let labels = label_components(graph)?;
        component_diameters(graph, &labels)
    }
}
