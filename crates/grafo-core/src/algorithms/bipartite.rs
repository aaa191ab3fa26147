//! Bipartiteness check by breadth-first 2-coloring.

use super::queue::TraversalQueue;
use super::traits::GraphAlgorithm;
use crate::graph::Graph;
use grafo_common::utils::error::{Error, Result};

const UNVISITED: u32 = u32::MAX;

/// Returns `true` if the graph is bipartite.
///
/// Each vertex gets its BFS depth from the seed of its component. An edge
/// between two visited vertices whose depths have the same parity closes an
/// odd cycle, and the search stops immediately. One seed per component
/// suffices: reseeding inside an already-checked component revisits the same
/// edges with the same parities.
///
/// # Errors
///
/// Returns an allocation error if the queue or the depth table cannot grow.
pub fn is_bipartite(graph: &Graph) -> Result<bool> {
    let n = graph.vertex_count();
    let mut depth: Vec<u32> = Vec::new();
    depth
        .try_reserve_exact(n)
        .map_err(|_| Error::allocation("depth table", n))?;
    depth.resize(n, UNVISITED);

    let mut queue = TraversalQueue::new();

    for seed in graph.vertex_ids() {
        if depth[seed.index()] != UNVISITED {
            continue;
        }
        depth[seed.index()] = 0;
        queue.push(seed)?;

        while let Some(v) = queue.pop() {
            let d = depth[v.index()];
            for neighbor in graph.neighbors(v) {
                let w = neighbor.target.index();
                if depth[w] == UNVISITED {
                    depth[w] = d + 1;
                    queue.push(neighbor.target)?;
                } else if depth[w] % 2 == d % 2 {
                    return Ok(false);
                }
            }
        }
    }

    Ok(true)
}

/// Bipartiteness as a [`GraphAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BipartitenessAlgorithm;

impl GraphAlgorithm for BipartitenessAlgorithm {
    type Output = bool;

    fn name(&self) -> &'static str {
        "bipartite"
    }

    fn description(&self) -> &'static str {
        "Check whether the graph admits a proper 2-coloring"
    }

    fn run(&self, graph: &Graph) -> Result<Self::Output> {
        is_bipartite(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> Graph {
        let mut g = Graph::new(format!("c{n}"));
        for i in 0..n {
            g.insert_unit_edge(&i.to_string(), &((i + 1) % n).to_string())
                .unwrap();
        }
        g
    }

    #[test]
    fn test_empty_and_isolated() {
        assert!(is_bipartite(&Graph::new("empty")).unwrap());

        let mut g = Graph::new("dots");
        g.insert_vertex("a").unwrap();
        g.insert_vertex("b").unwrap();
        assert!(is_bipartite(&g).unwrap());
    }

    #[test]
    fn test_even_and_odd_cycles() {
        assert!(is_bipartite(&cycle(4)).unwrap());
        assert!(is_bipartite(&cycle(6)).unwrap());
        assert!(!is_bipartite(&cycle(3)).unwrap());
        assert!(!is_bipartite(&cycle(5)).unwrap());
    }

    #[test]
    fn test_odd_cycle_in_later_component() {
        let mut g = Graph::new("g");
        g.insert_unit_edge("a", "b").unwrap();
        g.insert_unit_edge("x", "y").unwrap();
        g.insert_unit_edge("y", "z").unwrap();
        g.insert_unit_edge("z", "x").unwrap();
        assert!(!is_bipartite(&g).unwrap());
    }

    #[test]
    fn test_complete_bipartite() {
        let mut g = Graph::new("k33");
        for l in ["l1", "l2", "l3"] {
            for r in ["r1", "r2", "r3"] {
                g.insert_unit_edge(l, r).unwrap();
            }
        }
        assert!(BipartitenessAlgorithm.run(&g).unwrap());

        g.insert_unit_edge("l1", "l2").unwrap();
        assert!(!BipartitenessAlgorithm.run(&g).unwrap());
    }
}
