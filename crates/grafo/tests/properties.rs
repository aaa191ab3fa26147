//! Property tests: every analysis against a brute-force reference.

use grafo::{Graph, Weight};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// A small random graph: vertex count plus deduplicated weighted edges.
#[derive(Debug, Clone)]
struct Sample {
    n: usize,
    edges: Vec<(usize, usize, Weight)>,
}

impl Sample {
    fn build(&self) -> Graph {
        let mut g = Graph::new("sample");
        for v in 0..self.n {
            g.insert_vertex(&name(v)).unwrap();
        }
        for &(a, b, w) in &self.edges {
            g.insert_edge(&name(a), &name(b), w).unwrap();
        }
        g
    }

    fn components(&self, skip_vertex: Option<usize>, skip_edge: Option<usize>) -> usize {
        let mut parent: Vec<usize> = (0..self.n).collect();
        fn find(parent: &mut [usize], mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }
        for (i, &(a, b, _)) in self.edges.iter().enumerate() {
            if Some(i) == skip_edge || Some(a) == skip_vertex || Some(b) == skip_vertex {
                continue;
            }
            let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
            parent[ra] = rb;
        }
        (0..self.n)
            .filter(|&v| Some(v) != skip_vertex)
            .filter(|&v| find(&mut parent, v) == v)
            .count()
    }

    fn two_colourable(&self) -> bool {
        (0u32..1 << self.n).any(|mask| {
            self.edges
                .iter()
                .all(|&(a, b, _)| (mask >> a) & 1 != (mask >> b) & 1)
        })
    }

    fn diameters(&self) -> Vec<u64> {
        const INF: u64 = u64::MAX / 4;
        let n = self.n;
        let mut d = vec![vec![INF; n]; n];
        for (v, row) in d.iter_mut().enumerate() {
            row[v] = 0;
        }
        for &(a, b, w) in &self.edges {
            let w = u64::from(w);
            d[a][b] = d[a][b].min(w);
            d[b][a] = d[b][a].min(w);
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if d[i][k] + d[k][j] < d[i][j] {
                        d[i][j] = d[i][k] + d[k][j];
                    }
                }
            }
        }

        // Group by smallest reachable vertex.
        let mut per_component: BTreeMap<usize, u64> = BTreeMap::new();
        for i in 0..n {
            let root = (0..n).find(|&j| d[i][j] < INF).unwrap_or(i);
            let ecc = d[i].iter().copied().filter(|&x| x < INF).max().unwrap_or(0);
            let entry = per_component.entry(root).or_insert(0);
            *entry = (*entry).max(ecc);
        }
        let mut out: Vec<u64> = per_component.into_values().collect();
        out.sort_unstable();
        out
    }
}

fn name(v: usize) -> String {
    format!("v{v:02}")
}

fn sample() -> impl Strategy<Value = Sample> {
    (1usize..=10).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0u32..20), 0..=(n * 2)).prop_map(move |raw| {
            let mut seen = std::collections::HashSet::new();
            let edges = raw
                .into_iter()
                .filter(|&(a, b, _)| a != b)
                .filter(|&(a, b, _)| seen.insert((a.min(b), a.max(b))))
                .collect();
            Sample { n, edges }
        })
    })
}

proptest! {
    #[test]
    fn test_edge_count_matches_adjacency(s in sample()) {
        let g = s.build();
        let degree_sum: usize = g.vertices().map(|(_, v)| v.degree()).sum();
        prop_assert_eq!(g.edge_count(), s.edges.len());
        prop_assert_eq!(g.edge_count() * 2, degree_sum);
    }

    #[test]
    fn test_component_count_matches_union_find(s in sample()) {
        let g = s.build();
        let expected = s.components(None, None);
        prop_assert_eq!(g.component_count().unwrap(), expected);
        prop_assert_eq!(g.component_count().unwrap(), expected);
    }

    #[test]
    fn test_bipartite_matches_brute_force(s in sample()) {
        prop_assert_eq!(s.build().is_bipartite().unwrap(), s.two_colourable());
    }

    #[test]
    fn test_articulation_points_match_removal(s in sample()) {
        let g = s.build();
        let base = s.components(None, None);
        let expected: Vec<String> = (0..s.n)
            .filter(|&v| s.components(Some(v), None) > base)
            .map(name)
            .collect();
        let actual: Vec<String> =
            g.articulation_points().unwrap().iter().map(ToString::to_string).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_bridges_match_removal(s in sample()) {
        let g = s.build();
        let base = s.components(None, None);
        let mut expected: Vec<(String, String)> = s
            .edges
            .iter()
            .enumerate()
            .filter(|&(i, _)| s.components(None, Some(i)) > base)
            .map(|(_, &(a, b, _))| {
                let (a, b) = (name(a), name(b));
                if a <= b { (a, b) } else { (b, a) }
            })
            .collect();
        expected.sort();
        let actual: Vec<(String, String)> = g
            .bridges()
            .unwrap()
            .iter()
            .map(|b| (b.first().to_string(), b.second().to_string()))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_diameters_match_floyd_warshall(s in sample()) {
        prop_assert_eq!(s.build().diameters().unwrap().to_vec(), s.diameters());
    }
}
