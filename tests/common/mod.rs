//! Shared helpers for integration tests.

#![allow(dead_code)]

use adjgraph::{Graph, WeightMatrix};
use rand::Rng;

/// Build a graph from literal rows.
pub fn graph_from(rows: &[&[i64]]) -> Graph {
    let matrix = WeightMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap();
    Graph::from_matrix(matrix).unwrap()
}

/// Random matrix with roughly `density` of cells holding a weight in 1..=9.
pub fn random_rows(rng: &mut impl Rng, n: usize, density: f64) -> Vec<Vec<i64>> {
    (0..n)
        .map(|_| {
            (0..n)
                .map(|_| {
                    if rng.gen_bool(density) {
                        rng.gen_range(1..=9)
                    } else {
                        0
                    }
                })
                .collect()
        })
        .collect()
}

pub fn random_graph(rng: &mut impl Rng, n: usize, density: f64) -> Graph {
    let matrix = WeightMatrix::from_rows(random_rows(rng, n, density)).unwrap();
    Graph::from_matrix(matrix).unwrap()
}

/// Vertices reachable from `start`, computed independently of the searches.
pub fn reachable(graph: &Graph, start: usize) -> Vec<bool> {
    let n = graph.vertex_count();
    let mut seen = vec![false; n];
    seen[start] = true;
    let mut changed = true;
    while changed {
        changed = false;
        for u in 0..n {
            if !seen[u] {
                continue;
            }
            for v in 0..n {
                if !seen[v] && graph.matrix().get(u, v) > 0 {
                    seen[v] = true;
                    changed = true;
                }
            }
        }
    }
    seen
}

/// Bellman-Ford distances over positive cells, `None` when unreachable.
pub fn bellman_ford(graph: &Graph, start: usize) -> Vec<Option<u64>> {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    dist[start] = Some(0);
    for _ in 0..n {
        for edge in graph.edges() {
            if let Some(du) = dist[edge.source] {
                let cand = du + edge.weight;
                if dist[edge.target].map_or(true, |dv| cand < dv) {
                    dist[edge.target] = Some(cand);
                }
            }
        }
    }
    dist
}
