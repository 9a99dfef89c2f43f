//! Single-source shortest paths (Dijkstra, dense O(n²) selection).

use log::debug;
use serde::Serialize;

use crate::types::{label, Distance, GraphResult};

use super::Graph;

/// Result of a shortest-path computation from one start vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    start: usize,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
}

/// One row of a [`ShortestPaths`] result, with 1-based labels.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceEntry {
    pub from: usize,
    pub to: usize,
    /// `None` when `to` is unreachable.
    pub distance: Option<u64>,
    /// Labels along the path, `from` first; empty when unreachable.
    pub path: Vec<usize>,
}

impl ShortestPaths {
    /// The 0-based start vertex.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Distance to every vertex, indexed by 0-based vertex.
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn distance(&self, vertex: usize) -> Distance {
        self.distances[vertex]
    }

    /// The vertex preceding `vertex` on its shortest path.
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors[vertex]
    }

    /// Vertices on a shortest path from the start to `target`, both ends
    /// included, or `None` if `target` is unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.distances.get(target)?.is_reachable() {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Per-vertex summary rows in ascending vertex order.
    pub fn entries(&self) -> Vec<DistanceEntry> {
        (0..self.distances.len())
            .map(|v| DistanceEntry {
                from: label(self.start),
                to: label(v),
                distance: self.distances[v].value(),
                path: self
                    .path_to(v)
                    .map(|p| p.into_iter().map(label).collect())
                    .unwrap_or_default(),
            })
            .collect()
    }
}

/// Dijkstra's algorithm from `start` (0-based) over the weight matrix.
///
/// Each round settles the unvisited vertex with the smallest finite distance
/// (lowest index on ties) and relaxes its outgoing edges. The loop ends after
/// `n` rounds or as soon as no reachable vertex is left. Only positive cells
/// are edges, so negative weights are never relaxed.
pub fn dijkstra(graph: &Graph, start: usize) -> GraphResult<ShortestPaths> {
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let mut distances = vec![Distance::Unreachable; n];
    let mut predecessors = vec![None; n];
    let mut visited = vec![false; n];
    distances[start] = Distance::Finite(0);

    let mut settled = 0;
    for _ in 0..n {
        let Some(u) = closest_unvisited(&distances, &visited) else {
            break;
        };
        visited[u] = true;
        settled += 1;

        for v in 0..n {
            if visited[v] {
                continue;
            }
            if let Some(w) = graph.weight(u, v) {
                let candidate = distances[u].extend(w);
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                }
            }
        }
    }

    debug!(
        "Dijkstra from {} settled {} of {} vertices",
        label(start),
        settled,
        n
    );
    Ok(ShortestPaths {
        start,
        distances,
        predecessors,
    })
}

fn closest_unvisited(distances: &[Distance], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (v, d) in distances.iter().enumerate() {
        if visited[v] || !d.is_reachable() {
            continue;
        }
        match best {
            Some(b) if distances[b] <= *d => {}
            _ => best = Some(v),
        }
    }
    best
}
