//! Core graph structure: weight matrix plus the derived adjacency list.

use std::fmt;

use log::{debug, warn};

use crate::types::{
    label, Edge, GraphError, GraphResult, WeightMatrix, DEFAULT_MAX_VERTICES, LIST_TERMINATOR,
};

/// A weighted directed graph read from an adjacency matrix.
///
/// The adjacency list is derived once, in the constructor, and never changes
/// afterwards.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Edge weights, indexed `[source][target]`.
    matrix: WeightMatrix,
    /// Neighbour indices per vertex, in descending index order.
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Build a graph, allowing at most [`DEFAULT_MAX_VERTICES`] vertices.
    pub fn from_matrix(matrix: WeightMatrix) -> GraphResult<Self> {
        Self::with_max_vertices(matrix, DEFAULT_MAX_VERTICES)
    }

    /// Build a graph, rejecting matrices with more than `max_vertices` rows.
    pub fn with_max_vertices(matrix: WeightMatrix, max_vertices: usize) -> GraphResult<Self> {
        if matrix.size() > max_vertices {
            return Err(GraphError::TooManyVertices {
                count: matrix.size(),
                max: max_vertices,
            });
        }

        let negatives = matrix.negative_count();
        if negatives > 0 {
            warn!(
                "{} negative weight(s) in matrix are treated as missing edges",
                negatives
            );
        }

        let adjacency = build_adjacency_list(&matrix);
        let graph = Self { matrix, adjacency };
        debug!(
            "Built adjacency list: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.matrix.size()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Neighbours of `vertex` in storage (descending) order.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    /// Neighbours of `vertex` copied out and sorted ascending.
    pub fn sorted_neighbors(&self, vertex: usize) -> Vec<usize> {
        let mut neighbors = self.adjacency[vertex].clone();
        neighbors.sort_unstable();
        neighbors
    }

    /// The whole adjacency list.
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// The underlying weight matrix.
    pub fn matrix(&self) -> &WeightMatrix {
        &self.matrix
    }

    /// Weight of `source -> target`, or `None` when there is no edge.
    pub fn weight(&self, source: usize, target: usize) -> Option<u64> {
        self.matrix.edge_weight(source, target)
    }

    /// All edges, grouped by source in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertex_count();
        (0..n).flat_map(move |u| {
            (0..n).filter_map(move |v| self.weight(u, v).map(|w| Edge::new(u, v, w)))
        })
    }

    /// Fail with [`GraphError::VertexOutOfRange`] unless `vertex` is a valid index.
    pub fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                label: label(vertex),
                count: self.vertex_count(),
            })
        }
    }

    /// Printable adjacency list, one `Vertex i: -> j ... NULL` line per vertex.
    pub fn display_adjacency(&self) -> AdjacencyDisplay<'_> {
        AdjacencyDisplay { graph: self }
    }
}

/// Derive the adjacency list from a weight matrix.
///
/// Each neighbour is inserted at the front of its list while columns are
/// scanned left to right, so every list ends up in descending index order.
pub fn build_adjacency_list(matrix: &WeightMatrix) -> Vec<Vec<usize>> {
    matrix
        .rows()
        .map(|row| {
            row.iter()
                .enumerate()
                .rev()
                .filter(|&(_, &w)| w > 0)
                .map(|(j, _)| j)
                .collect()
        })
        .collect()
}

/// Display adapter returned by [`Graph::display_adjacency`].
pub struct AdjacencyDisplay<'a> {
    graph: &'a Graph,
}

impl fmt::Display for AdjacencyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, neighbors) in self.graph.adjacency.iter().enumerate() {
            write!(f, "Vertex {}: ", label(i))?;
            for &j in neighbors {
                write!(f, "-> {} ", label(j))?;
            }
            writeln!(f, "{}", LIST_TERMINATOR)?;
        }
        Ok(())
    }
}
