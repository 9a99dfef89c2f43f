//! Fluent API for building Graph instances in code.

use crate::types::{GraphResult, WeightMatrix, DEFAULT_MAX_VERTICES};

use super::Graph;

/// Fluent builder for constructing a [`Graph`] without a matrix file.
pub struct GraphBuilder {
    rows: Vec<Vec<i64>>,
    max_vertices: usize,
}

impl GraphBuilder {
    /// Create a builder for `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            rows: vec![vec![0; vertex_count]; vertex_count],
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }

    /// Override the vertex bound checked by [`build`](Self::build).
    pub fn max_vertices(&mut self, max: usize) -> &mut Self {
        self.max_vertices = max;
        self
    }

    /// Set the weight of `source -> target` (0-based). A weight of 0 removes
    /// the edge.
    pub fn link(&mut self, source: usize, target: usize, weight: i64) -> &mut Self {
        self.rows[source][target] = weight;
        self
    }

    /// Add `a -> b` and `b -> a` with the same weight.
    pub fn link_both(&mut self, a: usize, b: usize, weight: i64) -> &mut Self {
        self.link(a, b, weight).link(b, a, weight)
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph> {
        let matrix = WeightMatrix::from_rows(self.rows.clone())?;
        Graph::with_max_vertices(matrix, self.max_vertices)
    }
}
