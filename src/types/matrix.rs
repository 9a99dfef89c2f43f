//! Dense square weight matrix.

use serde::Serialize;

use super::error::{GraphError, GraphResult};

/// A dense `n × n` grid of edge weights, stored row-major.
///
/// A cell holding a positive weight is a directed edge from the row vertex to
/// the column vertex. Zero means "no edge", so a zero-weight edge cannot be
/// expressed. Negative cells are kept as read but are not edges either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightMatrix {
    size: usize,
    cells: Vec<i64>,
}

impl WeightMatrix {
    /// Build a matrix from rows, checking that it is non-empty and square.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> GraphResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(GraphError::EmptyMatrix);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GraphError::NotSquare {
                    row: i + 1,
                    expected: size,
                    got: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self { size, cells })
    }

    /// Number of vertices (rows).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw cell value.
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(col < self.size, "column {} out of bounds", col);
        self.cells[row * self.size + col]
    }

    /// One row of the matrix.
    pub fn row(&self, row: usize) -> &[i64] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterate over all rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        self.cells.chunks(self.size)
    }

    /// True when `row -> col` is an edge.
    pub fn has_edge(&self, row: usize, col: usize) -> bool {
        self.get(row, col) > 0
    }

    /// Weight of the edge `row -> col`, or `None` when there is no edge.
    pub fn edge_weight(&self, row: usize, col: usize) -> Option<u64> {
        match self.get(row, col) {
            w if w > 0 => Some(w as u64),
            _ => None,
        }
    }

    /// Number of cells holding a negative value.
    pub fn negative_count(&self) -> usize {
        self.cells.iter().filter(|&&w| w < 0).count()
    }
}
