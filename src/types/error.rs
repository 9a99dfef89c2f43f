//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur while loading a matrix or querying a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input contained no matrix rows.
    #[error("Matrix contains no rows")]
    EmptyMatrix,

    /// A cell could not be parsed as an integer weight.
    #[error("Invalid weight {token:?} at line {line}, column {column}")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },

    /// A row length does not match the vertex count.
    #[error("Matrix is not square: row {row} has {got} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Vertex count exceeds the configured bound.
    #[error("Too many vertices: {count} > {max}")]
    TooManyVertices { count: usize, max: usize },

    /// A vertex label is outside `1..=count`.
    #[error("Vertex {label} out of range (graph has {count} vertices)")]
    VertexOutOfRange { label: usize, count: usize },
}

/// Convenience result type for adjgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
