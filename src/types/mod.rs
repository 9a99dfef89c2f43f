//! All data types for the adjgraph library.

pub mod distance;
pub mod edge;
pub mod error;
pub mod matrix;

pub use distance::Distance;
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use matrix::WeightMatrix;

/// Default upper bound on the number of vertices a graph may have.
pub const DEFAULT_MAX_VERTICES: usize = 100;

/// Sentinel printed after the last neighbour of each adjacency list.
pub const LIST_TERMINATOR: &str = "NULL";

/// 1-based label for a 0-based vertex index.
pub fn label(index: usize) -> usize {
    index + 1
}
