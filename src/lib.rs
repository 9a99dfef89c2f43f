//! adjgraph: weighted directed graphs loaded from adjacency-matrix files.
//!
//! A matrix file is parsed into a [`WeightMatrix`], turned into a [`Graph`]
//! with a derived adjacency list, and queried with breadth-first search,
//! depth-first search or Dijkstra's shortest paths.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::MatrixReader;
pub use graph::{
    bfs, build_adjacency_list, dfs, dijkstra, Graph, GraphBuilder, ShortestPaths, TraversalOrder,
};
pub use types::{
    label, Distance, Edge, GraphError, GraphResult, WeightMatrix, DEFAULT_MAX_VERTICES,
};
