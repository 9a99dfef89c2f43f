//! In-memory graph operations: the core data structure and its algorithms.

pub mod adjacency_graph;
pub mod builder;
pub mod shortest_path;
pub mod traversal;

pub use adjacency_graph::{build_adjacency_list, AdjacencyDisplay, Graph};
pub use builder::GraphBuilder;
pub use shortest_path::{dijkstra, DistanceEntry, ShortestPaths};
pub use traversal::{bfs, dfs, TraversalOrder};
