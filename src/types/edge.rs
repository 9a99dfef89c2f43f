//! The weighted directed edge struct.

use serde::Serialize;

/// A directed, positively weighted edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Source vertex index (0-based).
    pub source: usize,
    /// Target vertex index (0-based).
    pub target: usize,
    /// Edge weight, always > 0.
    pub weight: u64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: usize, target: usize, weight: u64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// True when the edge starts and ends at the same vertex.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.source + 1,
            self.target + 1,
            self.weight
        )
    }
}
