//! Graph traversal algorithms (BFS and DFS).
//!
//! Both searches look at the neighbours of a vertex in ascending index order,
//! independent of how the adjacency list happens to be stored, so the
//! visitation order is fully determined by the graph and the start vertex.

use std::collections::VecDeque;
use std::fmt;

use log::debug;
use serde::Serialize;

use crate::types::{label, GraphResult};

use super::Graph;

/// Vertices in the order a search visited them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalOrder {
    /// 0-based vertex indices in visitation order.
    order: Vec<usize>,
}

impl TraversalOrder {
    /// 0-based indices in visitation order.
    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    /// 1-based labels in visitation order.
    pub fn labels(&self) -> Vec<usize> {
        self.order.iter().map(|&v| label(v)).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.order.contains(&vertex)
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &v) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", label(v))?;
        }
        Ok(())
    }
}

/// Breadth-first search from `start` (0-based).
///
/// A vertex is marked visited when it is enqueued, so no vertex enters the
/// queue twice.
pub fn bfs(graph: &Graph, start: usize) -> GraphResult<TraversalOrder> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);

        for neighbor in graph.sorted_neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    debug!("BFS from {} visited {} vertices", label(start), order.len());
    Ok(TraversalOrder { order })
}

/// One vertex on the DFS stack together with how far its neighbours have been
/// scanned.
struct Frame {
    neighbors: Vec<usize>,
    cursor: usize,
}

impl Frame {
    fn enter(graph: &Graph, vertex: usize) -> Self {
        Self {
            neighbors: graph.sorted_neighbors(vertex),
            cursor: 0,
        }
    }
}

/// Depth-first search from `start` (0-based).
///
/// Produces the same order as the recursive formulation: enter a vertex, then
/// descend into each still-unvisited neighbour in ascending order. An explicit
/// stack keeps long paths from exhausting the call stack.
pub fn dfs(graph: &Graph, start: usize) -> GraphResult<TraversalOrder> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();

    visited[start] = true;
    order.push(start);
    let mut stack = vec![Frame::enter(graph, start)];

    while let Some(frame) = stack.last_mut() {
        let Some(&next) = frame.neighbors.get(frame.cursor) else {
            stack.pop();
            continue;
        };
        frame.cursor += 1;

        if !visited[next] {
            visited[next] = true;
            order.push(next);
            stack.push(Frame::enter(graph, next));
        }
    }

    debug!("DFS from {} visited {} vertices", label(start), order.len());
    Ok(TraversalOrder { order })
}
