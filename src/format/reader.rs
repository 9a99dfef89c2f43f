//! Reads whitespace-delimited adjacency-matrix text files.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info};

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::{WeightMatrix, DEFAULT_MAX_VERTICES};

/// Reader for adjacency-matrix text files.
///
/// One matrix row per line, cells separated by any whitespace. Blank lines are
/// skipped; the number of remaining rows is the vertex count.
#[derive(Debug, Clone, Copy)]
pub struct MatrixReader {
    max_vertices: usize,
}

impl MatrixReader {
    /// Reader accepting up to [`DEFAULT_MAX_VERTICES`] vertices.
    pub fn new() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }

    /// Reader accepting up to `max_vertices` vertices.
    pub fn with_max_vertices(max_vertices: usize) -> Self {
        Self { max_vertices }
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    /// Read a matrix file and build its graph.
    pub fn read_from_file(&self, path: &Path) -> GraphResult<Graph> {
        let file = std::fs::File::open(path)?;
        let graph = self.read_from(file)?;
        info!(
            "Loaded {}: {} vertices, {} edges",
            path.display(),
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Read from any reader and build the graph.
    pub fn read_from(&self, reader: impl Read) -> GraphResult<Graph> {
        let matrix = self.read_matrix(BufReader::new(reader))?;
        Graph::with_max_vertices(matrix, self.max_vertices)
    }

    /// Parse a matrix held in memory.
    pub fn parse_str(&self, text: &str) -> GraphResult<WeightMatrix> {
        self.read_matrix(text.as_bytes())
    }

    /// Parse the raw matrix without building the adjacency list.
    pub fn read_matrix(&self, reader: impl BufRead) -> GraphResult<WeightMatrix> {
        let mut rows: Vec<Vec<i64>> = Vec::new();
        // Rows past the bound are counted but not parsed.
        let mut extra_rows = 0;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if rows.len() == self.max_vertices {
                extra_rows += 1;
                continue;
            }
            rows.push(parse_row(&line, i + 1)?);
        }

        if extra_rows > 0 {
            return Err(GraphError::TooManyVertices {
                count: rows.len() + extra_rows,
                max: self.max_vertices,
            });
        }

        debug!("Parsed {} matrix rows", rows.len());
        WeightMatrix::from_rows(rows)
    }
}

impl Default for MatrixReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one line of cells. `line_no` is 1-based and only used for errors.
fn parse_row(line: &str, line_no: usize) -> GraphResult<Vec<i64>> {
    line.split_whitespace()
        .enumerate()
        .map(|(col, token)| {
            token.parse::<i64>().map_err(|_| GraphError::InvalidToken {
                line: line_no,
                column: col + 1,
                token: token.to_string(),
            })
        })
        .collect()
}
