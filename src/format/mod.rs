//! Text file I/O for adjacency-matrix files.

pub mod reader;

pub use reader::MatrixReader;
