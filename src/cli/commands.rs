//! CLI command implementations.
//!
//! The `render_*` functions produce the text the menu and the one-shot
//! subcommands print; the `cmd_*` functions load a file and print to stdout.

use std::path::Path;

use crate::format::MatrixReader;
use crate::graph::{bfs, dfs, dijkstra, Graph, TraversalOrder};
use crate::types::{label, GraphResult};

/// Adjacency list of every vertex.
pub fn render_adjacency(graph: &Graph, json: bool) -> String {
    if json {
        let vertices: Vec<serde_json::Value> = graph
            .adjacency()
            .iter()
            .enumerate()
            .map(|(v, neighbors)| {
                serde_json::json!({
                    "vertex": label(v),
                    "neighbors": neighbors.iter().map(|&n| label(n)).collect::<Vec<_>>(),
                })
            })
            .collect();
        serde_json::to_string_pretty(&vertices).unwrap_or_default()
    } else {
        graph.display_adjacency().to_string()
    }
}

fn render_order(name: &str, start: usize, order: &TraversalOrder, json: bool) -> String {
    render_order_with_header(name, Some(name), start, order, json)
}

fn render_order_with_header(
    name: &str,
    header: Option<&str>,
    start: usize,
    order: &TraversalOrder,
    json: bool,
) -> String {
    if json {
        let info = serde_json::json!({
            "algorithm": name.to_lowercase(),
            "start": label(start),
            "order": order.labels(),
        });
        serde_json::to_string_pretty(&info).unwrap_or_default()
    } else {
        match header {
            Some(header) => format!("Final {} Order:\n{}\n", header, order),
            None => format!("{}\n", order),
        }
    }
}

/// Breadth-first visitation order from `start` (0-based).
pub fn render_bfs(graph: &Graph, start: usize, json: bool) -> GraphResult<String> {
    let order = bfs(graph, start)?;
    Ok(render_order("BFS", start, &order, json))
}

/// Depth-first visitation order from `start` (0-based). The text form is the
/// bare order line, without a heading.
pub fn render_dfs(graph: &Graph, start: usize, json: bool) -> GraphResult<String> {
    let order = dfs(graph, start)?;
    Ok(render_order_with_header("DFS", None, start, &order, json))
}

/// Shortest distances from `start` (0-based) to every vertex.
pub fn render_dijkstra(graph: &Graph, start: usize, json: bool) -> GraphResult<String> {
    let paths = dijkstra(graph, start)?;

    if json {
        let info = serde_json::json!({
            "start": label(start),
            "distances": paths.entries(),
        });
        return Ok(serde_json::to_string_pretty(&info).unwrap_or_default());
    }

    let mut out = String::new();
    for (v, d) in paths.distances().iter().enumerate() {
        out.push_str(&format!(
            "Shortest distance from vertex {} to vertex {}: {}\n",
            label(start),
            label(v),
            d
        ));
    }
    Ok(out)
}

/// Print the adjacency list of a matrix file.
pub fn cmd_display(path: &Path, reader: &MatrixReader, json: bool) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    print_block(&render_adjacency(&graph, json));
    Ok(())
}

/// Print the BFS order of a matrix file.
pub fn cmd_bfs(path: &Path, reader: &MatrixReader, start: usize, json: bool) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    print_block(&render_bfs(&graph, start, json)?);
    Ok(())
}

/// Print the DFS order of a matrix file.
pub fn cmd_dfs(path: &Path, reader: &MatrixReader, start: usize, json: bool) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    print_block(&render_dfs(&graph, start, json)?);
    Ok(())
}

/// Print shortest distances for a matrix file.
pub fn cmd_dijkstra(
    path: &Path,
    reader: &MatrixReader,
    start: usize,
    json: bool,
) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    print_block(&render_dijkstra(&graph, start, json)?);
    Ok(())
}

fn print_block(text: &str) {
    println!("{}", text.trim_end());
}
