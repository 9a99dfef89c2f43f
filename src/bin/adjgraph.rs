//! CLI entry point for the `adjgraph` command-line tool.

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use adjgraph::cli::{commands, Menu};
use adjgraph::format::MatrixReader;
use adjgraph::types::{GraphError, GraphResult, DEFAULT_MAX_VERTICES};

#[derive(Parser)]
#[command(
    name = "adjgraph",
    about = "Load an adjacency-matrix graph and run BFS, DFS or Dijkstra on it"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Reject graphs with more vertices than this
    #[arg(long, default_value_t = DEFAULT_MAX_VERTICES)]
    max_vertices: usize,

    /// Path to the adjacency-matrix file
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu {
        /// Vertex label (1-based) the searches start from
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        start: u32,
    },
    /// Print the adjacency list
    Display,
    /// Breadth-first visitation order
    Bfs {
        /// Start vertex label (1-based)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        start: u32,
    },
    /// Depth-first visitation order
    Dfs {
        /// Start vertex label (1-based)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        start: u32,
    },
    /// Shortest distances from a start vertex
    Dijkstra {
        /// Start vertex label (1-based)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        start: u32,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// 0-based index for a label already checked to be >= 1.
fn index(start: u32) -> usize {
    start as usize - 1
}

fn run_menu(path: &Path, reader: &MatrixReader, start: usize) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    let menu = Menu::with_start(&graph, start)?;
    menu.run(io::stdin().lock(), io::stdout().lock())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = cli.format == OutputFormat::Json;
    let reader = MatrixReader::with_max_vertices(cli.max_vertices);
    let file = cli.file;

    let result = match cli.command.unwrap_or(Commands::Menu { start: 1 }) {
        Commands::Menu { start } => run_menu(&file, &reader, index(start)),
        Commands::Display => commands::cmd_display(&file, &reader, json),
        Commands::Bfs { start } => commands::cmd_bfs(&file, &reader, index(start), json),
        Commands::Dfs { start } => commands::cmd_dfs(&file, &reader, index(start), json),
        Commands::Dijkstra { start } => {
            commands::cmd_dijkstra(&file, &reader, index(start), json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::EmptyMatrix
            | GraphError::InvalidToken { .. }
            | GraphError::NotSquare { .. } => 2,
            GraphError::TooManyVertices { .. } => 3,
            GraphError::VertexOutOfRange { .. } => 4,
        };
        process::exit(code);
    }
}
