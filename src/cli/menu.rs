//! Interactive numbered menu over a loaded graph.

use std::io::{BufRead, Write};

use log::debug;

use crate::cli::commands;
use crate::graph::Graph;
use crate::types::GraphResult;

const MENU_TEXT: &str = "\nMenu:\n\
1. Display Adjacency List\n\
2. Perform Breadth-First Search (BFS)\n\
3. Perform Depth-First Search (DFS)\n\
4. Find Shortest Path using Dijkstra's Algorithm\n\
5. Exit\n";

/// A menu entry selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Display,
    Bfs,
    Dfs,
    Dijkstra,
    Exit,
}

impl MenuChoice {
    /// Parse a line of user input. Anything but `1`..`5` is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(Self::Display),
            2 => Some(Self::Bfs),
            3 => Some(Self::Dfs),
            4 => Some(Self::Dijkstra),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive menu loop.
pub struct Menu<'a> {
    graph: &'a Graph,
    /// 0-based vertex every search starts from.
    start: usize,
}

impl<'a> Menu<'a> {
    /// Menu whose searches start at the first vertex.
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph, start: 0 }
    }

    /// Menu whose searches start at `start` (0-based).
    pub fn with_start(graph: &'a Graph, start: usize) -> GraphResult<Self> {
        graph.check_vertex(start)?;
        Ok(Self { graph, start })
    }

    /// Run until the user picks Exit or input ends.
    pub fn run(&self, input: impl BufRead, mut output: impl Write) -> GraphResult<()> {
        let mut lines = input.lines();

        loop {
            write!(output, "{}", MENU_TEXT)?;
            write!(output, "Enter a Choice: ")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => {
                    debug!("Menu choice {:?}", choice);
                    let text = self.execute(choice)?;
                    write!(output, "{}", text)?;
                }
                None => writeln!(output, "Invalid option, Please try again.")?,
            }
        }

        writeln!(output, "Program ended")?;
        output.flush()?;
        Ok(())
    }

    fn execute(&self, choice: MenuChoice) -> GraphResult<String> {
        match choice {
            MenuChoice::Display => Ok(commands::render_adjacency(self.graph, false)),
            MenuChoice::Bfs => commands::render_bfs(self.graph, self.start, false),
            MenuChoice::Dfs => commands::render_dfs(self.graph, self.start, false),
            MenuChoice::Dijkstra => commands::render_dijkstra(self.graph, self.start, false),
            MenuChoice::Exit => Ok(String::new()),
        }
    }
}
