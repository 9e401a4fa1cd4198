//! Output formatting for CLI commands.

pub mod narration;

use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use stepgraph_common::types::EdgeKind;
use stepgraph_core::algorithms::{ShortestPathTable, StepEvent};
use stepgraph_core::graph::WeightedGraph;

/// Output format selection.
#[derive(Clone, Copy)]
pub enum Format {
    Table,
    Json,
}

impl From<crate::OutputFormat> for Format {
    fn from(f: crate::OutputFormat) -> Self {
        match f {
            crate::OutputFormat::Table => Format::Table,
            crate::OutputFormat::Json => Format::Json,
        }
    }
}

/// A graph as it appears in JSON output.
#[derive(Serialize)]
pub struct GraphOutput {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeOutput>,
}

/// One registered edge.
#[derive(Serialize)]
pub struct EdgeOutput {
    pub from: String,
    pub to: String,
    pub weight: f64,
    pub kind: EdgeKind,
}

impl From<&WeightedGraph<String>> for GraphOutput {
    fn from(graph: &WeightedGraph<String>) -> Self {
        Self {
            nodes: graph.nodes().cloned().collect(),
            edges: graph
                .edges()
                .map(|(edge, kind)| EdgeOutput {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    weight: edge.weight,
                    kind,
                })
                .collect(),
        }
    }
}

/// Everything a run produced: input, every step, and the outcome.
#[derive(Serialize)]
pub struct RunOutput<'a, R> {
    pub graph: GraphOutput,
    pub events: &'a [StepEvent<String>],
    pub result: R,
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Create a styled table with consistent formatting.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    table
}

/// Add a header row to a table.
pub fn add_header(table: &mut Table, headers: &[&str]) {
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
}

/// Print a key-value table (for summaries).
pub fn print_key_value_table(items: &[(&str, String)]) {
    let mut table = create_table();
    add_header(&mut table, &["Property", "Value"]);
    for (key, value) in items {
        table.add_row(vec![Cell::new(key).fg(Color::Green), Cell::new(value)]);
    }
    println!("{table}");
}

/// Renders the distance / predecessor table of a shortest path run.
pub fn distance_table(paths: &ShortestPathTable<String>) -> Table {
    let mut table = create_table();
    add_header(&mut table, &["Node", "Distance", "Predecessor"]);
    for (node, entry) in paths.iter() {
        table.add_row(vec![
            Cell::new(node).fg(Color::Green),
            Cell::new(entry.distance),
            Cell::new(entry.predecessor.as_deref().unwrap_or("-")),
        ]);
    }
    table
}

/// Renders a graph's edges.
pub fn edge_table(graph: &WeightedGraph<String>) -> Table {
    let mut table = create_table();
    add_header(&mut table, &["From", "To", "Weight", "Kind"]);
    for (edge, kind) in graph.edges() {
        table.add_row(vec![
            Cell::new(&edge.from),
            Cell::new(&edge.to),
            Cell::new(edge.weight),
            Cell::new(if kind.is_directed() { "directed" } else { "undirected" }),
        ]);
    }
    table
}

/// Formats a graph as an edge-list literal accepted by `--edges`.
pub fn edge_list(graph: &WeightedGraph<String>) -> String {
    let mut tokens: Vec<String> = graph
        .edges()
        .map(|(edge, kind)| {
            let op = if kind.is_directed() { "->" } else { "-" };
            format!("{}{}{}:{}", edge.from, op, edge.to, edge.weight)
        })
        .collect();

    // Nodes without any edge still have to appear
    tokens.extend(
        graph
            .nodes()
            .filter(|n| !graph.edges().any(|(e, _)| &e.from == *n || &e.to == *n))
            .cloned(),
    );
    tokens.join(", ")
}

/// Print a status message (respects quiet mode).
pub fn status(msg: &str, quiet: bool) {
    if !quiet {
        println!("{msg}");
    }
}

/// Print a success message.
pub fn success(msg: &str, quiet: bool) {
    if !quiet {
        println!("✓ {msg}");
    }
}
