//! Shortest path commands.

use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;
use stepgraph_common::types::Distance;
use stepgraph_core::algorithms::{
    NoopObserver, RecordingObserver, ShortestPathTable, StepObserver, bellman_ford, dijkstra,
};
use stepgraph_core::graph::{WeightedGraph, samples};

use crate::output::narration::Narrator;
use crate::output::{self, Format, GraphOutput, RunOutput};
use crate::{GraphArgs, OutputFormat};

/// Which shortest path engine to run.
#[derive(Clone, Copy)]
pub enum PathEngine {
    Dijkstra,
    BellmanFord,
}

impl PathEngine {
    fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::BellmanFord => "bellman-ford",
        }
    }

    fn sample(self) -> fn() -> WeightedGraph<String> {
        match self {
            Self::Dijkstra => samples::dijkstra_demo,
            Self::BellmanFord => samples::bellman_ford_demo,
        }
    }

    fn solve<O: StepObserver<String>>(
        self,
        graph: &WeightedGraph<String>,
        source: &String,
        observer: O,
    ) -> Result<ShortestPathTable<String>> {
        let table = match self {
            Self::Dijkstra => dijkstra(graph, source, observer)?,
            Self::BellmanFord => bellman_ford(graph, source, observer)?,
        };
        Ok(table)
    }
}

/// One node of the final answer.
#[derive(Serialize)]
struct PathRow {
    node: String,
    distance: Distance,
    predecessor: Option<String>,
    path: Option<Vec<String>>,
}

/// Outcome of a shortest path run.
#[derive(Serialize)]
struct PathsOutput {
    algorithm: &'static str,
    source: String,
    nodes: Vec<PathRow>,
}

fn rows(table: &ShortestPathTable<String>) -> Vec<PathRow> {
    table
        .iter()
        .map(|(node, entry)| PathRow {
            node: node.clone(),
            distance: entry.distance,
            predecessor: entry.predecessor.clone(),
            path: table.path_to(node),
        })
        .collect()
}

/// Run the dijkstra or bellman-ford command.
pub fn run(
    engine: PathEngine,
    args: &GraphArgs,
    source: Option<String>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let graph = super::load_graph(args, engine.sample())?;
    let source = super::pick_node(&graph, source.as_deref())?;

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            let mut recorder = RecordingObserver::new();
            let table = engine.solve(&graph, &source, &mut recorder)?;
            output::print_json(&RunOutput {
                graph: GraphOutput::from(&graph),
                events: recorder.events(),
                result: PathsOutput {
                    algorithm: engine.name(),
                    source,
                    nodes: rows(&table),
                },
            })?;
        }
        Format::Table => {
            output::status(
                &format!(
                    "Running {} from {} on {} nodes and {} edges",
                    engine.name(),
                    source,
                    graph.node_count(),
                    graph.edge_count()
                ),
                quiet,
            );
            let table = if quiet {
                engine.solve(&graph, &source, NoopObserver)?
            } else {
                engine.solve(&graph, &source, Narrator)?
            };
            print_paths(&table);
            output::success(
                &format!(
                    "{} of {} nodes reachable from {}",
                    table.reachable_count(),
                    table.len(),
                    source
                ),
                quiet,
            );
        }
    }

    Ok(())
}

fn print_paths(table: &ShortestPathTable<String>) {
    let mut out = output::create_table();
    output::add_header(&mut out, &["Node", "Distance", "Predecessor", "Path"]);
    for row in rows(table) {
        let path = row
            .path
            .map(|p| p.join(" -> "))
            .unwrap_or_else(|| "no path".to_string());
        out.add_row(vec![
            Cell::new(&row.node),
            Cell::new(row.distance),
            Cell::new(row.predecessor.as_deref().unwrap_or("-")),
            Cell::new(path),
        ]);
    }
    println!("{out}");
}
