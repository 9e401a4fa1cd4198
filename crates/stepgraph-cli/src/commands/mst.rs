//! Minimum spanning tree commands.

use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;
use stepgraph_common::types::WeightedEdge;
use stepgraph_core::algorithms::{
    NoopObserver, RecordingObserver, SpanningTree, StepObserver, connected_component_count,
    kruskal, prim,
};
use stepgraph_core::graph::{WeightedGraph, samples};

use crate::output::narration::Narrator;
use crate::output::{self, Format, GraphOutput, RunOutput};
use crate::{GraphArgs, OutputFormat};

/// Which spanning tree engine to run.
pub enum TreeEngine {
    Kruskal,
    Prim { start: Option<String> },
}

impl TreeEngine {
    fn name(&self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim { .. } => "prim",
        }
    }
}

/// Outcome of a spanning tree run.
#[derive(Serialize)]
struct TreeOutput<'a> {
    algorithm: &'static str,
    start: Option<String>,
    edges: &'a [WeightedEdge<String>],
    total_weight: f64,
    spanning: bool,
    graph_components: usize,
}

fn solve<O: StepObserver<String>>(
    graph: &WeightedGraph<String>,
    start: Option<&String>,
    observer: O,
) -> Result<SpanningTree<String>> {
    let tree = match start {
        Some(start) => prim(graph, start, observer)?,
        None => kruskal(graph, observer)?,
    };
    Ok(tree)
}

/// Run the kruskal or prim command.
pub fn run(engine: TreeEngine, args: &GraphArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = super::load_graph(args, samples::spanning_tree_demo)?;
    let start = match &engine {
        TreeEngine::Kruskal => None,
        TreeEngine::Prim { start } => Some(super::pick_node(&graph, start.as_deref())?),
    };
    let components = connected_component_count(&graph);

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            let mut recorder = RecordingObserver::new();
            let tree = solve(&graph, start.as_ref(), &mut recorder)?;
            output::print_json(&RunOutput {
                graph: GraphOutput::from(&graph),
                events: recorder.events(),
                result: TreeOutput {
                    algorithm: engine.name(),
                    start,
                    edges: &tree.edges,
                    total_weight: tree.total_weight(),
                    spanning: tree.is_spanning(),
                    graph_components: components,
                },
            })?;
        }
        Format::Table => {
            output::status(
                &format!(
                    "Running {} on {} nodes and {} edges",
                    engine.name(),
                    graph.node_count(),
                    graph.edge_count()
                ),
                quiet,
            );
            let tree = if quiet {
                solve(&graph, start.as_ref(), NoopObserver)?
            } else {
                solve(&graph, start.as_ref(), Narrator)?
            };
            print_tree(&tree, start.as_deref(), components, quiet);
        }
    }

    Ok(())
}

fn print_tree(tree: &SpanningTree<String>, start: Option<&str>, components: usize, quiet: bool) {
    let mut table = output::create_table();
    output::add_header(&mut table, &["#", "Edge", "Weight"]);
    for (i, edge) in tree.edges.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{}-{}", edge.from, edge.to)),
            Cell::new(edge.weight),
        ]);
    }
    println!("{table}");

    let mut items = vec![
        ("Edges", tree.edges.len().to_string()),
        ("Total weight", tree.total_weight().to_string()),
        ("Graph components", components.to_string()),
    ];
    if let Some(start) = start {
        items.insert(0, ("Start", start.to_string()));
    }
    output::print_key_value_table(&items);

    if tree.is_spanning() {
        output::success("minimum spanning tree complete", quiet);
    } else if start.is_some() {
        output::status(
            "graph is disconnected, the tree covers only the start node's component",
            quiet,
        );
    } else {
        output::status(
            &format!("graph is disconnected, result is a minimum spanning forest of {components} trees"),
            quiet,
        );
    }
}
