//! Random graph command.

use anyhow::Result;
use serde::Serialize;
use stepgraph_core::graph::{RandomGraphFactory, SpanningTreeFactory};

use crate::OutputFormat;
use crate::output::{self, Format, GraphOutput};

#[derive(Serialize)]
struct GeneratedOutput {
    seed: Option<u64>,
    edge_list: String,
    total_weight: f64,
    graph: GraphOutput,
}

/// Run the generate command.
pub fn run(nodes: usize, seed: Option<u64>, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = SpanningTreeFactory::default().build(nodes, seed)?;

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            output::print_json(&GeneratedOutput {
                seed,
                edge_list: output::edge_list(&graph),
                total_weight: graph.total_weight(),
                graph: GraphOutput::from(&graph),
            })?;
        }
        Format::Table => {
            println!("{}", output::edge_table(&graph));
            output::print_key_value_table(&[
                ("Nodes", graph.node_count().to_string()),
                ("Edges", graph.edge_count().to_string()),
                ("Total weight", graph.total_weight().to_string()),
                (
                    "Seed",
                    seed.map_or_else(|| "(random)".to_string(), |s| s.to_string()),
                ),
            ]);
            output::status(&format!("--edges \"{}\"", output::edge_list(&graph)), quiet);
        }
    }

    Ok(())
}
