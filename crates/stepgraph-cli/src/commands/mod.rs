//! CLI command implementations.

pub mod generate;
pub mod mst;
pub mod paths;

use anyhow::{Result, anyhow};
use stepgraph_core::graph::{GraphSource, SpanningTreeFactory, WeightedGraph, parse_edge_list};

use crate::GraphArgs;

/// Resolves the graph selected on the command line.
///
/// `--edges` wins over `--nodes`; with neither, the command's sample graph is
/// used.
pub fn load_graph(
    args: &GraphArgs,
    sample: fn() -> WeightedGraph<String>,
) -> Result<WeightedGraph<String>> {
    let graph = match (&args.edges, args.nodes) {
        (Some(text), _) => parse_edge_list(text)?.build()?,
        (None, Some(nodes)) => GraphSource::Random {
            nodes,
            seed: args.seed,
        }
        .resolve(&SpanningTreeFactory::default())?,
        (None, None) => sample(),
    };

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// The requested node, or the graph's first node.
pub fn pick_node(graph: &WeightedGraph<String>, requested: Option<&str>) -> Result<String> {
    match requested {
        Some(node) => Ok(node.to_string()),
        None => graph
            .first_node()
            .cloned()
            .ok_or_else(|| anyhow!("the graph has no nodes")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepgraph_core::graph::samples;

    fn args(nodes: Option<usize>, edges: Option<&str>) -> GraphArgs {
        GraphArgs {
            nodes,
            seed: Some(7),
            edges: edges.map(str::to_string),
        }
    }

    #[test]
    fn test_zero_nodes_is_a_diagnostic() {
        let err = load_graph(&args(Some(0), None), samples::spanning_tree_demo).unwrap_err();
        assert_eq!(err.to_string(), "invalid input: node count must be positive");
    }

    #[test]
    fn test_malformed_edge_list_is_a_diagnostic() {
        let err = load_graph(&args(None, Some("A-B:x")), samples::spanning_tree_demo).unwrap_err();
        assert!(err.to_string().starts_with("invalid input: cannot parse 'A-B:x'"));

        let err = load_graph(&args(None, Some("A-A:1")), samples::spanning_tree_demo).unwrap_err();
        assert!(err.to_string().contains("self-loops are not allowed"));
    }

    #[test]
    fn test_graph_selection() {
        let sample = load_graph(&GraphArgs::default(), samples::dijkstra_demo).unwrap();
        assert_eq!(sample.node_count(), 4);

        let random = load_graph(&args(Some(5), None), samples::dijkstra_demo).unwrap();
        assert_eq!(random.node_count(), 5);

        let literal = load_graph(&args(None, Some("X-Y:2")), samples::dijkstra_demo).unwrap();
        assert_eq!(pick_node(&literal, None).unwrap(), "X");
        assert_eq!(pick_node(&literal, Some("Y")).unwrap(), "Y");
    }

    #[test]
    fn test_empty_graph_has_no_default_node() {
        let err = pick_node(&WeightedGraph::new(), None).unwrap_err();
        assert_eq!(err.to_string(), "the graph has no nodes");
    }
}
