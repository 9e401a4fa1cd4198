//! Explicit graph construction.
//!
//! Graphs can be spelled out in code with [`GraphBuilder`] or as text with
//! [`parse_edge_list`]:
//!
//! ```text
//! A-B:4, A-C:2, B-C:1      undirected edges
//! 0->1:4 0->2:-2           directed edges
//! E                        an isolated node
//! ```

use std::sync::LazyLock;

use regex::Regex;
use stepgraph_common::types::{EdgeKind, Node};
use stepgraph_common::utils::error::{Error, Result};

use super::generator::RandomGraphFactory;
use super::weighted::WeightedGraph;

/// One edge waiting to be added to a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec<N> {
    /// Tail node.
    pub from: N,
    /// Head node.
    pub to: N,
    /// Edge weight.
    pub weight: f64,
    /// Direction handling.
    pub kind: EdgeKind,
}

/// Fluent builder for literal graphs.
///
/// Edges are validated in [`build`](Self::build), in the order they were
/// given, so the resulting graph iterates nodes and edges in that order.
///
/// # Examples
///
/// ```
/// use stepgraph_core::GraphBuilder;
///
/// let graph = GraphBuilder::undirected()
///     .edge('A', 'B', 4.0)
///     .edge('B', 'C', 1.0)
///     .build()?;
/// assert_eq!(graph.node_count(), 3);
/// # Ok::<(), stepgraph_common::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<N> {
    default_kind: EdgeKind,
    nodes: Vec<N>,
    edges: Vec<EdgeSpec<N>>,
}

impl<N: Node> GraphBuilder<N> {
    /// Starts a builder whose [`edge`](Self::edge) calls add undirected edges.
    #[must_use]
    pub fn undirected() -> Self {
        Self::with_kind(EdgeKind::Undirected)
    }

    /// Starts a builder whose [`edge`](Self::edge) calls add directed edges.
    #[must_use]
    pub fn directed() -> Self {
        Self::with_kind(EdgeKind::Directed)
    }

    fn with_kind(default_kind: EdgeKind) -> Self {
        Self {
            default_kind,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a node, isolated unless an edge later touches it.
    pub fn node(mut self, node: N) -> Self {
        self.nodes.push(node);
        self
    }

    /// Adds an edge of the builder's default kind.
    pub fn edge(self, from: N, to: N, weight: f64) -> Self {
        let kind = self.default_kind;
        self.edge_spec(EdgeSpec {
            from,
            to,
            weight,
            kind,
        })
    }

    /// Adds an edge with an explicit kind.
    pub fn edge_spec(mut self, spec: EdgeSpec<N>) -> Self {
        self.edges.push(spec);
        self
    }

    /// Adds `(from, to, weight)` triples of the default kind.
    pub fn edges(self, edges: impl IntoIterator<Item = (N, N, f64)>) -> Self {
        edges
            .into_iter()
            .fold(self, |builder, (from, to, weight)| builder.edge(from, to, weight))
    }

    /// Returns the number of pending edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Builds the graph.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::InvalidEdge`] encountered.
    pub fn build(self) -> Result<WeightedGraph<N>> {
        let mut graph = WeightedGraph::new();
        for node in self.nodes {
            graph.add_node(node);
        }
        for spec in self.edges {
            graph.add_edge(spec.from, spec.to, spec.weight, spec.kind)?;
        }
        Ok(graph)
    }
}

static EDGE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<from>[A-Za-z0-9_]+)(?P<op>->|-)(?P<to>[A-Za-z0-9_]+):(?P<weight>[-+]?\d+(?:\.\d+)?)$",
    )
    .expect("edge token pattern is valid")
});

static NODE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("node token pattern is valid"));

/// Parses a textual edge list into a builder.
///
/// Tokens are separated by commas, semicolons or whitespace; surrounding
/// braces are ignored. `u-v:w` is undirected, `u->v:w` is directed and a
/// bare name adds an isolated node.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for an empty list or a malformed token.
pub fn parse_edge_list(text: &str) -> Result<GraphBuilder<String>> {
    let body = text.trim().trim_start_matches('{').trim_end_matches('}');
    let mut builder = GraphBuilder::undirected();

    let tokens = body
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    for token in tokens {
        if let Some(caps) = EDGE_TOKEN.captures(token) {
            let weight: f64 = caps["weight"]
                .parse()
                .map_err(|_| Error::InvalidInput(format!("bad weight in '{token}'")))?;
            let kind = if &caps["op"] == "->" {
                EdgeKind::Directed
            } else {
                EdgeKind::Undirected
            };
            builder = builder.edge_spec(EdgeSpec {
                from: caps["from"].to_string(),
                to: caps["to"].to_string(),
                weight,
                kind,
            });
        } else if NODE_TOKEN.is_match(token) {
            builder = builder.node(token.to_string());
        } else {
            return Err(Error::InvalidInput(format!(
                "cannot parse '{token}', expected u-v:w, u->v:w or a node name"
            )));
        }
    }

    if builder.nodes.is_empty() && builder.edges.is_empty() {
        return Err(Error::InvalidInput("edge list is empty".to_string()));
    }
    Ok(builder)
}

/// Where an engine's input graph comes from.
#[derive(Debug, Clone)]
pub enum GraphSource {
    /// A graph supplied by the caller.
    Explicit(WeightedGraph<String>),
    /// A random connected graph with this many nodes.
    Random {
        /// Number of nodes.
        nodes: usize,
        /// Seed for reproducible graphs; `None` draws from entropy.
        seed: Option<u64>,
    },
}

impl GraphSource {
    /// Produces the graph, calling the factory only for random sources.
    ///
    /// # Errors
    ///
    /// Propagates the factory's error (e.g. [`Error::InvalidInput`] for a
    /// zero node count).
    pub fn resolve(self, factory: &dyn RandomGraphFactory) -> Result<WeightedGraph<String>> {
        match self {
            Self::Explicit(graph) => Ok(graph),
            Self::Random { nodes, seed } => factory.build(nodes, seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SpanningTreeFactory;

    #[test]
    fn test_builder_undirected() {
        let graph = GraphBuilder::undirected()
            .edge('A', 'B', 4.0)
            .edge('A', 'C', 2.0)
            .node('Z')
            .build()
            .unwrap();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.weight(&'B', &'A'), Some(4.0));
        assert!(graph.contains_node(&'Z'));
    }

    #[test]
    fn test_builder_directed_triples() {
        let graph = GraphBuilder::directed()
            .edges([(0u32, 1, 4.0), (0, 2, -2.0)])
            .build()
            .unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight(&2, &0), None);
    }

    #[test]
    fn test_builder_reports_invalid_edge() {
        let err = GraphBuilder::undirected()
            .edge('A', 'B', 1.0)
            .edge('B', 'B', 1.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidEdge { .. }));
    }

    #[test]
    fn test_parse_undirected_list() {
        let graph = parse_edge_list("{A-B:4, A-C:2, B-C:1}")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert!(graph.is_undirected());
        assert_eq!(graph.weight(&"C".to_string(), &"B".to_string()), Some(1.0));
    }

    #[test]
    fn test_parse_directed_negative() {
        let graph = parse_edge_list("0->1:4 0->2:-2\n2->1:1.5")
            .unwrap()
            .build()
            .unwrap();

        assert!(!graph.is_undirected());
        assert_eq!(graph.weight(&"0".to_string(), &"2".to_string()), Some(-2.0));
        assert_eq!(graph.weight(&"2".to_string(), &"1".to_string()), Some(1.5));
        assert_eq!(graph.weight(&"2".to_string(), &"0".to_string()), None);
    }

    #[test]
    fn test_parse_isolated_node() {
        let graph = parse_edge_list("A-B:1; E").unwrap().build().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.first_node().map(String::as_str), Some("E"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_edge_list("A-B:x").unwrap_err(),
            Error::InvalidInput(_)
        ));
        assert!(matches!(
            parse_edge_list("A=B:1").unwrap_err(),
            Error::InvalidInput(_)
        ));
        assert!(matches!(
            parse_edge_list("  , ").unwrap_err(),
            Error::InvalidInput(_)
        ));
    }

    #[test]
    fn test_source_explicit_passthrough() {
        let graph = parse_edge_list("A-B:1").unwrap().build().unwrap();
        let resolved = GraphSource::Explicit(graph)
            .resolve(&SpanningTreeFactory::default())
            .unwrap();
        assert_eq!(resolved.edge_count(), 1);
    }

    #[test]
    fn test_source_random() {
        let graph = GraphSource::Random {
            nodes: 6,
            seed: Some(7),
        }
        .resolve(&SpanningTreeFactory::default())
        .unwrap();
        assert_eq!(graph.node_count(), 6);
    }
}
