//! Random connected graph generation.

use rand::prelude::*;
use rand::rngs::SmallRng;
use stepgraph_common::utils::error::{Error, Result};

use super::weighted::WeightedGraph;

/// Supplies a graph when the caller did not give one explicitly.
///
/// Implementations must return a connected, undirected, simple graph with
/// exactly `nodes` nodes and positive integer weights.
pub trait RandomGraphFactory {
    /// Builds a graph with `nodes` nodes. Equal seeds give equal graphs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `nodes` is zero.
    fn build(&self, nodes: usize, seed: Option<u64>) -> Result<WeightedGraph<String>>;
}

/// Tuning for [`SpanningTreeFactory`].
#[derive(Debug, Clone)]
pub struct RandomGraphConfig {
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: u32,
    /// Extra-edge attempts per node after the spanning tree is laid down.
    pub extra_edge_rounds_per_node: usize,
    /// Probability that an attempt adds its edge.
    pub extra_edge_probability: f64,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            max_weight: 10,
            extra_edge_rounds_per_node: 2,
            extra_edge_probability: 0.5,
        }
    }
}

impl RandomGraphConfig {
    /// Sets the largest edge weight (at least 1).
    pub fn with_max_weight(mut self, max_weight: u32) -> Self {
        self.max_weight = max_weight.max(1);
        self
    }

    /// Sets the number of extra-edge attempts per node.
    pub fn with_extra_edge_rounds(mut self, rounds: usize) -> Self {
        self.extra_edge_rounds_per_node = rounds;
        self
    }

    /// Sets the extra-edge probability, clamped to `[0, 1]`.
    pub fn with_extra_edge_probability(mut self, probability: f64) -> Self {
        self.extra_edge_probability = probability.clamp(0.0, 1.0);
        self
    }
}

/// Random graphs grown from a random spanning tree.
///
/// Nodes are shuffled and each one after the first is linked to a random
/// earlier node, which guarantees connectivity. Extra edges are then tried
/// between random distinct pairs that are not yet linked. No particular
/// density is promised.
#[derive(Debug, Clone, Default)]
pub struct SpanningTreeFactory {
    config: RandomGraphConfig,
}

impl SpanningTreeFactory {
    /// Creates a factory with custom tuning.
    #[must_use]
    pub fn with_config(config: RandomGraphConfig) -> Self {
        Self { config }
    }

    /// Returns the tuning in use.
    #[must_use]
    pub fn config(&self) -> &RandomGraphConfig {
        &self.config
    }

    fn random_weight(&self, rng: &mut SmallRng) -> f64 {
        f64::from(rng.gen_range(1..=self.config.max_weight.max(1)))
    }
}

impl RandomGraphFactory for SpanningTreeFactory {
    fn build(&self, nodes: usize, seed: Option<u64>) -> Result<WeightedGraph<String>> {
        if nodes == 0 {
            return Err(Error::InvalidInput(
                "node count must be positive".to_string(),
            ));
        }

        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let labels: Vec<String> = (0..nodes).map(node_label).collect();
        let mut graph = WeightedGraph::new();
        for label in &labels {
            graph.add_node(label.clone());
        }

        let mut order: Vec<usize> = (0..nodes).collect();
        order.shuffle(&mut rng);
        for i in 1..nodes {
            let u = &labels[order[i]];
            let v = &labels[order[rng.gen_range(0..i)]];
            let weight = self.random_weight(&mut rng);
            graph.add_undirected_edge(u.clone(), v.clone(), weight)?;
        }

        if nodes >= 2 {
            let attempts = nodes * self.config.extra_edge_rounds_per_node;
            for _ in 0..attempts {
                let pair: Vec<&String> = labels.choose_multiple(&mut rng, 2).collect();
                let (u, v) = (pair[0], pair[1]);
                if graph.weight(u, v).is_none()
                    && rng.gen_bool(self.config.extra_edge_probability)
                {
                    let weight = self.random_weight(&mut rng);
                    graph.add_undirected_edge(u.clone(), v.clone(), weight)?;
                }
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            ?seed,
            "generated random graph"
        );
        Ok(graph)
    }
}

/// Spreadsheet-style label for the `index`-th node: `A..Z`, `AA..AZ`, ...
#[must_use]
pub fn node_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::connected_component_count;

    #[test]
    fn test_node_label() {
        assert_eq!(node_label(0), "A");
        assert_eq!(node_label(25), "Z");
        assert_eq!(node_label(26), "AA");
        assert_eq!(node_label(27), "AB");
        assert_eq!(node_label(701), "ZZ");
        assert_eq!(node_label(702), "AAA");
    }

    #[test]
    fn test_zero_nodes_rejected() {
        let err = SpanningTreeFactory::default().build(0, Some(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_single_node() {
        let graph = SpanningTreeFactory::default().build(1, Some(1)).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_connected_simple_positive() {
        let factory = SpanningTreeFactory::default();
        for seed in 0..20 {
            let graph = factory.build(12, Some(seed)).unwrap();
            assert_eq!(graph.node_count(), 12);
            assert!(graph.edge_count() >= 11);
            assert!(graph.is_undirected());
            assert_eq!(connected_component_count(&graph), 1);
            for (edge, _) in graph.edges() {
                assert!(edge.weight >= 1.0 && edge.weight <= 10.0);
                assert_eq!(edge.weight.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let factory = SpanningTreeFactory::default();
        let a = factory.build(10, Some(42)).unwrap();
        let b = factory.build(10, Some(42)).unwrap();
        let edges_a: Vec<_> = a.edges().map(|(e, _)| e.clone()).collect();
        let edges_b: Vec<_> = b.edges().map(|(e, _)| e.clone()).collect();
        assert_eq!(edges_a, edges_b);
    }

    #[test]
    fn test_tree_only_config() {
        let factory = SpanningTreeFactory::with_config(
            RandomGraphConfig::default()
                .with_extra_edge_rounds(0)
                .with_max_weight(3),
        );
        let graph = factory.build(8, Some(3)).unwrap();
        assert_eq!(graph.edge_count(), 7);
        assert!(graph.edges().all(|(e, _)| e.weight <= 3.0));
    }
}
