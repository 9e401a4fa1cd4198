//! The classic demonstration graphs.
//!
//! Each function builds a fresh graph; nothing here is shared state.

use super::builder::GraphBuilder;
use super::weighted::WeightedGraph;

fn build(builder: GraphBuilder<String>) -> WeightedGraph<String> {
    // Literal edges below are simple and finite.
    builder.build().unwrap_or_default()
}

fn s(label: &str) -> String {
    label.to_string()
}

/// Five-node undirected graph used for the spanning tree demos.
///
/// `A-B:4, A-C:2, A-D:5, B-C:1, B-E:3, C-D:3, C-E:4, D-E:2`
#[must_use]
pub fn spanning_tree_demo() -> WeightedGraph<String> {
    build(GraphBuilder::undirected().edges([
        (s("A"), s("B"), 4.0),
        (s("A"), s("C"), 2.0),
        (s("A"), s("D"), 5.0),
        (s("B"), s("C"), 1.0),
        (s("B"), s("E"), 3.0),
        (s("C"), s("D"), 3.0),
        (s("C"), s("E"), 4.0),
        (s("D"), s("E"), 2.0),
    ]))
}

/// Four-node directed graph with non-negative weights, for Dijkstra.
///
/// `0->1:4, 0->2:2, 1->3:2, 2->1:1, 2->3:5`
#[must_use]
pub fn dijkstra_demo() -> WeightedGraph<String> {
    build(GraphBuilder::directed().edges([
        (s("0"), s("1"), 4.0),
        (s("0"), s("2"), 2.0),
        (s("1"), s("3"), 2.0),
        (s("2"), s("1"), 1.0),
        (s("2"), s("3"), 5.0),
    ]))
}

/// Four-node directed graph with a negative edge but no negative cycle.
///
/// `0->1:4, 0->2:-2, 1->3:2, 2->1:1, 2->3:5`
#[must_use]
pub fn bellman_ford_demo() -> WeightedGraph<String> {
    build(GraphBuilder::directed().edges([
        (s("0"), s("1"), 4.0),
        (s("0"), s("2"), -2.0),
        (s("1"), s("3"), 2.0),
        (s("2"), s("1"), 1.0),
        (s("2"), s("3"), 5.0),
    ]))
}

/// Three-node directed cycle of total weight -1.
///
/// `0->1:1, 1->2:1, 2->0:-3`
#[must_use]
pub fn negative_cycle_demo() -> WeightedGraph<String> {
    build(GraphBuilder::directed().edges([
        (s("0"), s("1"), 1.0),
        (s("1"), s("2"), 1.0),
        (s("2"), s("0"), -3.0),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_complete() {
        assert_eq!(spanning_tree_demo().edge_count(), 8);
        assert_eq!(spanning_tree_demo().node_count(), 5);
        assert_eq!(dijkstra_demo().edge_count(), 5);
        assert_eq!(bellman_ford_demo().node_count(), 4);
        assert_eq!(negative_cycle_demo().node_count(), 3);
    }

    fn weights(graph: &WeightedGraph<String>) -> Vec<(String, String, f64)> {
        graph
            .edges()
            .map(|(e, _)| (e.from.clone(), e.to.clone(), e.weight))
            .collect()
    }

    fn triples(edges: &[(&str, &str, f64)]) -> Vec<(String, String, f64)> {
        edges.iter().map(|&(u, v, w)| (s(u), s(v), w)).collect()
    }

    #[test]
    fn test_sample_edges_and_weights() {
        assert_eq!(
            weights(&spanning_tree_demo()),
            triples(&[
                ("A", "B", 4.0),
                ("A", "C", 2.0),
                ("A", "D", 5.0),
                ("B", "C", 1.0),
                ("B", "E", 3.0),
                ("C", "D", 3.0),
                ("C", "E", 4.0),
                ("D", "E", 2.0),
            ])
        );
        assert!(spanning_tree_demo().is_undirected());

        let dijkstra = [
            ("0", "1", 4.0),
            ("0", "2", 2.0),
            ("1", "3", 2.0),
            ("2", "1", 1.0),
            ("2", "3", 5.0),
        ];
        assert_eq!(weights(&dijkstra_demo()), triples(&dijkstra));

        let mut bellman_ford = dijkstra;
        bellman_ford[1].2 = -2.0;
        assert_eq!(weights(&bellman_ford_demo()), triples(&bellman_ford));

        assert_eq!(
            weights(&negative_cycle_demo()),
            triples(&[("0", "1", 1.0), ("1", "2", 1.0), ("2", "0", -3.0)])
        );
        assert!(!negative_cycle_demo().is_undirected());
    }
}
