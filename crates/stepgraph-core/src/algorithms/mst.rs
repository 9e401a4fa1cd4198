//! Minimum spanning tree engines.
//!
//! [`Kruskal`] and [`Prim`] are iterators: every `next()` runs the algorithm
//! up to its next accepted edge and returns it, reporting accepted and
//! discarded edges to the observer on the way. Dropping an iterator early
//! simply stops the run. [`kruskal`] and [`prim`] drive them to completion.

use std::collections::BinaryHeap;

use serde::Serialize;
use stepgraph_common::types::{Node, WeightedEdge};
use stepgraph_common::utils::error::{Error, Result};
use stepgraph_common::utils::hash::FxHashSet;

use super::components::DisjointSet;
use super::traits::{EventSink, MinScored, Priority, StepKind, StepObserver, StepState};
use crate::graph::WeightedGraph;

/// Result of a spanning tree run: a tree or, for disconnected input, a forest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree<N> {
    /// Accepted edges in acceptance order.
    pub edges: Vec<WeightedEdge<N>>,
    /// Nodes in the input graph.
    pub node_count: usize,
}

impl<N: Node> SpanningTree<N> {
    /// Sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Returns true if the tree connects every node of the graph.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 >= self.node_count
    }

    /// Number of trees in the forest, counting untouched nodes as trees.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.node_count.saturating_sub(self.edges.len())
    }

    /// Returns true if the edge (in either orientation) was accepted.
    #[must_use]
    pub fn contains(&self, a: &N, b: &N) -> bool {
        self.edges
            .iter()
            .any(|e| (&e.from == a && &e.to == b) || (&e.from == b && &e.to == a))
    }
}

fn require_undirected<N: Node>(graph: &WeightedGraph<N>) -> Result<()> {
    if let Some((edge, _)) = graph.edges().find(|(_, kind)| kind.is_directed()) {
        return Err(Error::InvalidInput(format!(
            "spanning trees need an undirected graph, found directed edge {} -> {}",
            edge.from, edge.to
        )));
    }
    Ok(())
}

/// Accepted edges plus their running weight.
#[derive(Debug, Clone)]
struct TreeProgress<N> {
    edges: Vec<WeightedEdge<N>>,
    total_weight: f64,
}

impl<N: Node> TreeProgress<N> {
    fn new() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    fn accept(&mut self, edge: WeightedEdge<N>) {
        self.total_weight += edge.weight;
        self.edges.push(edge);
    }

    fn snapshot(&self) -> StepState<N> {
        StepState::Tree {
            edges: self.edges.clone(),
            total_weight: self.total_weight,
        }
    }
}

// === Kruskal ===

/// Kruskal's algorithm as a lazy sequence of accepted edges.
///
/// Candidate edges are every undirected edge once, oriented `from < to`, in
/// ascending `(weight, from, to)` order. An edge is accepted when its
/// endpoints lie in different components. The run ends after `n - 1`
/// acceptances or when the candidates run out, in which case the result is a
/// minimum spanning forest.
pub struct Kruskal<N: Node, O> {
    candidates: std::vec::IntoIter<WeightedEdge<N>>,
    sets: DisjointSet<N>,
    tree: TreeProgress<N>,
    target: usize,
    node_count: usize,
    sink: EventSink<O>,
}

impl<N: Node, O: StepObserver<N>> Kruskal<N, O> {
    /// Prepares a run and emits the `Init` event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the graph has directed edges.
    pub fn new(graph: &WeightedGraph<N>, observer: O) -> Result<Self> {
        require_undirected(graph)?;

        let mut candidates: Vec<WeightedEdge<N>> =
            graph.edges().map(|(edge, _)| edge.canonical()).collect();
        candidates.sort_by(WeightedEdge::cmp_by_weight);

        let node_count = graph.node_count();
        let tree = TreeProgress::new();
        let mut sink = EventSink::new(observer);
        sink.emit(StepKind::Init, None, None, None, tree.snapshot());
        tracing::debug!(
            nodes = node_count,
            candidates = candidates.len(),
            "kruskal started"
        );

        Ok(Self {
            candidates: candidates.into_iter(),
            sets: DisjointSet::from_nodes(graph.nodes()),
            tree,
            target: node_count.saturating_sub(1),
            node_count,
            sink,
        })
    }

    /// Edges accepted so far.
    #[must_use]
    pub fn accepted(&self) -> &[WeightedEdge<N>] {
        &self.tree.edges
    }

    /// Runs to completion and returns the tree (or forest).
    pub fn finish(mut self) -> SpanningTree<N> {
        while self.next().is_some() {}
        tracing::info!(
            edges = self.tree.edges.len(),
            total_weight = self.tree.total_weight,
            "kruskal finished"
        );
        SpanningTree {
            edges: self.tree.edges,
            node_count: self.node_count,
        }
    }
}

impl<N: Node, O: StepObserver<N>> Iterator for Kruskal<N, O> {
    type Item = WeightedEdge<N>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.tree.edges.len() < self.target {
            let edge = self.candidates.next()?;
            if self.sets.union(&edge.from, &edge.to) {
                tracing::debug!(edge = %edge, "kruskal accepted edge");
                self.tree.accept(edge.clone());
                self.sink.emit(
                    StepKind::EdgeAdded,
                    Some(edge.clone()),
                    None,
                    None,
                    self.tree.snapshot(),
                );
                return Some(edge);
            }
            tracing::trace!(edge = %edge, "kruskal discarded edge, endpoints already connected");
            self.sink.emit(
                StepKind::EdgeScannedNoUpdate,
                Some(edge),
                None,
                None,
                self.tree.snapshot(),
            );
        }
        None
    }
}

/// Runs Kruskal's algorithm to completion.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the graph has directed edges.
pub fn kruskal<N: Node, O: StepObserver<N>>(
    graph: &WeightedGraph<N>,
    observer: O,
) -> Result<SpanningTree<N>> {
    Ok(Kruskal::new(graph, observer)?.finish())
}

// === Prim ===

/// Prim's algorithm as a lazy sequence of accepted edges.
///
/// Grows one tree from `start`. Candidate edges wait in a min-heap keyed by
/// weight and insertion sequence; a popped candidate whose far end is already
/// in the tree is discarded. Only the component containing `start` is
/// covered.
pub struct Prim<'g, N: Node, O> {
    graph: &'g WeightedGraph<N>,
    visited: FxHashSet<N>,
    heap: BinaryHeap<MinScored<Priority, WeightedEdge<N>>>,
    next_seq: u64,
    tree: TreeProgress<N>,
    sink: EventSink<O>,
}

impl<'g, N: Node, O: StepObserver<N>> Prim<'g, N, O> {
    /// Prepares a run from `start` and emits the `Init` event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `start` is not in the graph and
    /// [`Error::InvalidInput`] if the graph has directed edges.
    pub fn new(graph: &'g WeightedGraph<N>, start: &N, observer: O) -> Result<Self> {
        if !graph.contains_node(start) {
            return Err(Error::unknown_node(start));
        }
        require_undirected(graph)?;

        let tree = TreeProgress::new();
        let mut sink = EventSink::new(observer);
        sink.emit(
            StepKind::Init,
            None,
            Some(start.clone()),
            None,
            tree.snapshot(),
        );
        tracing::debug!(start = %start, nodes = graph.node_count(), "prim started");

        let mut prim = Self {
            graph,
            visited: FxHashSet::default(),
            heap: BinaryHeap::new(),
            next_seq: 0,
            tree,
            sink,
        };
        prim.visit(start);
        Ok(prim)
    }

    /// Marks a node as part of the tree and queues its edges to unvisited
    /// neighbors.
    fn visit(&mut self, node: &N) {
        self.visited.insert(node.clone());
        let graph = self.graph;
        let Ok(neighbors) = graph.neighbors(node) else {
            return;
        };
        for (neighbor, weight) in neighbors {
            if self.visited.contains(neighbor) {
                continue;
            }
            let priority = Priority {
                weight,
                seq: self.next_seq,
            };
            self.next_seq += 1;
            self.heap.push(MinScored(
                priority,
                WeightedEdge::new(node.clone(), neighbor.clone(), weight),
            ));
        }
    }

    /// Edges accepted so far.
    #[must_use]
    pub fn accepted(&self) -> &[WeightedEdge<N>] {
        &self.tree.edges
    }

    /// Runs to completion and returns the tree over the reachable component.
    pub fn finish(mut self) -> SpanningTree<N> {
        while self.next().is_some() {}
        tracing::info!(
            edges = self.tree.edges.len(),
            total_weight = self.tree.total_weight,
            "prim finished"
        );
        SpanningTree {
            edges: self.tree.edges,
            node_count: self.graph.node_count(),
        }
    }
}

impl<N: Node, O: StepObserver<N>> Iterator for Prim<'_, N, O> {
    type Item = WeightedEdge<N>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(MinScored(_, edge)) = self.heap.pop() {
            if self.visited.contains(&edge.to) {
                tracing::trace!(edge = %edge, "prim discarded edge, far end already in tree");
                self.sink.emit(
                    StepKind::EdgeScannedNoUpdate,
                    Some(edge),
                    None,
                    None,
                    self.tree.snapshot(),
                );
                continue;
            }

            self.visit(&edge.to);
            tracing::debug!(edge = %edge, "prim accepted edge");
            self.tree.accept(edge.clone());
            self.sink.emit(
                StepKind::EdgeAdded,
                Some(edge.clone()),
                Some(edge.to.clone()),
                None,
                self.tree.snapshot(),
            );
            return Some(edge);
        }
        None
    }
}

/// Runs Prim's algorithm from `start` to completion.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if `start` is not in the graph and
/// [`Error::InvalidInput`] if the graph has directed edges.
pub fn prim<N: Node, O: StepObserver<N>>(
    graph: &WeightedGraph<N>,
    start: &N,
    observer: O,
) -> Result<SpanningTree<N>> {
    Ok(Prim::new(graph, start, observer)?.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::traits::{NoopObserver, RecordingObserver};
    use crate::graph::GraphBuilder;
    use crate::graph::samples::spanning_tree_demo;

    fn letters() -> WeightedGraph<char> {
        GraphBuilder::undirected()
            .edges([
                ('A', 'B', 4.0),
                ('A', 'C', 2.0),
                ('A', 'D', 5.0),
                ('B', 'C', 1.0),
                ('B', 'E', 3.0),
                ('C', 'D', 3.0),
                ('C', 'E', 4.0),
                ('D', 'E', 2.0),
            ])
            .build()
            .unwrap()
    }

    fn pairs(tree: &SpanningTree<char>) -> Vec<(char, char, f64)> {
        tree.edges.iter().map(|e| (e.from, e.to, e.weight)).collect()
    }

    #[test]
    fn test_kruskal_classic_graph() {
        let tree = kruskal(&letters(), NoopObserver).unwrap();

        assert_eq!(
            pairs(&tree),
            vec![
                ('B', 'C', 1.0),
                ('A', 'C', 2.0),
                ('D', 'E', 2.0),
                ('B', 'E', 3.0)
            ]
        );
        assert_eq!(tree.total_weight(), 8.0);
        assert!(tree.is_spanning());
        assert_eq!(tree.component_count(), 1);
    }

    #[test]
    fn test_prim_classic_graph() {
        let tree = prim(&letters(), &'A', NoopObserver).unwrap();

        assert_eq!(
            pairs(&tree),
            vec![
                ('A', 'C', 2.0),
                ('C', 'B', 1.0),
                ('C', 'D', 3.0),
                ('D', 'E', 2.0)
            ]
        );
        assert_eq!(tree.total_weight(), 8.0);
        assert!(tree.is_spanning());
    }

    #[test]
    fn test_prim_matches_kruskal_from_every_start() {
        let graph = letters();
        let expected = kruskal(&graph, NoopObserver).unwrap().total_weight();
        for start in ['A', 'B', 'C', 'D', 'E'] {
            let tree = prim(&graph, &start, NoopObserver).unwrap();
            assert_eq!(tree.total_weight(), expected, "start {start}");
            assert_eq!(tree.edges.len(), 4);
        }
    }

    #[test]
    fn test_kruskal_events() {
        let mut recorder = RecordingObserver::new();
        kruskal(&letters(), &mut recorder).unwrap();

        // Init, then the four accepted edges; the search stops once the
        // tree spans, before any discard is needed.
        assert_eq!(
            recorder.kinds(),
            vec![
                StepKind::Init,
                StepKind::EdgeAdded,
                StepKind::EdgeAdded,
                StepKind::EdgeAdded,
                StepKind::EdgeAdded,
            ]
        );
        let last = recorder.events().last().unwrap();
        assert_eq!(last.tree().unwrap().len(), 4);
        match &last.state {
            StepState::Tree { total_weight, .. } => assert_eq!(*total_weight, 8.0),
            StepState::Paths(_) => panic!("expected tree state"),
        }
    }

    #[test]
    fn test_kruskal_reports_discards() {
        // Triangle plus a pendant: the heaviest triangle edge is scanned
        // before the pendant edge and must be discarded.
        let graph = GraphBuilder::undirected()
            .edges([
                ('A', 'B', 1.0),
                ('B', 'C', 2.0),
                ('A', 'C', 3.0),
                ('C', 'D', 4.0),
            ])
            .build()
            .unwrap();
        let mut recorder = RecordingObserver::new();
        let tree = kruskal(&graph, &mut recorder).unwrap();

        assert_eq!(tree.total_weight(), 7.0);
        assert_eq!(
            recorder.kinds(),
            vec![
                StepKind::Init,
                StepKind::EdgeAdded,
                StepKind::EdgeAdded,
                StepKind::EdgeScannedNoUpdate,
                StepKind::EdgeAdded,
            ]
        );
        let discarded = recorder.events()[3].edge.clone().unwrap();
        assert_eq!((discarded.from, discarded.to), ('A', 'C'));
    }

    #[test]
    fn test_kruskal_is_lazy() {
        let graph = letters();
        let mut recorder = RecordingObserver::new();
        {
            let mut engine = Kruskal::new(&graph, &mut recorder).unwrap();
            let first = engine.next().unwrap();
            assert_eq!((first.from, first.to), ('B', 'C'));
            assert_eq!(engine.accepted().len(), 1);
        }
        // Init plus exactly one accepted edge
        assert_eq!(recorder.events().len(), 2);
    }

    #[test]
    fn test_kruskal_forest() {
        let graph = GraphBuilder::undirected()
            .edges([('A', 'B', 1.0), ('C', 'D', 2.0)])
            .node('E')
            .build()
            .unwrap();
        let tree = kruskal(&graph, NoopObserver).unwrap();

        assert_eq!(tree.edges.len(), 2);
        assert!(!tree.is_spanning());
        assert_eq!(tree.component_count(), 3);
    }

    #[test]
    fn test_prim_covers_only_reachable_component() {
        let graph = GraphBuilder::undirected()
            .edges([('A', 'B', 1.0), ('C', 'D', 2.0)])
            .build()
            .unwrap();
        let tree = prim(&graph, &'C', NoopObserver).unwrap();

        assert_eq!(pairs(&tree), vec![('C', 'D', 2.0)]);
        assert!(!tree.is_spanning());
    }

    #[test]
    fn test_prim_unknown_start() {
        let err = prim(&letters(), &'Z', NoopObserver).unwrap_err();
        assert_eq!(err, Error::unknown_node('Z'));
    }

    #[test]
    fn test_rejects_directed_graph() {
        let graph = GraphBuilder::directed()
            .edge('A', 'B', 1.0)
            .build()
            .unwrap();
        assert!(matches!(
            kruskal(&graph, NoopObserver).unwrap_err(),
            Error::InvalidInput(_)
        ));
        assert!(matches!(
            prim(&graph, &'A', NoopObserver).unwrap_err(),
            Error::InvalidInput(_)
        ));
    }

    #[test]
    fn test_prim_tie_break_by_insertion_order() {
        // Both edges from A weigh 1; B was registered first.
        let graph = GraphBuilder::undirected()
            .edges([('A', 'C', 1.0), ('A', 'B', 1.0)])
            .build()
            .unwrap();
        let tree = prim(&graph, &'A', NoopObserver).unwrap();
        assert_eq!(tree.edges[0].to, 'C');
        assert_eq!(tree.edges[1].to, 'B');
    }

    #[test]
    fn test_prim_reports_discards() {
        let graph = GraphBuilder::undirected()
            .edges([('A', 'B', 1.0), ('B', 'C', 1.0), ('A', 'C', 5.0)])
            .build()
            .unwrap();
        let mut recorder = RecordingObserver::new();
        prim(&graph, &'A', &mut recorder).unwrap();

        assert_eq!(
            recorder.kinds(),
            vec![
                StepKind::Init,
                StepKind::EdgeAdded,
                StepKind::EdgeAdded,
                StepKind::EdgeScannedNoUpdate,
            ]
        );
    }

    #[test]
    fn test_single_node_and_empty_graph() {
        let mut graph: WeightedGraph<char> = WeightedGraph::new();
        assert!(kruskal(&graph, NoopObserver).unwrap().edges.is_empty());

        graph.add_node('A');
        let tree = prim(&graph, &'A', NoopObserver).unwrap();
        assert!(tree.edges.is_empty());
        assert!(tree.is_spanning());
    }

    #[test]
    fn test_deterministic_events() {
        let graph = spanning_tree_demo();
        let run = || {
            let mut recorder = RecordingObserver::new();
            kruskal(&graph, &mut recorder).unwrap();
            prim(&graph, &"D".to_string(), &mut recorder).unwrap();
            recorder.into_events()
        };
        assert_eq!(run(), run());
    }
}
