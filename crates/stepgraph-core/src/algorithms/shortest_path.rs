//! Single-source shortest path engines.
//!
//! Both engines fill a [`ShortestPathTable`] and hand a full copy of it to the
//! observer after every step.
//!
//! - [`dijkstra`] - binary-heap Dijkstra, non-negative weights only
//! - [`bellman_ford`] - pass-based relaxation with negative cycle detection

use std::collections::BinaryHeap;

use indexmap::IndexMap;
use serde::Serialize;
use stepgraph_common::types::{Distance, Node, WeightedEdge};
use stepgraph_common::utils::error::{Error, Result};
use stepgraph_common::utils::hash::FxHashSet;

use super::traits::{EventSink, MinScored, Priority, StepKind, StepObserver, StepState};
use crate::graph::WeightedGraph;

/// Distance and predecessor of one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEntry<N> {
    /// Best known distance from the source.
    pub distance: Distance,
    /// Previous node on the best known path.
    pub predecessor: Option<N>,
}

/// Distances and predecessors for every node, in graph node order.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathTable<N> {
    source: N,
    entries: IndexMap<N, PathEntry<N>>,
}

// Entries compare in node order.
impl<N: PartialEq> PartialEq for ShortestPathTable<N> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.entries.iter().eq(other.entries.iter())
    }
}

impl<N: Node> ShortestPathTable<N> {
    /// Everything unreachable except the source, which is at distance zero.
    fn new<'a>(nodes: impl IntoIterator<Item = &'a N>, source: N) -> Self
    where
        N: 'a,
    {
        let mut entries: IndexMap<N, PathEntry<N>> = nodes
            .into_iter()
            .map(|n| {
                (
                    n.clone(),
                    PathEntry {
                        distance: Distance::Unreachable,
                        predecessor: None,
                    },
                )
            })
            .collect();
        entries.insert(
            source.clone(),
            PathEntry {
                distance: Distance::ZERO,
                predecessor: None,
            },
        );
        Self { source, entries }
    }

    fn update(&mut self, node: &N, distance: Distance, predecessor: N) {
        if let Some(entry) = self.entries.get_mut(node) {
            entry.distance = distance;
            entry.predecessor = Some(predecessor);
        }
    }

    /// The source node of the run.
    #[must_use]
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Distance of a node, or `None` if the node is not in the table.
    #[must_use]
    pub fn distance(&self, node: &N) -> Option<Distance> {
        self.entries.get(node).map(|e| e.distance)
    }

    /// Predecessor of a node on its best known path.
    #[must_use]
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.entries.get(node)?.predecessor.as_ref()
    }

    /// The full entry of a node.
    #[must_use]
    pub fn entry(&self, node: &N) -> Option<&PathEntry<N>> {
        self.entries.get(node)
    }

    /// Iterates over all entries in graph node order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &PathEntry<N>)> + '_ {
        self.entries.iter()
    }

    /// Distances in graph node order.
    #[must_use]
    pub fn distances(&self) -> Vec<Distance> {
        self.entries.values().map(|e| e.distance).collect()
    }

    /// Predecessors in graph node order.
    #[must_use]
    pub fn predecessors(&self) -> Vec<Option<N>> {
        self.entries
            .values()
            .map(|e| e.predecessor.clone())
            .collect()
    }

    /// Number of nodes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of nodes with a finite distance, the source included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.entries
            .values()
            .filter(|e| e.distance.is_reachable())
            .count()
    }

    /// Reconstructs the path from the source to `target`.
    ///
    /// Returns `None` if the target is unknown or unreachable.
    #[must_use]
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.distance(target)?.is_reachable() {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(previous) = self.predecessor(current) {
            // A well-formed predecessor chain is at most one entry per node.
            if path.len() > self.entries.len() {
                return None;
            }
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

fn paths<N: Node>(table: &ShortestPathTable<N>) -> StepState<N> {
    StepState::Paths(table.clone())
}

fn require_source<N: Node>(graph: &WeightedGraph<N>, source: &N) -> Result<()> {
    if graph.contains_node(source) {
        Ok(())
    } else {
        Err(Error::unknown_node(source))
    }
}

/// `distance + weight`, rejecting sums outside the finite `f64` range.
fn relax<N: Node>(distance: Distance, from: &N, to: &N, weight: f64) -> Result<Distance> {
    distance.checked_extend(weight).ok_or_else(|| {
        Error::InvalidInput(format!(
            "distance via {from} -> {to} (weight {weight}) exceeds the f64 range"
        ))
    })
}

/// Dijkstra's algorithm from `source`.
///
/// Every node is finalized at most once, in non-decreasing distance order.
/// Heap entries are never removed on improvement; an outdated entry is
/// skipped when it surfaces. Ties pop in insertion order. Runs in
/// O((V + E) log V).
///
/// Events: `Init`, then per finalized node a `NodeSelected` followed by one
/// `DistanceUpdated` per successful relaxation.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if the source is not in the graph and
/// [`Error::NegativeWeightNotSupported`] if any edge weight is negative. Both
/// are raised before the first event. A path length that overflows `f64`
/// fails with [`Error::InvalidInput`].
pub fn dijkstra<N: Node, O: StepObserver<N>>(
    graph: &WeightedGraph<N>,
    source: &N,
    observer: O,
) -> Result<ShortestPathTable<N>> {
    require_source(graph, source)?;
    if let Some((edge, _)) = graph.edges().find(|(edge, _)| edge.weight < 0.0) {
        return Err(Error::NegativeWeightNotSupported {
            from: edge.from.to_string(),
            to: edge.to.to_string(),
            weight: edge.weight.to_string(),
        });
    }

    let mut table = ShortestPathTable::new(graph.nodes(), source.clone());
    let mut sink = EventSink::new(observer);
    sink.emit(
        StepKind::Init,
        None,
        Some(source.clone()),
        None,
        paths(&table),
    );

    let mut finalized: FxHashSet<N> = FxHashSet::default();
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;
    heap.push(MinScored(Priority { weight: 0.0, seq }, source.clone()));

    while let Some(MinScored(priority, u)) = heap.pop() {
        if finalized.contains(&u) {
            tracing::trace!(node = %u, distance = priority.weight, "dijkstra skipped stale entry");
            continue;
        }
        finalized.insert(u.clone());
        tracing::debug!(node = %u, distance = priority.weight, "dijkstra selected node");
        sink.emit(
            StepKind::NodeSelected,
            None,
            Some(u.clone()),
            None,
            paths(&table),
        );

        let base = table.distance(&u).unwrap_or_default();
        for (v, weight) in graph.neighbors(&u)? {
            if finalized.contains(v) {
                continue;
            }
            let candidate = relax(base, &u, v, weight)?;
            if !candidate.improves_on(table.distance(v).unwrap_or_default()) {
                continue;
            }

            table.update(v, candidate, u.clone());
            if let Some(d) = candidate.value() {
                seq += 1;
                heap.push(MinScored(Priority { weight: d, seq }, v.clone()));
            }
            tracing::debug!(from = %u, to = %v, distance = %candidate, "dijkstra relaxed edge");
            sink.emit(
                StepKind::DistanceUpdated,
                Some(WeightedEdge::new(u.clone(), v.clone(), weight)),
                Some(v.clone()),
                None,
                paths(&table),
            );
        }
    }

    tracing::info!(
        source = %source,
        reachable = table.reachable_count(),
        "dijkstra finished"
    );
    Ok(table)
}

/// Bellman-Ford from `source`.
///
/// Scans every arc (undirected edges in both directions) in registration
/// order, for up to `n - 1` passes. A pass without any update ends the run
/// early with a `Converged` event. A final verification pass then checks
/// that no arc can still be relaxed.
///
/// Events: `Init`, then one `DistanceUpdated` or `EdgeScannedNoUpdate` per
/// arc per pass, each tagged with its pass number.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if the source is not in the graph and
/// [`Error::NegativeCycleDetected`] if a negative cycle is reachable from
/// the source. The latter is only decided after the relaxation passes. A
/// path length that overflows `f64` fails with [`Error::InvalidInput`].
pub fn bellman_ford<N: Node, O: StepObserver<N>>(
    graph: &WeightedGraph<N>,
    source: &N,
    observer: O,
) -> Result<ShortestPathTable<N>> {
    require_source(graph, source)?;

    let arcs = graph.arcs();
    let mut table = ShortestPathTable::new(graph.nodes(), source.clone());
    let mut sink = EventSink::new(observer);
    sink.emit(
        StepKind::Init,
        None,
        Some(source.clone()),
        None,
        paths(&table),
    );

    let max_passes = graph.node_count().saturating_sub(1);
    for pass in 1..=max_passes {
        let mut updated = false;
        for arc in &arcs {
            let candidate = relax(
                table.distance(&arc.from).unwrap_or_default(),
                &arc.from,
                &arc.to,
                arc.weight,
            )?;
            if candidate.improves_on(table.distance(&arc.to).unwrap_or_default()) {
                table.update(&arc.to, candidate, arc.from.clone());
                updated = true;
                tracing::debug!(pass, arc = %arc, distance = %candidate, "bellman-ford relaxed arc");
                sink.emit(
                    StepKind::DistanceUpdated,
                    Some(arc.clone()),
                    Some(arc.to.clone()),
                    Some(pass),
                    paths(&table),
                );
            } else {
                sink.emit(
                    StepKind::EdgeScannedNoUpdate,
                    Some(arc.clone()),
                    None,
                    Some(pass),
                    paths(&table),
                );
            }
        }

        if !updated {
            tracing::debug!(pass, "bellman-ford converged early");
            sink.emit(StepKind::Converged, None, None, Some(pass), paths(&table));
            break;
        }
    }

    for arc in &arcs {
        let candidate = table
            .distance(&arc.from)
            .unwrap_or_default()
            .extend(arc.weight);
        if candidate.improves_on(table.distance(&arc.to).unwrap_or_default()) {
            tracing::warn!(source = %source, arc = %arc, "negative-weight cycle detected");
            return Err(Error::NegativeCycleDetected {
                origin: source.to_string(),
            });
        }
    }

    tracing::info!(
        source = %source,
        reachable = table.reachable_count(),
        "bellman-ford finished"
    );
    Ok(table)
}
