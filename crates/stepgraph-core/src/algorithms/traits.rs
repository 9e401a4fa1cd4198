//! Step events, observers, and the shared priority-queue key.

use std::cmp::Ordering;

use serde::Serialize;
use stepgraph_common::types::{Node, WeightedEdge};

use super::shortest_path::ShortestPathTable;

/// What happened in a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepKind {
    /// Initial state, before any work.
    Init,
    /// A spanning tree engine accepted an edge.
    EdgeAdded,
    /// Dijkstra finalized a node.
    NodeSelected,
    /// A relaxation lowered a node's distance.
    DistanceUpdated,
    /// An edge was examined and changed nothing.
    EdgeScannedNoUpdate,
    /// Bellman-Ford finished a pass without any update and stops early.
    Converged,
}

impl StepKind {
    /// Returns true for kinds that changed the aggregate state.
    #[must_use]
    pub const fn is_mutation(self) -> bool {
        matches!(self, Self::EdgeAdded | Self::DistanceUpdated)
    }
}

/// Aggregate state attached to every event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepState<N> {
    /// Spanning tree engines: edges accepted so far.
    Tree {
        /// Accepted edges in acceptance order.
        edges: Vec<WeightedEdge<N>>,
        /// Sum of accepted weights.
        total_weight: f64,
    },
    /// Shortest path engines: the full distance / predecessor table.
    Paths(ShortestPathTable<N>),
}

/// An immutable snapshot handed to a [`StepObserver`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepEvent<N> {
    /// Position in the run; the initial event is step 0.
    pub step: usize,
    /// What happened.
    pub kind: StepKind,
    /// The edge involved, if any.
    pub edge: Option<WeightedEdge<N>>,
    /// The node involved, if any.
    pub node: Option<N>,
    /// Bellman-Ford pass (1-based); `None` for other engines.
    pub pass: Option<usize>,
    /// State after the step.
    pub state: StepState<N>,
}

impl<N: Node> StepEvent<N> {
    /// Returns the spanning tree snapshot, if this is a tree event.
    #[must_use]
    pub fn tree(&self) -> Option<&[WeightedEdge<N>]> {
        match &self.state {
            StepState::Tree { edges, .. } => Some(edges),
            StepState::Paths(_) => None,
        }
    }

    /// Returns the table snapshot, if this is a path event.
    #[must_use]
    pub fn table(&self) -> Option<&ShortestPathTable<N>> {
        match &self.state {
            StepState::Paths(table) => Some(table),
            StepState::Tree { .. } => None,
        }
    }
}

/// Receives step events, synchronously and in order.
///
/// `on_step` cannot fail: an observer that runs into trouble deals with it
/// itself, and the engine's state is unaffected.
pub trait StepObserver<N> {
    /// Called once per step.
    fn on_step(&mut self, event: &StepEvent<N>);
}

/// Observer backed by a closure. See [`from_fn`].
#[derive(Debug, Clone)]
pub struct FnObserver<F>(F);

/// Wraps a closure as a [`StepObserver`].
pub fn from_fn<N, F>(f: F) -> FnObserver<F>
where
    F: FnMut(&StepEvent<N>),
{
    FnObserver(f)
}

impl<N, F> StepObserver<N> for FnObserver<F>
where
    F: FnMut(&StepEvent<N>),
{
    fn on_step(&mut self, event: &StepEvent<N>) {
        (self.0)(event);
    }
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<N> StepObserver<N> for NoopObserver {
    fn on_step(&mut self, _event: &StepEvent<N>) {}
}

/// Keeps a copy of every event.
#[derive(Debug, Clone)]
pub struct RecordingObserver<N> {
    events: Vec<StepEvent<N>>,
}

impl<N> RecordingObserver<N> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[StepEvent<N>] {
        &self.events
    }

    /// Consumes the recorder, returning the events.
    #[must_use]
    pub fn into_events(self) -> Vec<StepEvent<N>> {
        self.events
    }

    /// Returns the kinds of the recorded events.
    #[must_use]
    pub fn kinds(&self) -> Vec<StepKind> {
        self.events.iter().map(|e| e.kind).collect()
    }
}

impl<N> Default for RecordingObserver<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone> StepObserver<N> for RecordingObserver<N> {
    fn on_step(&mut self, event: &StepEvent<N>) {
        self.events.push(event.clone());
    }
}

/// Logs every event through `tracing` at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<N: Node> StepObserver<N> for TracingObserver {
    fn on_step(&mut self, event: &StepEvent<N>) {
        let edge = event.edge.as_ref().map(ToString::to_string);
        let node = event.node.as_ref().map(ToString::to_string);
        tracing::info!(
            step = event.step,
            kind = ?event.kind,
            edge = edge.as_deref().unwrap_or("-"),
            node = node.as_deref().unwrap_or("-"),
            "step"
        );
    }
}

/// Forwards events to the wrapped observer.
///
/// Lets callers keep ownership of an observer while an engine borrows it.
impl<N, O> StepObserver<N> for &mut O
where
    O: StepObserver<N> + ?Sized,
{
    fn on_step(&mut self, event: &StepEvent<N>) {
        (**self).on_step(event);
    }
}

/// Numbers events and hands them to the observer.
pub(crate) struct EventSink<O> {
    step: usize,
    observer: O,
}

impl<O> EventSink<O> {
    pub(crate) fn new(observer: O) -> Self {
        Self { step: 0, observer }
    }

    /// Emits an event built from the current step number.
    pub(crate) fn emit<N>(
        &mut self,
        kind: StepKind,
        edge: Option<WeightedEdge<N>>,
        node: Option<N>,
        pass: Option<usize>,
        state: StepState<N>,
    ) where
        O: StepObserver<N>,
    {
        let event = StepEvent {
            step: self.step,
            kind,
            edge,
            node,
            pass,
            state,
        };
        self.step += 1;
        self.observer.on_step(&event);
    }
}

/// Heap priority: weight first, then insertion sequence.
///
/// The sequence number makes ties resolve in insertion order, so the pop
/// order is fully determined by the input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Priority {
    pub(crate) weight: f64,
    pub(crate) seq: u64,
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// `MinScored<K, T>` holds a score `K` and a payload `T`, ordered in reverse
/// by score so that [`std::collections::BinaryHeap`] pops the smallest first.
///
/// The payload does not take part in the comparison.
#[derive(Debug, Clone)]
pub struct MinScored<K, T>(pub K, pub T);

impl<K: Ord, T> PartialEq for MinScored<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Ord, T> Eq for MinScored<K, T> {}

impl<K: Ord, T> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn tree_state() -> StepState<char> {
        StepState::Tree {
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    #[test]
    fn test_min_scored_pops_smallest_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(Priority { weight: 3.0, seq: 0 }, 'a'));
        heap.push(MinScored(Priority { weight: 1.0, seq: 1 }, 'b'));
        heap.push(MinScored(Priority { weight: 3.0, seq: 2 }, 'c'));
        heap.push(MinScored(Priority { weight: -1.0, seq: 3 }, 'd'));

        let order: Vec<char> = std::iter::from_fn(|| heap.pop().map(|m| m.1)).collect();
        assert_eq!(order, vec!['d', 'b', 'a', 'c']);
    }

    #[test]
    fn test_event_sink_numbers_steps() {
        let mut recorder = RecordingObserver::new();
        {
            let mut sink = EventSink::new(&mut recorder);
            sink.emit(StepKind::Init, None, None, None, tree_state());
            sink.emit(
                StepKind::EdgeAdded,
                Some(WeightedEdge::new('A', 'B', 1.0)),
                None,
                None,
                tree_state(),
            );
        }

        let steps: Vec<usize> = recorder.events().iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![0, 1]);
        assert_eq!(recorder.kinds(), vec![StepKind::Init, StepKind::EdgeAdded]);
        assert!(recorder.events()[0].tree().is_some());
        assert!(recorder.events()[0].table().is_none());
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        let mut sink = EventSink::new(from_fn(|e: &StepEvent<char>| seen.push(e.kind)));
        sink.emit(StepKind::Init, None, None, None, tree_state());
        drop(sink);
        assert_eq!(seen, vec![StepKind::Init]);
    }

    #[test]
    fn test_mutation_kinds() {
        assert!(StepKind::EdgeAdded.is_mutation());
        assert!(StepKind::DistanceUpdated.is_mutation());
        assert!(!StepKind::EdgeScannedNoUpdate.is_mutation());
        assert!(!StepKind::Converged.is_mutation());
    }
}
