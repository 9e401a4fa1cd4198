//! # stepgraph-core
//!
//! Core layer for Stepgraph: the weighted graph model and the four
//! observable engines built on it.
//!
//! Every engine reports each discrete step (an accepted edge, a finalized
//! node, a relaxation) to a [`StepObserver`](algorithms::StepObserver)
//! before moving on, so callers can narrate or draw the run as it happens.
//!
//! ## Modules
//!
//! - [`graph`] - Weighted graph, builders, edge-list literals, random graphs
//! - [`algorithms`] - Union-find, Kruskal, Prim, Dijkstra, Bellman-Ford

pub mod algorithms;
pub mod graph;

// Re-export commonly used types
pub use algorithms::{
    DisjointSet, ShortestPathTable, SpanningTree, StepEvent, StepKind, StepObserver, bellman_ford,
    dijkstra, kruskal, prim,
};
pub use graph::{GraphBuilder, GraphSource, RandomGraphFactory, WeightedGraph};
