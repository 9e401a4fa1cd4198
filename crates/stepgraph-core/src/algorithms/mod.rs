//! Observable graph algorithms.
//!
//! Each engine is a plain function taking a graph and a [`StepObserver`];
//! the spanning tree engines also come as lazy iterators ([`Kruskal`],
//! [`Prim`]) that advance one accepted or discarded edge per `next()`.
//!
//! ## Engines
//!
//! | Function | Input | Result |
//! |----------|-------|--------|
//! | [`kruskal`] | undirected graph | [`SpanningTree`] (forest if disconnected) |
//! | [`prim`] | undirected graph, start node | [`SpanningTree`] of the start's component |
//! | [`dijkstra`] | non-negative weights, source | [`ShortestPathTable`] |
//! | [`bellman_ford`] | any weights, source | [`ShortestPathTable`] or negative cycle error |
//!
//! ## Example
//!
//! ```
//! use stepgraph_core::algorithms::{RecordingObserver, StepKind, kruskal};
//! use stepgraph_core::graph::GraphBuilder;
//!
//! let graph = GraphBuilder::undirected()
//!     .edges([('A', 'B', 1.0), ('B', 'C', 2.0), ('A', 'C', 3.0)])
//!     .build()?;
//!
//! let mut recorder = RecordingObserver::new();
//! let tree = kruskal(&graph, &mut recorder)?;
//!
//! assert_eq!(tree.total_weight(), 3.0);
//! assert_eq!(recorder.kinds()[0], StepKind::Init);
//! # Ok::<(), stepgraph_common::utils::error::Error>(())
//! ```

mod components;
mod mst;
mod shortest_path;
mod traits;

pub use components::{DisjointSet, connected_component_count};
pub use mst::{Kruskal, Prim, SpanningTree, kruskal, prim};
pub use shortest_path::{PathEntry, ShortestPathTable, bellman_ford, dijkstra};
pub use traits::{
    FnObserver, MinScored, NoopObserver, RecordingObserver, StepEvent, StepKind, StepObserver,
    StepState, TracingObserver, from_fn,
};
