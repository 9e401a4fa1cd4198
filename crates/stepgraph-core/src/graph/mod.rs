//! Weighted graph model and the ways of obtaining one.
//!
//! - [`WeightedGraph`] - adjacency maps with insertion-ordered nodes and edges
//! - [`GraphBuilder`] / [`parse_edge_list`] - explicit literal graphs
//! - [`RandomGraphFactory`] - random connected graphs
//! - [`samples`] - the classic demonstration graphs

mod builder;
mod generator;
pub mod samples;
mod weighted;

pub use builder::{EdgeSpec, GraphBuilder, GraphSource, parse_edge_list};
pub use generator::{RandomGraphConfig, RandomGraphFactory, SpanningTreeFactory, node_label};
pub use weighted::WeightedGraph;
