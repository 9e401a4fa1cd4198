//! Core type definitions for Stepgraph.
//!
//! This module contains the fundamental types shared by every engine:
//! - Identifier bound ([`Node`])
//! - Edge types ([`WeightedEdge`], [`EdgeKind`])
//! - Path lengths ([`Distance`])

mod distance;
mod edge;
mod node;

pub use distance::Distance;
pub use edge::{EdgeKind, WeightedEdge};
pub use node::Node;
