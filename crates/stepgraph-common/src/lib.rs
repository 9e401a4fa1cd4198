//! # stepgraph-common
//!
//! Foundation layer for Stepgraph: node and edge types, distances, and errors.
//!
//! This crate provides the fundamental building blocks used by all other
//! Stepgraph crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (Node, WeightedEdge, Distance, EdgeKind)
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{Distance, EdgeKind, Node, WeightedEdge};
pub use utils::error::{Error, Result};
