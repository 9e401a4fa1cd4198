//! Error types for Stepgraph.
//!
//! Node identities are carried as their rendered form so a single error type
//! serves graphs over any node type.

use thiserror::Error;

/// Result type alias using the Stepgraph error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by graph construction and the algorithm engines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Self-loop, non-finite weight, or a weight that conflicts with an
    /// existing registration of the same edge.
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        /// Tail of the rejected edge.
        from: String,
        /// Head of the rejected edge.
        to: String,
        /// Why the edge was rejected.
        reason: String,
    },

    /// Dijkstra was given a graph containing a negative edge weight.
    #[error("negative weight {weight} on edge {from} -> {to} is not supported by Dijkstra")]
    NegativeWeightNotSupported {
        /// Tail of the offending edge.
        from: String,
        /// Head of the offending edge.
        to: String,
        /// The negative weight, rendered.
        weight: String,
    },

    /// Bellman-Ford found a negative-weight cycle reachable from the source.
    #[error("negative-weight cycle reachable from {origin}")]
    NegativeCycleDetected {
        /// The source node of the run.
        origin: String,
    },

    /// An operation referenced a node that is not in the graph.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Malformed external input (node counts, edge literals, engine input).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Builds an [`Error::InvalidEdge`] from displayable endpoints.
    pub fn invalid_edge(
        from: impl ToString,
        to: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidEdge {
            from: from.to_string(),
            to: to.to_string(),
            reason: reason.into(),
        }
    }

    /// Builds an [`Error::UnknownNode`] from a displayable node.
    pub fn unknown_node(node: impl ToString) -> Self {
        Self::UnknownNode(node.to_string())
    }
}
