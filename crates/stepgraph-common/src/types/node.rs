//! Node identifier bound.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Anything that can identify a node in a weighted graph.
///
/// Nodes must be totally ordered so that engines can break ties the same way
/// on every run, hashable for set membership, and displayable for narration
/// and error messages. `char`, the integer types and `String` all qualify.
pub trait Node: Clone + Eq + Ord + Hash + Debug + Display {}

impl<T> Node for T where T: Clone + Eq + Ord + Hash + Debug + Display {}
