//! Shortest-path distances.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Best known distance from a source to a node.
///
/// Unreachable nodes are tagged explicitly instead of being stored as
/// floating-point infinity. In JSON a finite distance is a plain number and
/// an unreachable one is `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance {
    /// A path of this total weight is known.
    Finite(f64),
    /// No path has been found (yet).
    #[default]
    Unreachable,
}

impl Distance {
    /// The distance of the source to itself.
    pub const ZERO: Self = Self::Finite(0.0);

    /// Returns the finite value, if any.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Unreachable => None,
        }
    }

    /// Returns true if a path is known.
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Extends this distance by one edge.
    ///
    /// Unreachable stays unreachable.
    #[must_use]
    pub fn extend(self, weight: f64) -> Self {
        match self {
            Self::Finite(d) => Self::Finite(d + weight),
            Self::Unreachable => Self::Unreachable,
        }
    }

    /// Like [`extend`](Self::extend), but returns `None` when the sum leaves
    /// the finite `f64` range.
    #[must_use]
    pub fn checked_extend(self, weight: f64) -> Option<Self> {
        match self.extend(weight) {
            Self::Finite(d) if !d.is_finite() => None,
            extended => Some(extended),
        }
    }

    /// Returns true if `self` is strictly shorter than `other`.
    ///
    /// Any finite distance improves on `Unreachable`; `Unreachable` never
    /// improves on anything.
    #[must_use]
    pub fn improves_on(self, other: Self) -> bool {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a < b,
            (Self::Finite(_), Self::Unreachable) => true,
            (Self::Unreachable, _) => false,
        }
    }

    /// Total order with `Unreachable` after every finite distance.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.total_cmp(b),
            (Self::Finite(_), Self::Unreachable) => Ordering::Less,
            (Self::Unreachable, Self::Finite(_)) => Ordering::Greater,
            (Self::Unreachable, Self::Unreachable) => Ordering::Equal,
        }
    }
}

impl From<f64> for Distance {
    fn from(d: f64) -> Self {
        Self::Finite(d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{d}"),
            Self::Unreachable => f.write_str("∞"),
        }
    }
}
