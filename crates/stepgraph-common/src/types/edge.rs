//! Weighted edge types.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Node;

/// Whether an edge is stored in one direction or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Stored only as `from -> to`.
    Directed,
    /// Stored as `from -> to` and `to -> from` with the same weight.
    Undirected,
}

impl EdgeKind {
    /// Returns true for [`EdgeKind::Directed`].
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

/// An edge between two nodes carrying a finite weight.
///
/// For spanning trees the orientation is only a convention; for shortest
/// paths `from -> to` is the direction of travel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<N> {
    /// Tail of the edge.
    pub from: N,
    /// Head of the edge.
    pub to: N,
    /// Edge weight.
    pub weight: f64,
}

impl<N: Node> WeightedEdge<N> {
    /// Creates a new weighted edge.
    pub fn new(from: N, to: N, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Returns the same edge with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.to.clone(), self.from.clone(), self.weight)
    }

    /// Returns the edge oriented so that `from <= to`.
    ///
    /// Undirected edges are enumerated once in this orientation.
    #[must_use]
    pub fn canonical(&self) -> Self {
        if self.from <= self.to {
            self.clone()
        } else {
            self.reversed()
        }
    }

    /// Orders edges by weight, then by endpoint pair.
    ///
    /// This is the total order Kruskal sorts candidate edges by.
    pub fn cmp_by_weight(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl<N: fmt::Display> fmt::Display for WeightedEdge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} (weight: {})", self.from, self.to, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_orientation() {
        let edge = WeightedEdge::new('D', 'A', 5.0);
        let canonical = edge.canonical();
        assert_eq!(canonical.from, 'A');
        assert_eq!(canonical.to, 'D');
        assert_eq!(canonical.weight, 5.0);

        assert_eq!(canonical.canonical(), canonical);
    }

    #[test]
    fn test_cmp_by_weight_breaks_ties_by_endpoints() {
        let ac = WeightedEdge::new('A', 'C', 2.0);
        let de = WeightedEdge::new('D', 'E', 2.0);
        let bc = WeightedEdge::new('B', 'C', 1.0);

        let mut edges = vec![de.clone(), ac.clone(), bc.clone()];
        edges.sort_by(WeightedEdge::cmp_by_weight);
        assert_eq!(edges, vec![bc, ac, de]);
    }

    #[test]
    fn test_negative_weights_sort_first() {
        let a = WeightedEdge::new(0u32, 1, -2.0);
        let b = WeightedEdge::new(0u32, 2, 0.0);
        assert_eq!(a.cmp_by_weight(&b), Ordering::Less);
    }

    #[test]
    fn test_display() {
        let edge = WeightedEdge::new('B', 'C', 1.0);
        assert_eq!(edge.to_string(), "B-C (weight: 1)");
    }
}
