//! Union-find and connected components.

use smallvec::SmallVec;
use stepgraph_common::types::Node;
use stepgraph_common::utils::hash::FxHashMap;

use crate::graph::WeightedGraph;

/// Disjoint sets with full path compression and union by rank.
///
/// Elements are registered up front with [`from_nodes`](Self::from_nodes) or
/// lazily as singletons the first time an operation mentions them.
///
/// # Invariants
///
/// - Following `parent` links from any element reaches a root in finitely
///   many steps; roots are their own parent.
/// - After [`find`](Self::find), every element visited on the way points
///   directly at the root.
#[derive(Debug, Clone)]
pub struct DisjointSet<N: Node> {
    parent: FxHashMap<N, N>,
    rank: FxHashMap<N, u32>,
    sets: usize,
}

impl<N: Node> DisjointSet<N> {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: FxHashMap::default(),
            rank: FxHashMap::default(),
            sets: 0,
        }
    }

    /// Creates one singleton set per node.
    pub fn from_nodes<'a>(nodes: impl IntoIterator<Item = &'a N>) -> Self
    where
        N: 'a,
    {
        let mut sets = Self::new();
        for node in nodes {
            sets.insert(node.clone());
        }
        sets
    }

    /// Registers a singleton set. Returns false if the element was known.
    pub fn insert(&mut self, x: N) -> bool {
        if self.parent.contains_key(&x) {
            return false;
        }
        self.parent.insert(x.clone(), x.clone());
        self.rank.insert(x, 0);
        self.sets += 1;
        true
    }

    /// Returns true if the element has been registered.
    #[must_use]
    pub fn contains(&self, x: &N) -> bool {
        self.parent.contains_key(x)
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Walks to the root, then rebinds every visited element directly to it.
    pub fn find(&mut self, x: &N) -> N {
        if !self.contains(x) {
            self.insert(x.clone());
            return x.clone();
        }

        let mut path: SmallVec<[N; 8]> = SmallVec::new();
        let mut current = x.clone();
        loop {
            let parent = self.parent_of(&current);
            if parent == current {
                break;
            }
            path.push(current);
            current = parent;
        }

        for node in path {
            self.parent.insert(node, current.clone());
        }
        current
    }

    fn parent_of(&self, x: &N) -> N {
        self.parent.get(x).cloned().unwrap_or_else(|| x.clone())
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns true if they were in different sets. The root of higher rank
    /// becomes the parent; on equal ranks the root of `y` is attached under
    /// the root of `x` and `x`'s rank grows.
    pub fn union(&mut self, x: &N, y: &N) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        let rank_x = self.rank_of(&root_x);
        let rank_y = self.rank_of(&root_y);
        if rank_x < rank_y {
            self.parent.insert(root_x, root_y);
        } else if rank_x > rank_y {
            self.parent.insert(root_y, root_x);
        } else {
            self.parent.insert(root_y, root_x.clone());
            self.rank.insert(root_x, rank_x + 1);
        }
        self.sets -= 1;
        true
    }

    fn rank_of(&self, x: &N) -> u32 {
        self.rank.get(x).copied().unwrap_or(0)
    }

    /// Returns true if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: &N, y: &N) -> bool {
        self.find(x) == self.find(y)
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if no element has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

impl<N: Node> Default for DisjointSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts weakly connected components.
///
/// Edge direction is ignored; isolated nodes count as their own component.
pub fn connected_component_count<N: Node>(graph: &WeightedGraph<N>) -> usize {
    let mut sets = DisjointSet::from_nodes(graph.nodes());
    for (edge, _) in graph.edges() {
        sets.union(&edge.from, &edge.to);
    }
    sets.set_count()
}
