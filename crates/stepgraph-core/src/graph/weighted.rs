//! Weighted graph storage.

use indexmap::IndexMap;
use stepgraph_common::types::{EdgeKind, Node, WeightedEdge};
use stepgraph_common::utils::error::{Error, Result};

/// A registered edge, kept in insertion order.
#[derive(Debug, Clone)]
struct EdgeRecord<N> {
    edge: WeightedEdge<N>,
    kind: EdgeKind,
}

/// A simple weighted graph.
///
/// Each node maps to its outgoing neighbors and weights. Undirected edges are
/// written in both directions with the same weight; directed edges only
/// forward. Nodes iterate in the order they were first seen and edges in the
/// order they were registered, which is what makes every engine reproducible.
///
/// Engines only ever borrow the graph immutably.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N> {
    /// Outgoing adjacency per node.
    adjacency: IndexMap<N, IndexMap<N, f64>>,
    /// Edges in registration order, undirected edges once.
    edges: Vec<EdgeRecord<N>>,
}

impl<N: Node> WeightedGraph<N> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    // === Mutation ===

    /// Adds an isolated node. Returns false if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, IndexMap::new());
        true
    }

    /// Adds a weighted edge, creating missing endpoints.
    ///
    /// Re-adding an identical edge is a no-op. Nothing is written when the
    /// edge is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEdge`] for a self-loop, a non-finite weight, or
    /// a weight that conflicts with an existing registration of either
    /// direction.
    pub fn add_edge(&mut self, from: N, to: N, weight: f64, kind: EdgeKind) -> Result<()> {
        if from == to {
            return Err(Error::invalid_edge(&from, &to, "self-loops are not allowed"));
        }
        if !weight.is_finite() {
            return Err(Error::invalid_edge(
                &from,
                &to,
                format!("weight must be finite, got {weight}"),
            ));
        }

        let forward = self.weight(&from, &to);
        match kind {
            EdgeKind::Directed => match forward {
                None => {}
                Some(existing) if existing == weight => return Ok(()),
                Some(existing) => {
                    return Err(Error::invalid_edge(
                        &from,
                        &to,
                        format!("conflicts with existing weight {existing}"),
                    ));
                }
            },
            EdgeKind::Undirected => match (forward, self.weight(&to, &from)) {
                (None, None) => {}
                (Some(a), Some(b)) if a == weight && b == weight => return Ok(()),
                (Some(a), Some(b)) if a == b => {
                    return Err(Error::invalid_edge(
                        &from,
                        &to,
                        format!("conflicts with existing weight {a}"),
                    ));
                }
                _ => {
                    return Err(Error::invalid_edge(
                        &from,
                        &to,
                        "already registered as a one-way edge",
                    ));
                }
            },
        }

        self.add_node(from.clone());
        self.add_node(to.clone());
        self.insert_arc(&from, &to, weight);
        if kind == EdgeKind::Undirected {
            self.insert_arc(&to, &from, weight);
        }
        self.edges.push(EdgeRecord {
            edge: WeightedEdge::new(from, to, weight),
            kind,
        });
        Ok(())
    }

    /// Adds an undirected edge. See [`add_edge`](Self::add_edge).
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: f64) -> Result<()> {
        self.add_edge(a, b, weight, EdgeKind::Undirected)
    }

    /// Adds a directed edge. See [`add_edge`](Self::add_edge).
    pub fn add_directed_edge(&mut self, from: N, to: N, weight: f64) -> Result<()> {
        self.add_edge(from, to, weight, EdgeKind::Directed)
    }

    fn insert_arc(&mut self, from: &N, to: &N, weight: f64) {
        if let Some(out) = self.adjacency.get_mut(from) {
            out.insert(to.clone(), weight);
        }
    }

    // === Queries ===

    /// Returns the outgoing neighbors of a node with their weights.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if the node is not in the graph.
    pub fn neighbors<'a>(
        &'a self,
        node: &N,
    ) -> Result<impl Iterator<Item = (&'a N, f64)> + use<'a, N>> {
        self.adjacency
            .get(node)
            .map(|out| out.iter().map(|(n, w)| (n, *w)))
            .ok_or_else(|| Error::unknown_node(node))
    }

    /// Returns the weight of `from -> to`, if that arc exists.
    #[must_use]
    pub fn weight(&self, from: &N, to: &N) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Returns all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Returns the first node added, if any.
    #[must_use]
    pub fn first_node(&self) -> Option<&N> {
        self.adjacency.keys().next()
    }

    /// Returns true if the node is in the graph.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of registered edges (undirected edges count once).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the registered edges in registration order.
    pub fn edges(&self) -> impl Iterator<Item = (&WeightedEdge<N>, EdgeKind)> + '_ {
        self.edges.iter().map(|r| (&r.edge, r.kind))
    }

    /// Returns every traversable arc in registration order.
    ///
    /// An undirected edge contributes `from -> to` followed by `to -> from`.
    #[must_use]
    pub fn arcs(&self) -> Vec<WeightedEdge<N>> {
        let mut arcs = Vec::with_capacity(self.edges.len() * 2);
        for record in &self.edges {
            arcs.push(record.edge.clone());
            if record.kind == EdgeKind::Undirected {
                arcs.push(record.edge.reversed());
            }
        }
        arcs
    }

    /// Returns true if no directed edge has been registered.
    #[must_use]
    pub fn is_undirected(&self) -> bool {
        self.edges.iter().all(|r| r.kind == EdgeKind::Undirected)
    }

    /// Returns the sum of all registered edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|r| r.edge.weight).sum()
    }
}

impl<N: Node> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}
