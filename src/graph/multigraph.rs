use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

use crate::error::{Error, Result};

/// 1-indexed vertex identifier. Index 0 is a reserved sentinel so that
/// vertex ids can be used directly as row indices.
pub type VertexId = usize;

/// An undirected multigraph with integer edge weights, mutated in place by
/// repeated random edge contraction.
///
/// Parallel edges between a pair of vertices are stored as a single entry
/// whose weight is the number of collapsed originals. The adjacency is kept
/// symmetric at all times, and a vertex absorbed by a contraction has its
/// row drained, so every stored entry refers to a pair of active vertices.
///
/// Ordered collections are used for the adjacency rows and the active set so
/// that edge enumeration is deterministic under a seeded RNG.
#[derive(Debug, Clone)]
pub struct WeightedMultigraph {
    /// Row `v` maps each neighbor of `v` to the weight of the edge between
    /// them. Zero-weight pairs are absent rather than stored as 0.
    adjacency: Vec<BTreeMap<VertexId, u64>>,
    /// `representative[v]` is the active vertex currently standing in for
    /// original vertex `v`. Kept flat: every entry points directly at an
    /// active vertex, never through a chain.
    representative: Vec<VertexId>,
    /// Vertices not yet absorbed into another vertex.
    active: BTreeSet<VertexId>,
}

impl WeightedMultigraph {
    /// Builds a multigraph from an adjacency description.
    ///
    /// `description[v]` lists the neighbors of vertex `v` for `v` in
    /// `1..description.len()`; `description[0]` is an ignored sentinel row.
    /// Each occurrence of a neighbor id contributes weight 1, so listing the
    /// same neighbor twice yields a weight-2 edge. Every undirected edge must
    /// appear in the rows of both of its endpoints; validating that (and the
    /// id range `1..=n`) is the caller's responsibility.
    pub fn from_adjacency(description: &[Vec<VertexId>]) -> Self {
        let n = description.len().saturating_sub(1);
        let mut adjacency: Vec<BTreeMap<VertexId, u64>> = vec![BTreeMap::new(); n + 1];

        for v in 1..=n {
            for &neighbor in &description[v] {
                debug_assert!(neighbor >= 1 && neighbor <= n && neighbor != v);
                *adjacency[v].entry(neighbor).or_insert(0) += 1;
            }
        }

        Self {
            adjacency,
            representative: (0..=n).collect(),
            active: (1..=n).collect(),
        }
    }

    /// Number of vertices in the original graph.
    pub fn vertex_count(&self) -> usize {
        self.representative.len().saturating_sub(1)
    }

    /// Vertices still standing as contraction targets.
    pub fn active(&self) -> &BTreeSet<VertexId> {
        &self.active
    }

    /// The active vertex currently representing original vertex `v`.
    ///
    /// # Panics
    /// Panics if `v` is outside `1..=vertex_count()`.
    pub fn representative(&self, v: VertexId) -> VertexId {
        self.representative[v]
    }

    /// Current weight of the edge between `u` and `v` (0 if absent).
    pub fn weight(&self, u: VertexId, v: VertexId) -> u64 {
        self.adjacency
            .get(u)
            .and_then(|row| row.get(&v))
            .copied()
            .unwrap_or(0)
    }

    /// Total edge weight, summed once per unordered pair.
    pub fn total_weight(&self) -> u64 {
        self.active
            .iter()
            .map(|&u| {
                self.adjacency[u]
                    .iter()
                    .filter(|&(&v, _)| u < v)
                    .map(|(_, &w)| w)
                    .sum::<u64>()
            })
            .sum()
    }

    /// Contracts one randomly chosen edge, merging its two endpoints.
    ///
    /// The edge is sampled with probability proportional to its weight, so a
    /// pair carrying `k` collapsed parallel edges is `k` times as likely to
    /// be picked as a weight-1 pair. One endpoint survives as the parent,
    /// the other is absorbed: their mutual weight is dropped (the would-be
    /// self-loop), the absorbed vertex's remaining incident weight is folded
    /// onto the parent on both sides of the adjacency, and every
    /// representative entry pointing at the absorbed vertex is rewritten to
    /// the parent.
    ///
    /// # Arguments
    /// - `rng`: the random source used to sample the edge.
    ///
    /// # Returns
    /// - `Ok((parent, absorbed))` - the surviving and the absorbed vertex.
    /// - `Err(Error::EmptyEdgeSet)` - no edge remains among the active
    ///   vertices; the remaining graph is disconnected.
    pub fn contract_random_edge<R: Rng>(&mut self, rng: &mut R) -> Result<(VertexId, VertexId)> {
        debug_assert!(self.active.len() >= 2);

        // Enumerate each unordered active pair once, with cumulative weight
        // for proportional sampling.
        let mut edges: Vec<(VertexId, VertexId, u64)> = Vec::new();
        let mut total: u64 = 0;
        for &u in &self.active {
            for (&v, &w) in &self.adjacency[u] {
                if u < v {
                    total += w;
                    edges.push((u, v, total));
                }
            }
        }

        if edges.is_empty() {
            return Err(Error::EmptyEdgeSet {
                remaining: self.active.len(),
            });
        }

        let r = rng.gen_range(0..total);
        let picked = edges.partition_point(|&(_, _, cumulative)| cumulative <= r);
        let (parent, child, _) = edges[picked];

        // Drop the contracted pair's mutual weight before folding, so the
        // merge never produces a self-loop.
        self.adjacency[parent].remove(&child);
        self.adjacency[child].remove(&parent);

        let moved = std::mem::take(&mut self.adjacency[child]);
        for (w, weight) in moved {
            *self.adjacency[parent].entry(w).or_insert(0) += weight;
            self.adjacency[w].remove(&child);
            *self.adjacency[w].entry(parent).or_insert(0) += weight;
        }

        // Rewrite every entry pointing at the absorbed vertex, including its
        // own, so the mapping stays flat.
        for entry in self.representative.iter_mut() {
            if *entry == child {
                *entry = parent;
            }
        }

        self.active.remove(&child);
        Ok((parent, child))
    }

    /// Weight of the cut discovered by contracting down to two vertices:
    /// the total weight on one remaining active vertex's row. With two
    /// active vertices only cross-group edges survive, so both rows carry
    /// the same total. Returns 0 for a disconnected pair.
    ///
    /// Call only once `active().len() == 2`.
    pub fn cut_weight(&self) -> u64 {
        debug_assert_eq!(self.active.len(), 2);
        match self.active.iter().next() {
            Some(&v) => self.adjacency[v].values().sum(),
            None => 0,
        }
    }
}
