//! Core hypergraph storage implementation.

use crate::index::ArityIndex;
use std::collections::BTreeMap;
use tangle_core::{EdgeTemplate, Hyperedge};

/// The in-memory hypergraph store.
///
/// Edges are kept as a multiset: one entry per distinct edge with its
/// multiplicity. The store also maintains `max_vertex`, a monotone
/// high-water mark over every vertex id it has ever seen within a run;
/// fresh vertices allocated during substitution are strictly greater than
/// it and therefore never collide with live vertices.
#[derive(Debug, Default)]
pub struct Hypergraph {
    /// Distinct edge -> multiplicity. Ordered keys keep iteration
    /// deterministic, so a seeded run replays identically.
    edges: BTreeMap<Hyperedge, usize>,
    /// Arity index over distinct edges.
    arity_index: ArityIndex,
    /// Highest vertex id referenced by any edge so far this run.
    max_vertex: u64,
    /// Total edge count including multiplicity.
    total: usize,
}

impl Hypergraph {
    /// Create a new empty hypergraph.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Delta Operations ====================

    /// Remove then add edges, extending `max_vertex` for any new vertex ids.
    ///
    /// Removal decrements multiplicity and drops an edge at zero. Absent
    /// `remove` entries are ignored: callers are expected to have
    /// pre-validated presence, and a concurrent match that lost the race is
    /// skipped upstream rather than surfaced as an error here.
    pub fn apply_delta(&mut self, remove: &[Hyperedge], add: &[Hyperedge]) {
        for edge in remove {
            if let Some(count) = self.edges.get_mut(edge) {
                *count -= 1;
                self.total -= 1;
                if *count == 0 {
                    self.edges.remove(edge);
                    self.arity_index.remove(edge);
                }
            }
        }

        for edge in add {
            let count = self.edges.entry(edge.clone()).or_insert(0);
            if *count == 0 {
                self.arity_index.insert(edge);
            }
            *count += 1;
            self.total += 1;

            for vertex in edge.iter() {
                self.max_vertex = self.max_vertex.max(vertex.raw());
            }
        }
    }

    /// Clear all edges and reset the high-water mark.
    pub fn reset(&mut self) {
        self.edges.clear();
        self.arity_index.clear();
        self.max_vertex = 0;
        self.total = 0;
    }

    // ==================== Query Operations ====================

    /// Current highest vertex id referenced this run.
    pub fn max_vertex(&self) -> u64 {
        self.max_vertex
    }

    /// All distinct live edges matching a partially-bound template.
    pub fn find_matching<'a>(
        &'a self,
        template: &'a EdgeTemplate,
    ) -> impl Iterator<Item = &'a Hyperedge> + 'a {
        self.arity_index
            .get(template.arity())
            .filter(move |edge| template.matches(*edge))
    }

    /// All distinct live edges of the given arity.
    pub fn edges_with_arity(&self, arity: usize) -> impl Iterator<Item = &Hyperedge> {
        self.arity_index.get(arity)
    }

    /// Multiplicity of a single edge (0 if absent).
    pub fn multiplicity(&self, edge: &Hyperedge) -> usize {
        self.edges.get(edge).copied().unwrap_or(0)
    }

    /// Returns true if at least one copy of the edge is live.
    pub fn contains(&self, edge: &Hyperedge) -> bool {
        self.multiplicity(edge) > 0
    }

    /// Multiplicity of a fully concrete edge set: the number of disjoint
    /// whole-set copies currently present.
    ///
    /// For each distinct edge the set requires `n` copies of, the live
    /// multiplicity supports `live / n` set copies; the set's count is the
    /// minimum over its edges. A single-edge set reduces to that edge's
    /// multiplicity. An empty set has no occurrences.
    pub fn count_occurrences(&self, edges: &[Hyperedge]) -> usize {
        if edges.is_empty() {
            return 0;
        }

        let mut required: BTreeMap<&Hyperedge, usize> = BTreeMap::new();
        for edge in edges {
            *required.entry(edge).or_insert(0) += 1;
        }

        let mut copies = usize::MAX;
        for (edge, need) in required {
            copies = copies.min(self.multiplicity(edge) / need);
            if copies == 0 {
                return 0;
            }
        }
        copies
    }

    // ==================== Statistics ====================

    /// Total number of live edges, counting multiplicity.
    pub fn edge_count(&self) -> usize {
        self.total
    }

    /// Number of distinct live edges.
    pub fn distinct_edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph holds no edges.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over distinct edges with their multiplicities.
    pub fn edges(&self) -> impl Iterator<Item = (&Hyperedge, usize)> {
        self.edges.iter().map(|(edge, count)| (edge, *count))
    }
}
