//! Causal graph storage.

use std::collections::{BTreeSet, HashMap};

use tangle_core::VertexId;

use crate::event::CausalEvent;

/// Append-only causal graph of rewrite events.
///
/// Alongside the event log itself, the graph keeps a per-vertex rank label:
/// every event that lists a vertex in its produced set appends its rank to
/// that vertex's label. The first rank is therefore the event that created
/// the vertex, and later ranks record events that re-produced it (a rewrite
/// whose added edges reference a pre-existing vertex).
#[derive(Debug, Default)]
pub struct CausalGraph {
    /// All recorded events; an event's rank is its index here.
    events: Vec<CausalEvent>,
    /// Vertex -> ranks of the events that produced it, in append order.
    vertex_ranks: HashMap<VertexId, Vec<u64>>,
}

impl CausalGraph {
    /// Create a new empty causal graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event linking consumed vertices to produced ones.
    ///
    /// Returns the new event's rank.
    pub fn record_event(
        &mut self,
        consumed: Vec<VertexId>,
        produced: Vec<VertexId>,
        step: u64,
    ) -> u64 {
        let rank = self.events.len() as u64;
        for vertex in &produced {
            self.vertex_ranks.entry(*vertex).or_default().push(rank);
        }
        self.events.push(CausalEvent::new(rank, step, consumed, produced));
        rank
    }

    /// Causal rank label(s) for a vertex, in append order.
    ///
    /// Empty for vertices no event has produced.
    pub fn rank_of(&self, vertex: VertexId) -> &[u64] {
        self.vertex_ranks
            .get(&vertex)
            .map(|ranks| ranks.as_slice())
            .unwrap_or(&[])
    }

    /// Rank of the event that created a vertex.
    pub fn first_rank(&self, vertex: VertexId) -> Option<u64> {
        self.rank_of(vertex).first().copied()
    }

    /// The event that introduced a vertex into the hypergraph.
    pub fn producer_of(&self, vertex: VertexId) -> Option<&CausalEvent> {
        self.first_rank(vertex).and_then(|rank| self.get(rank))
    }

    /// Ranks of the events this event causally depends on: the creators of
    /// its consumed vertices.
    pub fn parents(&self, rank: u64) -> BTreeSet<u64> {
        let mut parents = BTreeSet::new();
        if let Some(event) = self.get(rank) {
            for vertex in &event.consumed {
                if let Some(parent) = self.first_rank(*vertex) {
                    parents.insert(parent);
                }
            }
        }
        parents
    }

    /// Get an event by rank.
    pub fn get(&self, rank: u64) -> Option<&CausalEvent> {
        self.events.get(rank as usize)
    }

    /// All recorded events in rank order.
    pub fn events(&self) -> &[CausalEvent] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events and labels.
    pub fn reset(&mut self) {
        self.events.clear();
        self.vertex_ranks.clear();
    }
}
