//! Causal event records.

use tangle_core::VertexId;

/// One rewrite event in the causal log.
///
/// Events are immutable once appended. The rank doubles as the event's
/// identifier: it is the event's position in the log, and every vertex in
/// `produced` carries it as a causal label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CausalEvent {
    /// Position in the log; also the causal rank stamped on `produced`.
    pub rank: u64,
    /// Scheduler round in which the event occurred (0 for the seed event).
    pub step: u64,
    /// Vertices the rewrite causally depended on (the match's bound
    /// vertices; empty for the seed event).
    pub consumed: Vec<VertexId>,
    /// Deduplicated, sorted union of the vertices in the added edges.
    pub produced: Vec<VertexId>,
}

impl CausalEvent {
    /// Create a new event record.
    pub fn new(rank: u64, step: u64, consumed: Vec<VertexId>, produced: Vec<VertexId>) -> Self {
        Self {
            rank,
            step,
            consumed,
            produced,
        }
    }
}
