//! Tangle Causal Graph
//!
//! Append-only log of rewrite events. Each event links the vertices a
//! rewrite consumed to the vertices it produced, stamped with the round it
//! occurred in. Produced vertices are labeled with the event's rank; the
//! labels are sufficient to reconstruct event orderings (for example a
//! least-recent-edge ordering) from the graph alone.

mod causal;
mod event;

pub use causal::CausalGraph;
pub use event::CausalEvent;
