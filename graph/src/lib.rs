//! Tangle Hypergraph Store
//!
//! In-memory multigraph of ordered hyperedges. Structurally equal edges are
//! tracked by multiplicity; duplicate edges are meaningful and increase the
//! occurrence count of any edge set containing them.

mod graph;
mod index;

pub use graph::Hypergraph;
pub use index::ArityIndex;
