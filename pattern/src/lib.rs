//! Tangle Pattern Matching
//!
//! Assignments bind pattern variables to concrete vertices; substitution
//! turns pattern sequences into concrete hyperedges, allocating fresh
//! vertices for unbound variables; the matcher enumerates every occurrence
//! of a rule set's left-hand sides in a hypergraph.

mod assignment;
mod matcher;
mod substitute;

pub use assignment::Assignment;
pub use matcher::{find_matches, Match};
pub use substitute::substitute;
