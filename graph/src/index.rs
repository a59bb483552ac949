//! Indexes for efficient hypergraph lookups.

use std::collections::{BTreeSet, HashMap};
use tangle_core::Hyperedge;

/// Arity index: arity -> Set<Hyperedge> (distinct edges only).
///
/// Both the match finder's seed scan and its join only ever inspect edges of
/// one arity, so this is the store's primary lookup path. The inner sets are
/// ordered, which keeps iteration deterministic for seeded runs.
#[derive(Debug, Default)]
pub struct ArityIndex {
    index: HashMap<usize, BTreeSet<Hyperedge>>,
}

impl ArityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edge: &Hyperedge) {
        self.index.entry(edge.arity()).or_default().insert(edge.clone());
    }

    pub fn remove(&mut self, edge: &Hyperedge) {
        if let Some(set) = self.index.get_mut(&edge.arity()) {
            set.remove(edge);
            if set.is_empty() {
                self.index.remove(&edge.arity());
            }
        }
    }

    pub fn get(&self, arity: usize) -> impl Iterator<Item = &Hyperedge> {
        self.index.get(&arity).into_iter().flat_map(|set| set.iter())
    }

    pub fn clear(&mut self) {
        self.index.clear();
    }
}
