//! Shared helpers for tangle integration scenarios.

pub mod prelude {
    pub use tangle_causal::{CausalEvent, CausalGraph};
    pub use tangle_core::{edge, pattern, vertex_union, Hyperedge, Pattern, Rule, VertexId};
    pub use tangle_engine::{
        EngineError, EventOrdering, Phase, RewritingSystem, RuleOrdering, RunConfig, RunStatus,
        SliceOutcome,
    };
    pub use tangle_graph::Hypergraph;
    pub use tangle_pattern::{find_matches, substitute, Assignment, Match};
}

use crate::prelude::*;

/// Run a fresh system to completion with a fixed seed and return it for
/// inspection.
pub fn run_seeded(
    rules: Vec<Rule>,
    initial: Vec<Hyperedge>,
    max_events: u64,
    seed: u64,
) -> RewritingSystem {
    run_with(rules, initial, seeded_config(max_events, seed))
}

/// Run a fresh system to completion under an explicit configuration.
pub fn run_with(rules: Vec<Rule>, initial: Vec<Hyperedge>, config: RunConfig) -> RewritingSystem {
    let mut system = RewritingSystem::new();
    system
        .run(rules, initial, config)
        .expect("scenario rules should be well-formed");
    system.drive();
    system
}

/// Seeded configuration with a tight resume delay so scenarios stay fast.
pub fn seeded_config(max_events: u64, seed: u64) -> RunConfig {
    RunConfig {
        max_events,
        seed: Some(seed),
        resume_delay: std::time::Duration::ZERO,
        ..RunConfig::default()
    }
}
