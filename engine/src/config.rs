//! Run configuration.

use std::time::Duration;

use crate::ordering::{EventOrdering, RuleOrdering};

/// Parameters for one run, immutable for its duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// How hits from different rules are interleaved within a round.
    pub rule_ordering: RuleOrdering,
    /// How hits are ordered by their causal-rank keys within a round.
    pub event_ordering: EventOrdering,
    /// Event budget; the run finishes once this many matches applied.
    /// A budget of 0 finishes the run on its first slice.
    pub max_events: u64,
    /// Wall-clock bound on continuous work per slice before yielding.
    pub slice_budget: Duration,
    /// Delay the bundled driver sleeps between slices; hosts with their
    /// own schedulers consult it or ignore it.
    pub resume_delay: Duration,
    /// Seed for the hit shuffle. `None` draws from entropy; a fixed seed
    /// makes the whole run reproducible.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rule_ordering: RuleOrdering::default(),
            event_ordering: EventOrdering::default(),
            max_events: 0,
            slice_budget: Duration::from_millis(500),
            resume_delay: Duration::from_millis(10),
            seed: None,
        }
    }
}

impl RunConfig {
    /// Default configuration with the given event budget.
    pub fn with_max_events(max_events: u64) -> Self {
        Self {
            max_events,
            ..Self::default()
        }
    }
}
