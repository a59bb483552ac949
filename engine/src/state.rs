//! Run state.

/// Counters for one run.
///
/// Owned by the scheduler and threaded explicitly through slice and
/// processor calls, so every state transition is visible at a call
/// boundary and testable in isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    /// Completed find-order-process rounds.
    pub step: u64,
    /// Successfully applied matches across the whole run.
    pub events_applied: u64,
    /// Event budget; cancellation lowers this to the applied count.
    pub max_events: u64,
    /// Set once a round finds no matches.
    pub exhausted: bool,
}

impl RunState {
    /// Create the state for a fresh run with the given event budget.
    pub fn new(max_events: u64) -> Self {
        Self {
            step: 0,
            events_applied: 0,
            max_events,
            exhausted: false,
        }
    }

    /// Returns true once the event budget is used up.
    pub fn budget_reached(&self) -> bool {
        self.events_applied >= self.max_events
    }

    /// Returns true when the run has nothing left to do.
    pub fn finished(&self) -> bool {
        self.exhausted || self.budget_reached()
    }
}
