//! The cooperative slice loop.

use std::time::Instant;

use rand::rngs::StdRng;

use tangle_causal::CausalGraph;
use tangle_core::Rule;
use tangle_graph::Hypergraph;
use tangle_pattern::find_matches;

use crate::config::RunConfig;
use crate::delta::RuleDelta;
use crate::ordering::order_hits;
use crate::processor::process_matches;
use crate::state::RunState;

/// Why a slice ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceEnd {
    /// The wall-clock budget ran out with work remaining.
    Yielded,
    /// A round found no matches; the run is exhausted.
    Exhausted,
    /// The event budget was reached (or cancellation lowered it).
    BudgetReached,
}

/// Execute one bounded slice of find-order-process rounds.
///
/// Rounds repeat until a round finds no matches, the event budget is
/// reached, or the slice's wall-clock budget elapses. The hit list is
/// recomputed from scratch every round and dropped at the end of it;
/// nothing carries over a yield except the graph, the causal log, and the
/// `RunState` counters.
pub fn run_slice(
    graph: &mut Hypergraph,
    causal: &mut CausalGraph,
    rules: &[Rule],
    deltas: &[RuleDelta],
    config: &RunConfig,
    state: &mut RunState,
    rng: &mut StdRng,
) -> SliceEnd {
    let started = Instant::now();

    loop {
        state.step += 1;

        let mut hits = find_matches(graph, rules);
        if hits.is_empty() {
            state.exhausted = true;
            return SliceEnd::Exhausted;
        }

        order_hits(
            &mut hits,
            causal,
            config.event_ordering,
            config.rule_ordering,
            rules.len(),
            rng,
        );

        process_matches(graph, causal, rules, deltas, &hits, state);
        if state.budget_reached() {
            return SliceEnd::BudgetReached;
        }

        if started.elapsed() >= config.slice_budget {
            return SliceEnd::Yielded;
        }
    }
}
