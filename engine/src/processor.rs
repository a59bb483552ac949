//! Match processing: re-validation, delta application, causal recording.

use tangle_causal::CausalGraph;
use tangle_core::{vertex_union, Rule};
use tangle_graph::Hypergraph;
use tangle_pattern::{substitute, Match};

use crate::delta::RuleDelta;
use crate::state::RunState;

/// Statistics from processing one round's hit list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// Hits applied to the graph.
    pub applied: usize,
    /// Hits whose edges an earlier hit this round had already consumed.
    pub skipped: usize,
}

/// Apply an ordered hit list against the live graph.
///
/// Hits are processed strictly in list order. Each hit is re-validated
/// against the current graph first: the matches were found against a
/// snapshot, and an earlier hit in the same round may have consumed the
/// edges this one needs. Failing the presence check skips the hit; there
/// is no locking and no rollback. Each applied hit removes and adds its
/// factored delta in one atomic call and records one causal event.
///
/// Processing stops as soon as the event budget is reached, which is also
/// where cancellation (budget lowered to the applied count) takes effect.
pub fn process_matches(
    graph: &mut Hypergraph,
    causal: &mut CausalGraph,
    rules: &[Rule],
    deltas: &[RuleDelta],
    hits: &[Match],
    state: &mut RunState,
) -> ProcessReport {
    let mut report = ProcessReport::default();

    for hit in hits {
        if state.budget_reached() {
            break;
        }

        let rule = &rules[hit.rule_index];
        let delta = &deltas[hit.rule_index];

        // Presence re-check uses the full unfactored left-hand side: the
        // occurrence as matched must still exist, shared parts included.
        let full_lhs = substitute(graph.max_vertex(), &rule.lhs, &hit.assignment);
        if graph.count_occurrences(&full_lhs) == 0 {
            report.skipped += 1;
            continue;
        }

        // One captured mark for both sides. The validated left-hand side
        // is fully bound, so only right-hand-only variables allocate
        // fresh vertices and the two substitutions cannot collide.
        let mark = graph.max_vertex();
        let removed = substitute(mark, &delta.lhs_only, &hit.assignment);
        let added = substitute(mark, &delta.rhs_only, &hit.assignment);
        graph.apply_delta(&removed, &added);

        let produced = vertex_union(&added);
        let consumed = hit.assignment.vertices().to_vec();
        causal.record_event(consumed, produced, state.step);

        state.events_applied += 1;
        report.applied += 1;
    }

    report
}
