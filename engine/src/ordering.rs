//! Hit ordering policies.
//!
//! Every round starts from a uniform shuffle of the hit list; the
//! event-ordering and rule-ordering policies then impose structure with
//! stable sorts, so the shuffle remains the tie-break of last resort.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use tangle_causal::CausalGraph;
use tangle_pattern::Match;

/// Policy for ordering hits by the causal ranks of their dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventOrdering {
    /// Keep the uniform shuffle.
    #[default]
    Random,
    /// Hits with the causally oldest dependencies first.
    Ascending,
    /// Hits with the causally newest dependencies first.
    Descending,
}

/// Policy for interleaving hits from different rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleOrdering {
    /// Leave rules interleaved as the event ordering produced them.
    #[default]
    Mixed,
    /// Group by rule index, lowest first.
    Index,
    /// Group by rule index, highest first.
    IndexRev,
}

/// Order a round's hit list in place.
///
/// The shuffle always runs (it is the baseline and the tie-break). The
/// event-ordering sort runs next, and the rule-index sort last; both are
/// stable, so the rule sort preserves the event order within each rule and
/// the event sort preserves the shuffle among equal keys. The rule sort is
/// skipped when fewer than two rules are defined.
pub fn order_hits(
    hits: &mut Vec<Match>,
    causal: &CausalGraph,
    event_ordering: EventOrdering,
    rule_ordering: RuleOrdering,
    rule_count: usize,
    rng: &mut StdRng,
) {
    hits.shuffle(rng);

    if event_ordering != EventOrdering::Random {
        let mut keyed: Vec<(Vec<u64>, Match)> = hits
            .drain(..)
            .map(|hit| (rank_key(causal, &hit), hit))
            .collect();
        match event_ordering {
            EventOrdering::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
            EventOrdering::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
            EventOrdering::Random => unreachable!(),
        }
        hits.extend(keyed.into_iter().map(|(_, hit)| hit));
    }

    if rule_count > 1 {
        match rule_ordering {
            RuleOrdering::Mixed => {}
            RuleOrdering::Index => hits.sort_by_key(|hit| hit.rule_index),
            RuleOrdering::IndexRev => hits.sort_by(|a, b| b.rule_index.cmp(&a.rule_index)),
        }
    }
}

/// Ordering key for one hit: the first causal rank of each bound vertex,
/// sorted descending.
///
/// Keys compare lexicographically, so `Ascending` puts the hit whose
/// newest dependency is oldest first, and a key that is a strict prefix of
/// another sorts before it (shorter first ascending, longer first
/// descending). A vertex without a rank label counts as rank 0; bound
/// vertices always originate from some event when the run was seeded
/// through the system.
fn rank_key(causal: &CausalGraph, hit: &Match) -> Vec<u64> {
    let mut key: Vec<u64> = hit
        .assignment
        .vertices()
        .iter()
        .map(|vertex| causal.first_rank(*vertex).unwrap_or(0))
        .collect();
    key.sort_by(|a, b| b.cmp(a));
    key
}
