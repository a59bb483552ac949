//! Ordering-policy scenarios: rule grouping and causal-rank ordering
//! observed end to end.

use std::collections::BTreeSet;

use tangle_tests::prelude::*;
use tangle_tests::{run_with, seeded_config};

#[test]
fn test_rule_index_ordering_picks_first_rule() {
    // Rule 0 collapses the edge, rule 1 reverses it; both match the single
    // seed edge and the budget admits one event. Grouping by index makes
    // the winner deterministic regardless of the shuffle.
    let rules = vec![
        Rule::new(vec![pattern![0, 1]], vec![pattern![0]]),
        Rule::new(vec![pattern![0, 1]], vec![pattern![1, 0]]),
    ];
    let config = RunConfig {
        rule_ordering: RuleOrdering::Index,
        ..seeded_config(1, 21)
    };

    let system = run_with(rules, vec![edge![1, 2]], config);

    assert!(system.graph().contains(&edge![1]));
    assert!(!system.graph().contains(&edge![2, 1]));
}

#[test]
fn test_rule_index_rev_ordering_picks_last_rule() {
    let rules = vec![
        Rule::new(vec![pattern![0, 1]], vec![pattern![0]]),
        Rule::new(vec![pattern![0, 1]], vec![pattern![1, 0]]),
    ];
    let config = RunConfig {
        rule_ordering: RuleOrdering::IndexRev,
        ..seeded_config(1, 21)
    };

    let system = run_with(rules, vec![edge![1, 2]], config);

    assert!(system.graph().contains(&edge![2, 1]));
    assert!(!system.graph().contains(&edge![1]));
}

/// (x,y) -> (x,z): replaces each binary edge's tail with a fresh vertex.
///
/// Starting from two disjoint edges, the first round rewrites both (events
/// 1 and 2); in the second round the two candidate hits depend on fresh
/// vertices of different recency, so the event ordering decides which
/// chain advances when the budget cuts off at three events.
fn replace_rule() -> Rule {
    Rule::new(vec![pattern![0, 1]], vec![pattern![0, 2]])
}

fn third_event_parents(event_ordering: EventOrdering, seed: u64) -> BTreeSet<u64> {
    let config = RunConfig {
        event_ordering,
        ..seeded_config(3, seed)
    };
    let system = run_with(
        vec![replace_rule()],
        vec![edge![1, 2], edge![3, 4]],
        config,
    );
    assert_eq!(system.status().events_applied, 3);
    system.causal().parents(3)
}

#[test]
fn test_ascending_extends_the_older_chain() {
    // The third event's non-seed parent is event 1, the older producer.
    for seed in [1, 2, 3] {
        let parents = third_event_parents(EventOrdering::Ascending, seed);
        assert_eq!(parents, BTreeSet::from([0, 1]));
    }
}

#[test]
fn test_descending_extends_the_newer_chain() {
    for seed in [1, 2, 3] {
        let parents = third_event_parents(EventOrdering::Descending, seed);
        assert_eq!(parents, BTreeSet::from([0, 2]));
    }
}

#[test]
fn test_fixed_seed_reproduces_random_ordering_runs() {
    // Growth grows fast enough that different orders diverge; an identical
    // seed must replay the identical run.
    let growth = Rule::new(vec![pattern![0, 1]], vec![pattern![0, 2], pattern![2, 1]]);

    let run = |seed| {
        let system = run_with(
            vec![growth.clone()],
            vec![edge![1, 2], edge![2, 3]],
            seeded_config(25, seed),
        );
        let edges: Vec<(Hyperedge, usize)> = system
            .graph()
            .edges()
            .map(|(e, c)| (e.clone(), c))
            .collect();
        (edges, system.causal().events().to_vec())
    };

    assert_eq!(run(77), run(77));
    assert_ne!(run(77).1, run(78).1);
}

#[test]
fn test_sorted_policies_agree_across_seeds_when_keys_are_total() {
    // With every hit carrying a distinct rank key, the shuffle cannot
    // leak through a sorted policy: different seeds give the same log.
    let a = third_event_parents(EventOrdering::Ascending, 100);
    let b = third_event_parents(EventOrdering::Ascending, 200);
    assert_eq!(a, b);
}
