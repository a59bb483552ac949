//! Overlapping-match scenarios.
//!
//! Two occurrences sharing an edge race within one round: whichever sorts
//! first wins, the other fails its presence re-check.

use tangle_tests::prelude::*;
use tangle_tests::run_seeded;

/// The rule (x,x,y)(y,z,u) -> (x,v,u)(y,v,z)(v,v,u) with variables
/// numbered by first appearance: x=0, y=1, z=2, u=3, v=4.
fn chain_rule() -> Rule {
    Rule::new(
        vec![pattern![0, 0, 1], pattern![1, 2, 3]],
        vec![pattern![0, 4, 3], pattern![1, 4, 2], pattern![4, 4, 3]],
    )
}

fn chain_initial() -> Vec<Hyperedge> {
    vec![edge![1, 1, 2], edge![2, 2, 3], edge![3, 3, 4]]
}

#[test]
fn test_one_of_two_overlapping_matches_applies() {
    // Both occurrences {x=1,y=2,z=2,u=3} and {x=2,y=3,z=3,u=4} consume the
    // middle edge (2,2,3); the event budget of 1 stops after the winner.
    let system = run_seeded(vec![chain_rule()], chain_initial(), 1, 7);
    let status = system.status();

    assert_eq!(status.phase, Phase::Finished);
    assert_eq!(status.events_applied, 1);

    // 3 initial edges, minus the 2 consumed, plus the 3 added.
    assert_eq!(system.graph().edge_count(), 4);

    // The loser's private edge is untouched: one of the two outer edges
    // survives, and the middle edge is always gone.
    assert!(!system.graph().contains(&edge![2, 2, 3]));
    assert!(
        system.graph().contains(&edge![1, 1, 2]) || system.graph().contains(&edge![3, 3, 4])
    );

    // The fresh vertex lands strictly above the seeded high-water mark.
    assert_eq!(system.graph().max_vertex(), 5);
}

#[test]
fn test_causal_log_records_seed_and_one_rewrite() {
    let system = run_seeded(vec![chain_rule()], chain_initial(), 1, 7);
    let causal = system.causal();

    assert_eq!(causal.len(), 2);

    let seed = causal.get(0).unwrap();
    assert!(seed.consumed.is_empty());
    assert_eq!(
        seed.produced,
        vec![
            VertexId::new(1),
            VertexId::new(2),
            VertexId::new(3),
            VertexId::new(4)
        ]
    );
    assert_eq!(seed.step, 0);

    let rewrite = causal.get(1).unwrap();
    assert_eq!(rewrite.step, 1);
    assert_eq!(rewrite.consumed.len(), 4);
    assert!(rewrite.produced.contains(&VertexId::new(5)));

    // Every consumed vertex came from the seed event.
    let parents: Vec<u64> = causal.parents(1).into_iter().collect();
    assert_eq!(parents, vec![0]);
}

#[test]
fn test_budget_two_applies_both_when_disjoint() {
    // With the shared middle edge duplicated, the two occurrences no
    // longer conflict: doubling (2,2,3) leaves one copy for each.
    let mut initial = chain_initial();
    initial.push(edge![2, 2, 3]);

    let system = run_seeded(vec![chain_rule()], initial, 2, 7);

    assert_eq!(system.status().events_applied, 2);
    assert!(!system.graph().contains(&edge![1, 1, 2]));
    assert!(!system.graph().contains(&edge![3, 3, 4]));
}

#[test]
fn test_duplicate_edges_yield_independent_applications() {
    // Two copies of (1,2) produce two hits for the same assignment; the
    // second re-validates against the remaining copy and applies too.
    let rule = Rule::new(vec![pattern![0, 1]], vec![pattern![0, 2]]);
    let system = run_seeded(vec![rule], vec![edge![1, 2], edge![1, 2]], 2, 3);

    assert_eq!(system.status().events_applied, 2);
    assert!(!system.graph().contains(&edge![1, 2]));
    // Each application drew its own fresh vertex.
    assert!(system.graph().contains(&edge![1, 3]));
    assert!(system.graph().contains(&edge![1, 4]));
}
