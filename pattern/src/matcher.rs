//! Match finding against the hypergraph.

use tangle_core::Rule;
use tangle_graph::Hypergraph;

use crate::{substitute, Assignment};

/// A candidate occurrence of one rule's left-hand side.
///
/// Hits are found against a snapshot of the graph and are not validated;
/// the processor re-checks presence against live state before applying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Index of the rule in the run's rule set.
    pub rule_index: usize,
    /// Full binding for the rule's left-hand side.
    pub assignment: Assignment,
}

/// Enumerate every occurrence of every rule's left-hand side.
///
/// Per distinct edge of the anchor pattern's arity, seed an assignment by
/// binding the anchor positionally, then extend through the remaining
/// left-hand-side patterns as a backtracking join: each pattern's template
/// under the partial assignment selects the live edges that can bind it.
/// A completed assignment is emitted once per occurrence count of its
/// substituted left-hand side, so duplicate edge sets weight the hit list
/// by their multiplicity.
///
/// Never mutates the graph. No rules means no hits. Rules with an empty
/// left-hand side are skipped; the engine rejects them before a run starts.
pub fn find_matches(graph: &Hypergraph, rules: &[Rule]) -> Vec<Match> {
    let mut hits = Vec::new();

    for (rule_index, rule) in rules.iter().enumerate() {
        let anchor = match rule.lhs.first() {
            Some(pattern) => pattern,
            None => continue,
        };

        for edge in graph.edges_with_arity(anchor.arity()) {
            let seed = match Assignment::new().extend_with_edge(anchor, edge) {
                Some(assignment) => assignment,
                None => continue,
            };

            // Backtracking join over the remaining patterns: the candidate
            // list after k patterns holds every consistent way to complete
            // those k patterns.
            let mut candidates = vec![seed];
            for pattern in &rule.lhs[1..] {
                let mut extended = Vec::new();
                for assignment in &candidates {
                    let template = assignment.template(pattern);
                    for live in graph.find_matching(&template) {
                        if let Some(next) = assignment.extend_with_edge(pattern, live) {
                            extended.push(next);
                        }
                    }
                }
                candidates = extended;
                if candidates.is_empty() {
                    break;
                }
            }

            for assignment in candidates {
                let concrete = substitute(graph.max_vertex(), &rule.lhs, &assignment);
                let occurrences = graph.count_occurrences(&concrete);
                for _ in 0..occurrences {
                    hits.push(Match {
                        rule_index,
                        assignment: assignment.clone(),
                    });
                }
            }
        }
    }

    hits
}
