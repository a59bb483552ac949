//! Minimal rule deltas.

use tangle_core::{Pattern, Rule};

/// The parts of a rule that actually change the graph.
///
/// Patterns present on both sides (by structural equality, multiset
/// semantics) are factored out of both: deleting and recreating an
/// unchanged edge would waste work and, worse, mark it as causally
/// consumed and reproduced, corrupting provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDelta {
    /// Left-hand-side patterns with no right-hand counterpart; these edges
    /// are removed on application.
    pub lhs_only: Vec<Pattern>,
    /// Right-hand-side patterns with no left-hand counterpart; these edges
    /// are added on application.
    pub rhs_only: Vec<Pattern>,
}

impl RuleDelta {
    /// Factor a rule into its minimal delta.
    pub fn factor(rule: &Rule) -> Self {
        let mut rhs_only: Vec<Pattern> = rule.rhs.clone();
        let mut lhs_only = Vec::new();

        for pattern in &rule.lhs {
            if let Some(position) = rhs_only.iter().position(|p| p == pattern) {
                rhs_only.remove(position);
            } else {
                lhs_only.push(pattern.clone());
            }
        }

        Self { lhs_only, rhs_only }
    }

    /// Returns true if applying this delta would not change the graph.
    pub fn is_noop(&self) -> bool {
        self.lhs_only.is_empty() && self.rhs_only.is_empty()
    }
}
