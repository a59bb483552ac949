//! Engine error types.
//!
//! Steady-state conditions (no matches, invalidated hits, budget reached)
//! are data, not errors; the only error path is malformed input rejected at
//! the `run` boundary.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur when starting a run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Rule {rule_index} has an empty left-hand side")]
    EmptyLeftHandSide { rule_index: usize },

    #[error("Rule {rule_index} anchors on a zero-arity pattern")]
    ZeroArityAnchor { rule_index: usize },
}

impl EngineError {
    pub fn empty_left_hand_side(rule_index: usize) -> Self {
        Self::EmptyLeftHandSide { rule_index }
    }

    pub fn zero_arity_anchor(rule_index: usize) -> Self {
        Self::ZeroArityAnchor { rule_index }
    }
}
