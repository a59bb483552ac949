//! Pattern substitution.

use tangle_core::{Hyperedge, Pattern, VertexId};

use crate::Assignment;

/// Substitute a pattern sequence under an assignment, producing concrete
/// hyperedges.
///
/// Bound variables take their assigned vertex. An unbound variable `v`
/// allocates the fresh vertex `max_vertex + (v - bound_len) + 1`, so the
/// same unbound index always maps to the same fresh vertex within one call
/// and every fresh vertex is strictly greater than `max_vertex`.
///
/// Two calls against the same `max_vertex` can hand out overlapping fresh
/// ids when their unbound indices coincide. Callers substituting both sides
/// of one rule application therefore use a single captured `max_vertex`;
/// this is safe because a validated left-hand side is fully bound and
/// allocates nothing.
pub fn substitute(max_vertex: u64, patterns: &[Pattern], assignment: &Assignment) -> Vec<Hyperedge> {
    let bound_len = assignment.len() as u64;
    patterns
        .iter()
        .map(|pattern| {
            Hyperedge::new(
                pattern
                    .iter()
                    .map(|var| match assignment.get(var) {
                        Some(vertex) => vertex,
                        None => VertexId::new(max_vertex + (var as u64 - bound_len) + 1),
                    })
                    .collect(),
            )
        })
        .collect()
}
