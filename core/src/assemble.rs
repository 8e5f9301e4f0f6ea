use tracing::error;

use crate::error::{EulerError, Result};
use crate::graph::VertexId;

/// Finalize a raw traversal walk.
///
/// A walk covering every edge has exactly `edge_count + 1` vertices. Anything
/// else means the traversal broke an invariant after feasibility was already
/// established, and is reported as `InternalInconsistency` rather than as an
/// empty (infeasible) result. The order is returned untouched.
pub fn assemble(raw_walk: Vec<VertexId>, edge_count: usize) -> Result<Vec<VertexId>> {
    let expected = edge_count + 1;
    if raw_walk.len() != expected {
        error!(
            expected,
            actual = raw_walk.len(),
            "walk length does not cover every edge"
        );
        return Err(EulerError::InternalInconsistency {
            expected,
            actual: raw_walk.len(),
        });
    }
    Ok(raw_walk)
}
