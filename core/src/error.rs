use thiserror::Error;

use crate::graph::VertexId;

/// Failures surfaced by the engine.
///
/// An infeasible graph is not an error: it is a successful analysis with an
/// empty walk. Everything here is either rejected input, a caller-requested
/// abort, or a broken traversal invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EulerError {
    /// An endpoint outside `[0, vertex_count)`, or a negative vertex count
    /// (reported with `vertex == vertex_count`). Values beyond `i64::MAX`
    /// saturate.
    #[error("vertex {vertex} is outside [0, {vertex_count})")]
    InvalidVertex { vertex: i64, vertex_count: i64 },

    #[error("vertex {vertex} has no unconsumed outgoing edge")]
    EdgesExhausted { vertex: VertexId },

    #[error("assembled walk has {actual} vertices, expected {expected}")]
    InternalInconsistency { expected: usize, actual: usize },

    #[error("traversal cancelled after {iterations} iterations")]
    Cancelled { iterations: usize },
}

impl EulerError {
    /// True for errors caused by the caller's input rather than the engine.
    pub fn is_input_error(&self) -> bool {
        matches!(self, EulerError::InvalidVertex { .. })
    }
}

pub type Result<T> = std::result::Result<T, EulerError>;

/// Widen an unsigned id for error reporting, saturating at `i64::MAX`.
pub(crate) fn saturating_i64(v: usize) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
