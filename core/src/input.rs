//! Checked conversion from signed integers, as read off a textual edge list.

use crate::error::{saturating_i64, EulerError, Result};
use crate::graph::{Edge, VertexId};

/// Reject a negative vertex count as `InvalidVertex { vertex: n, vertex_count: n }`.
pub fn vertex_count_from_signed(n: i64) -> Result<usize> {
    usize::try_from(n).map_err(|_| EulerError::InvalidVertex {
        vertex: n,
        vertex_count: n,
    })
}

/// Convert one `(u, v)` pair, requiring both endpoints in `[0, vertex_count)`.
pub fn edge_from_signed(from: i64, to: i64, vertex_count: usize) -> Result<Edge> {
    Ok((vertex_from_signed(from, vertex_count)?, vertex_from_signed(to, vertex_count)?))
}

fn vertex_from_signed(v: i64, vertex_count: usize) -> Result<VertexId> {
    match usize::try_from(v) {
        Ok(id) if id < vertex_count => Ok(id),
        _ => Err(EulerError::InvalidVertex {
            vertex: v,
            vertex_count: saturating_i64(vertex_count),
        }),
    }
}
