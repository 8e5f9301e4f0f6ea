//! euler-accel-core: Eulerian circuit and path engine for directed multigraphs.
//!
//! Decides whether a directed multigraph admits an Eulerian circuit or path
//! and constructs one: degree-balance classification, a weak-connectivity
//! check, then an iterative Hierholzer traversal that consumes each edge
//! exactly once. Linear in vertices plus edges, with no recursion, so
//! graphs with millions of edges are safe on a default thread stack.
//!
//! Pure and single-threaded; no I/O. Independent graphs can be analyzed on
//! separate threads since every query builds and owns its own `Graph`.

mod assemble;
mod balance;
mod connectivity;
mod error;
mod graph;
pub mod input;
mod traversal;

use tracing::debug;

pub use assemble::assemble;
pub use balance::{classify, Balance};
pub use connectivity::is_weakly_connected;
pub use error::{EulerError, Result};
pub use graph::{Edge, Graph, VertexId};
pub use traversal::{hierholzer, Budget, DEFAULT_CHECK_INTERVAL};

/// What kind of walk a graph admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkKind {
    Circuit,
    Path,
    None,
}

/// Outcome of a successful analysis. `vertices` is empty iff `kind` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerWalk {
    pub kind: WalkKind,
    pub vertices: Vec<VertexId>,
}

impl EulerWalk {
    fn none() -> Self {
        Self {
            kind: WalkKind::None,
            vertices: Vec::new(),
        }
    }
}

/// Eulerian circuit or path for `edges` over vertices `0..vertex_count`.
///
/// Returns the vertex sequence (length `|edges| + 1`), or an empty vector when
/// no circuit or path exists or there are no edges.
pub fn check_eulerian(vertex_count: usize, edges: &[Edge]) -> Result<Vec<VertexId>> {
    check_eulerian_with(vertex_count, edges, &Budget::unlimited())
}

/// `check_eulerian` under a cancellation budget.
pub fn check_eulerian_with(
    vertex_count: usize,
    edges: &[Edge],
    budget: &Budget,
) -> Result<Vec<VertexId>> {
    analyze(vertex_count, edges, budget).map(|walk| walk.vertices)
}

/// Full analysis: validate, classify, check connectivity, traverse, assemble.
///
/// Circuits start at the source of the first input edge; paths start at the
/// unique vertex with one more outgoing than incoming edge.
pub fn analyze(vertex_count: usize, edges: &[Edge], budget: &Budget) -> Result<EulerWalk> {
    // No edges means no walk for any n; the vertex count is never allocated.
    if edges.is_empty() {
        return Ok(EulerWalk::none());
    }

    let mut graph = Graph::build(vertex_count, edges)?;

    let balance = classify(&graph);
    let (kind, start) = match balance {
        Balance::Circuit(start) => (WalkKind::Circuit, start),
        Balance::Path(start) => (WalkKind::Path, start),
        Balance::None => {
            debug!(vertex_count, edges = edges.len(), "degree balance rules out euler walk");
            return Ok(EulerWalk::none());
        }
    };

    if !is_weakly_connected(&graph) {
        debug!(vertex_count, edges = edges.len(), "nonzero-degree vertices are disconnected");
        return Ok(EulerWalk::none());
    }

    debug!(?kind, start, edges = edges.len(), "running hierholzer traversal");
    let raw = hierholzer(&mut graph, start, budget)?;
    let vertices = assemble(raw, graph.edge_count())?;

    Ok(EulerWalk { kind, vertices })
}
