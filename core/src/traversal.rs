use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::error::{EulerError, Result};
use crate::graph::{Graph, VertexId};

/// Traversal iterations between budget checks, unless overridden.
pub const DEFAULT_CHECK_INTERVAL: usize = 4096;

/// Cooperative cancellation for the traversal loop.
///
/// The loop polls `is_exhausted` once every `check_interval` iterations, so
/// a deadline, flag, or iteration cap takes effect within that many stack
/// operations.
#[derive(Debug, Clone)]
pub struct Budget {
    check_interval: usize,
    deadline: Option<Instant>,
    cancel: Option<Arc<AtomicBool>>,
    max_iterations: Option<usize>,
}

impl Budget {
    /// No deadline, no cancel flag, no iteration cap.
    pub fn unlimited() -> Self {
        Self {
            check_interval: DEFAULT_CHECK_INTERVAL,
            deadline: None,
            cancel: None,
            max_iterations: None,
        }
    }

    /// Set the polling cadence. Clamped to at least 1.
    pub fn with_check_interval(mut self, interval: usize) -> Self {
        self.check_interval = interval.max(1);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline relative to now. An overflowing timeout means no deadline.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Abort when `flag` is set by another thread.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Abort at the first check after `max` iterations have run.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }

    pub fn check_interval(&self) -> usize {
        self.check_interval
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    /// Whether a traversal that has run `iterations` steps must stop.
    pub fn is_exhausted(&self, iterations: usize) -> bool {
        if matches!(self.max_iterations, Some(max) if iterations >= max) {
            return true;
        }
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        matches!(self.deadline, Some(deadline) if Instant::now() >= deadline)
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::unlimited()
    }
}

/// Hierholzer's algorithm with an explicit stack.
///
/// Each iteration either consumes one edge (pushing its destination) or pops
/// a vertex that has no unconsumed outgoing edge into the walk, so the loop
/// runs at most `2 * |edges| + 1` times. The popped sequence is the walk in
/// reverse; it is flipped before returning.
///
/// Consumes `graph`'s edges: a graph is good for one traversal. The caller is
/// responsible for the balance and connectivity preconditions; without them
/// the result is a walk over only the reachable edges, which
/// `assemble::assemble` rejects.
pub fn hierholzer(graph: &mut Graph, start: VertexId, budget: &Budget) -> Result<Vec<VertexId>> {
    let capacity = graph.remaining_edges() + 1;
    let mut stack: Vec<VertexId> = Vec::with_capacity(capacity);
    let mut walk: Vec<VertexId> = Vec::with_capacity(capacity);
    let interval = budget.check_interval();
    let mut iterations = 0usize;

    stack.push(start);

    while let Some(&current) = stack.last() {
        if iterations % interval == 0 && budget.is_exhausted(iterations) {
            warn!(iterations, remaining = graph.remaining_edges(), "traversal cancelled");
            return Err(EulerError::Cancelled { iterations });
        }
        iterations += 1;

        if graph.has_unconsumed_edge(current) {
            let next = graph.consume_next_edge(current)?;
            stack.push(next);
        } else {
            stack.pop();
            walk.push(current);
        }
    }

    walk.reverse();
    Ok(walk)
}
