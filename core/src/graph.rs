use crate::error::{saturating_i64, EulerError, Result};

/// Vertex identifier in `[0, vertex_count)`.
pub type VertexId = usize;

/// A directed edge `(from, to)`. Parallel edges and self-loops are distinct.
pub type Edge = (VertexId, VertexId);

/// Directed multigraph with single-use edge consumption.
///
/// Adjacency is stored in compressed form: `out_targets[out_offsets[v]..out_offsets[v + 1]]`
/// holds the destinations of v's outgoing edges in input order, and
/// `in_sources` mirrors it for incoming edges. Both are populated on build.
/// `cursor[v]` is the absolute index of v's next unconsumed outgoing edge;
/// it only moves forward and never passes `out_offsets[v + 1]`.
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    edge_count: usize,
    first_source: Option<VertexId>,
    out_offsets: Vec<usize>,
    out_targets: Vec<VertexId>,
    in_offsets: Vec<usize>,
    in_sources: Vec<VertexId>,
    cursor: Vec<usize>,
    consumed: usize,
}

impl Graph {
    /// Build from a vertex count and an ordered edge list.
    ///
    /// Fails with `InvalidVertex` if any endpoint is outside `[0, vertex_count)`,
    /// or if `vertex_count` is too large to index. Runs in O(n + |edges|) with
    /// two counting passes.
    pub fn build(vertex_count: usize, edges: &[Edge]) -> Result<Self> {
        let invalid = |v: usize| EulerError::InvalidVertex {
            vertex: saturating_i64(v),
            vertex_count: saturating_i64(vertex_count),
        };

        for &(from, to) in edges {
            for v in [from, to] {
                if v >= vertex_count {
                    return Err(invalid(v));
                }
            }
        }

        let offsets_len = vertex_count
            .checked_add(1)
            .ok_or_else(|| invalid(vertex_count))?;
        let mut out_offsets = vec![0usize; offsets_len];
        let mut in_offsets = vec![0usize; offsets_len];
        for &(from, to) in edges {
            out_offsets[from + 1] += 1;
            in_offsets[to + 1] += 1;
        }
        for v in 0..vertex_count {
            out_offsets[v + 1] += out_offsets[v];
            in_offsets[v + 1] += in_offsets[v];
        }

        // Stable placement keeps each vertex's edges in input order.
        let mut out_fill = out_offsets[..vertex_count].to_vec();
        let mut in_fill = in_offsets[..vertex_count].to_vec();
        let mut out_targets = vec![0; edges.len()];
        let mut in_sources = vec![0; edges.len()];
        for &(from, to) in edges {
            out_targets[out_fill[from]] = to;
            out_fill[from] += 1;
            in_sources[in_fill[to]] = from;
            in_fill[to] += 1;
        }

        let cursor = out_offsets[..vertex_count].to_vec();

        Ok(Self {
            vertex_count,
            edge_count: edges.len(),
            first_source: edges.first().map(|&(from, _)| from),
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
            cursor,
            consumed: 0,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Source vertex of the first edge in input order, if any.
    pub fn first_edge_source(&self) -> Option<VertexId> {
        self.first_source
    }

    /// Outgoing edge count. Zero for vertices outside the graph.
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.neighbors_out(v).len()
    }

    /// Incoming edge count. Zero for vertices outside the graph.
    pub fn in_degree(&self, v: VertexId) -> usize {
        self.neighbors_in(v).len()
    }

    pub fn total_degree(&self, v: VertexId) -> usize {
        self.out_degree(v) + self.in_degree(v)
    }

    /// Destinations of v's outgoing edges, in input order.
    pub fn neighbors_out(&self, v: VertexId) -> &[VertexId] {
        if v >= self.vertex_count {
            return &[];
        }
        &self.out_targets[self.out_offsets[v]..self.out_offsets[v + 1]]
    }

    /// Sources of v's incoming edges, in input order.
    pub fn neighbors_in(&self, v: VertexId) -> &[VertexId] {
        if v >= self.vertex_count {
            return &[];
        }
        &self.in_sources[self.in_offsets[v]..self.in_offsets[v + 1]]
    }

    /// Both directions, ignoring edge orientation.
    pub fn neighbors_all(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors_out(v)
            .iter()
            .chain(self.neighbors_in(v).iter())
            .copied()
    }

    pub fn has_unconsumed_edge(&self, v: VertexId) -> bool {
        v < self.vertex_count && self.cursor[v] < self.out_offsets[v + 1]
    }

    /// Take v's next unused outgoing edge and return its destination.
    pub fn consume_next_edge(&mut self, v: VertexId) -> Result<VertexId> {
        if !self.has_unconsumed_edge(v) {
            return Err(EulerError::EdgesExhausted { vertex: v });
        }
        let target = self.out_targets[self.cursor[v]];
        self.cursor[v] += 1;
        self.consumed += 1;
        Ok(target)
    }

    /// Edges not yet consumed by a traversal.
    pub fn remaining_edges(&self) -> usize {
        self.edge_count - self.consumed
    }
}
