use crate::graph::{Graph, VertexId};

/// Degree-balance classification of a directed multigraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    /// Every vertex has `out == in`. Carries the source of the first input edge.
    Circuit(VertexId),
    /// Exactly one vertex with `out - in == +1` (the start) and one with `-1`.
    Path(VertexId),
    /// Imbalanced, or no edges at all.
    None,
}

/// Classify from degree counters alone. O(n).
///
/// Any `|out - in| > 1`, or a count of +1/-1 vertices other than 0/0 or 1/1,
/// yields `None`. Connectivity is checked separately.
pub fn classify(graph: &Graph) -> Balance {
    let Some(first_source) = graph.first_edge_source() else {
        return Balance::None;
    };

    let mut path_start = None;
    let mut plus_ones = 0usize;
    let mut minus_ones = 0usize;

    for v in 0..graph.vertex_count() {
        let out = graph.out_degree(v);
        let inc = graph.in_degree(v);
        if out == inc {
            continue;
        }
        if out == inc + 1 {
            plus_ones += 1;
            path_start = Some(v);
        } else if inc == out + 1 {
            minus_ones += 1;
        } else {
            return Balance::None;
        }
        if plus_ones > 1 || minus_ones > 1 {
            return Balance::None;
        }
    }

    match (plus_ones, minus_ones, path_start) {
        (0, 0, _) => Balance::Circuit(first_source),
        (1, 1, Some(start)) => Balance::Path(start),
        _ => Balance::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, edges: &[(usize, usize)]) -> Graph {
        Graph::build(n, edges).unwrap()
    }

    #[test]
    fn test_cycle_is_circuit() {
        let g = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(classify(&g), Balance::Circuit(0));
    }

    #[test]
    fn test_circuit_start_is_first_edge_source() {
        let g = graph(4, &[(2, 3), (3, 1), (1, 2)]);
        assert_eq!(classify(&g), Balance::Circuit(2));
    }

    #[test]
    fn test_chain_is_path() {
        let g = graph(4, &[(1, 2), (0, 1), (2, 3)]);
        assert_eq!(classify(&g), Balance::Path(0));
    }

    #[test]
    fn test_self_loop_is_circuit() {
        let g = graph(1, &[(0, 0)]);
        assert_eq!(classify(&g), Balance::Circuit(0));
    }

    #[test]
    fn test_no_edges_is_none() {
        assert_eq!(classify(&graph(5, &[])), Balance::None);
        assert_eq!(classify(&graph(0, &[])), Balance::None);
    }

    #[test]
    fn test_delta_two_is_none() {
        // 0 has out 2, in 0
        let g = graph(3, &[(0, 1), (0, 2)]);
        assert_eq!(classify(&g), Balance::None);
    }

    #[test]
    fn test_two_sources_is_none() {
        let g = graph(4, &[(0, 1), (2, 3)]);
        assert_eq!(classify(&g), Balance::None);
    }

    #[test]
    fn test_parallel_edges_balance() {
        let g = graph(2, &[(0, 1), (0, 1), (1, 0), (1, 0)]);
        assert_eq!(classify(&g), Balance::Circuit(0));
        let g = graph(2, &[(0, 1), (0, 1), (1, 0)]);
        assert_eq!(classify(&g), Balance::Path(0));
    }
}
