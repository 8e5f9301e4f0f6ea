use std::collections::VecDeque;

use crate::graph::Graph;

/// True if every vertex with nonzero degree lies in one weakly-connected
/// component. Isolated vertices are ignored; an edgeless graph is vacuously
/// connected.
///
/// BFS from the first nonzero-degree vertex over the undirected view
/// (`neighbors_all`). Reads adjacency only, so consumption cursors are
/// untouched. O(n + |edges|).
pub fn is_weakly_connected(graph: &Graph) -> bool {
    let n = graph.vertex_count();
    let Some(start) = (0..n).find(|&v| graph.total_degree(v) > 0) else {
        return true;
    };

    let mut visited = vec![false; n];
    let mut queue: VecDeque<usize> = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in graph.neighbors_all(current) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    (0..n).all(|v| visited[v] || graph.total_degree(v) == 0)
}
