//! Seeded benchmark graph families.
//!
//! Randomized families draw from `ChaCha8Rng::seed_from_u64(seed)`, whose
//! output stream is fixed for a given seed across platforms and releases, so
//! a seed fully determines the generated edge list.

use euler_accel_core::Edge;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Cycle,
    Path,
    Dense,
    Random,
    Complete,
}

impl Family {
    pub const ALL: [Family; 5] = [
        Family::Cycle,
        Family::Path,
        Family::Dense,
        Family::Random,
        Family::Complete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Family::Cycle => "Simple Cycle",
            Family::Path => "Simple Path",
            Family::Dense => "Dense Cycle",
            Family::Random => "Random Graph",
            Family::Complete => "Complete Graph",
        }
    }

    /// Edge list for `n` vertices. Dense adds `4n` extra edges; random draws `2n`.
    pub fn generate(self, n: usize, seed: u64) -> Vec<Edge> {
        match self {
            Family::Cycle => euler_cycle(n),
            Family::Path => euler_path(n),
            Family::Dense => dense_euler_cycle(n, n * 4, seed),
            Family::Random => random_graph(n, n * 2, seed),
            Family::Complete => complete_graph(n),
        }
    }
}

/// Ring `0 -> 1 -> ... -> n-1 -> 0`.
pub fn euler_cycle(n: usize) -> Vec<Edge> {
    (0..n).map(|i| (i, (i + 1) % n)).collect()
}

/// Chain `0 -> 1 -> ... -> n-1`. Empty for `n <= 1`.
pub fn euler_path(n: usize) -> Vec<Edge> {
    (1..n).map(|i| (i - 1, i)).collect()
}

/// Ring plus `extra / 2` random `(u, v), (v, u)` pairs; stays balanced.
pub fn dense_euler_cycle(n: usize, extra: usize, seed: u64) -> Vec<Edge> {
    if n == 0 {
        return Vec::new();
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(n + extra);
    edges.extend(euler_cycle(n));
    for _ in 0..extra / 2 {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        edges.push((u, v));
        edges.push((v, u));
    }
    edges
}

/// `edge_count` uniform random edges, self-loops and repeats allowed.
pub fn random_graph(n: usize, edge_count: usize, seed: u64) -> Vec<Edge> {
    if n == 0 {
        return Vec::new();
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..edge_count)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

/// Every ordered pair `(i, j)` with `i != j`.
pub fn complete_graph(n: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1));
    for i in 0..n {
        for j in 0..n {
            if i != j {
                edges.push((i, j));
            }
        }
    }
    edges
}
