//! Seeded input generators shared by the arbor benchmarks.
//!
//! All generators take an explicit seed so benchmark inputs are identical
//! across runs and machines.

use arbor_core::Graph;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Generates `len` pseudo-random values for the sort benchmarks.
#[must_use]
pub fn random_values(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..len).map(|_| rng.r#gen()).collect()
}

/// Generates a random graph with `vertex_count` vertices.
///
/// Each vertex pair receives an edge with probability `edge_probability`;
/// weights are drawn uniformly from `[0, 1)`.
///
/// # Panics
/// Panics if a generated edge is rejected, which cannot happen because all
/// endpoints are drawn from the vertex range and weights are finite.
#[must_use]
pub fn random_graph(vertex_count: usize, edge_probability: f64, seed: u64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = Graph::new(vertex_count);
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                graph
                    .add_edge(u, v, rng.r#gen::<f64>())
                    .expect("generated endpoints are always in range");
            }
        }
    }
    graph
}
