//! Property-based tests for the Kruskal spanning-forest engine.
//!
//! Random graphs are generated from seeded [`SmallRng`] draws so failures
//! replay deterministically. Each case validates structural invariants
//! (canonical form, acyclicity, edge count versus component count) and
//! checks total weight against an independent Prim oracle.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::Graph;

/// A generated graph: vertex count plus integer-weighted edges.
///
/// Weights are small integers so ties are frequent and every `f64`
/// conversion and sum stays exact.
#[derive(Clone, Debug)]
struct GraphFixture {
    vertex_count: usize,
    edges: Vec<(usize, usize, u32)>,
}

fn generate_fixture(vertex_count: usize, edge_probability: f64, seed: u64) -> GraphFixture {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                edges.push((u, v, rng.gen_range(0..16)));
            }
        }
    }
    GraphFixture {
        vertex_count,
        edges,
    }
}

fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (1_usize..24, 0.05_f64..0.9, any::<u64>())
        .prop_map(|(vertex_count, edge_probability, seed)| {
            generate_fixture(vertex_count, edge_probability, seed)
        })
}

fn build_graph(fixture: &GraphFixture) -> Result<Graph, TestCaseError> {
    let mut graph = Graph::new(fixture.vertex_count);
    for &(u, v, weight) in &fixture.edges {
        graph
            .add_edge(u, v, f64::from(weight))
            .map_err(|err| TestCaseError::fail(format!("fixture edge rejected: {err}")))?;
    }
    Ok(graph)
}

/// Independent minimum-spanning-forest oracle: Prim's algorithm run from
/// every unvisited vertex, returning total weight and accepted edge count.
fn prim_oracle(fixture: &GraphFixture) -> (u64, usize) {
    let mut adjacency: Vec<Vec<(usize, u32)>> = vec![Vec::new(); fixture.vertex_count];
    for &(u, v, weight) in &fixture.edges {
        adjacency[u].push((v, weight));
        adjacency[v].push((u, weight));
    }

    let mut visited = vec![false; fixture.vertex_count];
    let mut total_weight = 0_u64;
    let mut accepted = 0_usize;

    for start in 0..fixture.vertex_count {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut frontier = BinaryHeap::new();
        for &(next, weight) in &adjacency[start] {
            frontier.push(Reverse((weight, next)));
        }
        while let Some(Reverse((weight, node))) = frontier.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            total_weight += u64::from(weight);
            accepted += 1;
            for &(next, next_weight) in &adjacency[node] {
                if !visited[next] {
                    frontier.push(Reverse((next_weight, next)));
                }
            }
        }
    }

    (total_weight, accepted)
}

/// Counts connected components of the raw input edges.
fn input_component_count(fixture: &GraphFixture) -> usize {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();

    fn find(parent: &mut [usize], node: usize) -> usize {
        let mut current = node;
        while parent[current] != current {
            parent[current] = parent[parent[current]];
            current = parent[current];
        }
        current
    }

    for &(u, v, _) in &fixture.edges {
        let left = find(&mut parent, u);
        let right = find(&mut parent, v);
        if left != right {
            parent[right] = left;
        }
    }

    let mut roots: Vec<usize> = (0..fixture.vertex_count)
        .map(|node| find(&mut parent, node))
        .collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

proptest! {
    #[test]
    fn forest_satisfies_structural_invariants(fixture in graph_fixture_strategy()) {
        let graph = build_graph(&fixture)?;
        let forest = graph.minimum_spanning_forest();

        for edge in forest.edges() {
            prop_assert!(edge.source() < fixture.vertex_count);
            prop_assert!(edge.target() < fixture.vertex_count);
            prop_assert!(edge.source() <= edge.target());
        }

        // Replaying the forest through a fresh union-find must never close
        // a cycle, and must leave exactly `component_count` sets.
        let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
        fn find(parent: &mut [usize], node: usize) -> usize {
            let mut current = node;
            while parent[current] != current {
                parent[current] = parent[parent[current]];
                current = parent[current];
            }
            current
        }
        for edge in forest.edges() {
            let left = find(&mut parent, edge.source());
            let right = find(&mut parent, edge.target());
            prop_assert_ne!(left, right, "forest edge closes a cycle");
            parent[right] = left;
        }

        prop_assert_eq!(
            forest.edges().len(),
            fixture.vertex_count - forest.component_count()
        );
    }

    #[test]
    fn component_count_matches_the_input_graph(fixture in graph_fixture_strategy()) {
        let graph = build_graph(&fixture)?;
        let forest = graph.minimum_spanning_forest();
        prop_assert_eq!(forest.component_count(), input_component_count(&fixture));
    }

    #[test]
    fn total_weight_matches_the_prim_oracle(fixture in graph_fixture_strategy()) {
        let graph = build_graph(&fixture)?;
        let forest = graph.minimum_spanning_forest();
        let (oracle_weight, oracle_edges) = prim_oracle(&fixture);

        prop_assert_eq!(forest.edges().len(), oracle_edges);

        // Weights are small integers, so both sums are exact in f64 and
        // equality holds without a tolerance.
        prop_assert_eq!(forest.total_weight(), oracle_weight as f64);
    }
}
