//! Minimum spanning forest construction.
//!
//! Sequential Kruskal's algorithm: sort the edge list by weight ascending,
//! then greedily accept every edge whose endpoints live in different
//! components, tracked by a path-compressing, union-by-rank disjoint-set.
//! The sort is O(E log E) and dominates; the union-find operations are
//! amortised near-constant each.

mod union_find;

#[cfg(test)]
mod property;

use tracing::{debug, instrument};

use crate::error::GraphError;

use self::union_find::DisjointSet;

/// A single accepted edge in canonical undirected form (`source <= target`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MstEdge {
    source: usize,
    target: usize,
    weight: f64,
}

impl MstEdge {
    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

/// The output of a spanning-forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning
/// tree with exactly `V - 1` edges. A disconnected graph yields fewer
/// edges spanning each component separately; that is a valid partial
/// result, not an error.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<MstEdge>,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the accepted edges in acceptance order (weight ascending).
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge] { &self.edges }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(MstEdge::weight).sum()
    }
}

/// A weighted undirected graph over dense vertex ids `[0, V)`.
///
/// The edge list is append-only; spanning-forest computation borrows the
/// graph immutably and leaves it untouched.
///
/// # Examples
/// ```
/// use arbor_core::Graph;
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1, 10.0)?;
/// graph.add_edge(0, 2, 6.0)?;
/// graph.add_edge(0, 3, 5.0)?;
/// graph.add_edge(1, 3, 15.0)?;
/// graph.add_edge(2, 3, 4.0)?;
///
/// let forest = graph.minimum_spanning_forest();
/// assert!(forest.is_tree());
/// assert_eq!(forest.edges().len(), 3);
/// assert_eq!(forest.total_weight(), 15.0);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<MstEdge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges added so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Appends an undirected edge between `u` and `v`.
    ///
    /// The edge is stored in canonical form (`min(u, v)`, `max(u, v)`).
    /// Self-loops are accepted here; Kruskal never selects them because
    /// both endpoints always share a root.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertexId`] when an endpoint is outside
    /// `[0, vertex_count)` and [`GraphError::NonFiniteWeight`] when the
    /// weight is NaN or infinite.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<(), GraphError> {
        for vertex in [u, v] {
            if vertex >= self.vertex_count {
                return Err(GraphError::InvalidVertexId {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                source: u,
                target: v,
            });
        }

        let (source, target) = if u <= v { (u, v) } else { (v, u) };
        self.edges.push(MstEdge {
            source,
            target,
            weight,
        });
        Ok(())
    }

    /// Computes a minimum spanning forest of the graph.
    ///
    /// For a connected graph the result is a minimum spanning tree with
    /// `vertex_count - 1` edges; for a disconnected graph it spans each
    /// component separately and reports the surviving component count.
    /// Iteration stops early once the forest is complete.
    #[must_use]
    #[instrument(
        skip(self),
        fields(vertex_count = self.vertex_count, edge_count = self.edges.len()),
    )]
    pub fn minimum_spanning_forest(&self) -> SpanningForest {
        // Stable sort keyed on weight alone: equal weights keep insertion
        // order, which is enough for correctness.
        let mut queue = self.edges.clone();
        queue.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut set = DisjointSet::new(self.vertex_count);
        let complete_at = self.vertex_count.saturating_sub(1);
        let mut accepted = Vec::with_capacity(complete_at);

        for edge in queue {
            let left = set.find(edge.source);
            let right = set.find(edge.target);
            if left == right {
                continue;
            }
            set.union_roots(left, right);
            accepted.push(edge);
            if accepted.len() == complete_at {
                break;
            }
        }

        debug!(
            accepted = accepted.len(),
            components = set.components(),
            "spanning forest complete"
        );
        SpanningForest {
            edges: accepted,
            component_count: set.components(),
        }
    }
}
