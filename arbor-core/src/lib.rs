//! Arbor core library.
//!
//! Two self-contained, single-threaded algorithms over in-memory data:
//!
//! - [`heap_sort`] — in-place binary max-heap sort for any `T: Ord` slice.
//! - [`Graph::minimum_spanning_forest`] — sequential Kruskal's algorithm
//!   backed by a path-compressing, union-by-rank disjoint-set.
//!
//! Both run to completion on a single control path; neither holds state
//! between calls.

mod error;
mod mst;
mod sort;

pub use crate::{
    error::{GraphError, GraphErrorCode},
    mst::{Graph, MstEdge, SpanningForest},
    sort::heap_sort,
};
