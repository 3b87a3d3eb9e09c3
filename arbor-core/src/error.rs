//! Error types for graph construction.
//!
//! Defines the error enum returned by [`crate::Graph::add_edge`] together
//! with a stable machine-readable code for each variant.

use std::error::Error;
use std::fmt;

/// Errors raised while building a [`crate::Graph`].
///
/// Endpoint and weight validation happens eagerly at
/// [`crate::Graph::add_edge`] time, so the spanning-forest computation
/// itself is infallible.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// An edge endpoint lies outside the graph's vertex range.
    InvalidVertexId {
        /// The out-of-range vertex id supplied by the caller.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge weight was NaN or infinite.
    NonFiniteWeight {
        /// The first endpoint (as provided).
        source: usize,
        /// The second endpoint (as provided).
        target: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVertexId {
                vertex,
                vertex_count,
            } => write!(
                f,
                "edge references vertex {vertex}, but vertex_count is {vertex_count}"
            ),
            Self::NonFiniteWeight { source, target } => {
                write!(f, "edge ({source}, {target}) has non-finite weight")
            }
        }
    }
}

impl Error for GraphError {}

impl GraphError {
    /// Returns the stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::InvalidVertexId { .. } => GraphErrorCode::InvalidVertexId,
            Self::NonFiniteWeight { .. } => GraphErrorCode::NonFiniteWeight,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GraphErrorCode {
    /// An edge endpoint lies outside the graph's vertex range.
    InvalidVertexId,
    /// An edge weight was NaN or infinite.
    NonFiniteWeight,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidVertexId => "INVALID_VERTEX_ID",
            Self::NonFiniteWeight => "NON_FINITE_WEIGHT",
        }
    }
}

impl fmt::Display for GraphErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
