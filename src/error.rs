//! The only fallible surface in this crate.
//!
//! Every core operation described in the data model is total: growth is
//! unbounded and allocation failure is left to the host allocator's
//! standard abort behavior. The sole exception is the opt-in
//! capacity-guarded builder API (`try_reserve_vertices`, `try_add_vertex`,
//! `try_add_edge`), which a caller may use to cap how large a graph a
//! buggy or adversarial upstream collaborator can force it to grow to.

/// Error returned by the capacity-guarded builder methods on
/// [`crate::graph::PercolationGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The requested vertex index exceeds the configured [`crate::graph::GraphLimits`].
    #[error("vertex index {requested} exceeds configured limit {limit}")]
    VertexLimitExceeded {
        /// The vertex index that was requested.
        requested: usize,
        /// The configured limit it exceeded.
        limit: usize,
    },
}
