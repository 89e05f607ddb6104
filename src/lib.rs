//! Percolation-dimension analysis for graphs embedded in a periodic
//! crystallographic cell.
//!
//! Given a labeled multigraph whose edges carry integer 3-vector
//! translations (whole periodic-cell displacements between an edge's
//! endpoints), this crate decomposes the graph into connected components
//! and, for each one, computes the rank over ℚ of the lattice of
//! translations realizable as closed walks in that component (its
//! *percolation dimension*, 0 through 3).
//!
//! Building the graph from atomic positions in a triclinic cell, and any
//! CLI, file I/O, or FFI wrapper around this engine, are deliberately out
//! of scope: this crate only trusts that translation labels were derived
//! correctly and hands back [`ComponentInfo`](algo::ComponentInfo) records.
//!
//! ```
//! use percolation_graph::prelude::*;
//!
//! let mut graph: PercolationGraph = PercolationGraph::new();
//! let t = TranslationVector::new(1, 0, 0);
//! graph.add_edge(0, 1, t);
//! graph.add_edge(1, 0, t);
//!
//! let components = get_component_percolation_info(&graph);
//! assert_eq!(components.len(), 1);
//! assert_eq!(components[0].percolation_dim, 1);
//! ```

pub mod algo;
pub mod error;
pub mod graph;
pub mod vector;

/// Convenience re-exports of the crate's public surface.
pub mod prelude {
    pub use crate::algo::{get_component_percolation_info, ComponentInfo};
    pub use crate::error::GraphError;
    pub use crate::graph::{EdgeData, GraphLimits, PercolationGraph, VertexData};
    pub use crate::vector::TranslationVector;
}
