//! The two-pass analysis engine: untagged component decomposition
//! followed by per-component percolation-dimension analysis.

mod components;
mod percolation;

use crate::graph::{PercolationGraph, VertexData};
use crate::vector::DIM;

use components::ComponentSkeleton;

/// One connected component's percolation result.
///
/// Self-contained: every field is owned data, so a `ComponentInfo` may be
/// consumed independently of the graph (and of the other components) it
/// was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentInfo<P> {
    /// 0-based index, assigned in root-discovery order during pass 1.
    pub component_index: usize,
    /// The rank (0..=3) of the cycle-translation lattice of this
    /// component.
    pub percolation_dim: usize,
    /// This component's vertices, in pass-1 discovery order.
    pub vertices: Vec<VertexData<P>>,
}

/// Runs both analysis passes and returns one [`ComponentInfo`] per
/// connected component, in pass-1 root-discovery order.
///
/// Pass 1 (component decomposition) is always sequential. Pass 2
/// (per-component percolation-dimension analysis) runs in parallel across
/// components with `rayon` when the `parallel` feature is enabled
/// (the default); `rayon`'s parallel map preserves input order in its
/// output, so the result order matches pass 1's root order either way.
#[cfg(feature = "parallel")]
pub fn get_component_percolation_info<P>(graph: &PercolationGraph<P>) -> Vec<ComponentInfo<P>>
where
    P: Clone + Send + Sync,
{
    use rayon::prelude::*;

    let skeletons = components::decompose(graph);
    let results: Vec<ComponentInfo<P>> = skeletons
        .into_par_iter()
        .map(|skeleton| percolation::analyze_component(graph, skeleton))
        .collect();
    finish(results)
}

/// Sequential fallback used when the `parallel` feature is disabled.
/// Produces identical output to the parallel path; only wall-clock
/// parallelism differs.
#[cfg(not(feature = "parallel"))]
pub fn get_component_percolation_info<P>(graph: &PercolationGraph<P>) -> Vec<ComponentInfo<P>>
where
    P: Clone,
{
    let skeletons = components::decompose(graph);
    let results: Vec<ComponentInfo<P>> = skeletons
        .into_iter()
        .map(|skeleton| percolation::analyze_component(graph, skeleton))
        .collect();
    finish(results)
}

fn finish<P>(results: Vec<ComponentInfo<P>>) -> Vec<ComponentInfo<P>> {
    debug_assert!(
        results.iter().all(|c| c.percolation_dim <= DIM),
        "percolation_dim must never exceed the lattice dimension"
    );
    results
}
