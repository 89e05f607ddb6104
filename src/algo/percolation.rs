//! Pass 2: per-component percolation-dimension analysis.
//!
//! Seeds a translation-accumulating BFS from each component's first
//! discovered vertex and harvests the net translation of every closed
//! walk it finds, feeding each one to the independence oracle until the
//! basis saturates at rank [`DIM`] or the frontier empties.

use std::collections::VecDeque;

use tracing::{debug, debug_span, trace};

use super::{ComponentInfo, ComponentSkeleton};
use crate::graph::PercolationGraph;
use crate::vector::{self, TranslationVector, DIM};

/// Runs the pass-2 BFS for a single component and returns its completed
/// [`ComponentInfo`].
///
/// `visited` / `original_translation` are allocated fresh here, sized to
/// the whole graph, and touched only for vertices in this component:
/// per-task auxiliary arrays (the safe option the design notes call out),
/// never shared across components. This is what lets
/// [`super::get_component_percolation_info`] run one call of this
/// function per component with no locking.
pub(super) fn analyze_component<P: Clone>(
    graph: &PercolationGraph<P>,
    skeleton: ComponentSkeleton,
) -> ComponentInfo<P> {
    let span = debug_span!(
        "percolate_component",
        component_index = skeleton.component_index,
        size = skeleton.vertex_ids.len()
    );
    let _enter = span.enter();

    let ComponentSkeleton { component_index, vertex_ids } = skeleton;
    let root = vertex_ids[0];

    let mut original_translation: Vec<Option<TranslationVector>> =
        vec![None; graph.vertex_count()];
    let mut basis: Vec<TranslationVector> = Vec::with_capacity(DIM);
    let mut queue: VecDeque<(usize, TranslationVector)> = VecDeque::new();
    queue.push_back((root, TranslationVector::ZERO));

    'walk: while let Some((u, p)) = queue.pop_front() {
        if let Some(orig) = original_translation[u] {
            let delta = p - orig;
            if vector::independent(&basis, delta) {
                basis.push(delta);
                trace!(?delta, basis_len = basis.len(), "accepted cycle translation");
            }
            if basis.len() >= DIM {
                break 'walk;
            }
            // A revisit never expands its neighbors: the closed walk it
            // witnesses has already been fully accounted for above.
            continue;
        }

        original_translation[u] = Some(p);

        for &(w, edge) in graph.incidences(u) {
            let candidate = p + edge.translation();
            // Skip iff the neighbor is already visited with exactly this
            // translation: that revisit would yield delta = 0, which is
            // never independent, so enqueuing it can only ever stall the
            // walk without growing the basis. This is the only pruning
            // rule in this BFS and it is required for termination on
            // redundant zero-translation edges (most commonly a t=0
            // self-loop).
            if original_translation[w] == Some(candidate) {
                continue;
            }
            queue.push_back((w, candidate));
        }
    }

    let percolation_dim = basis.len();
    debug!(percolation_dim, "component analyzed");

    ComponentInfo {
        component_index,
        percolation_dim,
        vertices: vertex_ids.into_iter().map(|id| graph.vertices()[id].clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::components::decompose;
    use crate::graph::PercolationGraph;

    fn analyze_all<P: Clone>(graph: &PercolationGraph<P>) -> Vec<ComponentInfo<P>> {
        decompose(graph).into_iter().map(|s| analyze_component(graph, s)).collect()
    }

    #[test]
    fn empty_components_have_dimension_zero() {
        let mut g: PercolationGraph = PercolationGraph::new();
        g.reserve_vertices(29);
        let infos = analyze_all(&g);
        assert_eq!(infos.len(), 30);
        assert!(infos.iter().all(|c| c.percolation_dim == 0 && c.vertices.len() == 1));
    }

    #[test]
    fn closed_loop_with_trivial_translation_has_dimension_zero() {
        let mut g: PercolationGraph = PercolationGraph::new();
        g.reserve_vertices(29);
        for i in 0..29 {
            g.add_edge(i, i + 1, TranslationVector::ZERO);
        }
        g.add_edge(29, 0, TranslationVector::ZERO);
        let infos = analyze_all(&g);
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].percolation_dim, 0);
    }

    #[test]
    fn self_loops_accumulate_independent_translations() {
        let mut g: PercolationGraph = PercolationGraph::new();
        g.reserve_vertices(6);
        let x = TranslationVector::new(1, 0, 0);
        let y = TranslationVector::new(0, 1, 0);
        let z = TranslationVector::new(0, 0, 1);
        g.add_edge(0, 0, x);
        g.add_edge(0, 0, x);
        g.add_edge(1, 1, y);
        g.add_edge(3, 3, x);
        g.add_edge(3, 3, y);
        g.add_edge(6, 6, x);
        g.add_edge(6, 6, y);
        g.add_edge(6, 6, z);

        let infos = analyze_all(&g);
        let mut dims: Vec<usize> = infos.iter().map(|c| c.percolation_dim).collect();
        dims.sort_unstable();
        assert_eq!(infos.len(), 7);
        assert_eq!(dims, vec![0, 0, 1, 1, 1, 2, 3]);
    }

    #[test]
    fn pair_with_nonzero_translation_has_dimension_one() {
        let mut g: PercolationGraph = PercolationGraph::new();
        let t = TranslationVector::new(1, 0, 0);
        g.add_edge(0, 1, t);
        g.add_edge(1, 0, t);
        let infos = analyze_all(&g);
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].vertices.len(), 2);
        assert_eq!(infos[0].percolation_dim, 1);
    }

    #[test]
    fn diamond_with_balanced_translations_has_dimension_zero() {
        let mut g: PercolationGraph = PercolationGraph::new();
        g.reserve_vertices(10);
        let x = TranslationVector::new(1, 0, 0);
        let zero = TranslationVector::ZERO;
        g.add_edge(0, 1, x);
        g.add_edge(0, 2, x);
        g.add_edge(0, 3, x);
        g.add_edge(1, 4, zero);
        g.add_edge(2, 4, zero);
        g.add_edge(3, 4, zero);
        g.add_edge(4, 5, -x);
        g.add_edge(5, 6, -x);
        g.add_edge(6, 7, zero);
        g.add_edge(6, 8, zero);
        g.add_edge(6, 9, zero);
        g.add_edge(6, 10, zero);
        g.add_edge(7, 0, x);
        g.add_edge(9, 0, x);
        g.add_edge(10, 0, x);

        let infos = analyze_all(&g);
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].vertices.len(), 11);
        assert_eq!(infos[0].percolation_dim, 0);
    }
}
