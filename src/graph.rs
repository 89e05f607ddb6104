//! The percolation graph store: a vertex-indexed adjacency structure
//! whose edges carry [`TranslationVector`] labels.
//!
//! This mirrors the classic adjacency-list shape of `petgraph::Graph`,
//! a dense `Vec` of vertex slots plus a dense `Vec` of per-vertex
//! incidence lists, generalized to carry a translation label on every
//! edge and to record both directions of an edge explicitly rather than
//! deriving one of them on traversal.

use crate::error::GraphError;
use crate::vector::TranslationVector;

/// Metadata attached to a vertex.
///
/// `index` is the only field the engine itself reads or writes; `payload`
/// is opaque application data carried alongside it, the way
/// `petgraph::Graph<N, E, Ty, Ix>` carries a generic node weight `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexData<P = ()> {
    /// The vertex's own index. Always equal to its slot position in
    /// [`PercolationGraph::vertices`] after any capacity-extending
    /// operation.
    pub index: usize,
    /// Opaque payload the core neither reads nor writes.
    pub payload: P,
}

impl<P> VertexData<P> {
    fn new(index: usize, payload: P) -> Self {
        Self { index, payload }
    }
}

/// An edge's translation label, with the inverse-edge operation the
/// builder needs to keep both incidence directions in sync.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeData(TranslationVector);

impl EdgeData {
    /// Wraps a translation vector as edge data.
    #[must_use]
    pub const fn new(translation: TranslationVector) -> Self {
        Self(translation)
    }

    /// The translation this edge carries, from tail to head.
    #[must_use]
    pub const fn translation(&self) -> TranslationVector {
        self.0
    }

    /// The edge seen from the opposite endpoint: same bond, negated
    /// translation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self(-self.0)
    }
}

/// A caller-declared cap on how large [`PercolationGraph`] may grow.
///
/// `Default` yields `max_vertex_index: None`, i.e. unbounded, the same
/// unconditionally-succeeds behavior as the unchecked `reserve_vertices` /
/// `add_vertex` / `add_edge` methods. This only matters to the `try_*`
/// methods; it has no effect anywhere else.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GraphLimits {
    /// The largest vertex index the graph may be grown to, inclusive.
    pub max_vertex_index: Option<usize>,
}

impl GraphLimits {
    fn check(&self, requested: usize) -> Result<(), GraphError> {
        match self.max_vertex_index {
            Some(limit) if requested > limit => {
                Err(GraphError::VertexLimitExceeded { requested, limit })
            }
            _ => Ok(()),
        }
    }
}

/// The mutable percolation graph store.
///
/// `vertices` and `edges` are always the same length: `edges[i]` is the
/// ordered multiset of `(neighbor, EdgeData)` incidences for the vertex
/// at slot `i`. Duplicate `(neighbor, translation)` pairs and self-loops
/// are first-class and preserved verbatim; see [`PercolationGraph::add_edge`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercolationGraph<P = ()> {
    vertices: Vec<VertexData<P>>,
    edges: Vec<Vec<(usize, EdgeData)>>,
}

impl<P> Default for PercolationGraph<P> {
    fn default() -> Self {
        Self { vertices: Vec::new(), edges: Vec::new() }
    }
}

impl<P> PercolationGraph<P> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of vertices currently allocated.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The vertex metadata slots, in index order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexData<P>] {
        &self.vertices
    }

    /// The incidences recorded for vertex `u`, in insertion order.
    ///
    /// Returns an empty slice for any vertex id beyond the current
    /// capacity, since growth is always well-defined to be "no vertices
    /// yet" rather than an error.
    #[must_use]
    pub fn incidences(&self, u: usize) -> &[(usize, EdgeData)] {
        self.edges.get(u).map_or(&[], Vec::as_slice)
    }

    fn grow_to(&mut self, max_index: usize)
    where
        P: Default,
    {
        if max_index < self.vertices.len() {
            return;
        }
        let new_len = max_index + 1;
        while self.vertices.len() < new_len {
            let i = self.vertices.len();
            self.vertices.push(VertexData::new(i, P::default()));
            self.edges.push(Vec::new());
        }
    }

    /// Ensures capacity for vertex indices `0..=max_index`, initializing
    /// any freshly-created slots with their own index and
    /// `P::default()`.
    ///
    /// Never fails in memory-available conditions.
    pub fn reserve_vertices(&mut self, max_index: usize)
    where
        P: Default,
    {
        self.grow_to(max_index);
    }

    /// Overwrites vertex `i`'s data, growing the graph first if needed.
    /// `data.index` is forced to `i` regardless of what was passed in.
    ///
    /// Never fails except on allocation.
    pub fn add_vertex(&mut self, i: usize, mut data: VertexData<P>)
    where
        P: Default,
    {
        self.grow_to(i);
        data.index = i;
        self.vertices[i] = data;
    }

    /// Adds an undirected edge `(u, v, t)`, growing the graph to cover
    /// `max(u, v)` first if needed. Appends `(v, t)` to `edges[u]` and
    /// `(u, -t)` to `edges[v]`. Both directions are always recorded
    /// explicitly, even for a self-loop (`u == v`), which appends both
    /// incidences to the same vertex's list.
    ///
    /// Duplicate `(neighbor, translation)` pairs are accepted and
    /// preserved: they are redundant for reachability but are harmless,
    /// and two edges between the same pair with *distinct* translations
    /// are the direct source of percolation dimension, so this method
    /// never deduplicates.
    ///
    /// Never fails except on allocation.
    pub fn add_edge(&mut self, u: usize, v: usize, t: TranslationVector)
    where
        P: Default,
    {
        self.grow_to(u.max(v));
        let edge = EdgeData::new(t);
        self.edges[u].push((v, edge));
        self.edges[v].push((u, edge.inverse()));
    }

    /// Checked variant of [`PercolationGraph::reserve_vertices`] that
    /// rejects growth beyond `limits.max_vertex_index`, leaving the graph
    /// completely unmodified on rejection.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexLimitExceeded`] if `max_index` exceeds
    /// the configured limit.
    pub fn try_reserve_vertices(
        &mut self,
        max_index: usize,
        limits: GraphLimits,
    ) -> Result<(), GraphError>
    where
        P: Default,
    {
        limits.check(max_index)?;
        self.reserve_vertices(max_index);
        Ok(())
    }

    /// Checked variant of [`PercolationGraph::add_vertex`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexLimitExceeded`] if `i` exceeds the
    /// configured limit.
    pub fn try_add_vertex(
        &mut self,
        i: usize,
        data: VertexData<P>,
        limits: GraphLimits,
    ) -> Result<(), GraphError>
    where
        P: Default,
    {
        limits.check(i)?;
        self.add_vertex(i, data);
        Ok(())
    }

    /// Checked variant of [`PercolationGraph::add_edge`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexLimitExceeded`] if `max(u, v)` exceeds
    /// the configured limit.
    pub fn try_add_edge(
        &mut self,
        u: usize,
        v: usize,
        t: TranslationVector,
        limits: GraphLimits,
    ) -> Result<(), GraphError>
    where
        P: Default,
    {
        limits.check(u.max(v))?;
        self.add_edge(u, v, t);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_vertices_initializes_indices() {
        let mut g: PercolationGraph = PercolationGraph::new();
        g.reserve_vertices(29);
        assert_eq!(g.vertex_count(), 30);
        for (i, v) in g.vertices().iter().enumerate() {
            assert_eq!(v.index, i);
        }
    }

    #[test]
    fn add_edge_records_both_directions() {
        let mut g: PercolationGraph = PercolationGraph::new();
        let t = TranslationVector::new(1, 0, 0);
        g.add_edge(0, 1, t);
        assert_eq!(g.incidences(0), &[(1, EdgeData::new(t))]);
        assert_eq!(g.incidences(1), &[(0, EdgeData::new(t).inverse())]);
    }

    #[test]
    fn self_loop_with_nonzero_translation_appears_twice() {
        let mut g: PercolationGraph = PercolationGraph::new();
        let t = TranslationVector::new(1, 0, 0);
        g.add_edge(0, 0, t);
        assert_eq!(g.incidences(0), &[(0, EdgeData::new(t)), (0, EdgeData::new(t).inverse())]);
    }

    #[test]
    fn duplicate_edges_are_preserved() {
        let mut g: PercolationGraph = PercolationGraph::new();
        let t = TranslationVector::new(1, 0, 0);
        g.add_edge(0, 1, t);
        g.add_edge(0, 1, t);
        assert_eq!(g.incidences(0).len(), 2);
        assert_eq!(g.incidences(1).len(), 2);
    }

    #[test]
    fn add_edge_auto_grows_for_unseen_vertices() {
        let mut g: PercolationGraph = PercolationGraph::new();
        g.add_edge(0, 5, TranslationVector::ZERO);
        assert_eq!(g.vertex_count(), 6);
    }

    #[test]
    fn try_add_edge_rejects_beyond_limit_without_mutating() {
        let mut g: PercolationGraph = PercolationGraph::new();
        g.reserve_vertices(2);
        let limits = GraphLimits { max_vertex_index: Some(2) };
        let err = g.try_add_edge(1, 3, TranslationVector::ZERO, limits).unwrap_err();
        assert_eq!(err, GraphError::VertexLimitExceeded { requested: 3, limit: 2 });
        assert_eq!(g.vertex_count(), 3);
    }

    #[test]
    fn try_add_edge_within_limit_succeeds() {
        let mut g: PercolationGraph = PercolationGraph::new();
        let limits = GraphLimits { max_vertex_index: Some(10) };
        g.try_add_edge(0, 1, TranslationVector::ZERO, limits).unwrap();
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn edge_data_inverse_is_involutive() {
        let e = EdgeData::new(TranslationVector::new(1, -2, 3));
        assert_eq!(e.inverse().inverse(), e);
    }
}
