//! Weighted undirected graph stored as adjacency lists.
//!
//! Vertices are dense indices in `[0, vertex_count)`. Every insertion is
//! mirrored into both endpoints' lists, so the structure is symmetric by
//! construction. The graph is append-only.

use std::cmp::Ordering;

use crate::error::{GraphError, Result};

/// Weight of a single edge. Unsigned, so negative weights cannot be expressed.
pub type Weight = u32;

/// Sum of edge weights. A tree over `n` vertices holds `n - 1` edges, so the
/// widened type cannot overflow for any graph that fits in memory.
pub type TotalWeight = u64;

/// One side of an undirected edge as seen from its owning vertex.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AdjacencyEntry {
    target: usize,
    weight: Weight,
}

impl AdjacencyEntry {
    /// Returns the vertex at the other end of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// An inserted edge, reported with `source <= target`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    /// Smaller endpoint.
    pub source: usize,
    /// Larger endpoint.
    pub target: usize,
    /// Edge weight.
    pub weight: Weight,
}

/// Undirected weighted graph with a fixed vertex count.
///
/// # Examples
/// ```
/// use prim_core::Graph;
///
/// let mut graph = Graph::new(2);
/// graph.add_edge(0, 1, 7)?;
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.neighbours(1).map(<[_]>::len), Some(1));
/// # Ok::<(), prim_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<AdjacencyEntry>>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    ///
    /// A zero vertex count is valid and produces an empty graph. Use
    /// [`Graph::try_new`] when the count comes from untrusted input.
    ///
    /// # Panics
    /// Panics if the adjacency table cannot be allocated.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph with `vertex_count` isolated vertices, reporting an
    /// allocation failure instead of aborting.
    ///
    /// # Errors
    /// Returns [`GraphError::CapacityExceeded`] when the adjacency table for
    /// `vertex_count` vertices cannot be reserved.
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::CapacityExceeded { vertex_count })?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    /// Builds a graph from `(u, v, weight)` triples, stopping at the first
    /// rejected edge.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexIndex`] when an endpoint is out of
    /// range, or [`GraphError::CapacityExceeded`] when `vertex_count` cannot
    /// be allocated.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, Weight)>,
    ) -> Result<Self> {
        let mut graph = Self::try_new(vertex_count)?;
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Inserts the undirected edge `{u, v}`.
    ///
    /// Self-loops and parallel edges are accepted. A self-loop never improves
    /// a spanning tree, and among parallel edges only the lightest can win.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexIndex`] when either endpoint is
    /// `>= vertex_count`. The graph is left unchanged.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[u].push(AdjacencyEntry { target: v, weight });
        self.adjacency[v].push(AdjacencyEntry { target: u, weight });
        self.edge_count += 1;
        Ok(())
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.adjacency.len() {
            return Ok(());
        }
        Err(GraphError::InvalidVertexIndex {
            vertex,
            vertex_count: self.adjacency.len(),
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of `add_edge` insertions, parallel edges and
    /// self-loops included.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the adjacency list of `vertex` in insertion order.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> Option<&[AdjacencyEntry]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Returns the number of adjacency entries owned by `vertex`. A self-loop
    /// counts twice.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> Option<usize> {
        self.adjacency.get(vertex).map(Vec::len)
    }

    /// Enumerates every inserted edge once, ordered by smaller endpoint and
    /// then by insertion order within that endpoint's list.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, entries)| {
                // A self-loop leaves two adjacent entries in its own list.
                let mut open_loop = false;
                entries.iter().filter_map(move |entry| {
                    let edge = Edge {
                        source,
                        target: entry.target,
                        weight: entry.weight,
                    };
                    match entry.target.cmp(&source) {
                        Ordering::Greater => Some(edge),
                        Ordering::Equal => {
                            open_loop = !open_loop;
                            open_loop.then_some(edge)
                        }
                        Ordering::Less => None,
                    }
                })
            })
    }

    /// Returns the total weight of the minimum spanning tree grown from
    /// vertex 0.
    ///
    /// Only vertex 0's connected component is spanned; see [`crate::prim`].
    ///
    /// # Examples
    /// ```
    /// use prim_core::Graph;
    ///
    /// let graph = Graph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1), (0, 2, 10)])?;
    /// assert_eq!(graph.compute_mst_weight(), 3);
    /// # Ok::<(), prim_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn compute_mst_weight(&self) -> TotalWeight {
        crate::prim(self).total_weight()
    }
}
