//! Minimum spanning tree construction with Prim's algorithm.
//!
//! The tree grows from vertex 0. Each round finalizes the cheapest vertex on
//! the frontier and relaxes its neighbours; a cheaper connection pushes a new
//! queue entry instead of decreasing an existing one (see [`frontier`]). Cost
//! is `O((V + E) log E)`.
//!
//! Only vertex 0's connected component is spanned. Vertices outside it are
//! never pushed, keep no key or parent, and add nothing to the total. This is
//! the expected result for disconnected input, not an error; check
//! [`SpanningTree::is_spanning`] when full coverage matters.

mod frontier;

use tracing::{Span, debug, field, instrument};

use crate::{Graph, TotalWeight, Weight};

use self::frontier::Frontier;

/// Vertex every tree is grown from.
const ROOT: usize = 0;

/// Queue activity recorded during one computation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrimStats {
    pushes: usize,
    pops: usize,
    stale_pops: usize,
}

impl PrimStats {
    /// Returns the number of entries pushed, the root included.
    #[must_use]
    #[rustfmt::skip]
    pub const fn pushes(&self) -> usize { self.pushes }

    /// Returns the number of entries popped. The queue always drains, so this
    /// equals [`Self::pushes`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn pops(&self) -> usize { self.pops }

    /// Returns the number of popped entries discarded because their vertex
    /// was already finalized.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stale_pops(&self) -> usize { self.stale_pops }
}

/// A tree edge, oriented from the vertex already in the tree to the vertex it
/// connected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TreeEdge {
    /// Vertex that was already finalized when the edge was chosen.
    pub parent: usize,
    /// Vertex the edge brought into the tree.
    pub child: usize,
    /// Weight of the chosen edge.
    pub weight: Weight,
}

/// Result of [`prim`]: the tree shape, the weight of every connecting edge, and
/// queue statistics.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    parents: Vec<Option<usize>>,
    keys: Vec<Option<Weight>>,
    total_weight: TotalWeight,
    reached_count: usize,
    stats: PrimStats,
}

impl SpanningTree {
    /// Returns the sum of the tree's edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> TotalWeight { self.total_weight }

    /// Returns the parent array. The root and unreached vertices map to `None`.
    #[must_use]
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Returns the parent of `vertex`, or `None` for the root, for unreached
    /// vertices and for out-of-range ids.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Returns the weight that connected `vertex` to the tree. The root has
    /// key 0; unreached vertices have none.
    #[must_use]
    pub fn key(&self, vertex: usize) -> Option<Weight> {
        self.keys.get(vertex).copied().flatten()
    }

    /// Returns the number of vertices in the input graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.parents.len()
    }

    /// Returns the number of vertices finalized into the tree, the root
    /// included.
    #[must_use]
    #[rustfmt::skip]
    pub const fn reached_count(&self) -> usize { self.reached_count }

    /// Returns `true` when every vertex was reached from vertex 0.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.reached_count == self.vertex_count()
    }

    /// Returns the queue statistics for the run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stats(&self) -> PrimStats { self.stats }

    /// Returns the tree edges ordered by child vertex.
    ///
    /// A non-empty tree over `k` reached vertices has `k - 1` edges.
    #[must_use]
    pub fn edges(&self) -> Vec<TreeEdge> {
        self.parents
            .iter()
            .zip(&self.keys)
            .enumerate()
            .filter_map(|(child, (parent, key))| {
                Some(TreeEdge {
                    parent: (*parent)?,
                    child,
                    weight: (*key)?,
                })
            })
            .collect()
    }
}

/// Working state for one computation. Nothing outlives the call.
struct PrimState {
    keys: Vec<Option<Weight>>,
    parents: Vec<Option<usize>>,
    included: Vec<bool>,
    total_weight: TotalWeight,
    reached_count: usize,
}

impl PrimState {
    fn new(vertex_count: usize) -> Self {
        Self {
            keys: vec![None; vertex_count],
            parents: vec![None; vertex_count],
            included: vec![false; vertex_count],
            total_weight: 0,
            reached_count: 0,
        }
    }

    fn grow(&mut self, graph: &Graph, root: usize, frontier: &mut Frontier) {
        self.keys[root] = Some(0);
        frontier.push(root, 0);

        while let Some(entry) = frontier.pop() {
            let vertex = entry.vertex;
            if self.included[vertex] {
                frontier.discard_stale();
                continue;
            }
            // The first pop of a vertex carries its smallest, and therefore
            // latest, key.
            debug_assert_eq!(self.keys[vertex], Some(entry.key));
            self.included[vertex] = true;
            self.reached_count += 1;
            self.total_weight += TotalWeight::from(entry.key);

            for neighbour in graph.neighbours(vertex).unwrap_or_default() {
                self.relax(vertex, neighbour.target(), neighbour.weight(), frontier);
            }
        }
    }

    fn relax(&mut self, from: usize, to: usize, weight: Weight, frontier: &mut Frontier) {
        if self.included[to] || self.keys[to].is_some_and(|current| weight >= current) {
            return;
        }
        self.keys[to] = Some(weight);
        self.parents[to] = Some(from);
        frontier.push(to, weight);
    }

    fn finish(self, stats: PrimStats) -> SpanningTree {
        SpanningTree {
            parents: self.parents,
            keys: self.keys,
            total_weight: self.total_weight,
            reached_count: self.reached_count,
            stats,
        }
    }
}

/// Computes the minimum spanning tree of vertex 0's component.
///
/// An empty graph or a single vertex yields total weight 0. Vertices that
/// cannot be reached from vertex 0 are left out silently; see the module
/// documentation.
///
/// The graph is only borrowed, so concurrent calls over one graph are
/// independent and cannot observe an `add_edge` mid-run.
///
/// # Examples
/// ```
/// use prim_core::{Graph, TreeEdge, prim};
///
/// let graph = Graph::from_edges(4, [(0, 1, 1), (0, 2, 4), (0, 3, 3), (1, 2, 2), (1, 3, 5), (2, 3, 6)])?;
/// let tree = prim(&graph);
/// assert_eq!(tree.total_weight(), 6);
/// assert_eq!(
///     tree.edges(),
///     vec![
///         TreeEdge { parent: 0, child: 1, weight: 1 },
///         TreeEdge { parent: 1, child: 2, weight: 2 },
///         TreeEdge { parent: 0, child: 3, weight: 3 },
///     ]
/// );
/// # Ok::<(), prim_core::GraphError>(())
/// ```
#[instrument(
    name = "mst.prim",
    skip(graph),
    fields(
        vertex_count = graph.vertex_count(),
        edge_count = graph.edge_count(),
        total_weight = field::Empty,
        reached = field::Empty,
    ),
)]
pub fn prim(graph: &Graph) -> SpanningTree {
    let vertex_count = graph.vertex_count();
    let mut state = PrimState::new(vertex_count);
    let mut frontier = Frontier::with_capacity(vertex_count);

    if vertex_count > 0 {
        state.grow(graph, ROOT, &mut frontier);
    }

    let tree = state.finish(frontier.into_stats());
    report(&tree);
    tree
}

fn report(tree: &SpanningTree) {
    let span = Span::current();
    span.record("total_weight", tree.total_weight);
    span.record("reached", tree.reached_count);

    let unreached = tree.vertex_count() - tree.reached_count;
    if unreached > 0 {
        debug!(
            unreached,
            "graph is disconnected; spanning vertex 0's component only"
        );
    }
    debug!(
        total_weight = tree.total_weight,
        reached = tree.reached_count,
        pushes = tree.stats.pushes,
        stale_pops = tree.stats.stale_pops,
        "minimum spanning tree computed"
    );

    #[cfg(feature = "metrics")]
    emit_metrics(tree);
}

#[cfg(feature = "metrics")]
fn emit_metrics(tree: &SpanningTree) {
    let stale = u64::try_from(tree.stats.stale_pops).unwrap_or(u64::MAX);
    let reached = u32::try_from(tree.reached_count).unwrap_or(u32::MAX);
    metrics::counter!("prim_mst_computations_total").increment(1);
    metrics::counter!("prim_mst_stale_pops_total").increment(stale);
    metrics::histogram!("prim_mst_reached_vertices").record(f64::from(reached));
}

#[cfg(test)]
mod property;
