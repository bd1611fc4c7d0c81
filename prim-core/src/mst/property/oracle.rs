//! Reference implementations the Prim results are checked against.
//!
//! [`sequential_kruskal`] builds a minimum spanning forest by sorting edges
//! and joining components with union-find; since Prim spans only vertex 0's
//! component, the oracle also reports that component's share of the forest.
//! [`brute_force_minimum`] enumerates every edge subset of a tiny graph and is
//! used to check the Kruskal oracle itself as well as Prim.

use crate::{TotalWeight, Weight};

use super::helpers::find_root;

/// Result of the Kruskal oracle.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(super) struct KruskalResult {
    /// Weight of the whole minimum spanning forest.
    pub forest_weight: TotalWeight,
    /// Number of forest edges.
    pub forest_edges: usize,
    /// Number of components, isolated vertices included.
    pub component_count: usize,
    /// Weight of the forest edges inside vertex 0's component.
    pub root_component_weight: TotalWeight,
    /// Number of forest edges inside vertex 0's component.
    pub root_component_edges: usize,
}

/// Computes a minimum spanning forest with sequential Kruskal.
///
/// Self-loops are skipped. Edges are sorted by weight only; equal weights may
/// choose different edges than Prim, but never a different total.
pub(super) fn sequential_kruskal(
    vertex_count: usize,
    edges: &[(usize, usize, Weight)],
) -> KruskalResult {
    let mut sorted: Vec<(usize, usize, Weight)> =
        edges.iter().copied().filter(|(u, v, _)| u != v).collect();
    sorted.sort_by_key(|&(_, _, weight)| weight);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank = vec![0_u32; vertex_count];
    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));

    for (u, v, weight) in sorted {
        let ru = find_root(&mut parent, u);
        let rv = find_root(&mut parent, v);
        if ru == rv {
            continue;
        }
        let (root, child) = if rank[ru] >= rank[rv] { (ru, rv) } else { (rv, ru) };
        parent[child] = root;
        if rank[root] == rank[child] {
            rank[root] += 1;
        }
        accepted.push((u, weight));
    }

    let mut result = KruskalResult {
        forest_edges: accepted.len(),
        component_count: vertex_count - accepted.len(),
        ..KruskalResult::default()
    };
    let root_label = (vertex_count > 0).then(|| find_root(&mut parent, 0));
    for (endpoint, weight) in accepted {
        result.forest_weight += TotalWeight::from(weight);
        if Some(find_root(&mut parent, endpoint)) == root_label {
            result.root_component_weight += TotalWeight::from(weight);
            result.root_component_edges += 1;
        }
    }
    result
}

/// Returns the minimum weight over all spanning trees of a connected graph,
/// or `None` when the graph is disconnected.
///
/// Enumerates every subset of `vertex_count - 1` edges, so callers must keep
/// inputs tiny.
pub(super) fn brute_force_minimum(
    vertex_count: usize,
    edges: &[(usize, usize, Weight)],
) -> Option<TotalWeight> {
    if vertex_count <= 1 {
        return Some(0);
    }
    assert!(edges.len() < 16, "brute force is limited to tiny graphs");

    let needed = vertex_count - 1;
    (0_u32..(1 << edges.len()))
        .filter(|mask| mask.count_ones() as usize == needed)
        .filter_map(|mask| spanning_weight(vertex_count, edges, mask))
        .min()
}

/// Weight of the subset selected by `mask` if it is a spanning tree.
fn spanning_weight(
    vertex_count: usize,
    edges: &[(usize, usize, Weight)],
    mask: u32,
) -> Option<TotalWeight> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut weight: TotalWeight = 0;
    for (index, &(u, v, w)) in edges.iter().enumerate() {
        if mask & (1 << index) == 0 {
            continue;
        }
        let ru = find_root(&mut parent, u);
        let rv = find_root(&mut parent, v);
        if ru == rv {
            return None;
        }
        parent[rv] = ru;
        weight += TotalWeight::from(w);
    }
    // `vertex_count - 1` acyclic edges always span.
    Some(weight)
}
