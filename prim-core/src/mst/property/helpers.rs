//! Union-find helpers shared by the oracle and the structural checks.

/// Path-halving find.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Labels every vertex with the root of its connected component.
pub(super) fn component_labels(
    vertex_count: usize,
    edges: impl IntoIterator<Item = (usize, usize)>,
) -> Vec<usize> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (u, v) in edges {
        let ru = find_root(&mut parent, u);
        let rv = find_root(&mut parent, v);
        if ru != rv {
            parent[rv] = ru;
        }
    }
    (0..vertex_count)
        .map(|vertex| find_root(&mut parent, vertex))
        .collect()
}

/// Counts the vertices sharing vertex 0's component.
pub(super) fn root_component_size(labels: &[usize]) -> usize {
    labels
        .first()
        .map_or(0, |root| labels.iter().filter(|label| *label == root).count())
}
