//! Graph generation strategies for the MST property tests.
//!
//! Each family is generated from a seeded [`SmallRng`] so a failing case can
//! be replayed from its `(family, seed)` pair.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Weight;

use super::types::{GraphFamily, MstFixture};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
/// Dense graphs stay small to bound the quadratic edge count.
const DENSE_MAX_VERTICES: usize = 24;

/// Samples a family, biased towards the tie-heavy and disconnected cases that
/// exercise stale-entry handling and the root-component rule.
pub(super) fn family_strategy() -> impl Strategy<Value = GraphFamily> {
    prop_oneof![
        2 => Just(GraphFamily::Spread),
        3 => Just(GraphFamily::ManyTies),
        2 => Just(GraphFamily::Sparse),
        2 => Just(GraphFamily::Dense),
        2 => Just(GraphFamily::Disconnected),
        2 => Just(GraphFamily::Multigraph),
    ]
}

/// Generates fixtures across every family.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (family_strategy(), any::<u64>()).prop_map(|(family, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(family, &mut rng)
    })
}

/// Generates graphs small enough for exhaustive spanning-tree enumeration:
/// up to six vertices and nine edges, with self-loops, duplicates and zero
/// weights all allowed.
pub(super) fn tiny_graph_strategy() -> impl Strategy<Value = MstFixture> {
    (1_usize..=6)
        .prop_flat_map(|vertex_count| {
            let edge = (0..vertex_count, 0..vertex_count, 0_u32..10);
            (Just(vertex_count), proptest::collection::vec(edge, 0..=9))
        })
        .prop_map(|(vertex_count, edges)| MstFixture {
            vertex_count,
            edges,
            family: GraphFamily::Multigraph,
        })
}

/// Generates a fixture for one family.
pub(super) fn generate_fixture(family: GraphFamily, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match family {
        GraphFamily::Spread => {
            probabilistic(rng, MAX_VERTICES, (0.15, 0.5), |r| r.gen_range(1..=1_000_000))
        }
        GraphFamily::ManyTies => {
            let pool: Vec<Weight> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            probabilistic(rng, MAX_VERTICES, (0.2, 0.6), move |r| {
                pool.choose(r).copied().unwrap_or(1)
            })
        }
        GraphFamily::Sparse => sparse(rng),
        GraphFamily::Dense => {
            probabilistic(rng, DENSE_MAX_VERTICES, (0.7, 0.95), |r| r.gen_range(0..=1_000))
        }
        GraphFamily::Disconnected => disconnected(rng),
        GraphFamily::Multigraph => multigraph(rng),
    };
    MstFixture {
        vertex_count,
        edges,
        family,
    }
}

/// Adds each unordered pair with a probability sampled from `prob_range`.
fn probabilistic(
    rng: &mut SmallRng,
    max_vertices: usize,
    prob_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> Weight,
) -> (usize, Vec<(usize, usize, Weight)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let probability = rng.gen_range(prob_range.0..=prob_range.1);
    let mut edges = Vec::new();
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push((u, v, w));
            }
        }
    }
    (vertex_count, edges)
}

/// Builds a random spanning tree over a shuffled vertex order, then adds
/// extra edges.
fn sparse(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, Weight)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);

    let mut edges: Vec<(usize, usize, Weight)> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(1..=500)))
        .collect();

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v {
            edges.push((u, v, rng.gen_range(1..=500)));
        }
    }
    (vertex_count, edges)
}

/// Two to five components of 1-12 vertices each with no bridging edges.
fn disconnected(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, Weight)>) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &sizes {
        // Chain first so each component is internally connected.
        for i in 1..size {
            edges.push((offset + i - 1, offset + i, rng.gen_range(1..=100)));
        }
        let probability = rng.gen_range(0.1..=0.6);
        for i in 0..size {
            for j in (i + 2)..size {
                if rng.gen_bool(probability) {
                    edges.push((offset + i, offset + j, rng.gen_range(1..=100)));
                }
            }
        }
        offset += size;
    }
    // Interleave components in insertion order.
    edges.shuffle(rng);
    (offset, edges)
}

/// Random edges including self-loops and re-inserted pairs with new weights.
fn multigraph(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, Weight)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES / 2);
    let edge_target = rng.gen_range(vertex_count..=vertex_count * 3);
    let mut edges: Vec<(usize, usize, Weight)> = Vec::with_capacity(edge_target);
    while edges.len() < edge_target {
        let roll = rng.gen_range(0..10);
        let edge = match (roll, edges.choose(rng).copied()) {
            (0, _) => {
                let u = rng.gen_range(0..vertex_count);
                (u, u, rng.gen_range(0..=50))
            }
            (1 | 2, Some((u, v, _))) => (v, u, rng.gen_range(0..=50)),
            _ => (
                rng.gen_range(0..vertex_count),
                rng.gen_range(0..vertex_count),
                rng.gen_range(0..=50),
            ),
        };
        edges.push(edge);
    }
    (vertex_count, edges)
}
