//! Deterministic graph generators for tests, benchmarks and the CLI.
//!
//! Random generators draw from a [`SmallRng`] seeded by the caller, so the
//! same configuration always yields the same graph. Weights are uniform in
//! `1..=max_weight`.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{Graph, GraphError, Weight, error::GeneratorError};

/// Parameters shared by the random generators.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RandomGraphConfig {
    /// Number of vertices to allocate.
    pub vertex_count: usize,
    /// Total number of `add_edge` insertions.
    pub edge_count: usize,
    /// Inclusive upper bound for edge weights.
    pub max_weight: Weight,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Whether a random graph must connect every vertex.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Connectivity {
    /// A spanning tree is laid down before any extra edge.
    Connected,
    /// Edges are placed independently; components may be left apart.
    Unconstrained,
}

impl RandomGraphConfig {
    /// Checks that the configuration can be generated.
    ///
    /// # Errors
    /// - [`GeneratorError::ZeroMaxWeight`] when `max_weight` is zero.
    /// - [`GeneratorError::InsufficientEdges`] when a connected graph is
    ///   requested with fewer than `vertex_count - 1` edges.
    /// - [`GeneratorError::TooFewVertices`] when edges are requested on fewer
    ///   than two vertices, since generated edges are never self-loops.
    pub const fn validate(&self, connectivity: Connectivity) -> Result<(), GeneratorError> {
        if self.max_weight == 0 {
            return Err(GeneratorError::ZeroMaxWeight);
        }
        let required = self.vertex_count.saturating_sub(1);
        if matches!(connectivity, Connectivity::Connected) && self.edge_count < required {
            return Err(GeneratorError::InsufficientEdges {
                edge_count: self.edge_count,
                vertex_count: self.vertex_count,
                required,
            });
        }
        if self.vertex_count < 2 && self.edge_count > 0 {
            return Err(GeneratorError::TooFewVertices {
                edge_count: self.edge_count,
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }
}

/// Generates a connected graph.
///
/// Vertex `i` is first linked to a uniformly chosen earlier vertex, giving a
/// random spanning tree; the remaining insertions join random distinct
/// endpoints and may duplicate existing pairs.
///
/// # Errors
/// Returns the [`RandomGraphConfig::validate`] failures for
/// [`Connectivity::Connected`], or [`GeneratorError::Graph`] when the vertex
/// count cannot be allocated.
///
/// # Examples
/// ```
/// use prim_core::generator::{RandomGraphConfig, connected_random};
///
/// let config = RandomGraphConfig { vertex_count: 50, edge_count: 120, max_weight: 100, seed: 7 };
/// let graph = connected_random(&config)?;
/// assert_eq!(graph.edge_count(), 120);
/// assert!(prim_core::prim(&graph).is_spanning());
/// # Ok::<(), prim_core::GeneratorError>(())
/// ```
#[instrument(
    name = "generator.connected_random",
    skip(config),
    fields(
        vertex_count = config.vertex_count,
        edge_count = config.edge_count,
        seed = config.seed,
    ),
)]
pub fn connected_random(config: &RandomGraphConfig) -> Result<Graph, GeneratorError> {
    config.validate(Connectivity::Connected)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::try_new(config.vertex_count)?;

    for vertex in 1..config.vertex_count {
        let earlier = rng.gen_range(0..vertex);
        let weight = rng.gen_range(1..=config.max_weight);
        graph.add_edge(earlier, vertex, weight)?;
    }
    add_random_edges(&mut graph, config, &mut rng)?;

    debug!(edges = graph.edge_count(), "generated connected graph");
    Ok(graph)
}

/// Generates `edge_count` random edges between distinct endpoints with no
/// connectivity guarantee.
///
/// # Errors
/// Returns the [`RandomGraphConfig::validate`] failures for
/// [`Connectivity::Unconstrained`], or [`GeneratorError::Graph`] when the
/// vertex count cannot be allocated.
#[instrument(
    name = "generator.uniform_random",
    skip(config),
    fields(
        vertex_count = config.vertex_count,
        edge_count = config.edge_count,
        seed = config.seed,
    ),
)]
pub fn uniform_random(config: &RandomGraphConfig) -> Result<Graph, GeneratorError> {
    config.validate(Connectivity::Unconstrained)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::try_new(config.vertex_count)?;
    add_random_edges(&mut graph, config, &mut rng)?;

    debug!(edges = graph.edge_count(), "generated unconstrained graph");
    Ok(graph)
}

/// Tops `graph` up to `config.edge_count` insertions.
fn add_random_edges(
    graph: &mut Graph,
    config: &RandomGraphConfig,
    rng: &mut SmallRng,
) -> Result<(), GraphError> {
    let vertex_count = graph.vertex_count();
    while graph.edge_count() < config.edge_count {
        let u = rng.gen_range(0..vertex_count);
        // Sample from the other `vertex_count - 1` vertices.
        let mut v = rng.gen_range(0..vertex_count - 1);
        if v >= u {
            v += 1;
        }
        let weight = rng.gen_range(1..=config.max_weight);
        graph.add_edge(u, v, weight)?;
    }
    Ok(())
}

/// Builds the path `0 - 1 - ... - (vertex_count - 1)` with uniform weights.
///
/// # Errors
/// Returns [`GeneratorError::Graph`] when `vertex_count` cannot be allocated.
pub fn chain(vertex_count: usize, weight: Weight) -> Result<Graph, GeneratorError> {
    let mut graph = Graph::try_new(vertex_count)?;
    for vertex in 1..vertex_count {
        graph.add_edge(vertex - 1, vertex, weight)?;
    }
    Ok(graph)
}

/// Builds a `rows x cols` 4-neighbour grid in row-major order, inserting each
/// cell's right edge before its down edge.
///
/// # Errors
/// Returns [`GeneratorError::GridTooLarge`] when `rows * cols` overflows and
/// [`GeneratorError::Graph`] when the product cannot be allocated.
///
/// # Examples
/// ```
/// use prim_core::generator::grid;
///
/// let graph = grid(3, 4, 1)?;
/// assert_eq!(graph.vertex_count(), 12);
/// assert_eq!(graph.edge_count(), 3 * 3 + 2 * 4);
/// assert_eq!(graph.compute_mst_weight(), 11);
/// # Ok::<(), prim_core::GeneratorError>(())
/// ```
pub fn grid(rows: usize, cols: usize, weight: Weight) -> Result<Graph, GeneratorError> {
    let vertex_count = rows
        .checked_mul(cols)
        .ok_or(GeneratorError::GridTooLarge { rows, cols })?;
    let mut graph = Graph::try_new(vertex_count)?;
    for row in 0..rows {
        for col in 0..cols {
            let cell = row * cols + col;
            if col + 1 < cols {
                graph.add_edge(cell, cell + 1, weight)?;
            }
            if row + 1 < rows {
                graph.add_edge(cell, cell + cols, weight)?;
            }
        }
    }
    Ok(graph)
}

/// Builds the complete graph on `vertex_count` vertices with random weights.
///
/// # Errors
/// Returns [`GeneratorError::ZeroMaxWeight`] when `max_weight` is zero and
/// [`GeneratorError::Graph`] when `vertex_count` cannot be allocated.
#[instrument(name = "generator.complete")]
pub fn complete(
    vertex_count: usize,
    max_weight: Weight,
    seed: u64,
) -> Result<Graph, GeneratorError> {
    if max_weight == 0 {
        return Err(GeneratorError::ZeroMaxWeight);
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = Graph::try_new(vertex_count)?;
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            graph.add_edge(u, v, rng.gen_range(1..=max_weight))?;
        }
    }
    debug!(edges = graph.edge_count(), "generated complete graph");
    Ok(graph)
}
