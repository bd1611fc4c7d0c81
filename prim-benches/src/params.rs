//! Benchmark parameter types.
//!
//! Each type knows how to build its graph so the benchmark files only deal
//! with Criterion plumbing.

use std::fmt;

use prim_core::{
    Graph, Weight,
    generator::{self, RandomGraphConfig},
};

use crate::error::BenchSetupError;

/// Upper bound for random edge weights.
pub const MAX_WEIGHT: Weight = 1_000;

/// Parameters for a connected random graph benchmark.
#[derive(Clone, Copy, Debug)]
pub struct RandomBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges inserted per vertex, spanning tree included.
    pub density: usize,
}

impl RandomBenchParams {
    /// Returns the total number of edge insertions.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] for a zero vertex count or
    /// density, or an overflowing product.
    pub const fn edge_count(&self) -> Result<usize, BenchSetupError> {
        if self.vertex_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "vertex_count",
            });
        }
        match self.vertex_count.checked_mul(self.density) {
            Some(edges) if edges > 0 => Ok(edges),
            _ => Err(BenchSetupError::ZeroValue { context: "density" }),
        }
    }

    /// Generates the connected graph for these parameters.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when the parameters or generator reject the
    /// configuration.
    pub fn build(&self, seed: u64) -> Result<Graph, BenchSetupError> {
        let config = RandomGraphConfig {
            vertex_count: self.vertex_count,
            edge_count: self.edge_count()?,
            max_weight: MAX_WEIGHT,
            seed,
        };
        Ok(generator::connected_random(&config)?)
    }
}

impl fmt::Display for RandomBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v={},d={}", self.vertex_count, self.density)
    }
}

/// Parameters for a square unit-weight grid benchmark.
#[derive(Clone, Copy, Debug)]
pub struct GridBenchParams {
    /// Cells per side.
    pub side: usize,
}

impl GridBenchParams {
    /// Generates the `side x side` grid.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] for a zero side or an overflowing grid.
    pub fn build(&self) -> Result<Graph, BenchSetupError> {
        if self.side == 0 {
            return Err(BenchSetupError::ZeroValue { context: "side" });
        }
        Ok(generator::grid(self.side, self.side, 1)?)
    }
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.side, self.side)
    }
}
