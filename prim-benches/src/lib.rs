//! Benchmark support crate for the Prim MST engine.
//!
//! Provides the parameter types and graph fixtures used by the Criterion
//! benchmarks in `benches/`.

pub mod error;
pub mod params;
