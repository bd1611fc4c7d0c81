//! Benchmark setup error type.
//!
//! Lets setup helpers propagate failures with `?` instead of `.expect()`.

use prim_core::GeneratorError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph generation failed.
    #[error("graph generation failed: {0}")]
    Generator(#[from] GeneratorError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
