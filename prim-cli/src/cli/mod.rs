//! Command-line interface for computing minimum spanning trees.
//!
//! The `run` command builds a graph from a generator or an edge-list file,
//! grows a spanning tree from vertex 0 and reports the result.

mod commands;
mod input;

pub use commands::{
    ChainArgs, Cli, CliError, Command, ExecutionSummary, FileArgs, GridArgs, RandomArgs,
    RunCommand, RunSource, render_summary, run_cli,
};
pub use input::ParseReason;

#[cfg(test)]
mod test_helpers;
