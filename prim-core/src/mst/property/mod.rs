//! Property-based tests for the Prim MST implementation.
//!
//! Compares Prim against a sequential Kruskal oracle, checks the structure of
//! every returned tree, and verifies that repeated, concurrent and reordered
//! computations agree, across graph families with different weight
//! distributions.

mod equivalence;
mod helpers;
mod oracle;
mod strategies;
