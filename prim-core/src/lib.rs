//! Minimum spanning trees over weighted undirected graphs.
//!
//! Build a [`Graph`] with [`Graph::add_edge`], then call [`prim`] (or the
//! [`Graph::compute_mst_weight`] shortcut) to grow a tree from vertex 0.
//!
//! ```
//! use prim_core::{Graph, prim};
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1, 1)?;
//! graph.add_edge(1, 2, 2)?;
//! graph.add_edge(0, 2, 3)?;
//!
//! let tree = prim(&graph);
//! assert_eq!(tree.total_weight(), 3);
//! assert_eq!(tree.parent(2), Some(1));
//! # Ok::<(), prim_core::GraphError>(())
//! ```
//!
//! # Metrics
//!
//! With the `metrics` feature enabled every computation emits:
//!
//! - `prim_mst_computations_total` (counter)
//! - `prim_mst_stale_pops_total` (counter)
//! - `prim_mst_reached_vertices` (histogram)
//!
//! These names are stable for downstream dashboards.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
#[cfg(feature = "generator")]
#[cfg_attr(docsrs, doc(cfg(feature = "generator")))]
pub mod generator;
mod graph;
mod mst;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    graph::{AdjacencyEntry, Edge, Graph, TotalWeight, Weight},
    mst::{PrimStats, SpanningTree, TreeEdge, prim},
};

#[cfg(feature = "generator")]
pub use crate::error::{GeneratorError, GeneratorErrorCode};
