//! Error types for the prim core library.
//!
//! Each error enum carries a stable machine-readable code so the CLI and logs
//! can report failures without matching on display strings.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint was outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertexIndex {
        /// The offending endpoint.
        vertex: usize,
        /// Number of vertices the graph was constructed with.
        vertex_count: usize,
    },
    /// The adjacency table for the requested vertex count could not be
    /// allocated.
    #[error("cannot allocate a graph with {vertex_count} vertices")]
    CapacityExceeded {
        /// Requested number of vertices.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint was outside the vertex range.
        InvalidVertexIndex => InvalidVertexIndex { .. } => "GRAPH_INVALID_VERTEX_INDEX",
        /// The vertex count could not be allocated.
        CapacityExceeded => CapacityExceeded { .. } => "GRAPH_CAPACITY_EXCEEDED",
    }
}

/// Convenient alias for results returned by graph construction.
pub type Result<T> = core::result::Result<T, GraphError>;

/// An error produced by the [`crate::generator`] helpers.
#[cfg(feature = "generator")]
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// Weights are drawn from `1..=max_weight`, so zero leaves no choice.
    #[error("max_weight must be at least 1")]
    ZeroMaxWeight,
    /// A connected graph needs at least `vertex_count - 1` edges.
    #[error("{edge_count} edges cannot connect {vertex_count} vertices (need at least {required})")]
    InsufficientEdges {
        /// Requested number of edges.
        edge_count: usize,
        /// Requested number of vertices.
        vertex_count: usize,
        /// Minimum number of edges for connectivity.
        required: usize,
    },
    /// Random edges without self-loops need at least two vertices.
    #[error("{edge_count} random edges need at least two vertices (got {vertex_count})")]
    TooFewVertices {
        /// Requested number of edges.
        edge_count: usize,
        /// Requested number of vertices.
        vertex_count: usize,
    },
    /// `rows * cols` does not fit in `usize`.
    #[error("a {rows}x{cols} grid overflows the vertex index range")]
    GridTooLarge {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// The generator produced an edge the graph rejected.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[cfg(feature = "generator")]
define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// Weights are drawn from `1..=max_weight`.
        ZeroMaxWeight => ZeroMaxWeight => "GENERATOR_ZERO_MAX_WEIGHT",
        /// Too few edges were requested for a connected graph.
        InsufficientEdges => InsufficientEdges { .. } => "GENERATOR_INSUFFICIENT_EDGES",
        /// Too few vertices were requested for random edges.
        TooFewVertices => TooFewVertices { .. } => "GENERATOR_TOO_FEW_VERTICES",
        /// The grid dimensions overflow.
        GridTooLarge => GridTooLarge { .. } => "GENERATOR_GRID_TOO_LARGE",
        /// The generated graph rejected an edge.
        GraphFailure => Graph(..) => "GENERATOR_GRAPH_FAILURE",
    }
}

#[cfg(feature = "generator")]
impl GeneratorError {
    /// Retrieve the inner [`GraphErrorCode`] when graph construction failed.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}
