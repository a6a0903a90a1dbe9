//! Error types for the karger core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use thiserror::Error;

use crate::{builder::ExecutionStrategy, vertex::VertexId};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
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
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::Multigraph`] and [`crate::AdjacencyList`]
/// operations.
///
/// Every variant is a precondition violation reported before the triggering
/// operation mutated any state.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// `add_vertex` was called with an identifier already in the graph.
    #[error("vertex `{vertex}` already exists in the graph")]
    DuplicateVertex {
        /// The identifier that is already present.
        vertex: VertexId,
    },
    /// An operation referenced a vertex absent from the graph.
    #[error("vertex `{vertex}` does not exist in the graph")]
    MissingVertex {
        /// The identifier that could not be found.
        vertex: VertexId,
    },
    /// An edge referenced one or more vertices absent from the graph, or
    /// asked to contract a vertex with itself.
    #[error("edge ({from}, {to}) contains a nonexistent or invalid vertex")]
    InvalidEdge {
        /// Source endpoint of the offending edge.
        from: VertexId,
        /// Destination endpoint of the offending edge.
        to: VertexId,
    },
    /// A removal was requested on an empty adjacency container.
    #[error("cannot remove from an empty adjacency list")]
    EmptyContainer,
    /// Vertex identifiers must not be empty.
    #[error("vertex identifiers must not be empty")]
    InvalidVertex,
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// `add_vertex` was called with an identifier already in the graph.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// An operation referenced a vertex absent from the graph.
        MissingVertex => MissingVertex { .. } => "GRAPH_MISSING_VERTEX",
        /// An edge referenced one or more vertices absent from the graph.
        InvalidEdge => InvalidEdge { .. } => "GRAPH_INVALID_EDGE",
        /// A removal was requested on an empty adjacency container.
        EmptyContainer => EmptyContainer => "GRAPH_EMPTY_CONTAINER",
        /// Vertex identifiers must not be empty.
        InvalidVertex => InvalidVertex => "GRAPH_INVALID_VERTEX",
    }
}

impl GraphError {
    pub(crate) fn missing(vertex: &VertexId) -> Self {
        Self::MissingVertex {
            vertex: vertex.clone(),
        }
    }

    pub(crate) fn invalid_edge(from: &VertexId, to: &VertexId) -> Self {
        Self::InvalidEdge {
            from: from.clone(),
            to: to.clone(),
        }
    }
}

/// Error type produced when configuring or running [`crate::MinCut`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MinCutError {
    /// An explicit trial count of zero was requested.
    #[error("trials must be at least 1 (got 0)")]
    ZeroTrials,
    /// A cut needs at least two vertices to separate.
    #[error("graph has {vertices} vertices but a cut requires at least 2")]
    TooFewVertices {
        /// Number of vertices in the supplied graph.
        vertices: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
    /// The graph holds more `from -> to` entries than `to -> from` entries,
    /// so it does not describe an undirected multigraph.
    #[error("edge ({from}, {to}) has no matching reverse entry")]
    AsymmetricGraph {
        /// Endpoint holding the unmatched entries.
        from: VertexId,
        /// Destination of the unmatched entries.
        to: VertexId,
    },
    /// A graph operation failed while contracting.
    #[error("graph operation failed: {error}")]
    Graph {
        #[from]
        /// Underlying graph error.
        error: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`MinCutError`] variants.
    enum MinCutErrorCode for MinCutError {
        /// An explicit trial count of zero was requested.
        ZeroTrials => ZeroTrials => "MINCUT_ZERO_TRIALS",
        /// A cut needs at least two vertices to separate.
        TooFewVertices => TooFewVertices { .. } => "MINCUT_TOO_FEW_VERTICES",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "MINCUT_BACKEND_UNAVAILABLE",
        /// The graph has an edge without a matching reverse entry.
        AsymmetricGraph => AsymmetricGraph { .. } => "MINCUT_ASYMMETRIC_GRAPH",
        /// A graph operation failed while contracting.
        GraphFailure => Graph { .. } => "MINCUT_GRAPH_FAILURE",
    }
}

impl MinCutError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in a
    /// graph operation.
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { error } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
