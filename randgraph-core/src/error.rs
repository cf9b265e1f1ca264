//! Error types for the randgraph core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

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
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when validating parameters or generating graphs.
///
/// The display strings of the parameter variants are user-facing: the CLI
/// prints them verbatim.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// The graph needs at least two nodes.
    #[error("n must be greater than 1")]
    NodeCountTooSmall {
        /// The node count supplied by the caller.
        got: i32,
    },
    /// The edge probability was NaN or infinite.
    #[error("p must be a real number")]
    NonFiniteProbability,
    /// The edge probability fell outside `[0, 1]`.
    #[error("p must be between 0 and 1")]
    ProbabilityOutOfRange {
        /// The probability supplied by the caller.
        got: f64,
    },
    /// The configured attempt guard was exhausted before a connected graph
    /// appeared.
    #[error("no connected graph found after {attempts} attempts")]
    AttemptLimitExceeded {
        /// Number of candidate graphs built and rejected.
        attempts: usize,
    },
    /// A depth-first search was asked to start outside the graph.
    #[error("start node {start} is out of bounds for {node_count} nodes")]
    StartOutOfBounds {
        /// The requested start node.
        start: usize,
        /// Number of nodes in the adjacency list.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The graph needs at least two nodes.
        NodeCountTooSmall => NodeCountTooSmall { .. } => "GRAPH_NODE_COUNT_TOO_SMALL",
        /// The edge probability was NaN or infinite.
        NonFiniteProbability => NonFiniteProbability => "GRAPH_NON_FINITE_PROBABILITY",
        /// The edge probability fell outside `[0, 1]`.
        ProbabilityOutOfRange => ProbabilityOutOfRange { .. } => "GRAPH_PROBABILITY_OUT_OF_RANGE",
        /// The configured attempt guard was exhausted.
        AttemptLimitExceeded => AttemptLimitExceeded { .. } => "GRAPH_ATTEMPT_LIMIT_EXCEEDED",
        /// A depth-first search was asked to start outside the graph.
        StartOutOfBounds => StartOutOfBounds { .. } => "GRAPH_START_OUT_OF_BOUNDS",
    }
}

impl GraphError {
    /// Returns `true` when the error rejects caller-supplied parameters
    /// before any generation work was attempted.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::GraphError;
    ///
    /// assert!(GraphError::NonFiniteProbability.is_invalid_parameter());
    /// assert!(!GraphError::AttemptLimitExceeded { attempts: 3 }.is_invalid_parameter());
    /// ```
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::NodeCountTooSmall { .. }
                | Self::NonFiniteProbability
                | Self::ProbabilityOutOfRange { .. }
        )
    }
}

/// A structural invariant of a generated [`crate::Graph`] that does not hold.
///
/// Returned by [`crate::Graph::validate`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphInvariantViolation {
    /// The weight matrix differs across the diagonal.
    #[error("matrix is not symmetric at ({row}, {column})")]
    AsymmetricMatrix {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        column: usize,
    },
    /// A node carries a self-loop weight.
    #[error("matrix diagonal is non-zero at node {node}")]
    NonZeroDiagonal {
        /// The offending node.
        node: usize,
    },
    /// The canonical edge list disagrees with the matrix's upper triangle.
    #[error("edge list holds {edges} edges but the matrix holds {matrix}")]
    EdgeCountMismatch {
        /// Length of the canonical edge list.
        edges: usize,
        /// Non-zero entries in the strict upper triangle.
        matrix: usize,
    },
    /// The stored total weight differs from the sum of the edge list.
    #[error("total weight {stored} differs from summed edge weight {summed}")]
    TotalWeightMismatch {
        /// Value recorded on the graph.
        stored: u64,
        /// Value recomputed from the canonical edge list.
        summed: u64,
    },
    /// The depth-first search did not reach every node.
    #[error("search reached {reached} of {node_count} nodes")]
    Disconnected {
        /// Nodes reached from node zero.
        reached: usize,
        /// Nodes in the graph.
        node_count: usize,
    },
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
