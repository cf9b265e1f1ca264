//! Error types for synthetic edge generation.

/// Errors that may occur while preparing synthetic edge lists.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count cannot hold a single edge.
    #[error("node count must be at least 2 (got {got})")]
    TooFewNodes {
        /// Node count that was requested.
        got: usize,
    },
    /// The requested maximum weight was zero.
    #[error("maximum weight must be greater than zero")]
    ZeroMaxWeight,
}
