//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` instead of `.expect()`.

use randgraph_core::GraphError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic edge generation failed.
    #[error("synthetic edge generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Parameter validation or graph generation failed.
    #[error("graph generation failed: {0}")]
    Graph(#[from] GraphError),
}
