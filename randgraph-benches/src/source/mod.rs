//! Synthetic edge lists for sort benchmarks.
//!
//! Generated graphs only ever produce edges in row-major order, which hides
//! how the sorts behave on other arrangements. These sources build edge
//! lists of any size with a chosen initial order.

mod edges;
mod errors;

pub use edges::{EdgeOrder, SyntheticEdgeConfig, synthetic_edges};
pub use errors::SyntheticError;

#[cfg(test)]
mod tests;
