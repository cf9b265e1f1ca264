//! Benchmark support crate for randgraph.
//!
//! Provides synthetic edge lists and parameter types used by the Criterion
//! benchmarks for graph generation and the three edge sorts.

pub mod error;
pub mod params;
pub mod source;
