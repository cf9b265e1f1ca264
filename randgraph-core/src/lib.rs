//! randgraph core library.
//!
//! Generates connected random undirected graphs from `(n, seed, p)`,
//! verifies connectivity with a depth-first search, and sorts the resulting
//! edge list with three timed algorithms.
//!
//! Generation is reproducible: two [`JavaRandom`] streams seeded from `seed`
//! and `seed * 2` decide edge presence and edge weight, and rejected
//! candidates keep consuming the same streams.
//!
//! ```
//! use randgraph_core::{SortAlgorithm, generate};
//!
//! let graph = generate(7, 100_000, 0.5)?;
//! assert!(graph.search().is_spanning());
//! for algorithm in SortAlgorithm::ALL {
//!     assert_eq!(graph.sort_edges(algorithm).total_weight(), 35);
//! }
//! # Ok::<(), randgraph_core::GraphError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod random;
mod search;
mod sort;

#[cfg(test)]
mod test_utils;

#[cfg(feature = "rand")]
pub use crate::random::RngStream;
pub use crate::{
    error::{GraphError, GraphErrorCode, GraphInvariantViolation, Result},
    graph::{
        AdjacencyMatrix, Edge, GeneratorBuilder, Graph, GraphGenerator, GraphParams, Node,
        generate,
    },
    random::{JavaRandom, RandomStream},
    search::{DfsResult, depth_first_search},
    sort::{
        EdgeSortResult, SortAlgorithm, counting_sort, insertion_sort, quick_sort, sort_edges,
    },
};
