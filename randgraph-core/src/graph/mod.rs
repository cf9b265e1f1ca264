//! Connected random graphs and their data model.
//!
//! A [`Graph`] keeps three consistent views of the same undirected edges:
//! the symmetric [`AdjacencyMatrix`], the adjacency list of [`Node`]s in
//! discovery order, and the canonical edge list holding each connected pair
//! once with `source < target`.

mod edge;
mod generator;
mod matrix;
mod params;


use std::time::Duration;

pub use self::{
    edge::{Edge, Node},
    generator::{GeneratorBuilder, GraphGenerator, generate},
    matrix::AdjacencyMatrix,
    params::GraphParams,
};
use crate::{error::GraphInvariantViolation, search::DfsResult};

/// A connected, undirected, weighted graph produced by [`GraphGenerator`].
#[derive(Clone, Debug)]
pub struct Graph {
    params: GraphParams,
    matrix: AdjacencyMatrix,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    total_weight: u64,
    generation_time: Duration,
    attempts: usize,
    search: DfsResult,
}

impl Graph {
    /// Returns the parameters the graph was generated from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn params(&self) -> &GraphParams { &self.params }

    /// Returns the number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.params.node_count()
    }

    /// Returns the seed both random streams were derived from.
    #[must_use]
    pub const fn seed(&self) -> i32 {
        self.params.seed()
    }

    /// Returns the per-pair edge probability.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.params.probability()
    }

    /// Returns the weight matrix.
    #[must_use]
    #[rustfmt::skip]
    pub const fn matrix(&self) -> &AdjacencyMatrix { &self.matrix }

    /// Returns the adjacency list, indexed by node id.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[Node] { &self.nodes }

    /// Returns the canonical edge list (`source < target`, row-major order).
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of all edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> u64 { self.total_weight }

    /// Returns the wall-clock time spent across every generation attempt.
    #[must_use]
    #[rustfmt::skip]
    pub const fn generation_time(&self) -> Duration { self.generation_time }

    /// Returns how many candidate graphs were built, including the accepted
    /// one.
    #[must_use]
    #[rustfmt::skip]
    pub const fn attempts(&self) -> usize { self.attempts }

    /// Returns the depth-first search from node `0` that accepted the graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn search(&self) -> &DfsResult { &self.search }

    /// Checks the structural invariants every generated graph upholds.
    ///
    /// # Errors
    /// Returns the first [`GraphInvariantViolation`] found.
    ///
    /// # Examples
    /// ```
    /// let graph = randgraph_core::generate(6, 1, 0.4)?;
    /// assert_eq!(graph.validate(), Ok(()));
    /// # Ok::<(), randgraph_core::GraphError>(())
    /// ```
    pub fn validate(&self) -> Result<(), GraphInvariantViolation> {
        let size = self.matrix.size();
        for row in 0..size {
            if self.matrix.weight(row, row) != Some(0) {
                return Err(GraphInvariantViolation::NonZeroDiagonal { node: row });
            }
            for column in (row + 1)..size {
                if self.matrix.weight(row, column) != self.matrix.weight(column, row) {
                    return Err(GraphInvariantViolation::AsymmetricMatrix { row, column });
                }
            }
        }

        let matrix_edges = self.matrix.upper_triangle().count();
        if matrix_edges != self.edges.len() {
            return Err(GraphInvariantViolation::EdgeCountMismatch {
                edges: self.edges.len(),
                matrix: matrix_edges,
            });
        }

        let summed: u64 = self.edges.iter().map(|edge| u64::from(edge.weight())).sum();
        if summed != self.total_weight {
            return Err(GraphInvariantViolation::TotalWeightMismatch {
                stored: self.total_weight,
                summed,
            });
        }

        if !self.search.is_spanning() || self.search.nodes_reached() != self.node_count() {
            return Err(GraphInvariantViolation::Disconnected {
                reached: self.search.nodes_reached(),
                node_count: self.node_count(),
            });
        }
        Ok(())
    }
}
