//! Benchmark parameter types rendered as Criterion benchmark ids.

use std::fmt;

use crate::source::EdgeOrder;

/// Parameters for a graph generation benchmark run.
#[derive(Clone, Debug)]
pub struct GenerateBenchParams {
    /// Number of nodes.
    pub node_count: i32,
    /// Edge-inclusion probability.
    pub probability: f64,
}

impl fmt::Display for GenerateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.node_count, self.probability)
    }
}

/// Parameters for an edge sort benchmark run.
#[derive(Clone, Debug)]
pub struct SortBenchParams {
    /// Number of edges to sort.
    pub edge_count: usize,
    /// Initial arrangement of the edges.
    pub order: EdgeOrder,
}

impl fmt::Display for SortBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edges={},{}", self.edge_count, self.order)
    }
}
