//! Seeded edge-list generation.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use randgraph_core::Edge;

use super::SyntheticError;

/// Initial arrangement of a synthetic edge list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeOrder {
    /// Uniformly shuffled.
    Shuffled,
    /// Already sorted by weight, then ids.
    Ascending,
    /// Sorted in reverse; the insertion-sort worst case.
    Descending,
}

impl fmt::Display for EdgeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shuffled => "shuffled",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        })
    }
}

/// Configuration for [`synthetic_edges`].
#[derive(Clone, Debug)]
pub struct SyntheticEdgeConfig {
    /// Number of edges to produce.
    pub edge_count: usize,
    /// Node ids are drawn from `0..node_count`.
    pub node_count: usize,
    /// Weights are drawn from `1..=max_weight`.
    pub max_weight: u32,
    /// Initial arrangement.
    pub order: EdgeOrder,
    /// RNG seed.
    pub seed: u64,
}

/// Builds a reproducible edge list.
///
/// Endpoints satisfy `source < target` like generated graph edges; duplicate
/// endpoint pairs are allowed.
///
/// # Errors
/// Returns [`SyntheticError`] when `node_count < 2` or `max_weight == 0`.
///
/// # Examples
/// ```
/// use randgraph_benches::source::{EdgeOrder, SyntheticEdgeConfig, synthetic_edges};
///
/// let edges = synthetic_edges(&SyntheticEdgeConfig {
///     edge_count: 16,
///     node_count: 8,
///     max_weight: 8,
///     order: EdgeOrder::Ascending,
///     seed: 7,
/// })?;
/// assert_eq!(edges.len(), 16);
/// assert!(edges.is_sorted());
/// # Ok::<(), randgraph_benches::source::SyntheticError>(())
/// ```
pub fn synthetic_edges(config: &SyntheticEdgeConfig) -> Result<Vec<Edge>, SyntheticError> {
    if config.node_count < 2 {
        return Err(SyntheticError::TooFewNodes {
            got: config.node_count,
        });
    }
    if config.max_weight == 0 {
        return Err(SyntheticError::ZeroMaxWeight);
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges: Vec<Edge> = (0..config.edge_count)
        .map(|_| {
            let source = rng.gen_range(0..config.node_count - 1);
            let target = rng.gen_range(source + 1..config.node_count);
            let weight = rng.gen_range(1..=config.max_weight);
            Edge::new(source, target, weight)
        })
        .collect();

    match config.order {
        EdgeOrder::Shuffled => edges.shuffle(&mut rng),
        EdgeOrder::Ascending => edges.sort_unstable(),
        EdgeOrder::Descending => edges.sort_unstable_by(|left, right| right.cmp(left)),
    }
    Ok(edges)
}
