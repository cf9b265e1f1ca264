//! Timed edge-list sorting with three interchangeable algorithms.
//!
//! Insertion sort and quicksort order edges by the full [`Edge`] ordering
//! (weight, then source, then target), so they always agree exactly.
//! Counting sort keys on weight only and keeps equal-weight edges in input
//! order; its output matches the others only when the input already breaks
//! weight ties by ascending ids.
//!
//! Every run sorts a private copy of the input. Elapsed time covers the sort
//! step alone.

mod counting;
mod insertion;
mod quick;

#[cfg(test)]
mod tests;

use std::{fmt, time::Duration, time::Instant};

use tracing::{debug, instrument};

pub use self::{counting::counting_sort, insertion::insertion_sort, quick::quick_sort};
use crate::graph::{Edge, Graph};

/// Sorting strategies available to [`sort_edges`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SortAlgorithm {
    /// Stable adjacent-swap insertion sort.
    Insertion,
    /// Stable counting sort on weight only.
    Count,
    /// Hoare-partition quicksort.
    Quick,
}

impl SortAlgorithm {
    /// Every algorithm, in reporting order.
    pub const ALL: [Self; 3] = [Self::Insertion, Self::Count, Self::Quick];

    /// Returns the human-readable algorithm name used in reports.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::SortAlgorithm;
    ///
    /// assert_eq!(SortAlgorithm::Quick.name(), "QUICKSORT");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Insertion => "INSERTION SORT",
            Self::Count => "COUNT SORT",
            Self::Quick => "QUICKSORT",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of sorting an edge list with one algorithm.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSortResult {
    sorted: Vec<Edge>,
    algorithm: SortAlgorithm,
    elapsed: Duration,
    total_weight: u64,
}

impl EdgeSortResult {
    /// Returns the sorted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn sorted(&self) -> &[Edge] { &self.sorted }

    /// Returns the algorithm that produced this result.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> SortAlgorithm { self.algorithm }

    /// Returns the wall-clock time of the sort step.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the summed weight of the sorted edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> u64 { self.total_weight }

    /// Returns `true` when the edges are in non-decreasing weight order.
    #[must_use]
    pub fn is_weight_ordered(&self) -> bool {
        self.sorted
            .windows(2)
            .all(|pair| pair[0].weight() <= pair[1].weight())
    }
}

/// Sorts a copy of `edges` with `algorithm`.
///
/// # Examples
/// ```
/// use randgraph_core::{Edge, SortAlgorithm, sort_edges};
///
/// let edges = [Edge::new(0, 1, 3), Edge::new(1, 2, 1), Edge::new(0, 2, 3)];
/// let result = sort_edges(&edges, SortAlgorithm::Quick);
/// assert_eq!(
///     result.sorted(),
///     &[Edge::new(1, 2, 1), Edge::new(0, 1, 3), Edge::new(0, 2, 3)]
/// );
/// assert_eq!(result.total_weight(), 7);
/// ```
#[must_use]
#[instrument(name = "core.sort_edges", skip(edges), fields(edges = edges.len()))]
pub fn sort_edges(edges: &[Edge], algorithm: SortAlgorithm) -> EdgeSortResult {
    let (sorted, elapsed) = match algorithm {
        SortAlgorithm::Insertion => sort_copy(edges, insertion_sort),
        SortAlgorithm::Quick => sort_copy(edges, quick_sort),
        SortAlgorithm::Count => {
            // Counting sort builds its own output, so the copy is the sort.
            let started = Instant::now();
            let sorted = counting_sort(edges);
            (sorted, started.elapsed())
        }
    };
    let total_weight = sorted.iter().map(|edge| u64::from(edge.weight())).sum();
    debug!(
        algorithm = algorithm.name(),
        elapsed_us = elapsed.as_micros(),
        total_weight,
        "sorted edge list"
    );
    EdgeSortResult {
        sorted,
        algorithm,
        elapsed,
        total_weight,
    }
}

fn sort_copy(edges: &[Edge], sort: fn(&mut [Edge])) -> (Vec<Edge>, Duration) {
    let mut sorted = edges.to_vec();
    let started = Instant::now();
    sort(&mut sorted);
    (sorted, started.elapsed())
}

impl Graph {
    /// Sorts a copy of the canonical edge list with `algorithm`.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{SortAlgorithm, generate};
    ///
    /// let graph = generate(7, 100_000, 0.5)?;
    /// let result = graph.sort_edges(SortAlgorithm::Insertion);
    /// assert_eq!(result.total_weight(), graph.total_weight());
    /// assert_eq!(result.sorted()[0].weight(), 1);
    /// # Ok::<(), randgraph_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn sort_edges(&self, algorithm: SortAlgorithm) -> EdgeSortResult {
        sort_edges(self.edges(), algorithm)
    }
}
