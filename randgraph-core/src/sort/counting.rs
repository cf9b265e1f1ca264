//! Stable counting sort keyed on edge weight.

use crate::graph::Edge;

/// Returns a copy of `edges` ordered by weight alone.
///
/// Builds a histogram over `0..=max_weight`, turns it into end positions
/// with a prefix sum, then places edges walking the input backwards,
/// decrementing each bucket before placement. Edges with equal weight keep
/// their input order; source and target ids play no part.
///
/// # Examples
/// ```
/// use randgraph_core::{Edge, counting_sort};
///
/// let edges = [Edge::new(2, 3, 1), Edge::new(0, 4, 2), Edge::new(0, 1, 1)];
/// let sorted = counting_sort(&edges);
/// assert_eq!(sorted, vec![edges[0], edges[2], edges[1]]);
/// ```
#[must_use]
pub fn counting_sort(edges: &[Edge]) -> Vec<Edge> {
    let max_weight = edges.iter().map(Edge::weight).max().unwrap_or(0) as usize;

    let mut positions = vec![0_usize; max_weight + 1];
    for edge in edges {
        positions[edge.weight() as usize] += 1;
    }
    for bucket in 1..positions.len() {
        positions[bucket] += positions[bucket - 1];
    }

    let mut sorted: Vec<Option<Edge>> = vec![None; edges.len()];
    for edge in edges.iter().rev() {
        let bucket = &mut positions[edge.weight() as usize];
        *bucket -= 1;
        sorted[*bucket] = Some(*edge);
    }
    sorted.into_iter().flatten().collect()
}
