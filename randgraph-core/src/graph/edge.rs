//! Edges and adjacency-list nodes.

use std::cmp::Ordering;

/// A weighted connection between two node ids.
///
/// Edges are ordered by weight, then by source id, then by target id. This
/// ordering is the canonical meaning of "sorted" for edge lists.
///
/// # Examples
/// ```
/// use randgraph_core::Edge;
///
/// let light = Edge::new(4, 5, 1);
/// let heavy = Edge::new(0, 1, 3);
/// assert!(light < heavy);
/// assert!(Edge::new(0, 2, 3) < Edge::new(1, 2, 3));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: u32,
}

impl Edge {
    /// Creates an edge from `source` to `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: u32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the id of the node the edge leaves.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the id of the node the edge reaches.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A node in the adjacency-list view of a graph.
///
/// Outgoing edges are kept in the order they were discovered during
/// generation, which is also the order the depth-first search follows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    id: usize,
    edges: Vec<Edge>,
}

impl Node {
    /// Creates a node with no outgoing edges.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self {
            id,
            edges: Vec::new(),
        }
    }

    /// Appends an outgoing edge towards `target`.
    pub fn connect(&mut self, target: usize, weight: u32) {
        self.edges.push(Edge::new(self.id, target, weight));
    }

    /// Returns the node id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> usize { self.id }

    /// Returns the outgoing edges in discovery order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Iterates over neighbour ids in discovery order.
    pub fn neighbours(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.edges.iter().map(Edge::target)
    }
}
