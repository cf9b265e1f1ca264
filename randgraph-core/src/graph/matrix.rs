//! Dense symmetric weight matrix.

use super::edge::Edge;

/// Row-major `n × n` weight matrix where `0` marks an absent edge.
///
/// Writes go through [`AdjacencyMatrix::connect`], which keeps the matrix
/// symmetric and never touches the diagonal.
///
/// # Examples
/// ```
/// use randgraph_core::AdjacencyMatrix;
///
/// let mut matrix = AdjacencyMatrix::new(3);
/// matrix.connect(0, 2, 5);
/// assert_eq!(matrix.weight(2, 0), Some(5));
/// assert_eq!(matrix.weight(1, 1), Some(0));
/// assert_eq!(matrix.weight(3, 0), None);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    size: usize,
    weights: Vec<u32>,
}

impl AdjacencyMatrix {
    /// Creates an all-zero matrix for `size` nodes.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            weights: vec![0; size.saturating_mul(size)],
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[rustfmt::skip]
    pub const fn size(&self) -> usize { self.size }

    /// Returns the weight stored at `(row, column)`, or `None` when either
    /// index is out of range.
    #[must_use]
    pub fn weight(&self, row: usize, column: usize) -> Option<u32> {
        if row >= self.size || column >= self.size {
            return None;
        }
        self.weights.get(row * self.size + column).copied()
    }

    /// Records a symmetric edge between `x` and `y`.
    ///
    /// Self-loops and out-of-range ids are ignored.
    pub fn connect(&mut self, x: usize, y: usize, weight: u32) {
        if x == y || x >= self.size || y >= self.size {
            return;
        }
        let size = self.size;
        if let Some(cell) = self.weights.get_mut(x * size + y) {
            *cell = weight;
        }
        if let Some(cell) = self.weights.get_mut(y * size + x) {
            *cell = weight;
        }
    }

    /// Iterates over the rows of the matrix.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        self.weights.chunks(self.size.max(1)).take(self.size)
    }

    /// Iterates over the non-zero entries of the strict upper triangle as
    /// canonical edges (`source < target`), in row-major order.
    pub fn upper_triangle(&self) -> impl Iterator<Item = Edge> + '_ {
        self.rows().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .skip(x + 1)
                .filter(|(_, weight)| **weight != 0)
                .map(move |(y, weight)| Edge::new(x, y, *weight))
        })
    }
}
