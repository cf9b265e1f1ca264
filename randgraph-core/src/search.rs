//! Depth-first connectivity search over an adjacency list.
//!
//! The traversal runs on an explicit stack so its depth is bounded by heap
//! memory rather than the call stack, yet it records exactly the
//! predecessors a recursive pre-order walk would: neighbours are followed in
//! discovery order and a node's predecessor is the node it was first reached
//! from.

use tracing::trace;

use crate::{
    error::{GraphError, Result},
    graph::Node,
};

/// Outcome of a depth-first search.
///
/// # Examples
/// ```
/// use randgraph_core::{Node, depth_first_search};
///
/// let mut nodes = vec![Node::new(0), Node::new(1), Node::new(2)];
/// nodes[0].connect(1, 4);
/// nodes[1].connect(0, 4);
///
/// let result = depth_first_search(&nodes, 0)?;
/// assert_eq!(result.nodes_reached(), 2);
/// assert_eq!(result.predecessors(), &[None, Some(0), None]);
/// assert!(!result.is_spanning());
/// # Ok::<(), randgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DfsResult {
    start: usize,
    nodes_reached: usize,
    predecessors: Vec<Option<usize>>,
}

impl DfsResult {
    /// Returns the node the search started from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> usize { self.start }

    /// Returns the number of distinct nodes visited.
    #[must_use]
    #[rustfmt::skip]
    pub const fn nodes_reached(&self) -> usize { self.nodes_reached }

    /// Returns the predecessor of every node; `None` marks the start node and
    /// any node the search never reached.
    #[must_use]
    #[rustfmt::skip]
    pub fn predecessors(&self) -> &[Option<usize>] { &self.predecessors }

    /// Returns the predecessor of `node`, or `None` when it has none or is
    /// out of range.
    #[must_use]
    pub fn predecessor(&self, node: usize) -> Option<usize> {
        self.predecessors.get(node).copied().flatten()
    }

    /// Returns `true` when every node was reached.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.nodes_reached == self.predecessors.len()
    }

    /// Counts the nodes without a predecessor. A spanning search has exactly
    /// one: its start node.
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.predecessors.iter().filter(|pred| pred.is_none()).count()
    }
}

/// Searches `nodes` depth-first from `start`.
///
/// # Errors
/// Returns [`GraphError::StartOutOfBounds`] when `start` does not name a node.
pub fn depth_first_search(nodes: &[Node], start: usize) -> Result<DfsResult> {
    if start >= nodes.len() {
        return Err(GraphError::StartOutOfBounds {
            start,
            node_count: nodes.len(),
        });
    }

    let mut visited = vec![false; nodes.len()];
    let mut predecessors = vec![None; nodes.len()];
    let mut nodes_reached = 0;
    // (predecessor, node) pairs still to visit.
    let mut pending: Vec<(Option<usize>, usize)> = vec![(None, start)];

    while let Some((previous, current)) = pending.pop() {
        let Some(seen) = visited.get_mut(current) else {
            continue;
        };
        if *seen {
            continue;
        }
        *seen = true;
        if let Some(slot) = predecessors.get_mut(current) {
            *slot = previous;
        }
        nodes_reached += 1;
        trace!(node = current, predecessor = ?previous, "dfs visit");

        if let Some(node) = nodes.get(current) {
            // Reverse so the first-discovered neighbour is popped first.
            pending.extend(
                node.neighbours()
                    .rev()
                    .filter(|target| !visited.get(*target).copied().unwrap_or(true))
                    .map(|target| (Some(current), target)),
            );
        }
    }

    Ok(DfsResult {
        start,
        nodes_reached,
        predecessors,
    })
}
