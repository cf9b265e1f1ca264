//! Retry-until-connected random graph generation.
//!
//! Every unordered pair `(x, y)` with `x < y` is offered an edge in
//! row-major order. The presence stream decides whether the edge exists
//! (`draw <= p`) and only then does the weight stream draw a weight in
//! `[1, n]`. A candidate that the depth-first search from node `0` cannot
//! fully traverse is discarded and rebuilt from scratch, continuing both
//! streams without reseeding. Reference outputs depend on this exact
//! consumption order.
//!
//! With `p == 0` no candidate is ever connected and generation never
//! returns unless an attempt guard is configured through
//! [`GeneratorBuilder::with_max_attempts`].

use std::num::NonZeroUsize;
use std::time::Instant;

use tracing::{debug, info, instrument};

use super::{AdjacencyMatrix, Graph, GraphParams, Node};
use crate::{
    error::{GraphError, Result},
    random::{JavaRandom, RandomStream},
    search::{DfsResult, depth_first_search},
};

/// Configures and constructs [`GraphGenerator`] instances.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use randgraph_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new()
///     .with_node_count(7)
///     .with_seed(100_000)
///     .with_probability(0.5)
///     .with_max_attempts(NonZeroUsize::new(64).expect("non-zero"))
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(generator.params().node_count(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    node_count: i32,
    seed: i32,
    probability: f64,
    max_attempts: Option<NonZeroUsize>,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            node_count: 2,
            seed: 0,
            probability: 1.0,
            max_attempts: None,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder for a two-node complete graph with seed `0` and no
    /// attempt guard.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.node_count(), 2);
    /// assert_eq!(builder.max_attempts(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the node count `n`.
    #[must_use]
    pub const fn with_node_count(mut self, node_count: i32) -> Self {
        self.node_count = node_count;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> i32 { self.node_count }

    /// Overrides the seed shared by both random streams.
    #[must_use]
    pub const fn with_seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> i32 { self.seed }

    /// Overrides the per-pair edge probability `p`.
    #[must_use]
    pub const fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Returns the configured edge probability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn probability(&self) -> f64 { self.probability }

    /// Caps the number of candidate graphs built before giving up.
    ///
    /// Without a cap, generation loops until a connected graph appears.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: NonZeroUsize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Returns the configured attempt cap, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_attempts(&self) -> Option<NonZeroUsize> { self.max_attempts }

    /// Validates the configuration and constructs a [`GraphGenerator`].
    ///
    /// # Errors
    /// Returns the parameter errors documented on [`GraphParams::new`].
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{GeneratorBuilder, GraphError};
    ///
    /// let err = GeneratorBuilder::new().with_probability(1.5).build().unwrap_err();
    /// assert_eq!(err, GraphError::ProbabilityOutOfRange { got: 1.5 });
    /// ```
    pub fn build(self) -> Result<GraphGenerator> {
        let params = GraphParams::new(self.node_count, self.seed, self.probability)?;
        Ok(GraphGenerator {
            params,
            max_attempts: self.max_attempts,
        })
    }
}

/// Generates connected random graphs for one set of [`GraphParams`].
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    params: GraphParams,
    max_attempts: Option<NonZeroUsize>,
}

impl GraphGenerator {
    /// Creates an unguarded generator for already validated parameters.
    #[must_use]
    pub const fn new(params: GraphParams) -> Self {
        Self {
            params,
            max_attempts: None,
        }
    }

    /// Returns the parameters this generator uses.
    #[must_use]
    #[rustfmt::skip]
    pub const fn params(&self) -> &GraphParams { &self.params }

    /// Generates a graph using [`JavaRandom`] streams seeded from `seed` and
    /// `seed * 2`.
    ///
    /// # Errors
    /// Returns [`GraphError::AttemptLimitExceeded`] when an attempt guard is
    /// configured and exhausted.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::GeneratorBuilder;
    ///
    /// let graph = GeneratorBuilder::new()
    ///     .with_node_count(7)
    ///     .with_seed(100_000)
    ///     .with_probability(0.5)
    ///     .build()?
    ///     .generate()?;
    /// assert_eq!(graph.total_weight(), 35);
    /// assert_eq!(graph.edges().len(), 9);
    /// # Ok::<(), randgraph_core::GraphError>(())
    /// ```
    pub fn generate(&self) -> Result<Graph> {
        let (mut presence, mut weight) = JavaRandom::pair(self.params.seed());
        self.generate_with(&mut presence, &mut weight)
    }

    /// Generates a graph drawing edge presence from `presence` and edge
    /// weights from `weight`.
    ///
    /// The streams are consumed, never reset, across rejected attempts.
    ///
    /// # Errors
    /// Returns [`GraphError::AttemptLimitExceeded`] when an attempt guard is
    /// configured and exhausted.
    #[instrument(
        name = "core.generate",
        err,
        skip(self, presence, weight),
        fields(
            n = self.params.node_count(),
            seed = self.params.seed(),
            p = self.params.probability(),
        ),
    )]
    pub fn generate_with<A, B>(&self, presence: &mut A, weight: &mut B) -> Result<Graph>
    where
        A: RandomStream + ?Sized,
        B: RandomStream + ?Sized,
    {
        let node_count = self.params.node_count();
        let started = Instant::now();
        let mut attempts = 0_usize;

        loop {
            attempts += 1;
            let candidate = self.build_candidate(presence, weight);
            let search = depth_first_search(&candidate.nodes, 0)?;
            if search.nodes_reached() == node_count {
                let generation_time = started.elapsed();
                info!(
                    attempts,
                    edges = candidate.edge_count,
                    total_weight = candidate.total_weight,
                    elapsed_ms = generation_time.as_millis(),
                    "generated connected graph"
                );
                return Ok(candidate.finish(self.params, attempts, generation_time, search));
            }

            debug!(
                attempt = attempts,
                nodes_reached = search.nodes_reached(),
                "candidate graph is disconnected; rebuilding"
            );
            if let Some(limit) = self.max_attempts
                && attempts >= limit.get()
            {
                return Err(GraphError::AttemptLimitExceeded { attempts });
            }
        }
    }

    fn build_candidate<A, B>(&self, presence: &mut A, weight: &mut B) -> Candidate
    where
        A: RandomStream + ?Sized,
        B: RandomStream + ?Sized,
    {
        let node_count = self.params.node_count();
        let probability = self.params.probability();
        let bound = self.params.weight_bound();
        let mut candidate = Candidate::new(node_count);

        for x in 0..node_count {
            for y in (x + 1)..node_count {
                if presence.next_uniform() <= probability {
                    let drawn = weight.next_bounded(bound) + 1;
                    candidate.connect(x, y, drawn);
                }
            }
        }
        candidate
    }
}

/// Convenience wrapper that validates `(n, seed, p)` and generates a graph
/// without an attempt guard.
///
/// # Errors
/// Returns the parameter errors documented on [`GraphParams::new`].
///
/// # Examples
/// ```
/// use randgraph_core::generate;
///
/// let graph = generate(2, 0, 1.0)?;
/// assert_eq!(graph.edges().len(), 1);
/// assert_eq!(graph.search().predecessors(), &[None, Some(0)]);
/// # Ok::<(), randgraph_core::GraphError>(())
/// ```
pub fn generate(node_count: i32, seed: i32, probability: f64) -> Result<Graph> {
    let params = GraphParams::new(node_count, seed, probability)?;
    GraphGenerator::new(params).generate()
}

/// A graph under construction for a single attempt.
struct Candidate {
    matrix: AdjacencyMatrix,
    nodes: Vec<Node>,
    edge_count: usize,
    total_weight: u64,
}

impl Candidate {
    fn new(node_count: usize) -> Self {
        Self {
            matrix: AdjacencyMatrix::new(node_count),
            nodes: (0..node_count).map(Node::new).collect(),
            edge_count: 0,
            total_weight: 0,
        }
    }

    fn connect(&mut self, x: usize, y: usize, weight: u32) {
        self.matrix.connect(x, y, weight);
        if let Some(node) = self.nodes.get_mut(x) {
            node.connect(y, weight);
        }
        if let Some(node) = self.nodes.get_mut(y) {
            node.connect(x, weight);
        }
        self.edge_count += 1;
        self.total_weight += u64::from(weight);
    }

    fn finish(
        self,
        params: GraphParams,
        attempts: usize,
        generation_time: std::time::Duration,
        search: DfsResult,
    ) -> Graph {
        let edges = self.matrix.upper_triangle().collect();
        Graph {
            params,
            matrix: self.matrix,
            nodes: self.nodes,
            edges,
            total_weight: self.total_weight,
            generation_time,
            attempts,
            search,
        }
    }
}
