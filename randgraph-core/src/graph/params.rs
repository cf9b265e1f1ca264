//! Validated generation parameters.

use std::num::NonZeroU32;

use crate::error::{GraphError, Result};

/// The `(n, seed, p)` triple that fully determines a generated graph.
///
/// # Examples
/// ```
/// use randgraph_core::{GraphError, GraphParams};
///
/// let params = GraphParams::new(7, 100_000, 0.5)?;
/// assert_eq!(params.node_count(), 7);
///
/// assert_eq!(
///     GraphParams::new(1, 0, 0.5),
///     Err(GraphError::NodeCountTooSmall { got: 1 })
/// );
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphParams {
    node_count: NonZeroU32,
    seed: i32,
    probability: f64,
}

impl GraphParams {
    /// Validates and bundles generation parameters.
    ///
    /// Checks run in a fixed order: node count, then probability finiteness,
    /// then probability range.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeCountTooSmall`] when `node_count < 2`,
    /// [`GraphError::NonFiniteProbability`] when `probability` is NaN or
    /// infinite, and [`GraphError::ProbabilityOutOfRange`] when it lies
    /// outside `[0, 1]`.
    pub fn new(node_count: i32, seed: i32, probability: f64) -> Result<Self> {
        let count = u32::try_from(node_count)
            .ok()
            .filter(|count| *count >= 2)
            .and_then(NonZeroU32::new)
            .ok_or(GraphError::NodeCountTooSmall { got: node_count })?;
        if !probability.is_finite() {
            return Err(GraphError::NonFiniteProbability);
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(GraphError::ProbabilityOutOfRange { got: probability });
        }
        Ok(Self {
            node_count: count,
            seed,
            probability,
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count.get() as usize
    }

    /// Returns the upper bound for weight draws; weights land in `[1, n]`.
    #[must_use]
    pub(crate) const fn weight_bound(&self) -> NonZeroU32 {
        self.node_count
    }

    /// Returns the seed for both random streams.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> i32 { self.seed }

    /// Returns the per-pair edge probability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn probability(&self) -> f64 { self.probability }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::one_node(1, 0.5, GraphError::NodeCountTooSmall { got: 1 })]
    #[case::negative_nodes(-4, 0.5, GraphError::NodeCountTooSmall { got: -4 })]
    #[case::node_count_checked_first(0, f64::NAN, GraphError::NodeCountTooSmall { got: 0 })]
    #[case::nan(3, f64::NAN, GraphError::NonFiniteProbability)]
    #[case::infinite(3, f64::INFINITY, GraphError::NonFiniteProbability)]
    #[case::above_one(3, 1.5, GraphError::ProbabilityOutOfRange { got: 1.5 })]
    #[case::negative(3, -0.1, GraphError::ProbabilityOutOfRange { got: -0.1 })]
    fn rejects_invalid_parameters(
        #[case] node_count: i32,
        #[case] probability: f64,
        #[case] expected: GraphError,
    ) {
        let err = GraphParams::new(node_count, 0, probability).expect_err("parameters are invalid");
        assert_eq!(err, expected);
        assert!(err.is_invalid_parameter());
    }

    #[rstest]
    #[case::lower_bounds(2, 0.0)]
    #[case::upper_probability(10, 1.0)]
    #[case::interior(7, 0.5)]
    fn accepts_valid_parameters(#[case] node_count: i32, #[case] probability: f64) {
        let params = GraphParams::new(node_count, -3, probability).expect("parameters are valid");
        assert_eq!(params.node_count(), usize::try_from(node_count).expect("positive"));
        assert_eq!(params.seed(), -3);
        assert_eq!(params.probability(), probability);
    }

    #[test]
    fn user_facing_messages_match_input_validation_wording() {
        assert_eq!(
            GraphError::NodeCountTooSmall { got: 1 }.to_string(),
            "n must be greater than 1"
        );
        assert_eq!(
            GraphError::NonFiniteProbability.to_string(),
            "p must be a real number"
        );
        assert_eq!(
            GraphError::ProbabilityOutOfRange { got: 1.5 }.to_string(),
            "p must be between 0 and 1"
        );
    }
}
