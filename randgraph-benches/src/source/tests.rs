//! Unit tests for synthetic edge generation.

use rstest::{fixture, rstest};

use super::{EdgeOrder, SyntheticEdgeConfig, SyntheticError, synthetic_edges};

#[fixture]
fn config() -> SyntheticEdgeConfig {
    SyntheticEdgeConfig {
        edge_count: 256,
        node_count: 40,
        max_weight: 40,
        order: EdgeOrder::Shuffled,
        seed: 11,
    }
}

#[rstest]
fn edges_respect_bounds(config: SyntheticEdgeConfig) {
    let edges = synthetic_edges(&config).expect("config is valid");
    assert_eq!(edges.len(), config.edge_count);
    for edge in &edges {
        assert!(edge.source() < edge.target());
        assert!(edge.target() < config.node_count);
        assert!((1..=config.max_weight).contains(&edge.weight()));
    }
}

#[rstest]
fn same_seed_is_reproducible(config: SyntheticEdgeConfig) {
    let first = synthetic_edges(&config).expect("config is valid");
    let second = synthetic_edges(&config).expect("config is valid");
    assert_eq!(first, second);
}

#[rstest]
#[case::ascending(EdgeOrder::Ascending)]
#[case::descending(EdgeOrder::Descending)]
fn ordered_variants_are_monotone(mut config: SyntheticEdgeConfig, #[case] order: EdgeOrder) {
    config.order = order;
    let edges = synthetic_edges(&config).expect("config is valid");
    let monotone = match order {
        EdgeOrder::Ascending => edges.is_sorted(),
        _ => edges.iter().rev().is_sorted(),
    };
    assert!(monotone);
}

#[rstest]
fn empty_list_is_allowed(mut config: SyntheticEdgeConfig) {
    config.edge_count = 0;
    assert!(synthetic_edges(&config).expect("config is valid").is_empty());
}

#[rstest]
#[case::one_node(1, 5, SyntheticError::TooFewNodes { got: 1 })]
#[case::zero_weight(4, 0, SyntheticError::ZeroMaxWeight)]
fn rejects_degenerate_configs(
    mut config: SyntheticEdgeConfig,
    #[case] node_count: usize,
    #[case] max_weight: u32,
    #[case] expected: SyntheticError,
) {
    config.node_count = node_count;
    config.max_weight = max_weight;
    assert_eq!(synthetic_edges(&config), Err(expected));
}
