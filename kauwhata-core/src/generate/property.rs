//! Property tests for the generation orchestrator.

use kauwhata_test_support::recording::{Fields, RecordingLayer};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use tracing_subscriber::layer::SubscriberExt;

use super::*;
use crate::{
    config::{GeneratorConfig, RawConfig, normalize},
    test_utils::{has_duplicate_targets, small_config, small_raw_config, suite_proptest_config},
    weight::decimal_places,
};

/// Degree of every vertex just before its own branch was generated.
fn degrees_before_own_branch(graph: &GeneratedGraph) -> Vec<usize> {
    let mut running = vec![0usize; graph.vertex_count()];
    let mut before = Vec::with_capacity(graph.vertex_count());
    for (vertex, branch) in graph.branches() {
        before.push(running[vertex - 1]);
        for target in branch.targets() {
            running[vertex - 1] += 1;
            running[target - 1] += 1;
        }
    }
    before
}

/// Quota and selection size reported for one branch.
#[derive(Debug)]
struct BranchReport {
    vertex: usize,
    quota: usize,
    selected: usize,
}

/// Generates under a recording subscriber and collects every branch report.
fn generate_with_reports(
    config: &GeneratorConfig,
    seed: u64,
) -> (GeneratedGraph, Vec<BranchReport>) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let graph = tracing::subscriber::with_default(subscriber, || {
        generate(config, &mut SmallRng::seed_from_u64(seed))
    })
    .expect("small graph fits");
    let field = |fields: &Fields, name: &str| {
        fields
            .get(name)
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or_else(|| panic!("branch event lacks numeric `{name}`"))
    };
    let reports = layer
        .events()
        .into_iter()
        .filter(|event| event.message() == Some("branch generated"))
        .map(|event| BranchReport {
            vertex: field(&event.fields, "vertex"),
            quota: field(&event.fields, "quota"),
            selected: field(&event.fields, "selected"),
        })
        .collect();
    (graph, reports)
}

proptest! {
    #![proptest_config(suite_proptest_config(96))]

    #[test]
    fn degrees_never_exceed_max_edge(config in small_config(), seed in any::<u64>()) {
        let graph = generate(&config, &mut SmallRng::seed_from_u64(seed)).expect("small graph fits");
        for degree in graph.degrees() {
            prop_assert!(degree <= config.max_edge());
        }
    }

    #[test]
    fn branches_fit_remaining_capacity(config in small_config(), seed in any::<u64>()) {
        let graph = generate(&config, &mut SmallRng::seed_from_u64(seed)).expect("small graph fits");
        let before = degrees_before_own_branch(&graph);
        for (vertex, branch) in graph.branches() {
            let remaining = config.max_edge().saturating_sub(before[vertex - 1]);
            prop_assert!(branch.len() <= remaining, "vertex {vertex} overshot");
        }
    }

    #[test]
    fn branches_never_exceed_their_quota(config in small_config(), seed in any::<u64>()) {
        let (graph, reports) = generate_with_reports(&config, seed);
        prop_assert_eq!(reports.len(), config.vertices());
        for (expected_vertex, report) in (1..).zip(&reports) {
            prop_assert_eq!(report.vertex, expected_vertex);
            prop_assert!(
                report.selected <= report.quota,
                "vertex {} selected {} over quota {}",
                report.vertex,
                report.selected,
                report.quota
            );
            let branch_len = graph.branch(report.vertex).map(|branch| branch.len());
            prop_assert_eq!(branch_len, Some(report.selected));
        }
    }

    #[test]
    fn structural_flags_are_honoured(config in small_config(), seed in any::<u64>()) {
        let graph = generate(&config, &mut SmallRng::seed_from_u64(seed)).expect("small graph fits");
        if !config.allows_self_loops() {
            prop_assert!(graph.edges().all(|edge| edge.source != edge.target));
        }
        if !config.is_multigraph() {
            prop_assert!(!has_duplicate_targets(&graph));
        }
        prop_assert!(graph.edges().all(|edge| (1..=config.vertices()).contains(&edge.target)));
    }

    #[test]
    fn edge_total_matches_branches(config in small_config(), seed in any::<u64>()) {
        let graph = generate(&config, &mut SmallRng::seed_from_u64(seed)).expect("small graph fits");
        let summed: usize = graph.branches().map(|(_, branch)| branch.len()).sum();
        prop_assert_eq!(graph.edge_count(), summed);
        prop_assert_eq!(graph.vertex_count(), config.vertices());
    }

    #[test]
    fn weights_respect_range_and_precision(config in small_config(), seed in any::<u64>()) {
        let graph = generate(&config, &mut SmallRng::seed_from_u64(seed)).expect("small graph fits");
        let range = config.weight_range();
        for edge in graph.edges() {
            prop_assert!(range.admits(edge.weight), "{} outside range", edge.weight);
            prop_assert_eq!(edge.weight.is_integer(), range.is_integral());
            if !range.is_integral() {
                prop_assert!(decimal_places(edge.weight.as_f64()) <= range.precision());
            }
        }
    }

    #[test]
    fn normalization_is_idempotent(raw in small_raw_config()) {
        let once = normalize(&raw);
        let twice = normalize(&RawConfig::from(&once));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn same_seed_same_graph(config in small_config(), seed in any::<u64>()) {
        let first = generate(&config, &mut SmallRng::seed_from_u64(seed)).expect("small graph fits");
        let second = generate(&config, &mut SmallRng::seed_from_u64(seed)).expect("small graph fits");
        prop_assert_eq!(first, second);
    }
}
