//! Shared test utilities for `kauwhata-core`.

use std::collections::HashSet;

use kauwhata_test_support::profile::ProptestRunProfile;
use proptest::{prelude::*, test_runner::Config as ProptestConfig};

use crate::{
    config::{GeneratorConfig, RawConfig, normalize},
    result::GeneratedGraph,
};

/// Builds a proptest configuration from the shared run profile so every
/// suite honours `KAUWHATA_PBT_CASES` and `KAUWHATA_PBT_FORK`.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Raw configurations small enough to generate quickly, with every flag
/// combination and occasionally invalid codes.
pub(crate) fn small_raw_config() -> impl Strategy<Value = RawConfig> {
    (
        (-40i64..40, -8i64..12, -8i64..12),
        (-20.0f64..20.0, -20.0f64..20.0, any::<bool>()),
        (0i64..3, 0i64..3, 0i64..3, 0i64..3, 0i64..17),
    )
        .prop_map(
            |(
                (vertices, min_edge, max_edge),
                (min_weight, max_weight, whole),
                (signed, directed, self_loop, multigraph, output_format),
            )| {
                let (min_weight, max_weight) = if whole {
                    (min_weight.trunc(), max_weight.trunc())
                } else {
                    (min_weight, max_weight)
                };
                RawConfig {
                    vertices,
                    min_edge,
                    max_edge,
                    min_weight,
                    max_weight,
                    signed,
                    directed,
                    self_loop,
                    multigraph,
                    output_format,
                }
            },
        )
}

/// Normalised counterpart of [`small_raw_config`].
pub(crate) fn small_config() -> impl Strategy<Value = GeneratorConfig> {
    small_raw_config().prop_map(|raw| normalize(&raw))
}

/// Returns `true` when some origin lists the same target twice.
pub(crate) fn has_duplicate_targets(graph: &GeneratedGraph) -> bool {
    graph.branches().any(|(_, branch)| {
        let mut seen = HashSet::new();
        branch.targets().iter().any(|target| !seen.insert(*target))
    })
}
