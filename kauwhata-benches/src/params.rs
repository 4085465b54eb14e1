//! Benchmark parameter types.

use std::fmt;

use kauwhata_core::{ConfigBuilder, GeneratorConfig, Multiplicity, SelfLoops};
use rand::{SeedableRng, rngs::SmallRng};

/// Seed shared by every benchmark so runs are comparable.
pub const SEED: u64 = 42;

/// Parameters for a generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GenerateBenchParams {
    /// Number of vertices.
    pub vertices: usize,
    /// Lower bound on edges drawn per vertex.
    pub min_edge: usize,
    /// Upper bound on edges drawn per vertex.
    pub max_edge: usize,
    /// Whether repeated edges are allowed.
    pub multiplicity: Multiplicity,
}

/// Scenarios covering sparse and dense simple graphs plus a multigraph.
pub const SCENARIOS: &[GenerateBenchParams] = &[
    GenerateBenchParams {
        vertices: 1_000,
        min_edge: 1,
        max_edge: 4,
        multiplicity: Multiplicity::Simple,
    },
    GenerateBenchParams {
        vertices: 10_000,
        min_edge: 1,
        max_edge: 4,
        multiplicity: Multiplicity::Simple,
    },
    GenerateBenchParams {
        vertices: 2_000,
        min_edge: 10,
        max_edge: 50,
        multiplicity: Multiplicity::Simple,
    },
    GenerateBenchParams {
        vertices: 2_000,
        min_edge: 10,
        max_edge: 50,
        multiplicity: Multiplicity::Multigraph,
    },
];

impl GenerateBenchParams {
    /// Generator settings for this scenario with integer weights in `1..=100`.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        ConfigBuilder::new()
            .with_vertices(self.vertices)
            .with_edge_bounds(self.min_edge, self.max_edge)
            .with_weight_bounds(1.0, 100.0)
            .with_self_loops(SelfLoops::Allowed)
            .with_multiplicity(self.multiplicity)
            .build()
    }
}

impl fmt::Display for GenerateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},max={}", self.vertices, self.max_edge)?;
        if self.multiplicity == Multiplicity::Multigraph {
            f.write_str(",multi")?;
        }
        Ok(())
    }
}

/// Deterministic generator seeded with [`SEED`].
#[must_use]
pub fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(SEED)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "n=1000,max=4")]
    #[case(3, "n=2000,max=50,multi")]
    fn labels_identify_scenarios(#[case] index: usize, #[case] expected: &str) {
        let params = SCENARIOS.get(index).copied();
        assert_eq!(params.map(|p| p.to_string()).as_deref(), Some(expected));
    }

    #[rstest]
    fn configs_follow_parameters() {
        for params in SCENARIOS {
            let config = params.config();
            assert_eq!(config.vertices(), params.vertices);
            assert_eq!(config.min_edge(), params.min_edge);
            assert_eq!(config.max_edge(), params.max_edge);
            assert_eq!(config.multiplicity(), params.multiplicity);
        }
    }
}
