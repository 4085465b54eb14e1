//! Generation orchestrator.
//!
//! Walks vertices in ascending order, draws a quota for each from the
//! remaining degree window and hands it to the target selector.

use rand::Rng;
use tracing::{Span, debug, field, instrument, trace};

use crate::{
    config::GeneratorConfig,
    degree::DegreeTracker,
    error::{GenerationError, Result},
    result::GeneratedGraph,
    selector::{GenerationState, SelectionContext, select_targets},
    weight::WeightSampler,
};

/// Generates a random graph that honours `config`.
///
/// Every vertex ends with a degree of at most `config.max_edge()`. Vertices
/// processed early aim for at least `config.min_edge()`; later vertices may
/// fall short when their candidates are already saturated.
///
/// # Errors
/// Returns [`GenerationError::CapacityExceeded`] when the per-run structures
/// cannot be allocated for `config.vertices()` vertices. No partial graph is
/// returned.
///
/// # Examples
/// ```
/// use kauwhata_core::{ConfigBuilder, generate};
/// use rand::rngs::mock::StepRng;
///
/// let config = ConfigBuilder::new()
///     .with_vertices(3)
///     .with_edge_bounds(2, 2)
///     .build();
/// let graph = generate(&config, &mut StepRng::new(0, 0))?;
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.degrees(), vec![2, 2, 2]);
/// # Ok::<(), kauwhata_core::GenerationError>(())
/// ```
#[instrument(
    name = "core.generate",
    err,
    skip(config, rng),
    fields(
        vertices = config.vertices(),
        min_edge = config.min_edge(),
        max_edge = config.max_edge(),
        directed = config.is_directed(),
        edges = field::Empty,
    ),
)]
pub fn generate<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<GeneratedGraph> {
    let vertex_count = config.vertices();
    let mut state = GenerationState::try_new(vertex_count)?;
    let mut branches = Vec::new();
    branches
        .try_reserve_exact(vertex_count)
        .map_err(|_| GenerationError::CapacityExceeded {
            structure: "branch table",
            requested: vertex_count,
        })?;

    let sampler = WeightSampler::new(config.weight_range(), config.sign());
    let context = SelectionContext {
        config,
        sampler: &sampler,
    };
    let mut quota = config.min_edge();
    for vertex in 1..=vertex_count {
        quota = next_quota(vertex, quota, config, &state.tracker, rng);
        let branch = select_targets(vertex, quota, context, &mut state, rng);
        trace!(vertex, quota, selected = branch.len(), "branch generated");
        branches.push(branch);
    }

    let graph = GeneratedGraph::from_branches(branches);
    Span::current().record("edges", graph.edge_count());
    debug!(edges = graph.edge_count(), "graph generated");
    Ok(graph)
}

/// Draws the quota for `vertex` from its remaining degree window, keeping
/// `previous` when the window is a single value or empty.
fn next_quota<R: Rng + ?Sized>(
    vertex: usize,
    previous: usize,
    config: &GeneratorConfig,
    tracker: &DegreeTracker,
    rng: &mut R,
) -> usize {
    let degree = tracker.degree_of(vertex);
    let lower = config.min_edge().saturating_sub(degree);
    let upper = config.max_edge().saturating_sub(degree);
    if upper > lower {
        rng.gen_range(lower..=upper)
    } else {
        previous
    }
}

#[cfg(test)]
mod property;
