//! Target selection for a single origin vertex.
//!
//! Candidates come from the lowest-degree buckets first, which biases the
//! generator toward balanced degrees without rejection sampling over every
//! vertex.

use std::collections::HashSet;

use rand::Rng;

use crate::{
    VertexId, config::GeneratorConfig, degree::DegreeTracker, error::Result, ledger::UsedPairs,
    result::Branch, weight::WeightSampler,
};

/// Mutable per-run state threaded through every selection.
#[derive(Debug)]
pub(crate) struct GenerationState {
    pub(crate) tracker: DegreeTracker,
    pub(crate) ledger: UsedPairs,
}

impl GenerationState {
    pub(crate) fn try_new(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            tracker: DegreeTracker::try_new(vertex_count)?,
            ledger: UsedPairs::default(),
        })
    }
}

/// Read-only inputs shared by every selection in a run.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SelectionContext<'a> {
    pub(crate) config: &'a GeneratorConfig,
    pub(crate) sampler: &'a WeightSampler,
}

/// Whether the candidate pool is pruned with the used-pairs ledger.
const fn prunes_with_ledger(config: &GeneratorConfig) -> bool {
    config.is_directed() && config.is_multigraph()
}

/// Chooses up to `quota` targets for `origin`, updating degrees and the
/// ledger as edges are accepted.
pub(crate) fn select_targets<R: Rng + ?Sized>(
    origin: VertexId,
    quota: usize,
    context: SelectionContext<'_>,
    state: &mut GenerationState,
    rng: &mut R,
) -> Branch {
    let config = context.config;
    let max_edge = config.max_edge();
    let threshold = quota.min(max_edge.saturating_sub(state.tracker.degree_of(origin)));
    let mut branch = Branch::new();
    if threshold == 0 {
        return branch;
    }

    let mut pool = candidate_pool(&state.tracker, threshold, max_edge);
    if prunes_with_ledger(config)
        && let Some(used) = state.ledger.sources_into(origin)
    {
        let used: HashSet<VertexId> = used.iter().copied().collect();
        pool.retain(|candidate| !used.contains(candidate));
    }
    if !config.allows_self_loops() {
        pool.retain(|&candidate| candidate != origin);
    }
    pool.sort_unstable();

    let mut attempts = 0;
    while attempts < threshold && state.tracker.degree_of(origin) < max_edge && !pool.is_empty() {
        let position = rng.gen_range(0..pool.len());
        let Some(&target) = pool.get(position) else {
            break;
        };
        let target_degree = state.tracker.degree_of(target);
        let loop_overflows = target == origin && target_degree + 1 >= max_edge;
        if target_degree >= max_edge || loop_overflows {
            pool.swap_remove(position);
            continue;
        }

        if config.is_directed() {
            state.ledger.record(target, origin);
        }
        branch.push(target, context.sampler.sample(rng));
        attempts += 1;
        state.tracker.increment(origin);
        state.tracker.increment(target);
        if !config.is_multigraph() {
            pool.swap_remove(position);
        }
    }
    branch
}

/// Appends whole buckets in ascending degree order until the pool holds at
/// least `threshold` vertices.
fn candidate_pool(tracker: &DegreeTracker, threshold: usize, max_edge: usize) -> Vec<VertexId> {
    let last = max_edge.min(tracker.bucket_count().saturating_sub(1));
    let mut pool = Vec::new();
    for degree in 0..=last {
        pool.extend_from_slice(tracker.bucket_members(degree));
        if pool.len() >= threshold {
            break;
        }
    }
    pool
}
