//! Generation output types.

use crate::{VertexId, weight::Weight};

/// Targets chosen for one origin vertex with index-aligned weights.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Branch {
    targets: Vec<VertexId>,
    weights: Vec<Weight>,
}

impl Branch {
    /// Creates an empty branch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            targets: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Appends one edge to `target`.
    pub fn push(&mut self, target: VertexId, weight: Weight) {
        self.targets.push(target);
        self.weights.push(weight);
    }

    /// Chosen targets in selection order.
    #[must_use]
    pub fn targets(&self) -> &[VertexId] {
        &self.targets
    }

    /// Weights aligned with [`Branch::targets`].
    #[must_use]
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// Number of edges in the branch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` when no targets were chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterates `(target, weight)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.targets
            .iter()
            .copied()
            .zip(self.weights.iter().copied())
    }
}

impl FromIterator<(VertexId, Weight)> for Branch {
    fn from_iter<I: IntoIterator<Item = (VertexId, Weight)>>(iter: I) -> Self {
        let mut branch = Self::new();
        for (target, weight) in iter {
            branch.push(target, weight);
        }
        branch
    }
}

/// A single weighted edge of a [`GeneratedGraph`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Origin vertex.
    pub source: VertexId,
    /// Target vertex.
    pub target: VertexId,
    /// Edge weight.
    pub weight: Weight,
}

/// Adjacency produced by [`crate::generate`].
///
/// Branches are stored in ascending vertex order; branch `i` belongs to
/// vertex `i + 1`. The edge total always equals the sum of branch lengths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneratedGraph {
    branches: Vec<Branch>,
    edge_count: usize,
}

impl GeneratedGraph {
    /// Assembles a graph from branches for vertices `1..=branches.len()`.
    #[must_use]
    pub fn from_branches(branches: Vec<Branch>) -> Self {
        let edge_count = branches.iter().map(Branch::len).sum();
        Self {
            branches,
            edge_count,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.branches.len()
    }

    /// Total number of edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Branch owned by `vertex`, if it exists.
    #[must_use]
    pub fn branch(&self, vertex: VertexId) -> Option<&Branch> {
        vertex
            .checked_sub(1)
            .and_then(|index| self.branches.get(index))
    }

    /// Iterates `(vertex, branch)` pairs in ascending vertex order.
    pub fn branches(&self) -> impl Iterator<Item = (VertexId, &Branch)> + '_ {
        self.branches
            .iter()
            .enumerate()
            .map(|(index, branch)| (index + 1, branch))
    }

    /// Iterates every edge grouped by origin.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.branches().flat_map(|(source, branch)| {
            branch.edges().map(move |(target, weight)| Edge {
                source,
                target,
                weight,
            })
        })
    }

    /// Endpoint counts per vertex, index `i` holding vertex `i + 1`.
    ///
    /// A self-loop contributes two to its vertex.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.branches.len()];
        for edge in self.edges() {
            for vertex in [edge.source, edge.target] {
                if let Some(degree) = vertex
                    .checked_sub(1)
                    .and_then(|index| degrees.get_mut(index))
                {
                    *degree += 1;
                }
            }
        }
        degrees
    }
}
