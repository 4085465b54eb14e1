//! Degree histogram with constant-time bucket moves.
//!
//! Every vertex lives in exactly one bucket, the one indexed by its current
//! degree. A vertex -> slot index lets [`DegreeTracker::increment`] detach a
//! vertex with `swap_remove` and patch the moved neighbour in O(1).

use crate::{VertexId, error::GenerationError, error::Result};

/// Tracks the degree of vertices `1..=N` and buckets them by degree.
///
/// # Examples
/// ```
/// use kauwhata_core::DegreeTracker;
///
/// let mut tracker = DegreeTracker::try_new(3)?;
/// assert_eq!(tracker.bucket_members(0).len(), 3);
/// tracker.increment(2);
/// assert_eq!(tracker.degree_of(2), 1);
/// assert_eq!(tracker.bucket_members(1), &[2]);
/// # Ok::<(), kauwhata_core::GenerationError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DegreeTracker {
    degrees: Vec<usize>,
    positions: Vec<usize>,
    buckets: Vec<Vec<VertexId>>,
}

impl DegreeTracker {
    /// Creates a tracker with every vertex in bucket zero.
    ///
    /// # Errors
    /// Returns [`GenerationError::CapacityExceeded`] when the per-vertex
    /// tables cannot be allocated.
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        let degrees = zeroed(vertex_count, "degree table")?;
        let mut positions = reserve(vertex_count, "position index")?;
        let mut bucket = reserve(vertex_count, "degree bucket")?;
        for (slot, vertex) in (1..=vertex_count).enumerate() {
            positions.push(slot);
            bucket.push(vertex);
        }
        Ok(Self {
            degrees,
            positions,
            buckets: vec![bucket],
        })
    }

    /// Number of tracked vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.degrees.len()
    }

    /// Current degree of `vertex`; `0` for ids outside `1..=N`.
    #[must_use]
    pub fn degree_of(&self, vertex: VertexId) -> usize {
        slot(vertex)
            .and_then(|index| self.degrees.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Vertices currently at `degree`, in no particular order.
    #[must_use]
    pub fn bucket_members(&self, degree: usize) -> &[VertexId] {
        self.buckets.get(degree).map_or(&[], Vec::as_slice)
    }

    /// One past the highest degree any vertex has reached.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Raises the degree of `vertex` by one and moves it to the next bucket.
    ///
    /// Returns `false`, leaving the tracker untouched, when `vertex` is not
    /// tracked.
    pub fn increment(&mut self, vertex: VertexId) -> bool {
        let Some(index) = slot(vertex).filter(|&index| index < self.degrees.len()) else {
            return false;
        };
        let (Some(degree), Some(position)) =
            (self.degrees.get(index).copied(), self.positions.get(index).copied())
        else {
            return false;
        };
        if !self.detach(degree, position) {
            return false;
        }

        let next = degree + 1;
        if self.buckets.len() <= next {
            self.buckets.resize_with(next + 1, Vec::new);
        }
        let Some(bucket) = self.buckets.get_mut(next) else {
            return false;
        };
        let new_position = bucket.len();
        bucket.push(vertex);
        if let Some(entry) = self.degrees.get_mut(index) {
            *entry = next;
        }
        if let Some(entry) = self.positions.get_mut(index) {
            *entry = new_position;
        }
        true
    }

    fn detach(&mut self, degree: usize, position: usize) -> bool {
        let Some(bucket) = self.buckets.get_mut(degree) else {
            return false;
        };
        if position >= bucket.len() {
            return false;
        }
        bucket.swap_remove(position);
        if let Some(&moved) = bucket.get(position)
            && let Some(entry) = slot(moved).and_then(|index| self.positions.get_mut(index))
        {
            *entry = position;
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let mut seen = 0;
        for (degree, bucket) in self.buckets.iter().enumerate() {
            for (position, &vertex) in bucket.iter().enumerate() {
                assert_eq!(self.degree_of(vertex), degree, "vertex {vertex} in wrong bucket");
                let index = slot(vertex).expect("bucketed vertices are one-based");
                assert_eq!(self.positions[index], position, "stale position for {vertex}");
                seen += 1;
            }
        }
        assert_eq!(seen, self.vertex_count(), "every vertex sits in one bucket");
    }
}

const fn slot(vertex: VertexId) -> Option<usize> {
    vertex.checked_sub(1)
}

fn reserve<T>(len: usize, structure: &'static str) -> Result<Vec<T>> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .map_err(|_| GenerationError::CapacityExceeded {
            structure,
            requested: len,
        })?;
    Ok(values)
}

fn zeroed(len: usize, structure: &'static str) -> Result<Vec<usize>> {
    let mut values = reserve(len, structure)?;
    values.resize(len, 0);
    Ok(values)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::suite_proptest_config;

    #[rstest]
    fn starts_with_every_vertex_at_zero() {
        let tracker = DegreeTracker::try_new(5).expect("small tracker fits");
        let mut members = tracker.bucket_members(0).to_vec();
        members.sort_unstable();
        assert_eq!(members, vec![1, 2, 3, 4, 5]);
        assert_eq!(tracker.bucket_count(), 1);
        tracker.assert_consistent();
    }

    #[rstest]
    fn empty_tracker_has_empty_bucket() {
        let tracker = DegreeTracker::try_new(0).expect("empty tracker fits");
        assert!(tracker.bucket_members(0).is_empty());
        assert!(tracker.bucket_members(3).is_empty());
    }

    #[rstest]
    fn increment_moves_vertex_and_patches_neighbour() {
        let mut tracker = DegreeTracker::try_new(4).expect("small tracker fits");
        assert!(tracker.increment(1));
        assert!(tracker.increment(1));
        assert!(tracker.increment(3));
        assert_eq!(tracker.degree_of(1), 2);
        assert_eq!(tracker.degree_of(3), 1);
        assert_eq!(tracker.bucket_members(2), &[1]);
        assert_eq!(tracker.bucket_members(1), &[3]);
        tracker.assert_consistent();
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    fn unknown_vertices_are_ignored(#[case] vertex: VertexId) {
        let mut tracker = DegreeTracker::try_new(4).expect("small tracker fits");
        assert!(!tracker.increment(vertex));
        assert_eq!(tracker.degree_of(vertex), 0);
        tracker.assert_consistent();
    }

    #[rstest]
    fn oversized_tracker_reports_capacity() {
        let err = DegreeTracker::try_new(usize::MAX).unwrap_err();
        assert!(matches!(err, GenerationError::CapacityExceeded { .. }));
    }

    proptest! {
        #![proptest_config(suite_proptest_config(128))]

        #[test]
        fn random_increments_keep_buckets_consistent(
            vertex_count in 1usize..40,
            picks in prop::collection::vec(0usize..40, 0..200),
        ) {
            let mut tracker = DegreeTracker::try_new(vertex_count).expect("small tracker fits");
            let mut expected = vec![0usize; vertex_count];
            for pick in picks {
                let vertex = pick % vertex_count + 1;
                prop_assert!(tracker.increment(vertex));
                expected[vertex - 1] += 1;
            }
            for (index, degree) in expected.iter().enumerate() {
                prop_assert_eq!(tracker.degree_of(index + 1), *degree);
            }
            tracker.assert_consistent();
        }
    }
}
