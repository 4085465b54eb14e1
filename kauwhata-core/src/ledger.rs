//! Used-pairs ledger for directed generation.

use std::collections::HashMap;

use crate::VertexId;

/// Records, per target, the origins that already created an edge into it.
///
/// # Examples
/// ```
/// use kauwhata_core::UsedPairs;
///
/// let mut ledger = UsedPairs::default();
/// ledger.record(3, 1);
/// ledger.record(3, 2);
/// assert_eq!(ledger.sources_into(3), Some(&[1, 2][..]));
/// assert_eq!(ledger.sources_into(1), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UsedPairs {
    sources: HashMap<VertexId, Vec<VertexId>>,
}

impl UsedPairs {
    /// Notes that `origin` created an edge into `target`.
    pub fn record(&mut self, target: VertexId, origin: VertexId) {
        self.sources.entry(target).or_default().push(origin);
    }

    /// Origins recorded against `target`, in insertion order.
    #[must_use]
    pub fn sources_into(&self, target: VertexId) -> Option<&[VertexId]> {
        self.sources.get(&target).map(Vec::as_slice)
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
