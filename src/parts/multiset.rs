//! Remaining-count table shared by every sorting stage

use crate::io::configuration::PART_KIND_COUNT;
use crate::parts::kind::PartKind;

/// Per-kind counts of parts not yet emitted
///
/// Built once per sort from the input parts and decremented in place as
/// stages consume them. Counts cannot underflow: every removal is clamped
/// to what remains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartMultiset {
    counts: [usize; PART_KIND_COUNT],
}

impl PartMultiset {
    /// Create a table with every count at zero
    pub const fn new() -> Self {
        Self {
            counts: [0; PART_KIND_COUNT],
        }
    }

    /// Count each kind in `parts`
    ///
    /// Only the multiset matters; the order of `parts` is discarded here.
    pub fn from_parts(parts: &[PartKind]) -> Self {
        parts.iter().copied().collect()
    }

    /// Add one instance of `kind`
    pub fn add(&mut self, kind: PartKind) {
        if let Some(count) = self.counts.get_mut(kind.index()) {
            *count += 1;
        }
    }

    /// Remaining instances of `kind`
    pub fn count(&self, kind: PartKind) -> usize {
        self.counts.get(kind.index()).copied().unwrap_or(0)
    }

    /// Total instances remaining across all kinds
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Test if nothing remains
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Remove up to `amount` instances of `kind`
    ///
    /// Returns how many were actually removed
    pub fn take(&mut self, kind: PartKind, amount: usize) -> usize {
        let Some(count) = self.counts.get_mut(kind.index()) else {
            return 0;
        };
        let taken = amount.min(*count);
        *count -= taken;
        taken
    }

    /// Remove one instance of `kind` if any remain
    pub fn take_one(&mut self, kind: PartKind) -> bool {
        self.take(kind, 1) == 1
    }

    /// Remove every remaining instance of `kind`
    pub fn take_all(&mut self, kind: PartKind) -> usize {
        self.take(kind, usize::MAX)
    }

    /// Iterate `(kind, count)` pairs in canonical order, zeros included
    pub fn entries(&self) -> impl Iterator<Item = (PartKind, usize)> + '_ {
        PartKind::ALL.into_iter().map(|kind| (kind, self.count(kind)))
    }
}

impl FromIterator<PartKind> for PartMultiset {
    fn from_iter<I: IntoIterator<Item = PartKind>>(iter: I) -> Self {
        let mut multiset = Self::new();
        for part in iter {
            multiset.add(part);
        }
        multiset
    }
}
