//! Layout-guided ordering of a part multiset
//!
//! Sorting runs a fixed pipeline of stages against one remaining-count
//! table built from the input. The buried tail is reserved first, then the
//! front TOUGH block and the MOVE split, then the layout interleave and the
//! leftovers. Only the multiset of the input matters, so sorting is
//! deterministic and re-sorting a sorted sequence changes nothing.

use crate::algorithm::stages::{
    collect_leftover, extract_buried, extract_front_move, extract_front_tough, extract_rear_move,
    interleave_layout,
};
use crate::io::error::{PartInput, Result};
use crate::parts::kind::{PartKind, parse_part_list};
use crate::parts::layout::PartLayout;
use crate::parts::multiset::PartMultiset;
use tracing::{debug, trace};

/// The six blocks of a sorted sequence, in output order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedSegments {
    /// Every TOUGH part
    pub front_tough: Vec<PartKind>,
    /// The larger half of the MOVE parts left after burying
    pub front_move: Vec<PartKind>,
    /// Round-robin repetition of the layout template
    pub interleaved: Vec<PartKind>,
    /// Parts the layout never reached, grouped in canonical order
    pub leftover: Vec<PartKind>,
    /// Remaining MOVE parts when no ranged attack is present
    pub rear_move: Vec<PartKind>,
    /// One reserved instance per applicable kind
    pub buried: Vec<PartKind>,
}

impl SortedSegments {
    /// Total number of parts across all segments
    pub fn len(&self) -> usize {
        self.front_tough.len()
            + self.front_move.len()
            + self.interleaved.len()
            + self.leftover.len()
            + self.rear_move.len()
            + self.buried.len()
    }

    /// Test if every segment is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenate the segments into the final sequence
    pub fn into_sequence(self) -> Vec<PartKind> {
        let mut sequence = Vec::with_capacity(self.len());
        sequence.extend(self.front_tough);
        sequence.extend(self.front_move);
        sequence.extend(self.interleaved);
        sequence.extend(self.leftover);
        sequence.extend(self.rear_move);
        sequence.extend(self.buried);
        sequence
    }
}

/// Orders part multisets according to one layout
#[derive(Debug, Clone, Copy)]
pub struct PartSorter<'a> {
    layout: &'a PartLayout,
}

impl<'a> PartSorter<'a> {
    /// Create a sorter guided by `layout`
    pub const fn new(layout: &'a PartLayout) -> Self {
        Self { layout }
    }

    /// The layout guiding this sorter
    pub const fn layout(&self) -> &'a PartLayout {
        self.layout
    }

    /// Run the pipeline and return each segment separately
    pub fn segments(&self, parts: &[PartKind]) -> SortedSegments {
        let mut remaining = PartMultiset::from_parts(parts);
        let has_ranged_attack = remaining.count(PartKind::RangedAttack) > 0;
        trace!(
            parts = parts.len(),
            layout = self.layout.len(),
            has_ranged_attack,
            "Sorting parts"
        );

        let buried = extract_buried(&mut remaining, self.layout);
        let front_tough = extract_front_tough(&mut remaining);
        let front_move = extract_front_move(&mut remaining);
        let rear_move = extract_rear_move(&mut remaining, has_ranged_attack);
        let interleaved = interleave_layout(&mut remaining, self.layout, has_ranged_attack);
        let leftover = collect_leftover(&mut remaining);
        debug_assert!(remaining.is_empty());

        let segments = SortedSegments {
            front_tough,
            front_move,
            interleaved,
            leftover,
            rear_move,
            buried,
        };
        debug!(
            front_tough = segments.front_tough.len(),
            front_move = segments.front_move.len(),
            interleaved = segments.interleaved.len(),
            leftover = segments.leftover.len(),
            rear_move = segments.rear_move.len(),
            buried = segments.buried.len(),
            "Sorted parts"
        );
        segments
    }

    /// Order `parts` into a single sequence
    ///
    /// The result holds exactly the input multiset.
    pub fn sort(&self, parts: &[PartKind]) -> Vec<PartKind> {
        self.segments(parts).into_sequence()
    }
}

/// Order `parts` according to `layout`
pub fn sort_parts(parts: &[PartKind], layout: &PartLayout) -> Vec<PartKind> {
    PartSorter::new(layout).sort(parts)
}

/// Order part tokens according to layout tokens
///
/// Both inputs are validated in full before anything is sorted.
///
/// # Errors
///
/// Returns `InvalidPartKind` for the first unrecognized token in `parts`,
/// or failing that in `layout`
pub fn sort_part_names<P, L>(parts: &[P], layout: &[L]) -> Result<Vec<PartKind>>
where
    P: AsRef<str>,
    L: AsRef<str>,
{
    let parts = parse_part_list(parts, PartInput::Parts)?;
    let layout = PartLayout::parse(layout)?;
    Ok(sort_parts(&parts, &layout))
}
