//! Companion record carrying a part list with externally computed fields

use crate::algorithm::sorter::sort_parts;
use crate::parts::kind::PartKind;
use crate::parts::layout::PartLayout;

/// A part list together with its affordability and cost
///
/// `unaffordable` and `cost` are filled in by whatever priced the parts;
/// nothing in this crate computes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartSummary {
    /// True if the parts could not be afforded
    pub unaffordable: bool,
    /// Total cost of the parts
    pub cost: u32,
    /// The parts themselves
    pub parts: Vec<PartKind>,
}

impl PartSummary {
    /// Create an empty summary: affordable, zero cost, no parts
    pub const fn new() -> Self {
        Self {
            unaffordable: false,
            cost: 0,
            parts: Vec::new(),
        }
    }

    /// Create a summary holding `parts` with no cost recorded
    pub const fn from_parts(parts: Vec<PartKind>) -> Self {
        Self {
            unaffordable: false,
            cost: 0,
            parts,
        }
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Test if there are no parts
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Copy of this summary with its parts ordered by `layout`
    ///
    /// Flag and cost are carried over untouched.
    #[must_use]
    pub fn sorted(&self, layout: &PartLayout) -> Self {
        Self {
            unaffordable: self.unaffordable,
            cost: self.cost,
            parts: sort_parts(&self.parts, layout),
        }
    }
}
