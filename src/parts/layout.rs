//! Layout templates describing the preferred relative order of kinds

use crate::io::error::{PartInput, Result};
use crate::parts::kind::{PartKind, parse_part_list};
use crate::parts::summary::PartSummary;
use bitvec::prelude::*;

/// Ordered template of part kinds, possibly repeating
///
/// Read-only once built. The unique kinds keep first-occurrence order,
/// since that order decides the order of buried parts.
#[derive(Debug, Clone)]
pub struct PartLayout {
    parts: Vec<PartKind>,
    unique_kinds: Vec<PartKind>,
    membership: BitArray<[u8; 1]>,
}

impl PartLayout {
    /// Build a layout from its template
    pub fn new(parts: Vec<PartKind>) -> Self {
        let mut unique_kinds = Vec::new();
        let mut membership = BitArray::<[u8; 1]>::ZERO;
        for &kind in &parts {
            if membership.get(kind.index()).as_deref() == Some(&false) {
                membership.set(kind.index(), true);
                unique_kinds.push(kind);
            }
        }
        Self {
            parts,
            unique_kinds,
            membership,
        }
    }

    /// Build a layout from tokens
    ///
    /// # Errors
    ///
    /// Returns `InvalidPartKind` tagged as layout input if any token is
    /// not a recognized kind
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        parse_part_list(tokens, PartInput::Layout).map(Self::new)
    }

    /// The template in order, repeats included
    pub fn parts(&self) -> &[PartKind] {
        &self.parts
    }

    /// Distinct kinds in first-occurrence order
    pub fn unique_kinds(&self) -> &[PartKind] {
        &self.unique_kinds
    }

    /// Test if `kind` appears anywhere in the template
    pub fn contains(&self, kind: PartKind) -> bool {
        self.membership.get(kind.index()).as_deref() == Some(&true)
    }

    /// Length of the template
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Test if the template is empty
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

// Unique kinds and membership derive from the template
impl PartialEq for PartLayout {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
    }
}

impl Eq for PartLayout {}

impl Default for PartLayout {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<PartKind>> for PartLayout {
    fn from(parts: Vec<PartKind>) -> Self {
        Self::new(parts)
    }
}

impl From<&[PartKind]> for PartLayout {
    fn from(parts: &[PartKind]) -> Self {
        Self::new(parts.to_vec())
    }
}

impl From<&PartSummary> for PartLayout {
    fn from(summary: &PartSummary) -> Self {
        Self::new(summary.parts.clone())
    }
}
