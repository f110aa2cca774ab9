//! Part data shapes
//!
//! This module contains the inputs and working state of a sort:
//! - The closed set of part kinds
//! - The remaining-count table
//! - Layout templates
//! - The companion summary record

/// Part kinds and token parsing
pub mod kind;
/// Layout templates with their ordered unique-kind set
pub mod layout;
/// Per-kind remaining counts
pub mod multiset;
/// Part list record with affordability and cost
pub mod summary;

pub use kind::PartKind;
pub use layout::PartLayout;
pub use multiset::PartMultiset;
pub use summary::PartSummary;
