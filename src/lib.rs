//! Layout-guided ordering of creep body parts
//!
//! Takes an unordered multiset of part kinds and a layout template and
//! produces a single deterministic sequence: TOUGH first, MOVE split around
//! a round-robin repetition of the layout, and one reserved instance of the
//! layout's kinds buried at the end.

#![forbid(unsafe_code)]

/// Sorting pipeline and its placement stages
pub mod algorithm;
/// Command-line front end, configuration, and error handling
pub mod io;
/// Part kinds, layouts, remaining counts, and summaries
pub mod parts;

pub use algorithm::sorter::{PartSorter, SortedSegments, sort_part_names, sort_parts};
pub use io::error::{PartError, Result};
pub use parts::{PartKind, PartLayout, PartMultiset, PartSummary};
