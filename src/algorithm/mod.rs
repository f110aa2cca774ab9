/// Layout-guided sorting pipeline and its output segments
pub mod sorter;
/// Individual placement stages over the remaining-count table
pub mod stages;
