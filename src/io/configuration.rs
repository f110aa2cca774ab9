//! Sorting constants and runtime configuration defaults

/// Number of distinct part kinds
pub const PART_KIND_COUNT: usize = 8;

// Token list settings
/// Delimiter accepted between tokens in a single argument
pub const LIST_DELIMITER: char = ',';
/// Separator placed between kinds when printing a sequence
pub const OUTPUT_SEPARATOR: &str = ",";

// Logging filters used when `RUST_LOG` is unset
/// Filter applied by default
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filter applied with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "debug";
