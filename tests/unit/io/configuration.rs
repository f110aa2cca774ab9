//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use partsort::io::configuration::{
        DEFAULT_LOG_FILTER, LIST_DELIMITER, OUTPUT_SEPARATOR, PART_KIND_COUNT, VERBOSE_LOG_FILTER,
    };
    use partsort::parts::kind::PartKind;

    // Tests the kind count matches the closed set of kinds
    // Verified by adding a ninth kind
    #[test]
    fn test_part_kind_count() {
        assert_eq!(PART_KIND_COUNT, 8);
        assert_eq!(PartKind::ALL.len(), PART_KIND_COUNT);
    }

    // Tests list delimiter and output separator agree
    // Verified by changing the output separator to a space
    #[test]
    fn test_separators_round_trip() {
        assert_eq!(LIST_DELIMITER.to_string(), OUTPUT_SEPARATOR);
    }

    // Tests verbose logging is more detailed than the default
    // Verified by setting both filters to warn
    #[test]
    fn test_log_filters() {
        assert_eq!(DEFAULT_LOG_FILTER, "warn");
        assert_eq!(VERBOSE_LOG_FILTER, "debug");
    }
}
