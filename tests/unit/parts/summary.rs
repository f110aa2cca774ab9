//! Tests for the part summary record

#[cfg(test)]
mod tests {
    use partsort::parts::kind::PartKind;
    use partsort::parts::layout::PartLayout;
    use partsort::parts::summary::PartSummary;

    // Tests a new summary is affordable, free, and empty
    // Verified by initializing unaffordable to true
    #[test]
    fn test_new_summary() {
        let summary = PartSummary::new();
        assert!(!summary.unaffordable);
        assert_eq!(summary.cost, 0);
        assert!(summary.is_empty());
        assert_eq!(summary.len(), 0);
        assert_eq!(summary, PartSummary::default());
    }

    // Tests length follows the parts
    // Verified by returning the number of distinct kinds
    #[test]
    fn test_len() {
        let summary = PartSummary::from_parts(vec![PartKind::Move, PartKind::Move]);
        assert_eq!(summary.len(), 2);
        assert!(!summary.is_empty());
    }

    // Tests sorting reorders parts and keeps flag and cost
    // Verified by resetting cost in sorted
    #[test]
    fn test_sorted_keeps_fields() {
        let summary = PartSummary {
            unaffordable: true,
            cost: 350,
            parts: vec![PartKind::Move, PartKind::Work, PartKind::Tough],
        };
        let layout = PartLayout::new(vec![PartKind::Work, PartKind::Move]);

        let sorted = summary.sorted(&layout);

        assert!(sorted.unaffordable);
        assert_eq!(sorted.cost, 350);
        assert_eq!(
            sorted.parts,
            vec![PartKind::Tough, PartKind::Work, PartKind::Move]
        );
    }
}
