//! Property tests for sales level lists.

use proptest::prelude::*;

use compareoffers::SalesLevels;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any comma list of two or more whole numbers parses, whitespace ignored.
    #[test]
    fn property_comma_lists_parse(
        levels in proptest::collection::vec(0u64..10_000_000, 2..12),
        padding in proptest::collection::vec(" {0,2}", 12),
    ) {
        let raw = levels
            .iter()
            .zip(padding.iter())
            .map(|(level, pad)| format!("{}{}{}", pad, level, pad))
            .collect::<Vec<_>>()
            .join(",");
        let parsed = SalesLevels::parse(&raw).unwrap();
        prop_assert_eq!(parsed.into_inner(), levels);
    }

    /// PROPERTY: Display output parses back to the same list.
    #[test]
    fn property_display_round_trips(
        levels in proptest::collection::vec(0u64..10_000_000, 2..12),
    ) {
        let original = SalesLevels::from_levels(levels).unwrap();
        let reparsed = SalesLevels::parse(&original.to_string()).unwrap();
        prop_assert_eq!(reparsed, original);
    }

    /// PROPERTY: A single number is never a valid list.
    #[test]
    fn property_single_level_rejected(level in 0u64..10_000_000) {
        prop_assert!(SalesLevels::parse(&level.to_string()).is_err());
    }
}
