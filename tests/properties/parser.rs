//! Property tests for the offer notation parser.

use proptest::prelude::*;

use compareoffers::{is_valid_notation, parse_offer, Offer};

use crate::strategies::offer_parts;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_offer` never panics on arbitrary input.
    #[test]
    fn property_parse_offer_never_panics(raw in "\\PC{0,64}") {
        let _ = parse_offer(&raw);
    }

    /// PROPERTY: `is_valid_notation` never panics on arbitrary input.
    #[test]
    fn property_notation_check_never_panics(raw in "\\PC{0,64}") {
        let _ = is_valid_notation(&raw);
    }

    /// PROPERTY: Near-miss inputs built from the notation alphabet never panic either.
    #[test]
    fn property_notation_alphabet_never_panics(raw in "[0-9._\\-]{0,40}") {
        let _ = parse_offer(&raw);
        let _ = is_valid_notation(&raw);
    }

    /// PROPERTY: Well-formed offers pass the strict check and parse.
    #[test]
    fn property_generated_offers_are_accepted(parts in offer_parts()) {
        let notation = parts.notation();
        prop_assert!(is_valid_notation(&notation), "rejected {}", notation);

        let offer = parse_offer(&notation).unwrap();
        prop_assert_eq!(offer.advance(), parts.advance());
        prop_assert_eq!(offer.escalator().len(), parts.bounded.len() + 1);
        let thresholds: Vec<u64> = parts.bounded.iter().map(|&(_, t)| t).collect();
        prop_assert_eq!(offer.thresholds(), thresholds);
    }

    /// PROPERTY: Only the last step of a parsed escalator is open-ended.
    #[test]
    fn property_only_last_step_unbounded(parts in offer_parts()) {
        let offer = parse_offer(&parts.notation()).unwrap();
        let (last, rest) = offer.escalator().split_last().unwrap();
        prop_assert!(last.is_unbounded());
        prop_assert!(rest.iter().all(|s| !s.is_unbounded() && s.copies() > 0));
    }

    /// PROPERTY: Display renders notation that parses back to the same offer.
    #[test]
    fn property_display_round_trips(parts in offer_parts()) {
        let offer = parse_offer(&parts.notation()).unwrap();
        let rendered = offer.to_string();
        let reparsed: Offer = rendered.parse().unwrap();
        prop_assert_eq!(reparsed, offer);
    }

    /// PROPERTY: Without the advance separator nothing parses.
    #[test]
    fn property_missing_separator_rejected(raw in "[0-9.\\-]{0,20}(_[0-9.\\-]{1,10})?") {
        prop_assert!(parse_offer(&raw).is_err());
        prop_assert!(!is_valid_notation(&raw));
    }
}
