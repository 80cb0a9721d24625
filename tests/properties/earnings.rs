//! Property tests for the earnings calculation.

use proptest::prelude::*;

use compareoffers::{calc_earnings, parse_offer, Comparison, SalesLevels};

use crate::strategies::{offer_parts, price};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Selling more copies never earns less.
    #[test]
    fn property_earnings_never_decrease(
        parts in offer_parts(),
        price in price(),
        copies in 0u64..200_000,
        extra in 0u64..50_000,
    ) {
        let offer = parse_offer(&parts.notation()).unwrap();
        let fewer = calc_earnings(&offer, price, copies);
        let more = calc_earnings(&offer, price, copies + extra);
        prop_assert!(fewer <= more, "{} copies earned {}, {} copies earned {}", copies, fewer, copies + extra, more);
    }

    /// PROPERTY: Earnings never fall below the advance.
    #[test]
    fn property_advance_is_a_floor(
        parts in offer_parts(),
        price in price(),
        copies in 0u64..200_000,
    ) {
        let offer = parse_offer(&parts.notation()).unwrap();
        prop_assert!(calc_earnings(&offer, price, copies) >= offer.advance());
    }

    /// PROPERTY: Without sales an offer pays exactly its advance.
    #[test]
    fn property_zero_sales_pays_advance(parts in offer_parts(), price in price()) {
        let offer = parse_offer(&parts.notation()).unwrap();
        prop_assert_eq!(calc_earnings(&offer, price, 0), offer.advance());
    }

    /// PROPERTY: Past the last threshold each copy adds the last rate's share.
    #[test]
    fn property_open_tier_slope(
        parts in offer_parts(),
        price in price(),
        beyond in 1u64..100_000,
    ) {
        let mut parts = parts;
        parts.advance_cents = 0;
        let offer = parse_offer(&parts.notation()).unwrap();
        let start = parts.last_threshold();

        let base = calc_earnings(&offer, price, start);
        let later = calc_earnings(&offer, price, start + beyond);
        let expected = beyond as f64 * price * f64::from(parts.last_rate) / 100.0;
        let tolerance = 1e-6 * later.max(1.0);
        prop_assert!(
            ((later - base) - expected).abs() <= tolerance,
            "slope mismatch: got {}, expected {}", later - base, expected
        );
    }

    /// PROPERTY: At each cumulative threshold earnings are exactly the closed tiers' royalties.
    #[test]
    fn property_tier_boundary_exact(parts in offer_parts(), price in price()) {
        let mut parts = parts;
        parts.advance_cents = 0;
        let offer = parse_offer(&parts.notation()).unwrap();

        let mut closed = 0.0;
        let mut previous = 0u64;
        for &(rate, threshold) in &parts.bounded {
            let copies = threshold - previous;
            closed += copies as f64 * price * f64::from(rate) / 100.0;
            previous = threshold;
            prop_assert_eq!(
                calc_earnings(&offer, price, threshold),
                closed,
                "at threshold {}", threshold
            );
        }
    }

    /// PROPERTY: Every comparison row holds both offers' earnings and their difference.
    #[test]
    fn property_comparison_rows_match_earnings(
        first in offer_parts(),
        second in offer_parts(),
        price in price(),
        levels in proptest::collection::vec(0u64..150_000, 2..10),
    ) {
        let a = parse_offer(&first.notation()).unwrap();
        let b = parse_offer(&second.notation()).unwrap();
        let levels = SalesLevels::from_levels(levels).unwrap();
        let comparison = Comparison::build(&a, &b, price, &levels);

        prop_assert_eq!(comparison.rows.len(), levels.len());
        for (row, &sales) in comparison.rows.iter().zip(levels.iter()) {
            prop_assert_eq!(row.sales, sales);
            prop_assert_eq!(row.first, calc_earnings(&a, price, sales));
            prop_assert_eq!(row.second, calc_earnings(&b, price, sales));
            prop_assert_eq!(row.difference, row.second - row.first);
        }
    }
}
