//! Shared generators for well-formed offers.

use proptest::prelude::*;

/// Notation parts: advance in cents, bounded tiers as (rate, cumulative
/// threshold), and the rate of the open-ended last tier.
#[derive(Debug, Clone)]
pub struct OfferParts {
    pub advance_cents: u64,
    pub bounded: Vec<(u32, u64)>,
    pub last_rate: u32,
}

impl OfferParts {
    pub fn advance(&self) -> f64 {
        self.advance_cents as f64 / 100.0
    }

    pub fn last_threshold(&self) -> u64 {
        self.bounded.last().map(|&(_, t)| t).unwrap_or(0)
    }

    /// Render in the notation the command line accepts
    pub fn notation(&self) -> String {
        let mut out = format!("{}__", self.advance());
        for (rate, threshold) in &self.bounded {
            out.push_str(&format!("{}-{}_", rate, threshold));
        }
        out.push_str(&self.last_rate.to_string());
        out
    }
}

/// Offers whose notation stays within the strict command-line format:
/// advance below a million, rates of at most two digits, thresholds of at
/// most six digits, rates non-decreasing and thresholds strictly increasing.
pub fn offer_parts() -> impl Strategy<Value = OfferParts> {
    (
        0u64..100_000_000,
        0u32..20,
        proptest::collection::vec((0u32..5, 1u64..20_000), 0..=5),
        0u32..5,
    )
        .prop_map(|(advance_cents, first_rate, steps, last_bump)| {
            let mut rate = first_rate;
            let mut threshold = 0u64;
            let mut bounded = Vec::with_capacity(steps.len());
            for (rate_bump, copies) in steps {
                rate += rate_bump;
                threshold += copies;
                bounded.push((rate, threshold));
            }
            OfferParts {
                advance_cents,
                bounded,
                last_rate: rate + last_bump,
            }
        })
}

/// Whole-unit prices keep the arithmetic in the properties exact enough
pub fn price() -> impl Strategy<Value = f64> {
    (0u32..200).prop_map(f64::from)
}
