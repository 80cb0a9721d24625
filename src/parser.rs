//! Offer notation parser
//!
//! Turns `ADVANCE__RATE-UNTIL_[...]_RATE` (e.g. `1500__7-2000_8-4000_9`) into an
//! [`Offer`]. `UNTIL` is a cumulative copy count; each step stores the number of
//! copies between its threshold and the previous one.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::Offer;
use crate::domain::value_objects::Step;
use crate::error::{EscalatorViolation, OfferError, OfferResult};

/// Separates the advance from the escalator
const ADVANCE_DELIMITER: &str = "__";

/// Separates escalator tiers
const TIER_DELIMITER: char = '_';

/// Separates a tier's rate from its threshold
const THRESHOLD_DELIMITER: char = '-';

/// Human-readable description of the notation, shown in help and error hints
pub const OFFER_PATTERN: &str =
    "ADVANCE__RATE-UNTIL_[...]_RATE (for example 1500__7-2000_8-4000_9)";

/// Parse an offer string.
///
/// Fails on the first malformed token; no partial offer is returned.
///
/// # Example
/// ```
/// use compareoffers::parser::parse_offer;
///
/// let offer = parse_offer("1500__7-2000_8-4000_9").unwrap();
/// assert_eq!(offer.advance(), 1500.0);
/// assert_eq!(offer.escalator().len(), 3);
/// ```
pub fn parse_offer(raw: &str) -> OfferResult<Offer> {
    let (advance_literal, escalator_literal) =
        raw.split_once(ADVANCE_DELIMITER)
            .ok_or_else(|| OfferError::InvalidEscalator {
                literal: raw.to_string(),
                violation: EscalatorViolation::MissingSeparator,
            })?;

    let advance = parse_amount(advance_literal).ok_or_else(|| OfferError::InvalidAdvance {
        literal: advance_literal.to_string(),
    })?;

    let tiers: Vec<&str> = escalator_literal.split(TIER_DELIMITER).collect();
    let mut escalator = Vec::with_capacity(tiers.len());
    let mut last_threshold = 0u64;
    let mut last_rate = f64::NEG_INFINITY;

    for (i, tier) in tiers.iter().enumerate() {
        let (rate_literal, threshold_literal) = match tier.split_once(THRESHOLD_DELIMITER) {
            Some((rate, threshold)) => (rate, Some(threshold)),
            None => (*tier, None),
        };

        let rate = parse_amount(rate_literal).ok_or_else(|| OfferError::InvalidRate {
            literal: rate_literal.to_string(),
        })?;
        if rate < last_rate {
            return Err(OfferError::InvalidEscalator {
                literal: rate_literal.to_string(),
                violation: EscalatorViolation::RateDecreased {
                    previous: last_rate,
                    rate,
                },
            });
        }
        last_rate = rate;

        if i == tiers.len() - 1 {
            if let Some(ignored) = threshold_literal {
                tracing::debug!(threshold = ignored, "ignoring threshold on last tier");
            }
            escalator.push(Step::Unbounded { rate });
            break;
        }

        let threshold_literal = threshold_literal.unwrap_or_default();
        let threshold = parse_threshold(threshold_literal).ok_or_else(|| {
            OfferError::InvalidCopies {
                literal: threshold_literal.to_string(),
            }
        })?;
        if threshold <= last_threshold {
            return Err(OfferError::InvalidEscalator {
                literal: threshold_literal.to_string(),
                violation: EscalatorViolation::ThresholdNotIncreasing {
                    previous: last_threshold,
                    threshold,
                },
            });
        }

        escalator.push(Step::Bounded {
            rate,
            copies: threshold - last_threshold,
        });
        last_threshold = threshold;
    }

    Ok(Offer::from_parts(advance, escalator))
}

/// Non-negative, finite decimal
fn parse_amount(literal: &str) -> Option<f64> {
    literal
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Plain unsigned integer, no sign
fn parse_threshold(literal: &str) -> Option<u64> {
    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    literal.parse().ok()
}

/// Strict notation accepted on the command line.
///
/// Advance up to six integer digits, rates one or two, thresholds one to six,
/// and no threshold on the last tier. Rates, the last one included, may carry
/// up to two decimals.
const NOTATION_REGEX: &str =
    r"^[0-9]{0,6}(\.[0-9]{1,2})?__([0-9]{1,2}(\.[0-9]{1,2})?-[0-9]{1,6}_)*[0-9]{1,2}(\.[0-9]{1,2})?$";

static NOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NOTATION_REGEX).expect("notation pattern compiles"));

/// Strict notation check used by the command line before parsing.
///
/// Rate ordering and threshold growth are left to [`parse_offer`].
pub fn is_valid_notation(raw: &str) -> bool {
    NOTATION.is_match(raw)
}
