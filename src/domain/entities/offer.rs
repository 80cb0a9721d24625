//! Offer entity - an advance plus a royalty escalator

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::value_objects::Step;
use crate::error::{EscalatorViolation, OfferError, OfferResult};

/// A publishing offer
///
/// Invariants (enforced by [`Offer::new`] and the parser):
/// - `advance` is finite and `>= 0`
/// - the escalator is non-empty and only its last step is unbounded
/// - rates never decrease from one step to the next
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offer {
    advance: f64,
    escalator: Vec<Step>,
}

impl Offer {
    /// Build an offer from already-split parts, checking every invariant.
    pub fn new(advance: f64, escalator: Vec<Step>) -> OfferResult<Self> {
        if !advance.is_finite() || advance < 0.0 {
            return Err(OfferError::InvalidAdvance {
                literal: advance.to_string(),
            });
        }

        let Some(last) = escalator.last() else {
            return Err(OfferError::InvalidEscalator {
                literal: String::new(),
                violation: EscalatorViolation::Empty,
            });
        };
        if !last.is_unbounded() {
            return Err(OfferError::InvalidEscalator {
                literal: last.rate().to_string(),
                violation: EscalatorViolation::UnboundedBeforeEnd,
            });
        }

        let mut last_rate = f64::NEG_INFINITY;
        let mut threshold = 0u64;
        for (i, step) in escalator.iter().enumerate() {
            let rate = step.rate();
            if !rate.is_finite() || rate < 0.0 {
                return Err(OfferError::InvalidRate {
                    literal: rate.to_string(),
                });
            }
            if rate < last_rate {
                return Err(OfferError::InvalidEscalator {
                    literal: rate.to_string(),
                    violation: EscalatorViolation::RateDecreased {
                        previous: last_rate,
                        rate,
                    },
                });
            }
            last_rate = rate;

            let is_last = i + 1 == escalator.len();
            if !is_last && (step.is_unbounded() || step.copies() == 0) {
                return Err(OfferError::InvalidEscalator {
                    literal: rate.to_string(),
                    violation: EscalatorViolation::UnboundedBeforeEnd,
                });
            }

            threshold = threshold.checked_add(step.copies()).ok_or_else(|| {
                OfferError::InvalidEscalator {
                    literal: step.copies().to_string(),
                    violation: EscalatorViolation::ThresholdOverflow {
                        previous: threshold,
                        copies: step.copies(),
                    },
                }
            })?;
        }

        Ok(Self::from_parts(advance, escalator))
    }

    /// Parser-side constructor; the caller has already validated the parts.
    pub(crate) fn from_parts(advance: f64, escalator: Vec<Step>) -> Self {
        Self { advance, escalator }
    }

    /// Guaranteed payment, independent of sales
    pub fn advance(&self) -> f64 {
        self.advance
    }

    /// Royalty tiers in ascending threshold order
    pub fn escalator(&self) -> &[Step] {
        &self.escalator
    }

    /// Total earnings at `price` per copy after `copies_sold` copies.
    ///
    /// See [`crate::domain::services::calc_earnings`].
    pub fn earnings(&self, price: f64, copies_sold: u64) -> f64 {
        crate::domain::services::calc_earnings(self, price, copies_sold)
    }

    /// Cumulative thresholds of the bounded steps, in order
    pub fn thresholds(&self) -> Vec<u64> {
        self.escalator
            .iter()
            .filter(|s| !s.is_unbounded())
            .scan(0u64, |acc, s| {
                *acc += s.copies();
                Some(*acc)
            })
            .collect()
    }
}

impl FromStr for Offer {
    type Err = OfferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_offer(s)
    }
}

/// Renders the canonical notation, e.g. `1500__7-2000_8-4000_9`
impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}__", self.advance)?;
        let mut threshold = 0u64;
        for (i, step) in self.escalator.iter().enumerate() {
            if i > 0 {
                f.write_str("_")?;
            }
            match step {
                Step::Bounded { rate, copies } => {
                    threshold += copies;
                    write!(f, "{}-{}", rate, threshold)?;
                }
                Step::Unbounded { rate } => write!(f, "{}", rate)?,
            }
        }
        Ok(())
    }
}
