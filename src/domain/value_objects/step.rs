//! Step value object - one tier of a royalty escalator
//!
//! - `Bounded`: a fixed number of copies at one rate
//! - `Unbounded`: the final tier, applies to every remaining copy

use serde::Serialize;

/// A single royalty tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Step {
    /// `copies` units (always > 0) sold at `rate` percent
    Bounded { rate: f64, copies: u64 },
    /// All remaining units sold at `rate` percent
    Unbounded { rate: f64 },
}

impl Step {
    /// Royalty rate in percent (8.0 means 8%)
    pub fn rate(&self) -> f64 {
        match self {
            Step::Bounded { rate, .. } | Step::Unbounded { rate } => *rate,
        }
    }

    /// Number of copies this tier spans; 0 for the unbounded tier
    pub fn copies(&self) -> u64 {
        match self {
            Step::Bounded { copies, .. } => *copies,
            Step::Unbounded { .. } => 0,
        }
    }

    /// Returns true for the final, open-ended tier
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Step::Unbounded { .. })
    }

    /// Royalty earned on `copies` units at `price`
    pub fn royalty(&self, price: f64, copies: u64) -> f64 {
        copies as f64 * price * self.rate() / 100.0
    }
}
