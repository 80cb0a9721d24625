//! Error types for compareoffers
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for offer parsing and construction
pub type OfferResult<T> = Result<T, OfferError>;

/// Result type alias for driver and configuration operations
pub type CompareResult<T> = Result<T, CompareError>;

/// Why an escalator was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum EscalatorViolation {
    /// The advance and the escalator are not separated by `__`
    MissingSeparator,
    /// No steps at all
    Empty,
    /// A royalty rate is lower than the one before it
    RateDecreased { previous: f64, rate: f64 },
    /// A cumulative threshold is not above the one before it
    ThresholdNotIncreasing { previous: u64, threshold: u64 },
    /// An unbounded step appears before the last position, or a bounded step is last
    UnboundedBeforeEnd,
    /// The cumulative threshold no longer fits in a copy count
    ThresholdOverflow { previous: u64, copies: u64 },
}

impl std::fmt::Display for EscalatorViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "missing '__' between advance and escalator"),
            Self::Empty => write!(f, "escalator has no steps"),
            Self::RateDecreased { previous, rate } => write!(
                f,
                "rate {:.2} is lower than the previous rate {:.2}",
                rate, previous
            ),
            Self::ThresholdNotIncreasing {
                previous,
                threshold,
            } => write!(
                f,
                "previous threshold {} is not lower than new threshold {}",
                previous, threshold
            ),
            Self::UnboundedBeforeEnd => {
                write!(f, "only the last step may apply to all remaining copies")
            }
            Self::ThresholdOverflow { previous, copies } => write!(
                f,
                "threshold {} plus {} copies exceeds the largest copy count",
                previous, copies
            ),
        }
    }
}

/// Offer parsing errors. Each variant carries the offending literal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OfferError {
    /// Advance literal is not a non-negative number
    #[error("invalid advance {literal:?}")]
    InvalidAdvance { literal: String },

    /// Royalty rate literal is not a non-negative number
    #[error("invalid royalty rate {literal:?}")]
    InvalidRate { literal: String },

    /// Threshold literal is not an integer
    #[error("invalid number of copies {literal:?}")]
    InvalidCopies { literal: String },

    /// Escalator is well-formed token-wise but breaks an ordering rule
    #[error("invalid escalator {literal:?}: {violation}")]
    InvalidEscalator {
        literal: String,
        violation: EscalatorViolation,
    },
}

impl OfferError {
    /// The literal that caused the failure
    pub fn literal(&self) -> &str {
        match self {
            Self::InvalidAdvance { literal }
            | Self::InvalidRate { literal }
            | Self::InvalidCopies { literal }
            | Self::InvalidEscalator { literal, .. } => literal,
        }
    }
}

/// Errors raised while validating driver input or loading configuration
#[derive(Error, Debug)]
pub enum CompareError {
    /// Price per copy below zero
    #[error("price can't be negative")]
    NegativePrice,

    /// Price per copy that is not a finite number
    #[error("invalid price {literal:?}")]
    InvalidPrice { literal: String },

    /// Sales levels not in `N,N[,N...]` form
    #[error("invalid sales levels format {literal:?}")]
    InvalidSalesLevels { literal: String },

    /// Wrong number of positional offers
    #[error("you must provide exactly two offers to compare (got {count})")]
    OfferCount { count: usize },

    /// Offer does not match the offer notation
    #[error("invalid offer format {literal:?}")]
    InvalidOfferFormat { literal: String },

    /// Offer matched the notation but failed to parse
    #[error(transparent)]
    Offer(#[from] OfferError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be deserialized
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Explicitly requested config file does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },
}
