//! compareoffers - compare publishing offers across sales levels
//!
//! An offer is an advance plus a royalty escalator, written as
//! `ADVANCE__RATE-UNTIL_[...]_RATE`. This crate parses that notation and
//! computes earnings for a price and a number of copies sold, with the advance
//! acting as a floor.
//!
//! ```
//! use compareoffers::{calc_earnings, parse_offer};
//!
//! let offer = parse_offer("1500__7-5000_8").unwrap();
//! assert_eq!(calc_earnings(&offer, 38.0, 7500), 20900.0);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod parser;

// Re-exports for convenience
pub use application::{Comparison, ComparisonRow};
pub use config::{ColorMode, Config, ConfigWarning};
pub use domain::entities::Offer;
pub use domain::services::{calc_earnings, earn_out_copies};
pub use domain::value_objects::{SalesLevels, Step};
pub use error::{CompareError, CompareResult, EscalatorViolation, OfferError, OfferResult};
pub use parser::{is_valid_notation, parse_offer, OFFER_PATTERN};
