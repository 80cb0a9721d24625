//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod sales_levels;
mod step;

pub use sales_levels::{SalesLevels, DEFAULT_SALES_LEVELS};
pub use step::Step;
