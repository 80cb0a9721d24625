//! Domain Entities
//!
//! - `Offer` - An advance plus a royalty escalator

mod offer;

pub use offer::Offer;
