//! Domain Layer
//!
//! Pure offer logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - `Offer`
//! - `value_objects/` - Immutable value types (`Step`, `SalesLevels`)
//! - `services/` - Stateless calculations (earnings, earn-out)

pub mod entities;
pub mod services;
pub mod value_objects;
