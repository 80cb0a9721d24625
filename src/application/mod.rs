//! Application Layer
//!
//! Use cases that orchestrate the business flow. Business rules live in the
//! domain layer; this layer only combines them.
//!
//! ## Use Cases
//!
//! - `Comparison` - Earnings of two offers over a list of sales levels

pub mod compare;

pub use compare::{Comparison, ComparisonRow};
