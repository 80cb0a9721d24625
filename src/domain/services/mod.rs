//! Domain Services
//!
//! Pure calculations over domain entities.

mod earnings;

pub use earnings::{calc_earnings, earn_out_copies, tiered_royalties};
