//! Earnings calculation
//!
//! Walks the escalator tier by tier and applies the advance as a floor:
//! royalties below the advance are absorbed by it, never added on top.

use crate::domain::entities::Offer;

/// Total earnings for `copies_sold` copies at `price` per copy.
///
/// No rounding is applied. Total over non-negative inputs.
pub fn calc_earnings(offer: &Offer, price: f64, copies_sold: u64) -> f64 {
    let royalties = tiered_royalties(offer, price, copies_sold);
    if royalties < offer.advance() {
        return offer.advance();
    }
    royalties
}

/// Royalties accrued across the escalator, before the advance floor.
pub fn tiered_royalties(offer: &Offer, price: f64, copies_sold: u64) -> f64 {
    let mut remaining = copies_sold;
    let mut earnings = 0.0;
    for step in offer.escalator() {
        // Terminal tier: either the sales run out inside it or it is open-ended
        if step.is_unbounded() || remaining < step.copies() {
            earnings += step.royalty(price, remaining);
            break;
        }
        earnings += step.royalty(price, step.copies());
        remaining -= step.copies();
    }
    earnings
}

/// Copies needed before royalties reach the advance, if they ever do.
///
/// The result is the smallest `k` with `tiered_royalties(offer, price, k) >=
/// advance`. Returns `None` when the offer can never earn out (zero price or
/// rate).
pub fn earn_out_copies(offer: &Offer, price: f64) -> Option<u64> {
    let advance = offer.advance();
    if advance <= 0.0 {
        return Some(0);
    }
    let estimate = estimate_earn_out(offer, price, advance)?;
    Some(settle_earn_out(offer, price, advance, estimate))
}

/// Closed-form guess; the division can land one copy off either way.
fn estimate_earn_out(offer: &Offer, price: f64, advance: f64) -> Option<u64> {
    let mut needed = advance;
    let mut sold = 0u64;
    for step in offer.escalator() {
        let per_hundred = price * step.rate();
        if step.is_unbounded() {
            if per_hundred <= 0.0 {
                return None;
            }
            return Some(sold.saturating_add((needed * 100.0 / per_hundred).ceil() as u64));
        }
        let tier_total = step.royalty(price, step.copies());
        if tier_total >= needed && per_hundred > 0.0 {
            return Some(sold.saturating_add((needed * 100.0 / per_hundred).ceil() as u64));
        }
        needed -= tier_total;
        sold = sold.saturating_add(step.copies());
    }
    None
}

/// Move the estimate onto the first count whose royalties reach the advance
fn settle_earn_out(offer: &Offer, price: f64, advance: f64, estimate: u64) -> u64 {
    let reaches = |copies: u64| tiered_royalties(offer, price, copies) >= advance;
    let mut copies = estimate;
    while copies > 0 && reaches(copies - 1) {
        copies -= 1;
    }
    while copies < u64::MAX && !reaches(copies) {
        copies += 1;
    }
    copies
}
