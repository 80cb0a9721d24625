//! Compare Use Case
//!
//! Tabulates the earnings of two offers at the same price over a list of
//! sales levels:
//! 1. Compute each offer's earnings per level
//! 2. Record the difference (second minus first)
//! 3. Note where the better offer switches, if it does

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::entities::Offer;
use crate::domain::services::{calc_earnings, earn_out_copies};
use crate::domain::value_objects::SalesLevels;

/// One line of the comparison grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Copies sold
    pub sales: u64,
    /// Earnings of the first offer
    pub first: f64,
    /// Earnings of the second offer
    pub second: f64,
    /// `second - first`
    pub difference: f64,
}

/// Earnings of two offers side by side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub price: f64,
    pub rows: Vec<ComparisonRow>,
    /// First sales level at which the better offer differs from the first row that has one
    pub crossover: Option<u64>,
    /// Copies each offer needs to earn out its advance
    pub earn_out: [Option<u64>; 2],
}

impl Comparison {
    pub fn build(first: &Offer, second: &Offer, price: f64, levels: &SalesLevels) -> Self {
        let rows: Vec<ComparisonRow> = levels
            .iter()
            .map(|&sales| {
                let a = calc_earnings(first, price, sales);
                let b = calc_earnings(second, price, sales);
                ComparisonRow {
                    sales,
                    first: a,
                    second: b,
                    difference: b - a,
                }
            })
            .collect();

        let crossover = find_crossover(&rows);
        tracing::debug!(rows = rows.len(), ?crossover, "comparison built");

        Self {
            price,
            rows,
            crossover,
            earn_out: [earn_out_copies(first, price), earn_out_copies(second, price)],
        }
    }

    /// Total of the differences column; positive favours the second offer
    pub fn net_difference(&self) -> f64 {
        self.rows.iter().map(|r| r.difference).sum()
    }
}

fn sign(value: f64) -> Ordering {
    value.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

/// Ties carry no better offer, so the reference is the first non-zero row
fn find_crossover(rows: &[ComparisonRow]) -> Option<u64> {
    let mut decided = rows
        .iter()
        .map(|r| (r.sales, sign(r.difference)))
        .filter(|(_, s)| *s != Ordering::Equal);
    let (_, initial) = decided.next()?;
    decided.find(|(_, s)| *s != initial).map(|(sales, _)| sales)
}
