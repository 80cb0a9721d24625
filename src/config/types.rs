//! Configuration types

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SalesLevels;
use crate::error::{CompareError, CompareResult};

/// Price per copy used when none is configured
pub const DEFAULT_PRICE: f64 = 38.0;

/// Inputs shared by every comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    #[serde(default = "default_price")]
    pub price: f64,

    #[serde(default)]
    pub sales_levels: SalesLevels,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            price: DEFAULT_PRICE,
            sales_levels: SalesLevels::default(),
        }
    }
}

fn default_price() -> f64 {
    DEFAULT_PRICE
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub comparison: ComparisonConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Reject values no comparison can use
    pub fn validate(&self) -> CompareResult<()> {
        validate_price(self.comparison.price)
    }
}

/// A price must be finite and not negative
pub fn validate_price(price: f64) -> CompareResult<()> {
    if !price.is_finite() {
        return Err(CompareError::InvalidPrice {
            literal: price.to_string(),
        });
    }
    if price < 0.0 {
        return Err(CompareError::NegativePrice);
    }
    Ok(())
}
