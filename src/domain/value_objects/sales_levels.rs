//! SalesLevels value object - the sales volumes a comparison is tabulated at
//!
//! Accepts `N,N[,N...]` (at least two levels). Whitespace anywhere is ignored.

use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CompareError, CompareResult};

/// Sales levels used when none are configured
pub const DEFAULT_SALES_LEVELS: &[u64] = &[1000, 2000, 4000, 8000, 12000, 20000, 50000, 100000];

/// Two or more comma-separated whole numbers, whitespace already removed
static SALES_LEVELS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+,)+[0-9]+$").expect("sales levels pattern compiles"));

/// Ordered list of sales volumes, as given by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SalesLevels(Vec<u64>);

impl SalesLevels {
    /// Parse a comma-separated list such as `1000, 2000,4000`.
    pub fn parse(raw: &str) -> CompareResult<Self> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let invalid = || CompareError::InvalidSalesLevels {
            literal: raw.to_string(),
        };

        if !SALES_LEVELS.is_match(&compact) {
            return Err(invalid());
        }

        // Digits only past the pattern; overflow is the one remaining failure
        compact
            .split(',')
            .map(|p| p.parse::<u64>().map_err(|_| invalid()))
            .collect::<CompareResult<Vec<u64>>>()
            .map(Self)
    }

    /// Build from explicit levels; at least two are required.
    pub fn from_levels(levels: Vec<u64>) -> CompareResult<Self> {
        if levels.len() < 2 {
            let literal = levels
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            return Err(CompareError::InvalidSalesLevels { literal });
        }
        Ok(Self(levels))
    }

    pub fn into_inner(self) -> Vec<u64> {
        self.0
    }
}

impl Default for SalesLevels {
    fn default() -> Self {
        Self(DEFAULT_SALES_LEVELS.to_vec())
    }
}

impl Deref for SalesLevels {
    type Target = [u64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for SalesLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, level) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", level)?;
        }
        Ok(())
    }
}

/// Config files may use `[1000, 2000]` or `"1000,2000"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SalesLevelsDe {
    List(Vec<u64>),
    Text(String),
}

impl<'de> Deserialize<'de> for SalesLevels {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let parsed = match SalesLevelsDe::deserialize(deserializer)? {
            SalesLevelsDe::List(levels) => SalesLevels::from_levels(levels),
            SalesLevelsDe::Text(raw) => SalesLevels::parse(&raw),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
