//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::SalesLevels;
use crate::error::{CompareError, CompareResult};

use super::types::{ColorMode, Config};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "compareoffers.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when only built-in defaults were used
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

impl Config {
    /// Apply environment variable overrides (COMPAREOFFERS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides_from(mut self, get_env: impl Fn(&str) -> Option<String>) -> Self {
        // COMPAREOFFERS_PRICE
        if let Some(raw) = get_env("COMPAREOFFERS_PRICE") {
            match raw.trim().parse::<f64>() {
                Ok(price) if price.is_finite() && price >= 0.0 => self.comparison.price = price,
                _ => tracing::warn!(value = %raw, "ignoring invalid COMPAREOFFERS_PRICE"),
            }
        }

        // COMPAREOFFERS_SALES_LEVELS (comma-separated)
        if let Some(raw) = get_env("COMPAREOFFERS_SALES_LEVELS") {
            match SalesLevels::parse(&raw) {
                Ok(levels) => self.comparison.sales_levels = levels,
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid COMPAREOFFERS_SALES_LEVELS"),
            }
        }

        // COMPAREOFFERS_COLOR
        if let Some(raw) = get_env("COMPAREOFFERS_COLOR") {
            match ColorMode::parse(&raw) {
                Some(mode) => self.output.color = mode,
                None => tracing::warn!(value = %raw, "ignoring invalid COMPAREOFFERS_COLOR"),
            }
        }

        self
    }

    /// Resolve configuration for a run.
    ///
    /// An explicit path must exist. Otherwise `./compareoffers.toml` and then
    /// `<config dir>/compareoffers/config.toml` are tried; absent files are
    /// skipped. Environment overrides are applied last.
    pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> CompareResult<LoadedConfig> {
        let candidate = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(CompareError::ConfigNotFound {
                        path: path.to_path_buf(),
                    });
                }
                Some(path.to_path_buf())
            }
            None => implicit_locations(working_dir)
                .into_iter()
                .find(|p| p.is_file()),
        };

        let loaded = match candidate {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                let (config, warnings) = load_with_warnings(&path)?;
                LoadedConfig {
                    config,
                    source: Some(path),
                    warnings,
                }
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                LoadedConfig::default()
            }
        };

        let config = loaded.config.with_env_overrides();
        config.validate()?;
        Ok(LoadedConfig { config, ..loaded })
    }
}

fn implicit_locations(working_dir: &Path) -> Vec<PathBuf> {
    let mut locations = vec![working_dir.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("compareoffers").join("config.toml"));
    }
    locations
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CompareResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CompareError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "comparison",
        "price",
        "sales_levels",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
