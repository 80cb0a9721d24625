//! Configuration module for compareoffers
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (COMPAREOFFERS_*)
//! 3. `--config <path>`, else `./compareoffers.toml`
//! 4. User config (`<config dir>/compareoffers/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_with_warnings, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{validate_price, ColorMode, ComparisonConfig, Config, OutputConfig, DEFAULT_PRICE};
