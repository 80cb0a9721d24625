//! CLI argument parsing
//!
//! One command: two positional offers plus options. Option values that are
//! not given fall back to the resolved configuration.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Compare two publishing offers across sales levels
#[derive(Parser, Debug)]
#[command(name = "compareoffers")]
#[command(author, version, about, long_about = None)]
#[command(after_help = concat!(
    "Offer pattern: ADVANCE__RATE-UNTIL_[...]_RATE (for example 1500__7-2000_8-4000_9).\n",
    "UNTIL is the cumulative number of copies up to which RATE applies; the last RATE applies to all remaining copies."
))]
pub struct Cli {
    /// Offers to compare, e.g. 1500__7-2000_8-4000_9
    #[arg(value_name = "OFFER")]
    pub offers: Vec<String>,

    /// Price per copy [default: 38]
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<f64>,

    /// Comma-separated sales levels [default: 1000,2000,4000,8000,12000,20000,50000,100000]
    #[arg(long = "sales-levels", visible_alias = "printruns", value_name = "LIST")]
    pub sales_levels: Option<String>,

    /// Path to a config file (default: ./compareoffers.toml, then the user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events instead of a table
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
