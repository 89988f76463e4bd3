//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// Larder - a friendly TUI for tracking bakery pantry stock
#[derive(Parser, Debug, Default)]
#[command(name = "larder")]
#[command(version)]
#[command(about = "Track pantry stock, food-safety flags, and usage ideas", long_about = None)]
pub struct Args {
    /// Directory holding pantry.json and theme.conf (default: ~/.config/larder)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Load the pantry without writing anything back
    #[arg(long)]
    pub read_only: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
