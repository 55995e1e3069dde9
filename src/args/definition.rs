//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// dinescout - browse a restaurant directory, search near a point or by a photo of a dish
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "dinescout")]
#[command(version)]
#[command(about = "Browse a restaurant directory, search near a point or by a photo of a dish", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Specify the configuration directory (default: ~/.config/dinescout)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Base URL of the restaurant directory API (overrides settings and DINESCOUT_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Print the details of one restaurant and exit
    #[arg(short, long, value_name = "ID")]
    pub show: Option<String>,

    /// Print `--show` output as JSON
    #[arg(long, requires = "show")]
    pub json: bool,
}
