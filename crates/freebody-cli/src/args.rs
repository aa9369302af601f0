//! Command-line argument definitions for the Freebody CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments carry the problem statement, an optional recorded
//! analysis, output paths, surface size, configuration file selection, and
//! logging verbosity.

use clap::Parser;

/// Command-line arguments for the Freebody diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Problem statement to analyze
    #[arg(help = "Problem statement, in free text")]
    pub problem: String,

    /// Recorded analysis response (JSON) to draw instead of the built-in mock
    #[arg(short, long)]
    pub scene: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to write the formula panel to; printed to stdout when omitted
    #[arg(short, long)]
    pub formulas: Option<String>,

    /// Surface width in pixels
    #[arg(long, default_value_t = freebody::DEFAULT_WIDTH)]
    pub width: f32,

    /// Surface height in pixels
    #[arg(long, default_value_t = freebody::DEFAULT_HEIGHT)]
    pub height: f32,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
