use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config;

fn parse_threshold(s: &str) -> Result<u8, String> {
    let v: u32 = s.parse().map_err(|e| format!("{e}"))?;
    config::validate_threshold(v)
}

fn parse_sensitivity(s: &str) -> Result<u32, String> {
    let v: u32 = s.parse().map_err(|e| format!("{e}"))?;
    config::validate_sensitivity(v)
}

#[derive(Parser)]
#[command(name = "imagediff", about = "Pixel-level comparison of two images")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two images and report differing pixels (exit 0 same, 1 different, 3 unreadable, 4 output not written)
    Compare {
        /// Left / reference image
        left: PathBuf,
        /// Right / current image
        right: PathBuf,
        /// Scaled RGB distance a pixel must exceed to differ (0-255, overrides config)
        #[arg(long, short = 't', value_parser = parse_threshold)]
        threshold: Option<u8>,
        /// Sensitivity in percent (1-500, overrides config)
        #[arg(long, short = 's', value_parser = parse_sensitivity)]
        sensitivity: Option<u32>,
        /// Save the highlighted diff image as PNG
        #[arg(long)]
        diff_out: Option<PathBuf>,
        /// Save the grayscale difference mask as PNG
        #[arg(long)]
        mask_out: Option<PathBuf>,
        /// Print a JSON summary instead of the status line
        #[arg(long)]
        json: bool,
    },

    /// Create .imagediff/config.toml with default settings
    Init {
        /// Overwrite an existing config
        #[arg(long, short = 'f')]
        force: bool,
    },
}
