mod cli;
mod commands;
mod config;
mod output;
mod report;

use std::path::Path;

use clap::Parser;
use config::{CliOverrides, ResolvedRunConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("imagediff=info,imagediff_engine=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Init { force } => {
            commands::init(Path::new("."), force)?;
        }
        cli::Command::Compare {
            left,
            right,
            threshold,
            sensitivity,
            diff_out,
            mask_out,
            json,
        } => {
            let overrides = CliOverrides {
                threshold,
                sensitivity,
            };
            let config = ResolvedRunConfig::new(overrides)?;
            let args = commands::CompareArgs {
                left,
                right,
                diff_out,
                mask_out,
                json,
            };
            let code = commands::compare(&config, &args)?;
            std::process::exit(code);
        }
    }

    Ok(())
}
