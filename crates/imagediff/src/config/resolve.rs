use std::path::Path;

use anyhow::{Context, Result};
use imagediff_engine::DiffParams;

use super::{Config, load, validate_sensitivity, validate_threshold};

const ENV_THRESHOLD: &str = "IMAGEDIFF_THRESHOLD";
const ENV_SENSITIVITY: &str = "IMAGEDIFF_SENSITIVITY";

/// Values extracted from the CLI that participate in the merge.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub threshold: Option<u8>,
    pub sensitivity: Option<u32>,
}

/// Values taken from `IMAGEDIFF_*` environment variables.
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub threshold: Option<u32>,
    pub sensitivity: Option<u32>,
}

impl EnvOverrides {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse overrides from any key lookup. Unset keys stay `None`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let parse = |key: &str| -> Result<Option<u32>> {
            lookup(key)
                .map(|v| v.trim().parse::<u32>())
                .transpose()
                .with_context(|| format!("{key} must be a non-negative integer"))
        };
        Ok(Self {
            threshold: parse(ENV_THRESHOLD)?,
            sensitivity: parse(ENV_SENSITIVITY)?,
        })
    }
}

/// Fully resolved config after CLI > env > file > defaults merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRunConfig {
    pub threshold: u8,
    /// Sensitivity in percent, 1-500.
    pub sensitivity: u32,
}

impl ResolvedRunConfig {
    pub fn new(cli: CliOverrides) -> Result<Self> {
        // 1. File layer
        let file_config = load(Path::new("."))?;

        // 2. Env layer
        let env = EnvOverrides::from_env()?;

        Self::merge(cli, env, file_config)
    }

    /// CLI > env > file (highest priority first). Defaults were applied
    /// while deserializing the file layer.
    pub fn merge(cli: CliOverrides, env: EnvOverrides, file: Config) -> Result<Self> {
        let threshold = match cli.threshold {
            Some(t) => t,
            None => validate_threshold(env.threshold.unwrap_or(file.diff.threshold))
                .map_err(|e| anyhow::anyhow!("{e}"))?,
        };

        let sensitivity = cli
            .sensitivity
            .or(env.sensitivity)
            .unwrap_or(file.diff.sensitivity);
        validate_sensitivity(sensitivity).map_err(|e| anyhow::anyhow!("{e}"))?;

        Ok(Self {
            threshold,
            sensitivity,
        })
    }

    pub fn params(&self) -> DiffParams {
        DiffParams::from_percent(self.threshold, self.sensitivity)
    }
}
