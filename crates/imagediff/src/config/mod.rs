pub mod resolve;
pub mod template;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use self::resolve::{CliOverrides, ResolvedRunConfig};
pub use self::template::{config_file_exists, write_template};

pub(crate) const CONFIG_DIR: &str = ".imagediff";
const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_THRESHOLD: u32 = 10;
pub const DEFAULT_SENSITIVITY: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Scaled magnitude a pixel must exceed to count as different (0-255).
    #[serde(default = "default_threshold")]
    pub threshold: u32,
    /// Sensitivity in percent (1-500); 100 compares raw distances.
    #[serde(default = "default_sensitivity")]
    pub sensitivity: u32,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}

fn default_sensitivity() -> u32 {
    DEFAULT_SENSITIVITY
}

pub fn validate_threshold(v: u32) -> Result<u8, String> {
    u8::try_from(v).map_err(|_| format!("threshold must be between 0 and 255, got {v}"))
}

pub fn validate_sensitivity(v: u32) -> Result<u32, String> {
    if !(1..=500).contains(&v) {
        return Err(format!("sensitivity must be between 1 and 500 percent, got {v}"));
    }
    Ok(v)
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub diff: DiffConfig,
}

pub fn config_path(base: &Path) -> std::path::PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load `<base>/.imagediff/config.toml`. A missing file means defaults.
pub fn load(base: &Path) -> Result<Config> {
    let path = config_path(base);
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    validate_threshold(config.diff.threshold).map_err(|e| anyhow::anyhow!("diff.{e}"))?;
    validate_sensitivity(config.diff.sensitivity).map_err(|e| anyhow::anyhow!("diff.{e}"))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(base: &Path, body: &str) {
        let path = config_path(base);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, body).unwrap();
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(dir.path()).unwrap();
        assert_eq!(config.diff.threshold, 10);
        assert_eq!(config.diff.sensitivity, 100);
    }

    #[test]
    fn partial_diff_section_keeps_other_default() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[diff]\nthreshold = 42\n");
        let config = load(dir.path()).unwrap();
        assert_eq!(config.diff.threshold, 42);
        assert_eq!(config.diff.sensitivity, 100);
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[diff]\nthreshold = 300\n");
        let err = load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("diff.threshold must be between 0 and 255"));
    }

    #[test]
    fn zero_sensitivity_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[diff]\nsensitivity = 0\n");
        assert!(load(dir.path()).is_err());
    }

    #[test]
    fn malformed_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[diff\n");
        let err = load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn validators() {
        assert_eq!(validate_threshold(0), Ok(0));
        assert_eq!(validate_threshold(255), Ok(255));
        assert!(validate_threshold(256).is_err());
        assert_eq!(validate_sensitivity(1), Ok(1));
        assert_eq!(validate_sensitivity(500), Ok(500));
        assert!(validate_sensitivity(501).is_err());
    }
}
