use std::path::Path;

use anyhow::{Result, bail};

use crate::config;

/// `imagediff init` — create .imagediff/config.toml in `base`.
pub fn init(base: &Path, force: bool) -> Result<()> {
    if !force && config::config_file_exists(base) {
        bail!(".imagediff/config.toml already exists (use --force to overwrite)");
    }

    config::write_template(base)?;

    let verb = if force { "Regenerated" } else { "Created" };
    println!("{verb} .imagediff/config.toml");
    Ok(())
}
