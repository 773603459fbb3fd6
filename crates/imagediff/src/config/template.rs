use std::path::Path;

use anyhow::{Context, Result};

use super::config_path;

/// Hand-crafted config template with commented-out keys.
/// Used by `imagediff init` so users can see the available knobs.
const CONFIG_TEMPLATE: &str = r#"# ─────────────────────────────────────────────────────────
# Comparison — all fields optional.
# Precedence: command line > IMAGEDIFF_* env > this file > defaults.
# ─────────────────────────────────────────────────────────
[diff]
# threshold = 10                    # 0-255, scaled RGB distance a pixel must exceed
# sensitivity = 100                 # percent, 1-500 (100 = raw distance, 500 = 5x)
"#;

pub fn config_file_exists(base: &Path) -> bool {
    config_path(base).exists()
}

/// Write the config template under `base`, creating the config directory.
pub fn write_template(base: &Path) -> Result<()> {
    let path = config_path(base);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    std::fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
