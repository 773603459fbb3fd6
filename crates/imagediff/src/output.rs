use std::path::Path;

use anyhow::{Context, Result};
use image::{ExtendedColorType, GrayImage, ImageFormat, RgbaImage};

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

fn write_png(
    path: &Path,
    buf: &[u8],
    width: u32,
    height: u32,
    color: ExtendedColorType,
) -> Result<()> {
    ensure_parent(path)?;
    image::save_buffer_with_format(path, buf, width, height, color, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn write_diff_image(path: &Path, img: &RgbaImage) -> Result<()> {
    write_png(path, img, img.width(), img.height(), ExtendedColorType::Rgba8)
}

pub fn write_mask(path: &Path, img: &GrayImage) -> Result<()> {
    write_png(path, img, img.width(), img.height(), ExtendedColorType::L8)
}
