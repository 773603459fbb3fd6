use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Bilinear resampling used to stretch inputs onto the canvas.
pub const RESAMPLE_FILTER: FilterType = FilterType::Triangle;

/// Element-wise maximum of two `(width, height)` pairs.
pub fn canvas_size(left: (u32, u32), right: (u32, u32)) -> (u32, u32) {
    (left.0.max(right.0), left.1.max(right.1))
}

/// An image with no pixels cannot take part in a comparison.
pub fn is_comparable(img: &DynamicImage) -> bool {
    let (w, h) = img.dimensions();
    w > 0 && h > 0
}

/// Convert to RGBA8 and stretch to `w x h`, ignoring aspect ratio.
///
/// Images already at the canvas size are not resampled, so identical inputs
/// compare pixel-for-pixel. Images with transparency are resampled in
/// premultiplied alpha so fully transparent pixels do not bleed their colour
/// into opaque neighbours.
pub fn normalize(img: &DynamicImage, w: u32, h: u32) -> RgbaImage {
    let mut rgba = img.to_rgba8();
    if rgba.dimensions() == (w, h) {
        return rgba;
    }
    if rgba.pixels().all(|p| p[3] == u8::MAX) {
        return imageops::resize(&rgba, w, h, RESAMPLE_FILTER);
    }

    rgba.pixels_mut().for_each(premultiply);
    let mut out = imageops::resize(&rgba, w, h, RESAMPLE_FILTER);
    out.pixels_mut().for_each(unpremultiply);
    out
}

fn premultiply(p: &mut Rgba<u8>) {
    let a = u32::from(p[3]);
    for c in &mut p.0[..3] {
        *c = ((u32::from(*c) * a + 127) / 255) as u8;
    }
}

fn unpremultiply(p: &mut Rgba<u8>) {
    let a = u32::from(p[3]);
    for c in &mut p.0[..3] {
        *c = if a == 0 {
            0
        } else {
            ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8
        };
    }
}
