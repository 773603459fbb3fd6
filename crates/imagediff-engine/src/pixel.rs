use image::Rgba;

use crate::DiffParams;

/// Largest Euclidean distance between two RGB colors: `255 * sqrt(3)`.
pub const MAX_RGB_DISTANCE: f64 = 441.672_955_930_063_7;

/// Minimum alpha of a highlighted pixel.
const HIGHLIGHT_ALPHA_FLOOR: f64 = 80.0;
/// Highlights never become fully opaque so the content stays faintly visible.
const HIGHLIGHT_ALPHA_CAP: f64 = 220.0;

/// Outcome of comparing one pair of pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelDiff {
    pub scaled: f64,
    pub differing: bool,
    pub mask: u8,
    pub color: Rgba<u8>,
}

/// Euclidean distance over RGB (alpha ignored), rounded to the nearest integer.
pub fn magnitude(a: &Rgba<u8>, b: &Rgba<u8>) -> u32 {
    let dr = i32::from(a[0]) - i32::from(b[0]);
    let dg = i32::from(a[1]) - i32::from(b[1]);
    let db = i32::from(a[2]) - i32::from(b[2]);

    f64::from(dr * dr + dg * dg + db * db).sqrt().round() as u32
}

/// Scaled magnitude normalized against [`MAX_RGB_DISTANCE`] into 0..=255.
pub fn mask_value(scaled: f64) -> u8 {
    (scaled / MAX_RGB_DISTANCE * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Translucent red whose alpha grows with the scaled magnitude.
pub fn highlight(scaled: f64) -> Rgba<u8> {
    let alpha = (HIGHLIGHT_ALPHA_FLOOR + scaled.round()).clamp(0.0, HIGHLIGHT_ALPHA_CAP);
    Rgba([255, 0, 0, alpha as u8])
}

pub fn compare(left: &Rgba<u8>, right: &Rgba<u8>, params: &DiffParams) -> PixelDiff {
    let scaled = f64::from(magnitude(left, right)) * params.sensitivity;
    let differing = scaled > f64::from(params.threshold);

    PixelDiff {
        scaled,
        differing,
        mask: mask_value(scaled),
        color: if differing { highlight(scaled) } else { *left },
    }
}
