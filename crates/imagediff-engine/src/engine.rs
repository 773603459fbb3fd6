use std::time::Instant;

use image::{DynamicImage, GenericImageView, GrayImage, Pixel, Rgba, RgbaImage};
use rayon::prelude::*;
use tracing::debug;

use crate::canvas::{self, canvas_size};
use crate::{DiffParams, pixel};

/// Canvases with at least this many pixels are scanned row-parallel.
pub const PARALLEL_THRESHOLD: u64 = 256 * 256;

/// Output of one comparison. Both images have the canvas dimensions.
#[derive(Debug, Clone)]
pub struct DiffResult {
    /// Red highlight where pixels differ, left-hand pixel elsewhere.
    pub diff_image: RgbaImage,
    /// Normalized scaled magnitude per pixel, independent of the threshold.
    pub diff_mask: GrayImage,
    /// Pixels whose scaled magnitude exceeds the threshold.
    pub differing_pixels: u64,
    /// Largest scaled magnitude seen. Not clamped, so it can exceed the mask range.
    pub max_diff: f64,
}

impl DiffResult {
    pub fn width(&self) -> u32 {
        self.diff_image.width()
    }

    pub fn height(&self) -> u32 {
        self.diff_image.height()
    }

    pub fn total_pixels(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// 0.0 = no differing pixels, 1.0 = every pixel differs.
    pub fn diff_ratio(&self) -> f64 {
        let total = self.total_pixels();
        if total > 0 {
            self.differing_pixels as f64 / total as f64
        } else {
            0.0
        }
    }

    pub fn has_differences(&self) -> bool {
        self.differing_pixels > 0
    }
}

/// Per-row accumulators, merged with sum and max.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct RowStats {
    differing: u64,
    max_diff: f64,
}

impl RowStats {
    fn merge(self, other: Self) -> Self {
        Self {
            differing: self.differing + other.differing,
            max_diff: self.max_diff.max(other.max_diff),
        }
    }
}

/// Compare `left` against `right`.
///
/// Returns `None` when either image is missing or has no pixels. Otherwise
/// both images are stretched onto the shared canvas (element-wise max of
/// their sizes) and every pixel is classified.
pub fn compute<'a>(
    left: impl Into<Option<&'a DynamicImage>>,
    right: impl Into<Option<&'a DynamicImage>>,
    params: &DiffParams,
) -> Option<DiffResult> {
    let (Some(left), Some(right)) = (left.into(), right.into()) else {
        debug!("missing input image, nothing to compare");
        return None;
    };
    if !canvas::is_comparable(left) || !canvas::is_comparable(right) {
        debug!(
            left = ?left.dimensions(),
            right = ?right.dimensions(),
            "empty input image, nothing to compare"
        );
        return None;
    }

    let start = Instant::now();
    let (w, h) = canvas_size(left.dimensions(), right.dimensions());
    let a = canvas::normalize(left, w, h);
    let b = canvas::normalize(right, w, h);

    let parallel = u64::from(w) * u64::from(h) >= PARALLEL_THRESHOLD;
    let result = scan(&a, &b, params, parallel);

    debug!(
        width = w,
        height = h,
        threshold = params.threshold,
        sensitivity = params.sensitivity,
        parallel,
        differing = result.differing_pixels,
        max_diff = result.max_diff,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "diff computed"
    );
    Some(result)
}

/// Classify every pixel of two equally sized RGBA images.
fn scan(a: &RgbaImage, b: &RgbaImage, params: &DiffParams, parallel: bool) -> DiffResult {
    let (w, h) = a.dimensions();
    let mut diff_image = RgbaImage::new(w, h);
    let mut diff_mask = GrayImage::new(w, h);

    let rgba_row = w as usize * 4;
    let gray_row = w as usize;
    let a_buf: &[u8] = a;
    let b_buf: &[u8] = b;
    let out_buf: &mut [u8] = &mut diff_image;
    let mask_buf: &mut [u8] = &mut diff_mask;

    let stats = if parallel {
        out_buf
            .par_chunks_exact_mut(rgba_row)
            .zip(mask_buf.par_chunks_exact_mut(gray_row))
            .zip(a_buf.par_chunks_exact(rgba_row))
            .zip(b_buf.par_chunks_exact(rgba_row))
            .map(|(((out, mask), ra), rb)| scan_row(ra, rb, out, mask, params))
            .reduce(RowStats::default, RowStats::merge)
    } else {
        out_buf
            .chunks_exact_mut(rgba_row)
            .zip(mask_buf.chunks_exact_mut(gray_row))
            .zip(a_buf.chunks_exact(rgba_row))
            .zip(b_buf.chunks_exact(rgba_row))
            .map(|(((out, mask), ra), rb)| scan_row(ra, rb, out, mask, params))
            .fold(RowStats::default(), RowStats::merge)
    };

    DiffResult {
        diff_image,
        diff_mask,
        differing_pixels: stats.differing,
        max_diff: stats.max_diff,
    }
}

fn scan_row(
    left: &[u8],
    right: &[u8],
    out: &mut [u8],
    mask: &mut [u8],
    params: &DiffParams,
) -> RowStats {
    let mut stats = RowStats::default();

    for (((ca, cb), o), m) in left
        .chunks_exact(4)
        .zip(right.chunks_exact(4))
        .zip(out.chunks_exact_mut(4))
        .zip(mask.iter_mut())
    {
        let px = pixel::compare(Rgba::from_slice(ca), Rgba::from_slice(cb), params);

        stats.max_diff = stats.max_diff.max(px.scaled);
        if px.differing {
            stats.differing += 1;
        }
        *m = px.mask;
        o.copy_from_slice(&px.color.0);
    }

    stats
}
