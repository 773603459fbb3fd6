use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use imagediff_engine::{DiffParams, compute};

fn solid(w: u32, h: u32, color: Rgba<u8>) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, color))
}

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

// -- identical inputs --

#[test]
fn identical_black_images_have_no_diff() {
    let a = solid(2, 2, BLACK);
    let b = solid(2, 2, BLACK);
    let r = compute(&a, &b, &DiffParams::new(10, 1.0)).unwrap();

    assert_eq!(r.differing_pixels, 0);
    assert_eq!(r.max_diff, 0.0);
    assert_eq!(r.diff_image, a.to_rgba8());
    assert!(r.diff_mask.pixels().all(|p| p.0[0] == 0));
}

#[test]
fn identical_inputs_are_clean_even_at_zero_threshold() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(9, 5, |x, y| {
        Rgba([(x * 28) as u8, (y * 50) as u8, 200, 255])
    }));
    let r = compute(&img, &img, &DiffParams::new(0, 5.0)).unwrap();
    assert_eq!(r.differing_pixels, 0);
    assert_eq!(r.max_diff, 0.0);
}

#[test]
fn color_layout_does_not_matter() {
    let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([12, 34, 56])));
    let rgba = solid(4, 4, Rgba([12, 34, 56, 255]));
    let r = compute(&rgb, &rgba, &DiffParams::new(0, 1.0)).unwrap();
    assert_eq!(r.differing_pixels, 0);
}

// -- maximal difference --

#[test]
fn black_vs_white_single_pixel() {
    let r = compute(&solid(1, 1, BLACK), &solid(1, 1, WHITE), &DiffParams::new(10, 1.0)).unwrap();

    assert_eq!(r.differing_pixels, 1);
    assert_eq!(r.max_diff, 442.0);
    assert_eq!(r.diff_mask.get_pixel(0, 0), &Luma([255]));
    assert_eq!(r.diff_image.get_pixel(0, 0), &Rgba([255, 0, 0, 220]));
}

#[test]
fn max_diff_is_not_clamped_by_sensitivity() {
    let r = compute(&solid(1, 1, BLACK), &solid(1, 1, WHITE), &DiffParams::new(255, 5.0)).unwrap();
    assert_eq!(r.max_diff, 2210.0);
    assert_eq!(r.diff_mask.get_pixel(0, 0), &Luma([255]));
    assert_eq!(r.differing_pixels, 1);
}

#[test]
fn undifferentiated_pixels_copy_left_source() {
    let left = RgbaImage::from_fn(3, 1, |x, _| Rgba([x as u8 * 10, 0, 0, 255]));
    let mut right = left.clone();
    right.put_pixel(2, 0, WHITE);
    let r = compute(
        &DynamicImage::ImageRgba8(left.clone()),
        &DynamicImage::ImageRgba8(right),
        &DiffParams::default(),
    )
    .unwrap();

    assert_eq!(r.differing_pixels, 1);
    assert_eq!(r.diff_image.get_pixel(0, 0), left.get_pixel(0, 0));
    assert_eq!(r.diff_image.get_pixel(1, 0), left.get_pixel(1, 0));
    assert_eq!(r.diff_image.get_pixel(2, 0)[0], 255);
    assert_eq!(r.diff_image.get_pixel(2, 0)[1], 0);
}

// -- canvas sizing --

#[test]
fn mismatched_sizes_use_union_canvas() {
    let a = solid(3, 4, Rgba([40, 40, 40, 255]));
    let b = solid(5, 2, Rgba([40, 40, 40, 255]));
    let r = compute(&a, &b, &DiffParams::default()).unwrap();

    assert_eq!(r.diff_image.dimensions(), (5, 4));
    assert_eq!(r.diff_mask.dimensions(), (5, 4));
    assert_eq!(r.total_pixels(), 20);
    // Solid content survives stretching, so nothing differs.
    assert_eq!(r.differing_pixels, 0);
}

#[test]
fn mismatched_sizes_with_different_content() {
    let a = solid(3, 4, BLACK);
    let b = solid(5, 2, WHITE);
    let r = compute(&a, &b, &DiffParams::default()).unwrap();
    assert_eq!((r.width(), r.height()), (5, 4));
    assert_eq!(r.differing_pixels, 20);
    assert_eq!(r.diff_ratio(), 1.0);
}

// -- nothing to compare --

#[test]
fn empty_image_yields_none() {
    let empty = DynamicImage::new_rgba8(0, 0);
    let ok = solid(2, 2, BLACK);
    assert!(compute(&empty, &ok, &DiffParams::default()).is_none());
    assert!(compute(&ok, &empty, &DiffParams::default()).is_none());
}

#[test]
fn missing_image_yields_none() {
    let ok = solid(2, 2, BLACK);
    let missing: Option<&DynamicImage> = None;
    assert!(compute(missing, &ok, &DiffParams::default()).is_none());
}

// -- provenance independence --

#[test]
fn mask_can_be_fed_back_as_input() {
    let r = compute(
        &solid(4, 3, BLACK),
        &solid(4, 3, Rgba([90, 10, 200, 255])),
        &DiffParams::default(),
    )
    .unwrap();

    let mask = DynamicImage::ImageLuma8(r.diff_mask.clone());
    let zeros = DynamicImage::ImageLuma8(GrayImage::new(4, 3));
    let again = compute(&mask, &zeros, &DiffParams::default()).unwrap();

    assert_eq!(again.diff_mask.dimensions(), (4, 3));
    assert!(again.differing_pixels <= again.total_pixels());
}

#[test]
fn negative_sensitivity_reports_nothing() {
    let r = compute(&solid(2, 2, BLACK), &solid(2, 2, WHITE), &DiffParams::new(0, -1.0)).unwrap();
    assert_eq!(r.differing_pixels, 0);
    assert!(r.max_diff >= 0.0);
    assert!(r.diff_mask.pixels().all(|p| p.0[0] == 0));
}
