//! Unit tests for the ASCII conversion pipeline.
//!
//! These tests cover the public behavior of the ascii module:
//! - Brightness formulas
//! - Range finding
//! - Glyph mapping bounds and monotonicity
//! - Whole-grid rendering

use asciify::ascii::*;
use asciify::RenderOptions;

fn make_grid(pixels: &[(u8, u8, u8)], width: u32, height: u32) -> PixelGrid {
    let pixels = pixels.iter().map(|&(r, g, b)| Rgb::new(r, g, b)).collect();
    PixelGrid::new(width, height, pixels).unwrap()
}

fn gradient(width: u32) -> PixelGrid {
    let pixels: Vec<_> = (0..width)
        .map(|x| {
            let v = (x * 255 / (width - 1)) as u8;
            (v, v, v)
        })
        .collect();
    make_grid(&pixels, width, 1)
}

// ==================== Brightness Tests ====================

#[test]
fn test_average_is_channel_mean() {
    for (r, g, b) in [(0, 0, 0), (1, 2, 3), (255, 0, 128), (17, 200, 91)] {
        let expected = (r as f64 + g as f64 + b as f64) / 3.0;
        let actual = Method::Average.evaluate(Rgb::new(r, g, b));
        assert!((actual - expected).abs() < 1e-9);
    }
}

#[test]
fn test_luminosity_uses_reference_constants() {
    let v = Method::Luminosity.evaluate(Rgb::new(100, 100, 100));
    // 0.21 + 0.72 + 0.07 = 1.00
    assert!((v - 100.0).abs() < 1e-9);

    let red = Method::Luminosity.evaluate(Rgb::new(255, 0, 0));
    assert!((red - 53.55).abs() < 1e-9);
}

#[test]
fn test_lightness_ignores_middle_channel() {
    let a = Method::Lightness.evaluate(Rgb::new(0, 10, 200));
    let b = Method::Lightness.evaluate(Rgb::new(0, 190, 200));
    assert_eq!(a, b);
}

// ==================== Range Tests ====================

#[test]
fn test_range_of_gradient() {
    let range = find_range(&gradient(16), Method::Average);
    assert_eq!(range.min, 0.0);
    assert_eq!(range.max, 255.0);
}

#[test]
fn test_range_of_uniform_image() {
    let grid = PixelGrid::filled(5, 5, Rgb::new(40, 40, 40));
    let range = find_range(&grid, Method::Average);
    assert_eq!(range.min, 40.0);
    assert_eq!(range.max, 40.0);
    assert!(range.is_degenerate());
}

// ==================== Mapping Tests ====================

#[test]
fn test_mapping_is_monotonic_for_every_ramp() {
    for ramp in [Ramp::Full, Ramp::Nums, Ramp::Mid, Ramp::Bits16, Ramp::Bits8, Ramp::Test] {
        let levels = ramp.glyphs().len();
        let mut last = 0;
        for v in 0..=255 {
            let idx = glyph_index(v as f64, BrightnessRange::FULL, levels);
            assert!(idx >= last);
            assert!(idx < levels);
            last = idx;
        }
        assert_eq!(last, levels - 1);
    }
}

#[test]
fn test_degenerate_range_returns_valid_glyph() {
    let range = BrightnessRange::new(200.0, 200.0);
    let glyph = map_to_glyph(200.0, range, &Ramp::Mid.glyphs());
    assert!(MID_RAMP.contains(glyph));
}

// ==================== Render Tests ====================

#[test]
fn test_black_square_renders_spaces() {
    let grid = PixelGrid::filled(2, 2, Rgb::new(0, 0, 0));
    let (rendered, range) = render(&grid, &RenderOptions::default());
    assert_eq!(range, BrightnessRange::FULL);
    assert_eq!(rendered.to_plain_string(), "  \n  \n");
}

#[test]
fn test_white_square_renders_last_glyph() {
    let grid = PixelGrid::filled(2, 2, Rgb::new(255, 255, 255));
    let (rendered, _) = render(&grid, &RenderOptions::default());
    let last = MID_RAMP.chars().last().unwrap();
    assert!(rendered.cells().iter().all(|c| c.glyph == last));
}

#[test]
fn test_uniform_image_adjusted_equals_unadjusted() {
    let grid = PixelGrid::filled(4, 3, Rgb::new(33, 66, 99));
    let plain = RenderOptions::default();
    let adjusted = RenderOptions {
        adjust: true,
        ..plain
    };
    assert_eq!(render(&grid, &plain).0, render(&grid, &adjusted).0);
}

#[test]
fn test_gradient_covers_whole_ramp() {
    let options = RenderOptions {
        ramp: Ramp::Bits8,
        ..RenderOptions::default()
    };
    let (rendered, _) = render(&gradient(64), &options);
    let line = rendered.to_plain_string();
    for glyph in RAMP_8.chars() {
        assert!(line.contains(glyph), "missing {:?} in {:?}", glyph, line);
    }
}

#[test]
fn test_adjust_reaches_both_ends_on_low_contrast_image() {
    let grid = make_grid(&[(60, 60, 60), (70, 70, 70), (80, 80, 80)], 3, 1);
    let options = RenderOptions {
        ramp: Ramp::Test,
        adjust: true,
        ..RenderOptions::default()
    };
    let (rendered, range) = render(&grid, &options);
    assert_eq!(range, BrightnessRange::new(60.0, 80.0));
    let glyphs: Vec<char> = rendered.cells().iter().map(|c| c.glyph).collect();
    assert_eq!(glyphs[0], ' ');
    assert_eq!(glyphs[2], '#');
}

#[test]
fn test_color_grid_matches_pixels() {
    let grid = make_grid(&[(10, 20, 30), (40, 50, 60)], 1, 2);
    let options = RenderOptions {
        color: true,
        ..RenderOptions::default()
    };
    let (rendered, _) = render(&grid, &options);
    let colors: Vec<_> = rendered.cells().iter().map(|c| c.color).collect();
    assert_eq!(
        colors,
        vec![Some(Rgb::new(10, 20, 30)), Some(Rgb::new(40, 50, 60))]
    );
    assert_eq!(render_colors(&grid), grid.pixels().to_vec());
}
