//! Brightness to glyph mapping.

use super::range::BrightnessRange;

/// Index into a ramp of `levels` glyphs for brightness `value`.
///
/// The value is first rescaled by `range` (identity when the range is
/// degenerate), then quantized as `floor(v * (levels - 1) / 255)`. The result
/// is clamped to `0..levels`, so out-of-range values and NaN never index
/// outside the ramp.
pub fn glyph_index(value: f64, range: BrightnessRange, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }

    let normalized = range.normalize(value);
    let scaled = (normalized * (levels - 1) as f64 / 255.0).floor();
    if scaled.is_nan() || scaled <= 0.0 {
        return 0;
    }
    (scaled as usize).min(levels - 1)
}

/// Map a brightness value to a glyph from `ramp` (darkest first).
///
/// An empty ramp maps everything to a space.
pub fn map_to_glyph(value: f64, range: BrightnessRange, ramp: &[char]) -> char {
    if ramp.is_empty() {
        return ' ';
    }
    ramp[glyph_index(value, range, ramp.len())]
}
