//! Brightness range scanning for auto-contrast.

use super::brightness::Method;
use super::grid::PixelGrid;

/// Observed (or assumed) brightness bounds used to normalize values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessRange {
    pub min: f64,
    pub max: f64,
}

impl BrightnessRange {
    /// The fixed 0-255 range used when adjustment is off.
    pub const FULL: BrightnessRange = BrightnessRange {
        min: 0.0,
        max: 255.0,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when the range cannot be used as a divisor (uniform or empty image).
    pub fn is_degenerate(&self) -> bool {
        !(self.max > self.min)
    }

    /// Rescale `value` so `min` lands on 0 and `max` on 255.
    ///
    /// Degenerate ranges pass the value through unchanged.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return value;
        }
        255.0 * (value - self.min) / (self.max - self.min)
    }
}

impl Default for BrightnessRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Scan every pixel and return the darkest and brightest values seen.
///
/// Starts from (255, 0), so an empty grid comes back degenerate.
pub fn find_range(grid: &PixelGrid, method: Method) -> BrightnessRange {
    let mut min = 255.0_f64;
    let mut max = 0.0_f64;

    for &pixel in grid.pixels() {
        let value = method.evaluate(pixel);
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }

    BrightnessRange { min, max }
}
