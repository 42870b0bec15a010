//! Per-pixel brightness formulas.

use serde::Deserialize;

use super::grid::Rgb;

/// Photometric formula used to turn an RGB pixel into a brightness value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// (R + G + B) / 3
    #[default]
    Average,
    /// (max + min) / 2
    Lightness,
    /// 0.21 R + 0.72 G + 0.07 B
    Luminosity,
}

impl Method {
    /// Brightness of `pixel` in the nominal range 0.0-255.0.
    pub fn evaluate(&self, pixel: Rgb) -> f64 {
        let r = f64::from(pixel.r);
        let g = f64::from(pixel.g);
        let b = f64::from(pixel.b);
        match self {
            Method::Average => (r + g + b) / 3.0,
            Method::Lightness => (r.max(g).max(b) + r.min(g).min(b)) / 2.0,
            Method::Luminosity => 0.21 * r + 0.72 * g + 0.07 * b,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Method::Average => "average",
            Method::Lightness => "lightness",
            Method::Luminosity => "luminosity",
        }
    }
}
