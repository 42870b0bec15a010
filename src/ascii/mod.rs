//! Image to ASCII conversion.
//!
//! The pipeline turns a decoded [`PixelGrid`] into a [`RenderGrid`]:
//!
//! 1. **Range finding** - optional min/max brightness scan for auto-contrast
//! 2. **Brightness** - RGB to a scalar using one of the [`Method`] formulas
//! 3. **Glyph mapping** - brightness to a character from a [`Ramp`]
//! 4. **Color passthrough** - optional per-cell foreground color
//!
//! # Ramps
//!
//! Six presets are available via [`Ramp`]: `full`, `nums`, `mid` (default),
//! `16bit`, `8bit` and `test`.

mod brightness;
mod charset;
mod grid;
mod mapping;
mod range;
mod render;

pub use brightness::Method;
pub use charset::{Ramp, FULL_RAMP, MID_RAMP, NUMS_RAMP, RAMP_16, RAMP_8, TEST_RAMP};
pub use grid::{PixelGrid, Rgb};
pub use mapping::{glyph_index, map_to_glyph};
pub use range::{find_range, BrightnessRange};
pub use render::{render, render_colors, render_glyphs, DisplayCell, RenderGrid};
