//! Pixel grid to display cell grid.

use super::brightness::Method;
use super::charset::Ramp;
use super::grid::{PixelGrid, Rgb};
use super::mapping::map_to_glyph;
use super::range::{find_range, BrightnessRange};
use crate::options::RenderOptions;

/// One rendered character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCell {
    pub glyph: char,
    /// Foreground color, present only for colored output.
    pub color: Option<Rgb>,
}

/// Rendered image, one cell per source pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderGrid {
    width: usize,
    height: usize,
    cells: Vec<DisplayCell>,
}

impl RenderGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[DisplayCell] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[DisplayCell]> {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// True if the grid carries per-cell colors.
    pub fn is_colored(&self) -> bool {
        self.cells.first().is_some_and(|c| c.color.is_some())
    }

    /// Glyphs only, one line per row, without escape codes or doubling.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|c| c.glyph));
            out.push('\n');
        }
        out
    }
}

/// Map every pixel to a glyph, row-major.
pub fn render_glyphs(
    grid: &PixelGrid,
    method: Method,
    ramp: Ramp,
    range: BrightnessRange,
) -> Vec<char> {
    let glyphs = ramp.glyphs();
    grid.pixels()
        .iter()
        .map(|&pixel| map_to_glyph(method.evaluate(pixel), range, &glyphs))
        .collect()
}

/// Raw pixel colors, row-major.
pub fn render_colors(grid: &PixelGrid) -> Vec<Rgb> {
    grid.pixels().to_vec()
}

/// Render a pixel grid into display cells.
///
/// With `adjust` set the brightness range is scanned from the image first;
/// otherwise the fixed 0-255 range is used. Returns the grid together with
/// the range that was applied.
pub fn render(grid: &PixelGrid, options: &RenderOptions) -> (RenderGrid, BrightnessRange) {
    let range = if options.adjust {
        find_range(grid, options.method)
    } else {
        BrightnessRange::FULL
    };
    log::debug!(
        "Rendering {}x{} with method={} ramp={} range=({}, {})",
        grid.width(),
        grid.height(),
        options.method.name(),
        options.ramp.name(),
        range.min,
        range.max
    );
    if options.adjust && range.is_degenerate() {
        log::debug!("Brightness range is degenerate, skipping normalization");
    }

    let glyphs = render_glyphs(grid, options.method, options.ramp, range);
    let cells = if options.color {
        glyphs
            .into_iter()
            .zip(render_colors(grid))
            .map(|(glyph, color)| DisplayCell {
                glyph,
                color: Some(color),
            })
            .collect()
    } else {
        glyphs
            .into_iter()
            .map(|glyph| DisplayCell { glyph, color: None })
            .collect()
    };

    let rendered = RenderGrid {
        width: grid.width() as usize,
        height: grid.height() as usize,
        cells,
    };
    (rendered, range)
}
