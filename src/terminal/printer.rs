//! Writes a rendered grid to the terminal.
//!
//! Every glyph is printed twice so a cell comes out roughly square on
//! fonts that are about twice as tall as they are wide.

use std::io::Write;

use super::escape::{self, BLACK_BACKGROUND, RESET, RESIZE_ROWS};
use crate::ascii::{DisplayCell, RenderGrid};

/// Control sequences emitted before the image.
///
/// Resizes the window to [`RESIZE_ROWS`] rows by twice the target width,
/// then moves the cursor down by the target height.
pub fn format_header(size: (u32, u32)) -> String {
    let (width, height) = size;
    let mut header = escape::resize_window(RESIZE_ROWS, width.saturating_mul(2));
    header.push_str(&escape::cursor_down(height));
    header
}

/// Format one row of cells, without the trailing newline.
///
/// Colored cells are each prefixed with their color code; uncolored rows get
/// a single black-background prefix. Both end with a reset.
pub fn format_row(row: &[DisplayCell]) -> String {
    let mut line = String::with_capacity(row.len() * 2 + 16);
    let colored = row.first().is_some_and(|c| c.color.is_some());

    if !colored {
        line.push_str(BLACK_BACKGROUND);
    }
    for cell in row {
        if let Some(color) = cell.color {
            line.push_str(&escape::color_code(color));
        }
        line.push(cell.glyph);
        line.push(cell.glyph);
    }
    line.push_str(RESET);
    line
}

/// Write the header and every row of `grid` to `out`.
///
/// `size` is the requested target size, not the grid's actual size, since
/// the image may have been shrunk to keep its aspect ratio.
pub fn print_grid<W: Write>(
    out: &mut W,
    grid: &RenderGrid,
    size: (u32, u32),
) -> std::io::Result<()> {
    out.write_all(format_header(size).as_bytes())?;
    for row in grid.rows() {
        out.write_all(format_row(row).as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    log::debug!("Printed {} rows", grid.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::Rgb;

    fn cell(glyph: char, color: Option<Rgb>) -> DisplayCell {
        DisplayCell { glyph, color }
    }

    #[test]
    fn test_header_default_size() {
        assert_eq!(format_header((128, 128)), "\x1b[8;55;256t\x1b[128B");
    }

    #[test]
    fn test_header_uses_width_and_height_separately() {
        assert_eq!(format_header((40, 12)), "\x1b[8;55;80t\x1b[12B");
    }

    #[test]
    fn test_plain_row() {
        let row = [cell(' ', None), cell('#', None)];
        assert_eq!(format_row(&row), "\x1b[48;2;0;0;0;1m  ##\x1b[0m");
    }

    #[test]
    fn test_colored_row() {
        let row = [
            cell('W', Some(Rgb::new(255, 255, 255))),
            cell('.', Some(Rgb::new(1, 2, 3))),
        ];
        assert_eq!(
            format_row(&row),
            "\x1b[38;2;255;255;255;48;2;0;0;0;1mWW\x1b[38;2;1;2;3;48;2;0;0;0;1m..\x1b[0m"
        );
    }

    #[test]
    fn test_empty_row_still_resets() {
        assert_eq!(format_row(&[]), "\x1b[48;2;0;0;0;1m\x1b[0m");
    }
}
