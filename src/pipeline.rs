//! End-to-end conversion: load, prepare, render, print.

use std::io::Write;
use std::path::Path;

use crate::ascii;
use crate::error::AsciiError;
use crate::image_source;
use crate::options::RenderOptions;
use crate::terminal;

/// Convert the image at `file` and write diagnostics and the rendering to `out`.
///
/// Diagnostics (sizes and the brightness range) are always written; the
/// rendering itself is skipped when `options.quiet` is set. Any failure is
/// returned before the rendering starts, so there is no partial image.
pub fn run<W: Write>(file: &Path, options: &RenderOptions, out: &mut W) -> Result<(), AsciiError> {
    let image = image_source::load(file)?;
    writeln!(out, "Original size: ({}, {})", image.width(), image.height())?;

    writeln!(out, "Resizing...")?;
    let (width, height) = options.size;
    let image = image_source::fit(image, width, height);
    writeln!(out, "New size: ({}, {})", image.width(), image.height())?;

    writeln!(out, "Processing image...")?;
    let image = if options.invert {
        image_source::invert(image)
    } else {
        image
    };
    let grid = image_source::to_pixel_grid(&image)?;

    let (rendered, range) = ascii::render(&grid, options);
    writeln!(out, "Min brightness: {}", range.min)?;
    writeln!(out, "Max brightness: {}", range.max)?;

    if options.quiet {
        log::debug!("Quiet mode, skipping output");
        return Ok(());
    }
    terminal::print_grid(out, &rendered, options.size)?;
    Ok(())
}
