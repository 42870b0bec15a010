//! Image decoding and preparation via the `image` crate.

use image::DynamicImage;
use std::path::Path;

use crate::ascii::{PixelGrid, Rgb};
use crate::error::AsciiError;

/// Decode the image at `path`.
pub fn load(path: &Path) -> Result<DynamicImage, AsciiError> {
    let image = image::open(path).map_err(|e| AsciiError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

/// Shrink `image` to fit inside `width` x `height`, keeping its aspect ratio.
///
/// Images that already fit are returned unchanged; this never enlarges.
pub fn fit(image: DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.width() <= width && image.height() <= height {
        return image;
    }
    image.thumbnail(width, height)
}

/// Invert every color channel.
pub fn invert(mut image: DynamicImage) -> DynamicImage {
    image.invert();
    image
}

/// Convert any decoded image to an RGB pixel grid, dropping alpha.
pub fn to_pixel_grid(image: &DynamicImage) -> Result<PixelGrid, AsciiError> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb.pixels().map(|p| Rgb::from(p.0)).collect();
    PixelGrid::new(width, height, pixels)
}
