//! Image loading into RGBA pixel buffers
//!
//! This module provides a single entry point for decoding an image file
//! into the RGBA buffer the dominant color extractor reads.
//!
//! ## Supported Formats
//!
//! Via the `image` crate: JPEG, PNG, GIF (first frame), WebP, TIFF, BMP.

use std::path::Path;

use image::{ImageFormat, ImageReader, RgbaImage};

use crate::error::{PaletteError, Result};

/// Load an image from disk as an RGBA buffer
///
/// # Errors
///
/// Returns `PaletteError::ImageLoadError` if:
/// - The extension is not a supported image format
/// - File cannot be opened
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use huecraft::image_loader::load_pixels;
/// use std::path::Path;
///
/// let pixels = load_pixels(Path::new("photo.jpg"))?;
/// println!("Loaded image: {}x{}", pixels.width(), pixels.height());
/// # Ok::<(), huecraft::PaletteError>(())
/// ```
pub fn load_pixels(path: &Path) -> Result<RgbaImage> {
    let format = ImageFormat::from_path(path).map_err(|e| {
        PaletteError::image_load(format!("Unknown image format for file: {}", path.display()), e)
    })?;
    if !format.reading_enabled() {
        return Err(PaletteError::ImageLoadError {
            message: format!("Unsupported image format {:?}: {}", format, path.display()),
            source: None,
        });
    }

    let reader = ImageReader::open(path).map_err(|e| {
        PaletteError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let reader = reader.with_guessed_format().map_err(|e| {
        PaletteError::image_load(format!("Failed to read image header: {}", path.display()), e)
    })?;

    let img = reader.decode().map_err(|e| {
        PaletteError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    Ok(img.to_rgba8())
}

/// Wrap a raw RGBA byte buffer
///
/// # Arguments
///
/// * `width`, `height` - Buffer dimensions in pixels
/// * `data` - Row-major RGBA samples, 4 bytes per pixel
///
/// # Errors
///
/// Returns `InvalidArgument` if `data` holds fewer than `width * height * 4` bytes
pub fn pixels_from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<RgbaImage> {
    let len = data.len();
    RgbaImage::from_raw(width, height, data).ok_or_else(|| {
        PaletteError::invalid_argument(
            "pixel buffer",
            format!("{} bytes for {}x{} RGBA", len, width, height),
        )
    })
}
