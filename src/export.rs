//! PNG export of a palette
//!
//! Renders the five colors as equal-width vertical blocks. The last block
//! absorbs any remainder when the width does not split evenly. Each block
//! carries its hex code, drawn with a built-in 5x7 bitmap font in the
//! block's contrast color.

use std::path::{Path, PathBuf};

use chrono::Utc;
use image::{Rgb, RgbImage};
use tracing::debug;

use crate::color::{contrast_for, Color, Palette};
use crate::config::ExportConfig;
use crate::constants::export::{FILE_PREFIX, LABEL_HEIGHT_PER_SCALE, LABEL_WIDTH_PER_SCALE};
use crate::{PaletteError, Result};

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Glyph width plus one column of spacing
const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Row bitmaps for the characters of a hex code, top row first.
/// Bit 4 is the leftmost column.
fn glyph(c: char) -> Option<[u8; GLYPH_HEIGHT as usize]> {
    let rows = match c {
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        _ => return None,
    };
    Some(rows)
}

fn to_rgb(color: Color) -> Rgb<u8> {
    let (r, g, b) = color.rgb();
    Rgb([r, g, b])
}

/// Draw `text` centred on `center`, clipped to the canvas
fn draw_label(image: &mut RgbImage, text: &str, center: (u32, u32), scale: u32, ink: Rgb<u8>) {
    let chars = text.chars().count() as u32;
    let text_width = (chars * GLYPH_ADVANCE).saturating_sub(1) * scale;
    let left = center.0.saturating_sub(text_width / 2);
    let top = center.1.saturating_sub(GLYPH_HEIGHT * scale / 2);

    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else { continue };
        let glyph_left = left + i as u32 * GLYPH_ADVANCE * scale;
        for (row, bits) in (0..GLYPH_HEIGHT).zip(rows) {
            for col in (0..GLYPH_WIDTH).filter(|col| bits & (0x10 >> col) != 0) {
                let x0 = glyph_left + col * scale;
                let y0 = top + row * scale;
                for y in y0..(y0 + scale).min(image.height()) {
                    for x in x0..(x0 + scale).min(image.width()) {
                        image.put_pixel(x, y, ink);
                    }
                }
            }
        }
    }
}

/// Draw the palette onto a new canvas
pub fn render_palette(palette: &Palette, config: &ExportConfig) -> RgbImage {
    let count = palette.colors().len() as u32;
    let block_width = (config.width / count).max(1);
    let slot_of = |x: u32| ((x / block_width) as usize).min(count as usize - 1);

    let mut image =
        RgbImage::from_fn(config.width, config.height, |x, _| to_rgb(palette[slot_of(x)]));

    let scale = (block_width / LABEL_WIDTH_PER_SCALE).min(config.height / LABEL_HEIGHT_PER_SCALE);
    if config.labels && scale > 0 {
        for (slot, color) in palette.iter().enumerate() {
            let start = slot as u32 * block_width;
            let end = if slot + 1 == count as usize {
                config.width
            } else {
                start + block_width
            };
            let center = ((start + end) / 2, config.height / 2);
            draw_label(&mut image, &color.to_hex(), center, scale, to_rgb(contrast_for(color)));
        }
    }
    image
}

/// File name used for an export made at `millis`
pub fn export_file_name(millis: i64) -> String {
    format!("{}-{}.png", FILE_PREFIX, millis)
}

/// Render and write the palette as PNG into `dir`
///
/// Returns the path of the written file.
pub fn export_png(palette: &Palette, dir: &Path, config: &ExportConfig) -> Result<PathBuf> {
    if config.width == 0 || config.height == 0 {
        return Err(PaletteError::invalid_argument(
            "export size",
            format!("{}x{}", config.width, config.height),
        ));
    }

    let path = dir.join(export_file_name(Utc::now().timestamp_millis()));
    render_palette(palette, config)
        .save(&path)
        .map_err(|e| PaletteError::export(format!("Failed to write {}", path.display()), e))?;

    debug!(path = %path.display(), "exported palette");
    Ok(path)
}
