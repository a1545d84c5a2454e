//! Color space conversion utilities
//!
//! Pure numeric conversions used by every generator:
//! - HSL to 24-bit RGB with the standard piecewise formula
//! - RGB to canonical `#RRGGBB` text
//! - Hex parsing
//! - Perceptual brightness and text contrast selection

use crate::color::Color;
use crate::constants::contrast::{
    BLUE_WEIGHT, BRIGHTNESS_THRESHOLD, DARK_TEXT, GREEN_WEIGHT, LIGHT_TEXT, RED_WEIGHT,
};
use crate::{PaletteError, Result};

/// Convert HSL to 8-bit RGB channels
///
/// # Arguments
///
/// * `h` - Hue in degrees; any real value, wrapped with a floored modulo
/// * `s` - Saturation in percent [0, 100]
/// * `l` - Lightness in percent [0, 100]
///
/// # Returns
///
/// `(r, g, b)` each rounded to nearest and clamped to [0, 255]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let l = l / 100.0;
    let a = s / 100.0 * l.min(1.0 - l);

    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (value * 255.0).round().clamp(0.0, 255.0) as u8
    };

    (channel(0.0), channel(8.0), channel(4.0))
}

/// Convert HSL to a `#RRGGBB` hex string
///
/// # Example
///
/// ```
/// use huecraft::color::conversion::hsl_to_hex;
///
/// assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00FF00");
/// ```
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let (r, g, b) = hsl_to_rgb(h, s, l);
    rgb_to_hex(r, g, b)
}

/// Convert RGB channels to an uppercase `#RRGGBB` hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Parse a hexadecimal color string to RGB channels
///
/// # Arguments
///
/// * `hex` - Hex color string (e.g., "#FF0000" or "ff0000")
///
/// # Errors
///
/// Returns `InvalidHexColor` if the string is not six hex digits
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = |reason: String| PaletteError::InvalidHexColor {
        value: hex.to_string(),
        reason,
    };

    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid(format!(
            "expected 6 hex digits, got {}",
            digits.chars().count()
        )));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid("non-hex character".to_string()));
    }

    let parse = |range: std::ops::Range<usize>, name: &str| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| invalid(format!("invalid {} value: {}", name, e)))
    };

    Ok((parse(0..2, "red")?, parse(2..4, "green")?, parse(4..6, "blue")?))
}

/// Perceptual brightness `(R·299 + G·587 + B·114) / 1000`
pub fn brightness(r: u8, g: u8, b: u8) -> f64 {
    let weighted =
        u32::from(r) * RED_WEIGHT + u32::from(g) * GREEN_WEIGHT + u32::from(b) * BLUE_WEIGHT;
    f64::from(weighted) / 1000.0
}

/// Readable text color for a background
///
/// Dark text (`#333333`) above the brightness threshold, white below.
pub fn contrast_for(background: &Color) -> Color {
    if background.brightness() > BRIGHTNESS_THRESHOLD {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Readable text color for a hex background, as hex
///
/// # Errors
///
/// Returns `InvalidHexColor` if `hex` cannot be parsed
pub fn contrast_color(hex: &str) -> Result<String> {
    let background = Color::from_hex(hex)?;
    Ok(contrast_for(&background).to_hex())
}
