//! Engine constants and reference values
//!
//! Compile-time constants for palette generation, dominant-color
//! extraction and export, grouped by concern.

use crate::color::Color;

/// Palette shape
pub mod palette {
    use super::Color;

    /// Number of colors in every palette
    pub const PALETTE_SIZE: usize = 5;

    /// Color every slot starts with before the first generation
    pub const INITIAL_COLOR: Color = Color::from_rgb(0xFF, 0xFF, 0xFF);
}

/// Text contrast selection
pub mod contrast {
    use super::Color;

    /// Perceptual brightness above which dark text is used
    pub const BRIGHTNESS_THRESHOLD: f64 = 128.0;

    /// Text color on light backgrounds
    pub const DARK_TEXT: Color = Color::from_rgb(0x33, 0x33, 0x33);

    /// Text color on dark backgrounds
    pub const LIGHT_TEXT: Color = Color::from_rgb(0xFF, 0xFF, 0xFF);

    /// ITU-R BT.601 luma weights (per mille)
    pub const RED_WEIGHT: u32 = 299;
    pub const GREEN_WEIGHT: u32 = 587;
    pub const BLUE_WEIGHT: u32 = 114;
}

/// Dominant-color extraction parameters
pub mod extraction {
    /// Longest image side after downscaling
    pub const MAX_DIMENSION: u32 = 150;

    /// Examine one pixel out of this many
    pub const SAMPLE_STRIDE: usize = 4;

    /// Channel quantization bucket width
    pub const QUANTIZATION_STEP: u8 = 20;

    /// Pixels with alpha below this are treated as transparent
    pub const ALPHA_THRESHOLD: u8 = 128;

    /// Maximum number of colors returned
    pub const MAX_COLORS: usize = 5;
}

/// PNG export canvas
pub mod export {
    /// Canvas width in pixels
    pub const WIDTH: u32 = 1000;

    /// Canvas height in pixels
    pub const HEIGHT: u32 = 200;

    /// Block width per unit of label scale
    pub const LABEL_WIDTH_PER_SCALE: u32 = 48;

    /// Canvas height per unit of label scale
    pub const LABEL_HEIGHT_PER_SCALE: u32 = 40;

    /// File name prefix for exported palettes
    pub const FILE_PREFIX: &str = "huecraft-palette";
}

/// Saved palette persistence
pub mod store {
    /// Default file name of the saved palette list
    pub const DEFAULT_FILE_NAME: &str = "huecraft-palettes.json";

    /// Date format attached to each saved palette
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}
