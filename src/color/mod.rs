//! Color model, conversion and extraction module
//!
//! This module holds the color value types, the pure HSL/RGB/hex
//! conversions, and dominant-color extraction from pixel buffers.

pub mod conversion;
pub mod extraction;
pub mod model;

pub use conversion::{contrast_color, contrast_for, hsl_to_hex, rgb_to_hex};
pub use extraction::{extract_dominant_colors, DominantColorExtractor};
pub use model::{Color, Palette};
