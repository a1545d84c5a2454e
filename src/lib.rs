//! # HueCraft
//!
//! A Rust crate for generating five-color design palettes.
//!
//! This library produces palettes by:
//! - Applying color-harmony rules to a random base hue
//! - Sampling single colors from qualitative moods
//! - Extracting the dominant colors of an image
//! - Converting between HSL, RGB and `#RRGGBB` hex
//!
//! All randomness flows through an injectable [`RandomSource`], so a
//! seeded source reproduces the same palette.
//!
//! ## Example
//!
//! ```rust
//! use huecraft::{generate_harmony_palette, HarmonyScheme, RngSource};
//!
//! let mut rng = RngSource::seeded(7);
//! let generated = generate_harmony_palette(Some(HarmonyScheme::Triadic), &mut rng);
//! assert_eq!(generated.scheme, Some(HarmonyScheme::Triadic));
//! for color in &generated.palette {
//!     println!("{}", color);
//! }
//! ```

use std::path::Path;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod generator;
pub mod image_loader;
pub mod random;
pub mod session;
pub mod store;

pub use color::{Color, DominantColorExtractor, Palette};
pub use config::{EngineConfig, ExportConfig, ExtractionConfig, StoreConfig};
pub use error::{PaletteError, Result};
pub use generator::{
    generate_color_by_name, generate_harmony_palette, generate_mood_color,
    generate_palette_by_name, GeneratedPalette, HarmonyScheme, Mood,
};
pub use random::{RandomSource, RngSource, SequenceSource};
pub use session::{LockMask, PaletteSession};
pub use store::{PaletteStore, SavedPalette};

/// Extract the dominant colors of an image file
///
/// Decodes the image and runs the extractor configured by `config`.
///
/// # Arguments
///
/// * `image_path` - Path to the image file
/// * `config` - Downscale, sampling and bucketing parameters
///
/// # Returns
///
/// Up to `config.max_colors` colors, most frequent first; empty for a
/// fully transparent image
///
/// # Errors
///
/// Returns `PaletteError` if:
/// - The image cannot be loaded or decoded
/// - The configuration has a zero stride, step or dimension
pub fn extract_palette_from_image(
    image_path: &Path,
    config: &ExtractionConfig,
) -> Result<Vec<Color>> {
    let extractor = DominantColorExtractor::with_config(config.clone())?;
    let pixels = image_loader::load_pixels(image_path)?;
    Ok(extractor.extract(&pixels))
}
