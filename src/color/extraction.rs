//! Dominant color extraction
//!
//! Finds the most frequent colors in an RGBA pixel buffer:
//! - Downscale so the longer side fits `max_dimension` (nearest neighbour)
//! - Sample every `sample_stride`-th pixel, skipping transparent ones
//! - Quantize each channel down to a multiple of `quantization_step`
//! - Rank buckets by count, ties broken by first appearance
//!
//! Extraction never fails; a buffer with no opaque samples yields an
//! empty list and the caller keeps its current colors.

use std::collections::HashMap;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::debug;

use crate::color::Color;
use crate::config::ExtractionConfig;
use crate::Result;

/// Frequency of one quantized bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBucket {
    /// Quantized representative color
    pub color: Color,
    /// Number of sampled pixels that fell into this bucket
    pub count: usize,
}

/// Frequency-based dominant color extractor
#[derive(Debug, Clone)]
pub struct DominantColorExtractor {
    config: ExtractionConfig,
}

impl Default for DominantColorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DominantColorExtractor {
    /// Create an extractor with default parameters
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// Create an extractor with custom parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the configuration has a zero stride,
    /// step or dimension
    pub fn with_config(config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract up to `max_colors` dominant colors, most frequent first
    ///
    /// # Arguments
    ///
    /// * `pixels` - RGBA buffer; read only, not retained
    ///
    /// # Returns
    ///
    /// Quantized colors; empty if no sampled pixel is opaque enough
    pub fn extract(&self, pixels: &RgbaImage) -> Vec<Color> {
        self.rank_buckets(pixels)
            .into_iter()
            .take(self.config.max_colors)
            .map(|bucket| bucket.color)
            .collect()
    }

    /// All buckets with their counts, most frequent first
    pub fn rank_buckets(&self, pixels: &RgbaImage) -> Vec<ColorBucket> {
        let scaled = self.downscale(pixels);
        let image = scaled.as_ref().unwrap_or(pixels);

        let mut buckets = self.count_buckets(image);
        // Stable sort keeps first-seen order among equal counts
        buckets.sort_by(|a, b| b.count.cmp(&a.count));

        debug!(
            width = image.width(),
            height = image.height(),
            buckets = buckets.len(),
            "ranked color buckets"
        );
        buckets
    }

    /// Nearest-neighbour downscale, or `None` if the image already fits
    fn downscale(&self, pixels: &RgbaImage) -> Option<RgbaImage> {
        let (width, height) = pixels.dimensions();
        let max_dim = self.config.max_dimension;
        if width.max(height) <= max_dim {
            return None;
        }

        let scale = f64::from(max_dim) / f64::from(width.max(height));
        let new_width = ((f64::from(width) * scale) as u32).clamp(1, max_dim);
        let new_height = ((f64::from(height) * scale) as u32).clamp(1, max_dim);

        Some(imageops::resize(pixels, new_width, new_height, FilterType::Nearest))
    }

    /// Count sampled pixels per quantized bucket, in first-seen order
    fn count_buckets(&self, image: &RgbaImage) -> Vec<ColorBucket> {
        let mut index: HashMap<[u8; 3], usize> = HashMap::new();
        let mut buckets: Vec<ColorBucket> = Vec::new();
        let mut sampled = 0usize;

        for pixel in image.pixels().step_by(self.config.sample_stride) {
            let [r, g, b, a] = pixel.0;
            if a < self.config.alpha_threshold {
                continue;
            }
            sampled += 1;

            let key = [self.quantize(r), self.quantize(g), self.quantize(b)];
            match index.get(&key) {
                Some(&slot) => buckets[slot].count += 1,
                None => {
                    index.insert(key, buckets.len());
                    buckets.push(ColorBucket {
                        color: Color::from_rgb(key[0], key[1], key[2]),
                        count: 1,
                    });
                }
            }
        }

        debug!(sampled, distinct = buckets.len(), "sampled opaque pixels");
        buckets
    }

    /// Round a channel down to the nearest multiple of the step
    fn quantize(&self, channel: u8) -> u8 {
        let step = self.config.quantization_step;
        (channel / step) * step
    }
}

/// Extract dominant colors with the default configuration
pub fn extract_dominant_colors(pixels: &RgbaImage) -> Vec<Color> {
    DominantColorExtractor::new().extract(pixels)
}
