//! Configuration structures for the huecraft engine.
//!
//! Groups the tunable parameters for dominant-color extraction, PNG export
//! and saved-palette persistence.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use huecraft::EngineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = EngineConfig::from_json_file(Path::new("huecraft.json"))?;
//!
//! // Or use defaults
//! let config = EngineConfig::default();
//! # Ok::<(), huecraft::PaletteError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ExtractionConfig`]: downscale, sampling and bucketing parameters
//! - [`ExportConfig`]: PNG canvas size and hex labels
//! - [`StoreConfig`]: location of the saved palette list

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{export, extraction, store};
use crate::{PaletteError, Result};

/// Complete engine configuration.
///
/// Every section falls back to its defaults when omitted from a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Dominant-color extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// PNG export configuration
    #[serde(default)]
    pub export: ExportConfig,

    /// Saved palette store configuration
    #[serde(default)]
    pub store: StoreConfig,
}

/// Dominant-color extraction parameters.
///
/// Sampling density is a performance trade-off; any stride gives the same
/// ranking on images whose colors are evenly spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Longest side after downscaling, in pixels
    pub max_dimension: u32,

    /// Examine one pixel out of every `sample_stride`
    pub sample_stride: usize,

    /// Channel bucket width
    pub quantization_step: u8,

    /// Minimum alpha for a pixel to count
    pub alpha_threshold: u8,

    /// Maximum number of colors returned
    pub max_colors: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_dimension: extraction::MAX_DIMENSION,
            sample_stride: extraction::SAMPLE_STRIDE,
            quantization_step: extraction::QUANTIZATION_STEP,
            alpha_threshold: extraction::ALPHA_THRESHOLD,
            max_colors: extraction::MAX_COLORS,
        }
    }
}

impl ExtractionConfig {
    /// Reject parameters that would divide by zero or produce no samples
    pub fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 {
            return Err(PaletteError::invalid_argument("max_dimension", self.max_dimension));
        }
        if self.sample_stride == 0 {
            return Err(PaletteError::invalid_argument("sample_stride", self.sample_stride));
        }
        if self.quantization_step == 0 {
            return Err(PaletteError::invalid_argument(
                "quantization_step",
                self.quantization_step,
            ));
        }
        Ok(())
    }
}

/// PNG export canvas parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Canvas width in pixels; split evenly between the five colors
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Draw each block's hex code in its contrast color
    pub labels: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: export::WIDTH,
            height: export::HEIGHT,
            labels: true,
        }
    }
}

/// Saved palette persistence parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON file holding the saved palettes
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(store::DEFAULT_FILE_NAME),
        }
    }
}

impl EngineConfig {
    /// Check every section
    pub fn validate(&self) -> Result<()> {
        self.extraction.validate()?;
        if self.export.width == 0 || self.export.height == 0 {
            return Err(PaletteError::invalid_argument(
                "export size",
                format!("{}x{}", self.export.width, self.export.height),
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PaletteError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            PaletteError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaletteError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            PaletteError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.extraction.max_dimension, 150);
        assert_eq!(config.extraction.sample_stride, 4);
        assert_eq!(config.extraction.alpha_threshold, 128);
        assert_eq!(config.export.width, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "extraction": { "sample_stride": 1 } }"#).unwrap();
        assert_eq!(config.extraction.sample_stride, 1);
        assert_eq!(config.extraction.quantization_step, 20);
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = EngineConfig::default();
        config.export.height = 120;
        config.to_json_file(&path).unwrap();

        let loaded = EngineConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        match EngineConfig::from_json_file(&path) {
            Err(PaletteError::ConfigError { .. }) => {}
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_step_rejected() {
        let mut config = EngineConfig::default();
        config.extraction.quantization_step = 0;
        assert!(matches!(
            config.validate(),
            Err(PaletteError::InvalidArgument { .. })
        ));
    }
}
