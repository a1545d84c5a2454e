//! Error types for the huecraft library

use thiserror::Error;

/// Result type alias for huecraft operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for palette generation, extraction and persistence
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Caller precondition violated (absent buffer, slot out of range, zero stride...)
    #[error("Invalid argument: {parameter} = {value}")]
    InvalidArgument { parameter: String, value: String },

    /// Hex color string could not be parsed
    #[error("Invalid hex color '{value}': {reason}")]
    InvalidHexColor { value: String, reason: String },

    /// Configuration file could not be read or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Saved palette store could not be persisted
    #[error("Palette store error: {message}")]
    StoreError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// PNG export failed
    #[error("Export error: {message}")]
    ExportError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PaletteError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a store error with context
    pub fn store<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::StoreError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an export error with context
    pub fn export<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ExportError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Persistence failures leave the in-memory palette intact, so the
    /// caller can keep working.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaletteError::StoreError { .. }
                | PaletteError::ExportError { .. }
                | PaletteError::InvalidHexColor { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::ImageLoadError { .. } => {
                "Please select a valid image file.".to_string()
            }
            PaletteError::InvalidHexColor { value, .. } => {
                format!("'{}' is not a valid color. Use the #RRGGBB format.", value)
            }
            PaletteError::StoreError { .. } => {
                "Could not save your palettes. Changes are kept for this session only.".to_string()
            }
            PaletteError::ExportError { .. } => {
                "Could not export the palette image. Please check the output folder.".to_string()
            }
            _ => "Something went wrong while working on the palette.".to_string(),
        }
    }
}
