//! Saved palette list persisted as JSON
//!
//! Palettes are kept most recent first. A missing file is an empty list;
//! an unreadable or corrupt file is logged and treated as empty so a bad
//! file never blocks palette generation.

use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::{Color, Palette};
use crate::constants::store::DATE_FORMAT;
use crate::{PaletteError, Result};

/// One saved palette record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    /// Creation time in epoch milliseconds; unique within a store
    pub id: i64,
    pub colors: Vec<Color>,
    /// Local calendar date the palette was saved
    pub date: String,
}

/// File-backed list of saved palettes
#[derive(Debug)]
pub struct PaletteStore {
    path: PathBuf,
    palettes: Vec<SavedPalette>,
}

impl PaletteStore {
    /// Open the store at `path`, reading any existing palettes
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let palettes = Self::read(&path);
        debug!(path = %path.display(), count = palettes.len(), "opened palette store");
        Self { path, palettes }
    }

    fn read(path: &Path) -> Vec<SavedPalette> {
        if !path.exists() {
            return Vec::new();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read saved palettes");
                return Vec::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(palettes) => palettes,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse saved palettes");
                Vec::new()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved palettes, most recent first
    pub fn list(&self) -> &[SavedPalette] {
        &self.palettes
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn get(&self, id: i64) -> Option<&SavedPalette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Save a palette at the front of the list and persist
    ///
    /// The record stays in memory even if writing fails.
    pub fn save(&mut self, palette: &Palette) -> Result<SavedPalette> {
        let mut id = Utc::now().timestamp_millis();
        if let Some(latest) = self.palettes.iter().map(|p| p.id).max() {
            id = id.max(latest + 1);
        }

        let record = SavedPalette {
            id,
            colors: palette.colors().to_vec(),
            date: Local::now().format(DATE_FORMAT).to_string(),
        };
        self.palettes.insert(0, record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Remove a palette by id and persist
    ///
    /// Returns whether a palette was removed.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let before = self.palettes.len();
        self.palettes.retain(|p| p.id != id);
        let removed = self.palettes.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                PaletteError::store(format!("Failed to create {}", parent.display()), e)
            })?;
        }
        let json = serde_json::to_string_pretty(&self.palettes)
            .map_err(|e| PaletteError::store("Failed to serialize palettes", e))?;
        std::fs::write(&self.path, json).map_err(|e| {
            PaletteError::store(format!("Failed to write {}", self.path.display()), e)
        })
    }
}
