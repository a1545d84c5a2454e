//! Working palette with per-slot locks
//!
//! The generators always produce a full fresh palette; this is where a
//! fresh palette is merged into the current one, leaving locked slots
//! untouched.

use tracing::debug;

use crate::color::{Color, Palette};
use crate::constants::palette::PALETTE_SIZE;
use crate::generator::{generate_harmony_palette, generate_mood_color, HarmonyScheme};
use crate::random::RandomSource;
use crate::{PaletteError, Result};

/// Which slots must survive regeneration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockMask([bool; PALETTE_SIZE]);

impl LockMask {
    pub const fn new(locks: [bool; PALETTE_SIZE]) -> Self {
        Self(locks)
    }

    pub fn is_locked(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Flip one slot and return its new state
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let slot = self
            .0
            .get_mut(index)
            .ok_or_else(|| PaletteError::invalid_argument("slot", index))?;
        *slot = !*slot;
        Ok(*slot)
    }

    pub fn locked_count(&self) -> usize {
        self.0.iter().filter(|&&locked| locked).count()
    }

    /// Copy unlocked slots of `fresh` into `current`
    ///
    /// Only the first `min(fresh.len(), 5)` slots are considered; the rest
    /// of `current` is left unchanged. Returns the number of slots written.
    pub fn merge(&self, current: &mut Palette, fresh: &[Color]) -> usize {
        let mut written = 0;
        for (index, &color) in fresh.iter().enumerate().take(PALETTE_SIZE) {
            if !self.is_locked(index) && current.set(index, color).is_ok() {
                written += 1;
            }
        }
        written
    }
}

/// The palette a user is currently working on
#[derive(Debug, Clone, Default)]
pub struct PaletteSession {
    palette: Palette,
    locks: LockMask,
    scheme: Option<HarmonyScheme>,
}

impl PaletteSession {
    /// Five white unlocked slots
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn locks(&self) -> &LockMask {
        &self.locks
    }

    /// Scheme of the last regeneration, if any
    pub fn scheme(&self) -> Option<HarmonyScheme> {
        self.scheme
    }

    pub fn is_locked(&self, index: usize) -> bool {
        self.locks.is_locked(index)
    }

    pub fn toggle_lock(&mut self, index: usize) -> Result<bool> {
        self.locks.toggle(index)
    }

    /// Replace every unlocked slot with a fresh harmony palette
    ///
    /// Returns the scheme used.
    pub fn regenerate(
        &mut self,
        scheme: Option<HarmonyScheme>,
        rng: &mut impl RandomSource,
    ) -> HarmonyScheme {
        let scheme = scheme.unwrap_or_else(|| HarmonyScheme::random(rng));
        let generated = generate_harmony_palette(Some(scheme), rng);
        let written = self.locks.merge(&mut self.palette, generated.palette.colors());
        debug!(scheme = scheme.name(), written, "regenerated palette");
        self.scheme = Some(scheme);
        scheme
    }

    /// Replace unlocked slots with colors extracted from an image
    ///
    /// An empty extraction is replaced by a single random mood color.
    /// Returns the number of slots written.
    pub fn apply_extracted(&mut self, colors: &[Color], rng: &mut impl RandomSource) -> usize {
        if colors.is_empty() {
            let fallback = [generate_mood_color(None, rng)];
            return self.locks.merge(&mut self.palette, &fallback);
        }
        self.locks.merge(&mut self.palette, colors)
    }
}
