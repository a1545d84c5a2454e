//! Color and palette value types
//!
//! A [`Color`] is a 24-bit sRGB triple whose canonical text form is
//! `#RRGGBB` with uppercase digits. A [`Palette`] is exactly five colors;
//! slot order matters to callers (UI position and lock state) but carries
//! no meaning inside the engine.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use palette::{encoding, FromColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};

use crate::color::conversion;
use crate::constants::palette::{INITIAL_COLOR, PALETTE_SIZE};
use crate::{PaletteError, Result};

/// An opaque 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Build a color from its channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from hue (degrees), saturation and lightness (percent)
    ///
    /// Uses the exact formula of [`conversion::hsl_to_rgb`]; hue wraps.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = conversion::hsl_to_rgb(h, s, l);
        Self::from_rgb(r, g, b)
    }

    /// Parse `#RRGGBB` or `RRGGBB` (either case)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let (r, g, b) = conversion::hex_to_rgb(hex)?;
        Ok(Self::from_rgb(r, g, b))
    }

    pub fn red(&self) -> u8 {
        self.r
    }

    pub fn green(&self) -> u8 {
        self.g
    }

    pub fn blue(&self) -> u8 {
        self.b
    }

    /// Channels as an `(r, g, b)` tuple
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Same color as a `palette` sRGB value
    pub fn srgb(&self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Canonical `#RRGGBB` form
    pub fn to_hex(&self) -> String {
        conversion::rgb_to_hex(self.r, self.g, self.b)
    }

    /// Inverse-map to `(hue°, saturation%, lightness%)`
    ///
    /// Hue is in `[0, 360)`; achromatic colors report hue `0`.
    pub fn hsl(&self) -> (f64, f64, f64) {
        let hsl: Hsl<encoding::Srgb, f64> = Hsl::from_color(self.srgb().into_format::<f64>());
        (
            hsl.hue.into_positive_degrees(),
            hsl.saturation * 100.0,
            hsl.lightness * 100.0,
        )
    }

    /// Perceptual brightness in `[0, 255]`
    pub fn brightness(&self) -> f64 {
        conversion::brightness(self.r, self.g, self.b)
    }

    /// Readable text color to draw on top of this one
    pub fn contrast(&self) -> Color {
        conversion::contrast_for(self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        Self::from_rgb(rgb.red, rgb.green, rgb.blue)
    }
}

/// Exactly five colors, in slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Palette {
    pub const fn new(colors: [Color; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Build from a slice that must hold exactly five colors
    pub fn from_slice(colors: &[Color]) -> Result<Self> {
        let colors: [Color; PALETTE_SIZE] = colors
            .try_into()
            .map_err(|_| PaletteError::invalid_argument("palette length", colors.len()))?;
        Ok(Self { colors })
    }

    /// Five white slots, the state before anything is generated
    pub const fn blank() -> Self {
        Self::new([INITIAL_COLOR; PALETTE_SIZE])
    }

    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    /// Replace one slot
    pub fn set(&mut self, index: usize, color: Color) -> Result<()> {
        let slot = self
            .colors
            .get_mut(index)
            .ok_or_else(|| PaletteError::invalid_argument("slot", index))?;
        *slot = color;
        Ok(())
    }

    /// Hex strings in slot order
    pub fn to_hex_vec(&self) -> Vec<String> {
        self.colors.iter().map(Color::to_hex).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::blank()
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
