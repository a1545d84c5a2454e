//! Palette and color generation
//!
//! Generators draw every random value through a [`RandomSource`], so a
//! seeded or replayed source reproduces the exact same output.
//!
//! [`RandomSource`]: crate::random::RandomSource

pub mod harmony;
pub mod mood;

pub use harmony::{
    generate_harmony_palette, generate_palette_by_name, GeneratedPalette, HarmonyScheme,
};
pub use mood::{generate_color_by_name, generate_mood_color, Mood};
