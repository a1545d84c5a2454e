//! Harmony palette generation.
//!
//! Each scheme derives five colors from one randomly drawn base hue using a
//! color-theory relationship. The base hue is a whole number of degrees in
//! `[0, 360)` and is always the first draw of a generation.

use tracing::debug;

use crate::color::{Color, Palette};
use crate::constants::palette::PALETTE_SIZE;
use crate::generator::mood::generate_mood_color;
use crate::random::RandomSource;

/// Display label for palettes that follow no named scheme.
pub const FALLBACK_DISPLAY_NAME: &str = "✨ Premium Palette";

/// A color-theory rule relating the five hues of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyScheme {
    /// One hue, stepped lightness.
    Monochromatic,
    /// 30° steps around the wheel.
    Analogous,
    /// Base hue and its opposite, with small offsets.
    Complementary,
    /// Three hues 120° apart.
    Triadic,
    /// Four hues 90° apart.
    Tetradic,
    /// Base plus the two neighbours of its complement.
    SplitComplementary,
}

/// A generated palette together with the scheme that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPalette {
    pub palette: Palette,
    /// `None` when the palette came from the unknown-scheme fallback
    pub scheme: Option<HarmonyScheme>,
}

impl GeneratedPalette {
    /// Label for showing next to the palette.
    pub fn display_name(&self) -> &'static str {
        self.scheme.map_or(FALLBACK_DISPLAY_NAME, HarmonyScheme::display_name)
    }
}

impl HarmonyScheme {
    /// All schemes, in a fixed order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochromatic,
            Self::Analogous,
            Self::Complementary,
            Self::Triadic,
            Self::Tetradic,
            Self::SplitComplementary,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::SplitComplementary => "split-complementary",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Monochromatic => "🎨 Monochromatic Harmony",
            Self::Analogous => "🌈 Analogous Harmony",
            Self::Complementary => "⚡ Complementary Harmony",
            Self::Triadic => "🔺 Triadic Harmony",
            Self::Tetradic => "⬜ Tetradic Harmony",
            Self::SplitComplementary => "💫 Split-Complementary",
        }
    }

    /// Parse a scheme from its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// Uniformly pick one of the six schemes.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        rng.pick(Self::all()).copied().unwrap_or(Self::Analogous)
    }

    /// Derive the five colors of this scheme from `base_hue`.
    pub fn generate(self, base_hue: f64, rng: &mut impl RandomSource) -> Palette {
        let colors = match self {
            Self::Monochromatic => monochromatic(base_hue, rng),
            Self::Analogous => analogous(base_hue, rng),
            Self::Complementary => complementary(base_hue, rng),
            Self::Triadic => triadic(base_hue, rng),
            Self::Tetradic => tetradic(base_hue, rng),
            Self::SplitComplementary => split_complementary(base_hue),
        };
        Palette::new(colors)
    }
}

impl std::fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

type Slots = [Color; PALETTE_SIZE];

/// Build five colors from a per-slot `(h, s, l)` function.
fn slots(mut hsl: impl FnMut(usize) -> (f64, f64, f64)) -> Slots {
    std::array::from_fn(|i| {
        let (h, s, l) = hsl(i);
        Color::from_hsl(h, s, l)
    })
}

fn monochromatic(base_hue: f64, rng: &mut impl RandomSource) -> Slots {
    let base_sat = rng.uniform(60.0, 30.0);
    let base_lit = rng.uniform(45.0, 20.0);
    slots(|i| {
        let step = (i as f64 - 2.0) * 15.0;
        let s = (base_sat + rng.jitter(40.0)).clamp(20.0, 90.0);
        let l = (base_lit + step + rng.jitter(10.0)).clamp(20.0, 80.0);
        (base_hue, s, l)
    })
}

fn analogous(base_hue: f64, rng: &mut impl RandomSource) -> Slots {
    slots(|i| {
        let h = (base_hue + i as f64 * 30.0) % 360.0;
        (h, rng.uniform(60.0, 25.0), rng.uniform(45.0, 30.0))
    })
}

fn complementary(base_hue: f64, rng: &mut impl RandomSource) -> Slots {
    let complement = (base_hue + 180.0) % 360.0;
    slots(|i| {
        let h = if i < 3 {
            base_hue + i as f64 * 15.0
        } else {
            complement + (i as f64 - 3.0) * 15.0
        };
        (h, rng.uniform(65.0, 25.0), rng.uniform(40.0, 35.0))
    })
}

fn triadic(base_hue: f64, rng: &mut impl RandomSource) -> Slots {
    slots(|i| {
        let offset = if i > 2 { 20.0 } else { 0.0 };
        let h = (base_hue + (i % 3) as f64 * 120.0 + offset) % 360.0;
        (h, rng.uniform(60.0, 30.0), rng.uniform(40.0, 35.0))
    })
}

fn tetradic(base_hue: f64, rng: &mut impl RandomSource) -> Slots {
    let hues = [0.0, 90.0, 180.0, 270.0].map(|d| (base_hue + d) % 360.0);
    slots(|i| {
        let offset = if i == 4 { 30.0 } else { 0.0 };
        let h = hues[i % 4] + offset;
        (h, rng.uniform(65.0, 25.0), rng.uniform(45.0, 30.0))
    })
}

/// Fully determined by the base hue.
fn split_complementary(base_hue: f64) -> Slots {
    let split_a = (base_hue + 150.0) % 360.0;
    let split_b = (base_hue + 210.0) % 360.0;
    let hsl = [
        (base_hue, 70.0, 50.0),
        (split_a, 70.0, 50.0),
        (split_b, 70.0, 50.0),
        (base_hue + 30.0, 60.0, 60.0),
        (split_a + 15.0, 60.0, 60.0),
    ];
    hsl.map(|(h, s, l)| Color::from_hsl(h, s, l))
}

/// Generate a palette for `scheme`, or for a uniformly chosen scheme if `None`.
///
/// The scheme is chosen before the base hue is drawn.
pub fn generate_harmony_palette(
    scheme: Option<HarmonyScheme>,
    rng: &mut impl RandomSource,
) -> GeneratedPalette {
    let scheme = scheme.unwrap_or_else(|| HarmonyScheme::random(rng));
    let base_hue = rng.hue();
    let palette = scheme.generate(base_hue, rng);
    debug!(scheme = scheme.name(), base_hue, "generated harmony palette");
    GeneratedPalette {
        palette,
        scheme: Some(scheme),
    }
}

/// Generate a palette for a scheme given by name.
///
/// Unknown names produce five independent random-mood colors and report
/// no scheme.
pub fn generate_palette_by_name(name: &str, rng: &mut impl RandomSource) -> GeneratedPalette {
    match HarmonyScheme::from_name(name) {
        Some(scheme) => generate_harmony_palette(Some(scheme), rng),
        None => {
            debug!(name, "unknown harmony scheme, using mood colors");
            GeneratedPalette {
                palette: Palette::new(std::array::from_fn(|_| generate_mood_color(None, rng))),
                scheme: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, SequenceSource};

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_names_roundtrip() {
        for &scheme in HarmonyScheme::all() {
            assert_eq!(HarmonyScheme::from_name(scheme.name()), Some(scheme));
        }
        assert_eq!(
            HarmonyScheme::from_name("Split-Complementary"),
            Some(HarmonyScheme::SplitComplementary)
        );
        assert_eq!(HarmonyScheme::from_name("pentagram"), None);
    }

    #[test]
    fn test_every_scheme_reports_itself() {
        let mut rng = RngSource::seeded(2024);
        for &scheme in HarmonyScheme::all() {
            let generated = generate_harmony_palette(Some(scheme), &mut rng);
            assert_eq!(generated.scheme, Some(scheme));
            assert_eq!(generated.palette.iter().count(), 5);
            for color in &generated.palette {
                let hex = color.to_hex();
                assert_eq!(hex.len(), 7);
                assert!(hex.starts_with('#'));
            }
        }
    }

    #[test]
    fn test_unspecified_scheme_is_reported() {
        let mut rng = RngSource::seeded(17);
        for _ in 0..30 {
            let generated = generate_harmony_palette(None, &mut rng);
            assert!(generated.scheme.is_some());
            assert_ne!(generated.display_name(), FALLBACK_DISPLAY_NAME);
        }
    }

    #[test]
    fn test_split_complementary_determined_by_base_hue() {
        let mut a = SequenceSource::new(vec![0.25, 0.9, 0.1]);
        let mut b = SequenceSource::new(vec![0.25, 0.3, 0.7]);
        let first = generate_harmony_palette(Some(HarmonyScheme::SplitComplementary), &mut a);
        let second = generate_harmony_palette(Some(HarmonyScheme::SplitComplementary), &mut b);
        assert_eq!(first.palette, second.palette);
    }

    #[test]
    fn test_split_complementary_reference() {
        let mut rng = SequenceSource::constant(0.5);
        let palette = HarmonyScheme::SplitComplementary.generate(0.0, &mut rng);
        assert_eq!(palette[0], Color::from_hsl(0.0, 70.0, 50.0));
        assert_eq!(palette[1], Color::from_hsl(150.0, 70.0, 50.0));
        assert_eq!(palette[2], Color::from_hsl(210.0, 70.0, 50.0));
        assert_eq!(palette[3], Color::from_hsl(30.0, 60.0, 60.0));
        assert_eq!(palette[4], Color::from_hsl(165.0, 60.0, 60.0));
    }

    #[test]
    fn test_monochromatic_shares_base_hue() {
        for seed in 0..20 {
            let mut rng = RngSource::seeded(seed);
            let base_hue = rng.hue();
            let palette = HarmonyScheme::Monochromatic.generate(base_hue, &mut rng);
            for color in &palette {
                let (h, _, _) = color.hsl();
                assert!(
                    hue_distance(h, base_hue) < 5.0,
                    "seed {seed}: base {base_hue}, got {h} for {color}"
                );
            }
        }
    }

    #[test]
    fn test_monochromatic_lightness_steps() {
        // All draws at 0.5: sat 75, lit 55, zero jitter
        let mut rng = SequenceSource::constant(0.5);
        let palette = HarmonyScheme::Monochromatic.generate(200.0, &mut rng);
        let expected = [25.0, 40.0, 55.0, 70.0, 80.0];
        for (color, l) in palette.iter().zip(expected) {
            assert_eq!(*color, Color::from_hsl(200.0, 75.0, l));
        }
    }

    #[test]
    fn test_monochromatic_clamps() {
        // base sat 75, base lit 45, then (sat, lit) jitter draws per slot
        let mut rng = SequenceSource::new(vec![
            0.5, 0.0, // base
            0.99, 0.0, // slot 0: sat 94.6 -> 90, lit 10 -> 20
            0.0, 0.0, // slot 1: sat 55, lit 25
            0.5, 0.5, 0.5, 0.5, 0.5, 0.5,
        ]);
        let palette = HarmonyScheme::Monochromatic.generate(200.0, &mut rng);
        let expected = [
            (90.0, 20.0),
            (55.0, 25.0),
            (75.0, 45.0),
            (75.0, 60.0),
            (75.0, 75.0),
        ];
        for (color, (s, l)) in palette.iter().zip(expected) {
            assert_eq!(*color, Color::from_hsl(200.0, s, l));
        }
    }

    #[test]
    fn test_monochromatic_saturation_floor() {
        // Lowest base sat with the most negative jitter still sits above the floor
        let mut rng = SequenceSource::constant(0.0);
        let palette = HarmonyScheme::Monochromatic.generate(0.0, &mut rng);
        for (i, color) in palette.iter().enumerate() {
            let l = (45.0 + (i as f64 - 2.0) * 15.0 - 5.0_f64).clamp(20.0, 80.0);
            assert_eq!(*color, Color::from_hsl(0.0, 40.0, l));
        }
    }

    #[test]
    fn test_analogous_hue_steps() {
        let mut rng = SequenceSource::constant(0.0);
        let palette = HarmonyScheme::Analogous.generate(350.0, &mut rng);
        let hues = [350.0, 20.0, 50.0, 80.0, 110.0];
        for (color, h) in palette.iter().zip(hues) {
            assert_eq!(*color, Color::from_hsl(h, 60.0, 45.0));
        }
    }

    #[test]
    fn test_complementary_hues() {
        let mut rng = SequenceSource::constant(0.0);
        let palette = HarmonyScheme::Complementary.generate(10.0, &mut rng);
        let hues = [10.0, 25.0, 40.0, 190.0, 205.0];
        for (color, h) in palette.iter().zip(hues) {
            assert_eq!(*color, Color::from_hsl(h, 65.0, 40.0));
        }
    }

    #[test]
    fn test_triadic_hues() {
        let mut rng = SequenceSource::constant(0.0);
        let palette = HarmonyScheme::Triadic.generate(300.0, &mut rng);
        let hues = [300.0, 60.0, 180.0, 320.0, 80.0];
        for (color, h) in palette.iter().zip(hues) {
            assert_eq!(*color, Color::from_hsl(h, 60.0, 40.0));
        }
    }

    #[test]
    fn test_tetradic_hues() {
        let mut rng = SequenceSource::constant(0.0);
        let palette = HarmonyScheme::Tetradic.generate(300.0, &mut rng);
        let hues = [300.0, 30.0, 120.0, 210.0, 330.0];
        for (color, h) in palette.iter().zip(hues) {
            assert_eq!(*color, Color::from_hsl(h, 65.0, 45.0));
        }
    }

    #[test]
    fn test_base_hue_drawn_after_scheme() {
        // 0.9 picks index 5 (split-complementary), 0.5 gives base hue 180
        let mut rng = SequenceSource::new(vec![0.9, 0.5]);
        let generated = generate_harmony_palette(None, &mut rng);
        assert_eq!(generated.scheme, Some(HarmonyScheme::SplitComplementary));
        assert_eq!(generated.palette[0], Color::from_hsl(180.0, 70.0, 50.0));
    }

    #[test]
    fn test_unknown_name_falls_back_to_moods() {
        let mut rng = RngSource::seeded(4);
        let generated = generate_palette_by_name("golden-ratio", &mut rng);
        assert_eq!(generated.scheme, None);
        assert_eq!(generated.display_name(), FALLBACK_DISPLAY_NAME);
        assert_eq!(generated.palette.iter().count(), 5);
    }

    #[test]
    fn test_known_name_dispatches() {
        let mut rng = RngSource::seeded(4);
        let generated = generate_palette_by_name("triadic", &mut rng);
        assert_eq!(generated.scheme, Some(HarmonyScheme::Triadic));
        assert_eq!(generated.display_name(), "🔺 Triadic Harmony");
    }
}
