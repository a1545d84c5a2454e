//! Mood color generation.
//!
//! A mood fixes the sampling ranges for one independently drawn color.
//! Most moods take any hue; earthy and jewel snap to a small set of anchor
//! hues and add a little jitter.

use tracing::debug;

use crate::color::Color;
use crate::random::RandomSource;

/// Anchor hues for browns, oranges and greens.
const EARTHY_HUES: [f64; 8] = [20.0, 30.0, 35.0, 40.0, 60.0, 80.0, 100.0, 120.0];
/// Total jitter width around an earthy anchor (±10°).
const EARTHY_JITTER: f64 = 20.0;

/// Anchor hues for ruby, amber, citrine, emerald, teal, sapphire, amethyst, rose.
const JEWEL_HUES: [f64; 8] = [0.0, 30.0, 60.0, 120.0, 180.0, 240.0, 280.0, 320.0];
/// Total jitter width around a jewel anchor (±7.5°).
const JEWEL_JITTER: f64 = 15.0;

/// Qualitative style of a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    /// Saturated mid-lightness colors.
    Vibrant,
    /// Light, soft colors.
    Pastel,
    /// Dark, saturated colors.
    Deep,
    /// Desaturated colors.
    Muted,
    /// Saturated light colors.
    Bright,
    /// Browns, oranges and greens.
    Earthy,
    /// Rich gemstone hues.
    Jewel,
}

/// Sampling ranges as `(lower bound, span)` in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Ranges {
    saturation: (f64, f64),
    lightness: (f64, f64),
}

impl Mood {
    /// All moods, in a fixed order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Vibrant,
            Self::Pastel,
            Self::Deep,
            Self::Muted,
            Self::Bright,
            Self::Earthy,
            Self::Jewel,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Vibrant => "vibrant",
            Self::Pastel => "pastel",
            Self::Deep => "deep",
            Self::Muted => "muted",
            Self::Bright => "bright",
            Self::Earthy => "earthy",
            Self::Jewel => "jewel",
        }
    }

    /// Parse a mood from its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|m| m.name() == lower).copied()
    }

    /// Uniformly pick one of the seven moods.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        rng.pick(Self::all()).copied().unwrap_or(Self::Vibrant)
    }

    const fn ranges(self) -> Ranges {
        let (saturation, lightness) = match self {
            Self::Vibrant => ((70.0, 30.0), (45.0, 20.0)),
            Self::Pastel => ((25.0, 40.0), (75.0, 20.0)),
            Self::Deep => ((60.0, 40.0), (15.0, 30.0)),
            Self::Muted => ((20.0, 40.0), (40.0, 40.0)),
            Self::Bright => ((80.0, 20.0), (60.0, 25.0)),
            Self::Earthy => ((30.0, 50.0), (25.0, 50.0)),
            Self::Jewel => ((70.0, 30.0), (30.0, 25.0)),
        };
        Ranges {
            saturation,
            lightness,
        }
    }

    fn sample_hue(self, rng: &mut impl RandomSource) -> f64 {
        match self {
            Self::Earthy => anchored_hue(&EARTHY_HUES, EARTHY_JITTER, rng),
            Self::Jewel => anchored_hue(&JEWEL_HUES, JEWEL_JITTER, rng),
            _ => rng.hue(),
        }
    }

    /// Draw `(h, s, l)` for this mood.
    ///
    /// Hue is drawn first, then saturation, then lightness.
    pub fn sample_hsl(self, rng: &mut impl RandomSource) -> (f64, f64, f64) {
        let ranges = self.ranges();
        let h = self.sample_hue(rng);
        let s = rng.uniform(ranges.saturation.0, ranges.saturation.1);
        let l = rng.uniform(ranges.lightness.0, ranges.lightness.1);
        (h, s, l)
    }

    /// Generate one color in this mood.
    pub fn generate(self, rng: &mut impl RandomSource) -> Color {
        let (h, s, l) = self.sample_hsl(rng);
        Color::from_hsl(h, s, l)
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn anchored_hue(anchors: &[f64], jitter: f64, rng: &mut impl RandomSource) -> f64 {
    let anchor = rng.pick(anchors).copied().unwrap_or(0.0);
    anchor + rng.jitter(jitter)
}

/// Generate one color for `mood`, or for a uniformly chosen mood if `None`.
pub fn generate_mood_color(mood: Option<Mood>, rng: &mut impl RandomSource) -> Color {
    let mood = mood.unwrap_or_else(|| Mood::random(rng));
    let color = mood.generate(rng);
    debug!(mood = mood.name(), color = %color, "generated mood color");
    color
}

/// Generate one color for a mood given by name.
///
/// Unknown names fall back to a color drawn from a broad range
/// (any hue, saturation 50-100%, lightness 40-80%).
pub fn generate_color_by_name(name: &str, rng: &mut impl RandomSource) -> Color {
    match Mood::from_name(name) {
        Some(mood) => generate_mood_color(Some(mood), rng),
        None => {
            debug!(name, "unknown mood, using fallback range");
            fallback_color(rng)
        }
    }
}

fn fallback_color(rng: &mut impl RandomSource) -> Color {
    let h = rng.hue();
    let s = rng.uniform(50.0, 50.0);
    let l = rng.uniform(40.0, 40.0);
    Color::from_hsl(h, s, l)
}
