//! Integration tests for the palette engine
//!
//! These tests exercise the public API end to end:
//! - Harmony and mood generation with injected randomness
//! - Dominant color extraction from decoded image files
//! - Lock-aware regeneration and extraction merging
//! - Saved palette persistence and PNG export

use huecraft::color::conversion::{contrast_color, hex_to_rgb, hsl_to_hex, rgb_to_hex};
use huecraft::image_loader::{load_pixels, pixels_from_raw};
use huecraft::{
    extract_palette_from_image, generate_harmony_palette, generate_mood_color, Color,
    DominantColorExtractor, EngineConfig, ExtractionConfig, HarmonyScheme, Mood, PaletteError,
    PaletteSession, PaletteStore, RngSource, SequenceSource,
};
use image::{Rgba, RgbaImage};
use std::path::Path;

fn is_canonical_hex(hex: &str) -> bool {
    hex.len() == 7
        && hex.starts_with('#')
        && hex[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

// ============================================================================
// Color Space Converter
// ============================================================================

#[test]
fn test_reference_conversions() {
    assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
    assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#FFFFFF");
    assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00FF00");
    assert_eq!(rgb_to_hex(255, 0, 0), "#FF0000");
}

#[test]
fn test_contrast_color_extremes() {
    assert_eq!(contrast_color("#FFFFFF").unwrap(), "#333333");
    assert_eq!(contrast_color("#000000").unwrap(), "#FFFFFF");
}

#[test]
fn test_rgb_hex_roundtrip_sampled_cube() {
    for r in (0..=255u16).step_by(17) {
        for g in (0..=255u16).step_by(15) {
            for b in (0..=255u16).step_by(5) {
                let (r, g, b) = (r as u8, g as u8, b as u8);
                let hex = rgb_to_hex(r, g, b);
                assert!(is_canonical_hex(&hex));
                assert_eq!(hex_to_rgb(&hex).unwrap(), (r, g, b));
            }
        }
    }
}

// ============================================================================
// Generators
// ============================================================================

#[test]
fn test_every_scheme_yields_five_hex_colors() {
    let mut rng = RngSource::seeded(31);
    for _ in 0..25 {
        for &scheme in HarmonyScheme::all() {
            let generated = generate_harmony_palette(Some(scheme), &mut rng);
            assert_eq!(generated.scheme, Some(scheme));
            let hexes = generated.palette.to_hex_vec();
            assert_eq!(hexes.len(), 5);
            assert!(hexes.iter().all(|h| is_canonical_hex(h)), "{hexes:?}");
        }
    }
}

#[test]
fn test_split_complementary_same_base_hue_same_palette() {
    let scheme = Some(HarmonyScheme::SplitComplementary);
    let a = generate_harmony_palette(scheme, &mut SequenceSource::new(vec![0.4, 0.1]));
    let b = generate_harmony_palette(scheme, &mut SequenceSource::new(vec![0.4, 0.8]));
    assert_eq!(a.palette, b.palette);
}

#[test]
fn test_every_mood_yields_hex_color() {
    let mut rng = RngSource::seeded(8);
    for &mood in Mood::all() {
        let color = generate_mood_color(Some(mood), &mut rng);
        assert!(is_canonical_hex(&color.to_hex()));
    }
}

// ============================================================================
// Dominant Color Extractor
// ============================================================================

#[test]
fn test_extract_from_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mostly_red.png");

    // 90% red, 10% blue, spread so every sampling stride sees both
    RgbaImage::from_fn(200, 100, |x, y| {
        if (x + y) % 10 == 0 {
            Rgba([0, 0, 255, 255])
        } else {
            Rgba([255, 0, 0, 255])
        }
    })
    .save(&path)
    .unwrap();

    let colors = extract_palette_from_image(&path, &ExtractionConfig::default()).unwrap();
    assert_eq!(colors[0], Color::from_rgb(240, 0, 0));
}

#[test]
fn test_extract_transparent_image_is_empty() {
    let pixels = pixels_from_raw(8, 8, vec![0; 8 * 8 * 4]).unwrap();
    assert!(DominantColorExtractor::new().extract(&pixels).is_empty());
}

#[test]
fn test_extract_missing_file() {
    let result = extract_palette_from_image(
        Path::new("nonexistent_file.jpg"),
        &ExtractionConfig::default(),
    );
    assert!(matches!(result, Err(PaletteError::ImageLoadError { .. })));
}

#[test]
fn test_load_pixels_invalid_path() {
    assert!(load_pixels(Path::new("")).is_err());
}

// ============================================================================
// Session, Store and Export
// ============================================================================

#[test]
fn test_session_extract_then_regenerate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("green.png");
    RgbaImage::from_pixel(32, 32, Rgba([0, 255, 0, 255]))
        .save(&path)
        .unwrap();

    let mut rng = RngSource::seeded(21);
    let mut session = PaletteSession::new();
    let extracted = extract_palette_from_image(&path, &ExtractionConfig::default()).unwrap();
    assert_eq!(session.apply_extracted(&extracted, &mut rng), 1);
    assert_eq!(session.palette()[0], Color::from_rgb(0, 240, 0));

    session.toggle_lock(0).unwrap();
    session.regenerate(None, &mut rng);
    assert_eq!(session.palette()[0], Color::from_rgb(0, 240, 0));
}

#[test]
fn test_store_and_export_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = EngineConfig::default();
    config.store.path = dir.path().join("palettes.json");
    config.export.width = 100;
    config.export.height = 20;

    let mut rng = RngSource::seeded(5);
    let mut session = PaletteSession::new();
    session.regenerate(Some(HarmonyScheme::Analogous), &mut rng);

    let mut store = PaletteStore::open(&config.store.path);
    let saved = store.save(session.palette()).unwrap();
    assert_eq!(
        PaletteStore::open(&config.store.path).list()[0].colors,
        saved.colors
    );

    let png = huecraft::export::export_png(session.palette(), dir.path(), &config.export).unwrap();
    let decoded = image::open(&png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (100, 20));
}
