use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huecraft::{generate_harmony_palette, DominantColorExtractor, HarmonyScheme, RngSource};
use image::{Rgba, RgbaImage};

fn benchmark_harmony(c: &mut Criterion) {
    let mut rng = RngSource::seeded(1);
    for &scheme in HarmonyScheme::all() {
        c.bench_function(&format!("harmony_{}", scheme.name()), |b| {
            b.iter(|| generate_harmony_palette(black_box(Some(scheme)), &mut rng))
        });
    }
}

fn benchmark_extraction(c: &mut Criterion) {
    let image = RgbaImage::from_fn(1920, 1080, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, 255])
    });
    let extractor = DominantColorExtractor::new();
    c.bench_function("extract_dominant_1080p", |b| {
        b.iter(|| extractor.extract(black_box(&image)))
    });
}

criterion_group!(benches, benchmark_harmony, benchmark_extraction);
criterion_main!(benches);
