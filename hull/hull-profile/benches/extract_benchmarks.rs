//! Benchmarks for profile extraction and smoothing.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hull_profile::{
    detect_background, extract_profile, smooth_curve, BackgroundMode, ExtractParams,
    SmoothingMethod,
};
use hull_types::{PixelBuffer, Rgb};

fn ship_image(width: u32, height: u32) -> PixelBuffer {
    let mut image = PixelBuffer::solid(width, height, Rgb::WHITE).expect("image");
    image.fill_rect(width / 10, height / 4, width * 8 / 10, height / 2, Rgb::BLACK);
    image
}

fn bench_extract(c: &mut Criterion) {
    let image = ship_image(1024, 512);

    c.bench_function("extract_profile_1024x512", |b| {
        b.iter(|| extract_profile(&image, Rgb::WHITE, &ExtractParams::default()));
    });
}

fn bench_background(c: &mut Criterion) {
    let image = ship_image(1024, 512);

    c.bench_function("detect_background_auto_1024x512", |b| {
        b.iter(|| detect_background(&image, BackgroundMode::Auto));
    });
}

fn bench_smooth(c: &mut Criterion) {
    let curve: Vec<f64> = (0..1024)
        .map(|i| {
            let t = f64::from(i) / 1023.0;
            (std::f64::consts::PI * t).sin()
        })
        .collect();

    c.bench_function("smooth_gaussian_1024", |b| {
        b.iter_batched(
            || curve.clone(),
            |c| smooth_curve(&c, SmoothingMethod::Gaussian, 9),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_extract, bench_background, bench_smooth);
criterion_main!(benches);
