//! Performance benchmarks for the picker core.
//!
//! Measures the hot paths:
//! - Tint interpolation
//! - Field rasterization (runs on every hue change)
//! - Overlay geometry for both modes
//! - 8-bit luminance lookups

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lumapick::contrast::{ContrastBounds, DisplayMode, boundary_path};
use lumapick::field::render_field;
use lumapick::hue::hue_from_angle;
use lumapick::luminance::{luminance, luminance_u8};
use lumapick::tint::interpolate_tints;
use palette::Srgb;

/// Benchmark building the 256 tints of a hue.
fn bench_interpolate_tints(c: &mut Criterion) {
    let hue = hue_from_angle(210.0).unwrap();

    c.bench_function("interpolate_tints", |b| {
        b.iter(|| interpolate_tints(black_box(hue)))
    });
}

/// Benchmark rasterizing the full 256x256 field.
fn bench_render_field(c: &mut Criterion) {
    let tints = interpolate_tints(hue_from_angle(210.0).unwrap()).unwrap();

    c.bench_function("render_field", |b| b.iter(|| render_field(black_box(&tints))));
}

/// Benchmark overlay geometry: one solver call per column per boundary.
fn bench_boundary_path(c: &mut Criterion) {
    let tints = interpolate_tints(hue_from_angle(30.0).unwrap()).unwrap();
    let bounds = ContrastBounds::new(0.2, 4.5).unwrap();

    c.bench_function("legibility_curve", |b| {
        b.iter(|| {
            boundary_path(
                DisplayMode::Legibility,
                black_box(&tints),
                &bounds,
                256.0,
                256.0,
            )
        })
    });

    c.bench_function("contrast_region", |b| {
        b.iter(|| {
            boundary_path(
                DisplayMode::ContrastBoundary,
                black_box(&tints),
                &bounds,
                256.0,
                256.0,
            )
        })
    });
}

/// Benchmark the table lookup against the float path for 256 colors.
fn bench_luminance(c: &mut Criterion) {
    let colors: Vec<Srgb<u8>> = (0u8..=255)
        .map(|i: u8| Srgb::new(i, i.wrapping_mul(97), i.wrapping_mul(193)))
        .collect();

    c.bench_function("luminance_u8_256", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(luminance_u8(*color));
            }
        })
    });

    c.bench_function("luminance_f64_256", |b| {
        b.iter(|| {
            for color in &colors {
                let f: Srgb<f64> = color.into_format();
                black_box(luminance(f.red, f.green, f.blue).ok());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_interpolate_tints,
    bench_render_field,
    bench_boundary_path,
    bench_luminance,
);

criterion_main!(benches);
