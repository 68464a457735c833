// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_matte::matting::engine;
use image_rs::DynamicImage;
use std::hint::black_box;

fn preprocessing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("matting_pipeline");

    let photo = DynamicImage::new_rgb8(1920, 1080);

    group.bench_function("preprocess_1080p", |b| {
        b.iter(|| {
            // Use black_box to prevent the compiler from optimizing away the call
            let _ = black_box(engine::preprocess_image(&photo).unwrap());
        });
    });

    let matte: Vec<f32> = (0..1024 * 1024)
        .map(|i| (i % 256) as f32 / 255.0)
        .collect();

    group.bench_function("composite_1080p", |b| {
        b.iter(|| {
            let _ = black_box(engine::apply_alpha_matte(&photo, &matte, 1024, 1024).unwrap());
        });
    });

    group.bench_function("normalize_matte", |b| {
        b.iter(|| {
            let _ = black_box(engine::normalize_matte(&matte));
        });
    });

    group.finish();
}

criterion_group!(benches, preprocessing_benchmark);
criterion_main!(benches);
