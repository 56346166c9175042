use criterion::{criterion_group, criterion_main, Criterion};
use sdf_field_renderer::{BitmapMask, Engine, SdfConfig};
use std::hint::black_box;

fn disk_mask(side: usize, radius: f64) -> BitmapMask {
    let center = side as f64 / 2.0 + 0.5;
    BitmapMask::from_fn(side, side, |x, y| {
        let dx = x as f64 - center;
        let dy = y as f64 - center;
        dx * dx + dy * dy <= radius * radius
    })
    .unwrap()
}

pub fn benchmark_engines(c: &mut Criterion) {
    c.bench_function("benchmark brute sdf 64", |b| {
        let mask = black_box(disk_mask(64, 20.0));
        let config = SdfConfig {
            engine: Engine::Brute,
            ..SdfConfig::default()
        };
        b.iter(|| mask.render_sdf(&config))
    });

    c.bench_function("benchmark brushfire sdf 256", |b| {
        let mask = black_box(disk_mask(256, 80.0));
        let config = SdfConfig {
            engine: Engine::Brushfire,
            ..SdfConfig::default()
        };
        b.iter(|| mask.render_sdf(&config))
    });

    c.bench_function("benchmark linear sdf 256", |b| {
        let mask = black_box(disk_mask(256, 80.0));
        let config = SdfConfig {
            engine: Engine::Linear,
            ..SdfConfig::default()
        };
        b.iter(|| mask.render_sdf(&config))
    });
}

criterion_group!(benches, benchmark_engines);
criterion_main!(benches);
