//! Criterion benchmarks for grid dynamics and per-agent sensing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use slimeweb_core::SpeciesKind;
use slimeweb_engine::{sample_sensors, ClockParams};
use slimeweb_field::{FieldGrid, TerrainConfig};
use slimeweb_test_utils::{flat_grid, lone_particle};

fn bench_grid_tick(c: &mut Criterion) {
    let mut grid = flat_grid(800, 600);
    let rates = ClockParams::default().rates;
    let mut t = 0.0;

    c.bench_function("grid_tick_800x600", |b| {
        b.iter(|| {
            grid.tick(t, &rates);
            t += 1.0 / 60.0;
            black_box(&grid);
        });
    });
}

fn bench_terrain_generate(c: &mut Criterion) {
    let terrain = TerrainConfig::default();
    c.bench_function("terrain_generate_800x600", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(black_box(3));
            let grid = FieldGrid::generate(800, 600, &terrain, &mut rng).unwrap();
            black_box(grid);
        });
    });
}

fn bench_sample_sensors(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let grid = FieldGrid::generate(800, 600, &TerrainConfig::default(), &mut rng).unwrap();
    let particles: Vec<_> = (0..1000)
        .map(|i| {
            let kind = SpeciesKind::ALL[i % 3];
            lone_particle(kind, (i * 7 % 800) as f64, (i * 13 % 600) as f64, i as f64, 60.0)
        })
        .collect();

    c.bench_function("sample_sensors_1000", |b| {
        b.iter(|| {
            for p in &particles {
                black_box(sample_sensors(p, &grid));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_grid_tick,
    bench_terrain_generate,
    bench_sample_sensors
);
criterion_main!(benches);
