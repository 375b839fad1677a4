//! Criterion benchmarks for whole-world frames.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use slimeweb_bench::{reference_profile, stress_profile};
use slimeweb_core::SpeedSelector;
use slimeweb_engine::SlimeWorld;

fn bench_frame_reference(c: &mut Criterion) {
    let mut world = SlimeWorld::new(reference_profile(42)).unwrap();

    // Warm up: let the population spread off the spawn disk.
    for _ in 0..30 {
        world.step_frame();
    }

    c.bench_function("frame_reference", |b| {
        b.iter(|| {
            let result = world.step_frame();
            black_box(&result);
        });
    });
}

fn bench_frame_supaslime(c: &mut Criterion) {
    let mut world = SlimeWorld::new(reference_profile(42)).unwrap();
    world.set_speed_selector(SpeedSelector::Supaslime);
    world.step_frame();

    c.bench_function("frame_supaslime", |b| {
        b.iter(|| {
            let result = world.step_frame();
            black_box(&result);
        });
    });
}

fn bench_frame_stress(c: &mut Criterion) {
    let mut world = SlimeWorld::new(stress_profile(42)).unwrap();
    world.step_frame();

    c.bench_function("frame_stress", |b| {
        b.iter(|| {
            let result = world.step_frame();
            black_box(&result);
        });
    });
}

fn bench_world_construction(c: &mut Criterion) {
    c.bench_function("world_construction", |b| {
        b.iter(|| {
            let world = SlimeWorld::new(reference_profile(black_box(7))).unwrap();
            black_box(world.population());
        });
    });
}

criterion_group!(
    benches,
    bench_frame_reference,
    bench_frame_supaslime,
    bench_frame_stress,
    bench_world_construction
);
criterion_main!(benches);
