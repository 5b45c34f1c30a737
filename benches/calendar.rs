use criterion::{criterion_group, criterion_main, Criterion};
use panel_tilt::{build_yearly_calendar, compute_for_day, MountingPositions};
use std::hint::black_box;

fn bench_angles(c: &mut Criterion) {
    let positions = MountingPositions::default();
    c.bench_function("compute_for_day", |b| {
        b.iter(|| compute_for_day(black_box(48.8566), black_box(172), &positions))
    });
}

fn bench_calendar(c: &mut Criterion) {
    let positions = MountingPositions::default();
    let many = MountingPositions::new((0..=90).map(f64::from).collect()).unwrap();

    let mut group = c.benchmark_group("yearly_calendar");
    group.bench_function("three_positions", |b| {
        b.iter(|| build_yearly_calendar(black_box(48.8566), 2026, &positions))
    });
    group.bench_function("ninety_one_positions", |b| {
        b.iter(|| build_yearly_calendar(black_box(48.8566), 2026, &many))
    });
    group.finish();
}

criterion_group!(benches, bench_angles, bench_calendar);
criterion_main!(benches);
