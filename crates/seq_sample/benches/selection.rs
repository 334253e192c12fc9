mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seq_sample::prelude::{select_uniform, select_weighted, select_weighted_by};

fn make_weights(count: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| 0.01 + rng.random::<f32>() * 0.99).collect()
}

fn selection_weighted_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/weighted");

    for &n in &[8usize, 64, 256, 1024, 4096] {
        let items: Vec<usize> = (0..n).collect();
        let weights = make_weights(n, 0xC0FFEE);
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

            b.iter(|| {
                let sel = select_weighted(&items, &weights, &mut rng);
                black_box(sel).ok();
            });
        });
    }

    for &n in &[256usize, 2048] {
        let items: Vec<usize> = (0..n).collect();
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::new("by_selector", n), &n, |b, _| {
            let mut rng = StdRng::seed_from_u64(0xBADC0DE);
            b.iter(|| {
                let sel = select_weighted_by(&items, |i| 0.25 + ((i % 7) as f32) / 7.0, &mut rng);
                black_box(sel).ok();
            });
        });
    }

    group.finish();
}

fn selection_uniform_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/uniform");

    for &n in &[8usize, 256, 4096, 16384] {
        let items: Vec<usize> = (0..n).collect();
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut rng = StdRng::seed_from_u64(0x12345678);
            b.iter(|| {
                let sel = select_uniform(&items, &mut rng);
                black_box(sel).ok();
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = selection_weighted_benches,
              selection_uniform_benches
}
criterion_main!(benches);
