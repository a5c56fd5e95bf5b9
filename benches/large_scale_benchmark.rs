use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use kxsort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_10m_u64(c: &mut Criterion) {
    let mut group = c.benchmark_group("10M u64");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60));

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.throughput(Throughput::Bytes((count * std::mem::size_of::<u64>()) as u64));

    group.bench_function("kxsort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_10m_u64);
criterion_main!(benches);
