//! Sequence pipeline benchmarks.
//!
//! Measures lazy pipeline evaluation against the equivalent hand-written
//! loop, across input sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use riffle_seq::Sequence;

// ============================================================================
// Terminal Evaluation Benchmarks
// ============================================================================

fn bench_map_filter_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_map_filter_reduce");

    for size in [64u64, 1_024, 16_384] {
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("pipeline", size), &size, |b, &size| {
            b.iter(|| {
                let total = Sequence::of(0..size)
                    .filter(|n: &u64| n % 3 != 0)
                    .unwrap()
                    .map(|n: u64| n.wrapping_mul(2_654_435_761))
                    .unwrap()
                    .reduce(0u64, u64::wrapping_add)
                    .unwrap();
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("hand_written", size), &size, |b, &size| {
            b.iter(|| {
                let mut total = 0u64;
                for n in 0..size {
                    if n % 3 != 0 {
                        total = total.wrapping_add(n.wrapping_mul(2_654_435_761));
                    }
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

fn bench_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_collect");

    for size in [64u64, 1_024, 16_384] {
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let values = Sequence::of(0..size)
                    .map(|n: u64| n + 1)
                    .unwrap()
                    .collect()
                    .unwrap();
                black_box(values)
            });
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_generate");

    for size in [64usize, 1_024] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut next = 0u64;
                let count = Sequence::generate(
                    move || {
                        next = next.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                        next
                    },
                    size,
                )
                .count()
                .unwrap();
                black_box(count)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_map_filter_reduce, bench_collect, bench_generate);
criterion_main!(benches);
