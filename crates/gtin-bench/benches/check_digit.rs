//! Check digit benchmarks (calculate, validate, repair) across identifier lengths.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gtin_bench::generator::corrupt_check_digit;
use gtin_bench::{SizeTier, generate_batch};
use gtin_core::{calculate, is_valid, recalculate_and_apply};

const TIERS: [(&str, SizeTier); 4] = [
    ("EAN-8", SizeTier::Ean8),
    ("EAN-13", SizeTier::Ean13),
    ("SSCC-18", SizeTier::Sscc18),
    ("64", SizeTier::Long),
];

fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");

    for (name, tier) in TIERS {
        let payloads: Vec<String> = generate_batch(&tier.config(42))
            .into_iter()
            .map(|mut s| {
                s.pop();
                s
            })
            .collect();
        group.throughput(Throughput::Elements(payloads.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &payloads, |b, payloads| {
            b.iter(|| {
                payloads
                    .iter()
                    .filter_map(|s| calculate(s.as_str()).ok())
                    .count()
            });
        });
    }
    group.finish();
}

fn bench_is_valid(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_valid");

    for (name, tier) in TIERS {
        let valid = generate_batch(&tier.config(42));
        let invalid: Vec<String> = valid.iter().map(|s| corrupt_check_digit(s)).collect();
        group.throughput(Throughput::Elements(valid.len() as u64));

        group.bench_with_input(BenchmarkId::new("valid", name), &valid, |b, batch| {
            b.iter(|| batch.iter().filter(|s| is_valid(s.as_str())).count());
        });

        group.bench_with_input(BenchmarkId::new("invalid", name), &invalid, |b, batch| {
            b.iter(|| batch.iter().filter(|s| is_valid(s.as_str())).count());
        });
    }
    group.finish();
}

fn bench_recalculate_and_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("recalculate_and_apply");

    for (name, tier) in TIERS {
        let invalid: Vec<String> = generate_batch(&tier.config(42))
            .iter()
            .map(|s| corrupt_check_digit(s))
            .collect();
        group.throughput(Throughput::Elements(invalid.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &invalid, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .filter_map(|s| recalculate_and_apply(s.as_str()).ok())
                    .count()
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_calculate,
    bench_is_valid,
    bench_recalculate_and_apply
);
criterion_main!(benches);
