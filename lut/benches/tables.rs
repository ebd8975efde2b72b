//! Benchmarks for table construction and code conversion.

use actlut::{Binary16, Lut, Q10, FIXED_EXP2, FIXED_LOG2, HALF_EXP2, HALF_LOG2};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut_build");
    group.throughput(Throughput::Elements(actlut::LUT_ENTRIES as u64));

    for spec in [FIXED_LOG2, FIXED_EXP2, HALF_LOG2, HALF_EXP2] {
        group.bench_function(spec.name, |b| {
            b.iter(|| black_box(Lut::build(black_box(&spec))));
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(1));

    group.bench_function("binary16", |b| {
        b.iter(|| black_box(Binary16::from_f64(black_box(0.7071067811865476))));
    });

    group.bench_function("q10", |b| {
        b.iter(|| black_box(Q10::from_f64(black_box(0.7071067811865476))));
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_encode);
criterion_main!(benches);
