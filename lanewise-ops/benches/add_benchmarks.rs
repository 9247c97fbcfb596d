use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lanewise_core::{AlignedBuf, SplitMix64};
use lanewise_ops::{add_assign, add_vectors, add_vectors_into, add_vectors_with, Backend};

const SIZES: [usize; 6] = [3, 64, 1024, 4096, 16384, 16387];

fn operands(n: usize) -> (Vec<f32>, Vec<f32>) {
    let mut rng = SplitMix64::new(42);
    (rng.f32_vec(n, -1.0, 1.0), rng.f32_vec(n, -1.0, 1.0))
}

fn bench_add_vectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_vectors");
    for &n in &SIZES {
        let (a, b) = operands(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &_n| {
            bench.iter(|| add_vectors(&a, &b).unwrap());
        });
    }
    group.finish();
}

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_backend");
    let n = 4096;
    let (a, b) = operands(n);
    group.throughput(Throughput::Elements(n as u64));
    for backend in Backend::ALL.iter().copied().filter(|bk| bk.is_available()) {
        group.bench_with_input(BenchmarkId::from_parameter(backend), &backend, |bench, &bk| {
            bench.iter(|| add_vectors_with(bk, &a, &b).unwrap());
        });
    }
    group.finish();
}

fn bench_add_into_misaligned(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_vectors_into");
    let n = 4096;
    let (a_data, b_data) = operands(n);
    group.throughput(Throughput::Elements(n as u64));
    for offset in 0..4 {
        let a = AlignedBuf::from_slice(&a_data, offset);
        let b = AlignedBuf::from_slice(&b_data, offset);
        let mut out = AlignedBuf::zeroed(n, offset);
        group.bench_with_input(BenchmarkId::new("offset", offset), &offset, |bench, _| {
            bench.iter(|| add_vectors_into(a.as_slice(), b.as_slice(), out.as_mut_slice()).unwrap());
        });
    }
    group.finish();
}

fn bench_add_assign(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_assign");
    for &n in &[64, 4096] {
        let (a, b) = operands(n);
        let mut acc = a.clone();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &_n| {
            bench.iter(|| {
                acc.copy_from_slice(&a);
                add_assign(&mut acc, &b).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_add_vectors,
    bench_backends,
    bench_add_into_misaligned,
    bench_add_assign
);
criterion_main!(benches);
