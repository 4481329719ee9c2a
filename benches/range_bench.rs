use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rangecoder::{compress, BackendKind};

fn random_input(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    StdRng::seed_from_u64(42).fill_bytes(&mut data);
    data
}

fn text_input(len: usize) -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn bench_range_coder(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_coder");

    let inputs = [
        ("skewed_1mib", vec![0xAAu8; 1 << 20]),
        ("text_1mib", text_input(1 << 20)),
        ("random_4mib", random_input(4 << 20)),
    ];

    for (name, data) in &inputs {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_function(*name, |b| b.iter(|| compress(data).unwrap()));
    }
    group.finish();
}

fn bench_deflate_backend(c: &mut Criterion) {
    let mut group = c.benchmark_group("deflate_backend");
    let backend = BackendKind::Deflate.build();
    let data = random_input(4 << 20);

    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("random_4mib", |b| b.iter(|| backend.compress(&data).unwrap()));
    group.finish();
}

criterion_group!(benches, bench_range_coder, bench_deflate_backend);
criterion_main!(benches);
