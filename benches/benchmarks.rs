use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use num_bigint::BigUint;
use radix62::{decode, decode62, encode, encode62, Magnitude};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for base in [2u32, 16, 62] {
        group.bench_function(format!("u64_max_base{base}"), |b| {
            b.iter(|| encode(black_box(u64::MAX), black_box(base)).unwrap())
        });
    }

    group.throughput(Throughput::Elements(10_000));
    group.bench_function("10000_sequential_ids_base62", |b| {
        b.iter(|| {
            for id in 0..10_000u64 {
                black_box(encode62(black_box(id)));
            }
        })
    });
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    // Pre-encode codes for a batch of sequential ids
    let codes: Vec<String> = (0..10_000u64).map(encode62).collect();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("10000_sequential_ids_base62", |b| {
        b.iter(|| {
            for code in &codes {
                black_box(decode62(black_box(code)).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_big_magnitudes(c: &mut Criterion) {
    let value = BigUint::from(2u32).pow(4096) - 1u32;
    let encoded = encode(Magnitude::Big(value.clone()), 62).unwrap();

    let mut group = c.benchmark_group("big");
    group.bench_function("encode_4096bit_base62", |b| {
        b.iter(|| encode(black_box(Magnitude::Big(value.clone())), 62).unwrap())
    });
    group.bench_function("decode_4096bit_base62", |b| {
        b.iter(|| decode(black_box(&encoded), 62).unwrap())
    });
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("1000_ids_base62", |b| {
        b.iter(|| {
            for id in 0..1000u64 {
                let code = encode62(black_box(id));
                black_box(decode62(&code).unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_big_magnitudes, bench_roundtrip);
criterion_main!(benches);
