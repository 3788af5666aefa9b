use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ts_engine::allocator::IdAllocator;
use ts_engine::codec;
use ts_engine::keyschema;
use ts_engine::storage::memory::Memory;

fn codec_round_trip(n: i64) -> i64 {
    codec::decode_timestamp(&codec::encode_timestamp(black_box(n)))
}

fn allocator_hot_path(allocator: &IdAllocator, engine: &mut Memory) -> u64 {
    allocator.id_for(engine, "bench", "cpu", "value").unwrap().0
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("timestamp codec round trip", |b| {
        b.iter(|| codec_round_trip(1_700_000_000_000))
    });

    c.bench_function("data key construction", |b| {
        b.iter(|| keyschema::data_key(black_box(42), black_box(1_700_000_000_000), black_box(0)))
    });

    c.bench_function("allocator lookup of an already-allocated column", |b| {
        let allocator = IdAllocator::new();
        let mut engine = Memory::new();
        allocator.id_for(&mut engine, "bench", "cpu", "value").unwrap();
        b.iter(|| allocator_hot_path(&allocator, &mut engine))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
