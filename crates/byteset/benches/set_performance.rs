/// Performance benchmarks for the ordered byte-key set
///
/// Compares sequential against random key order for both writes and
/// membership lookups, over pre-generated key sets so only the tree work
/// is measured.
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use byteset::ByteSet;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const KEY_COUNT: usize = 10_000;

fn sequential_keys() -> Vec<Vec<u8>> {
    (0..KEY_COUNT).map(|i| format!("{:08}", i).into_bytes()).collect()
}

fn random_keys() -> Vec<Vec<u8>> {
    let mut keys = sequential_keys();
    keys.shuffle(&mut StdRng::seed_from_u64(97));
    keys
}

fn populated_set(keys: &[Vec<u8>]) -> ByteSet {
    let mut set = ByteSet::new();
    for key in keys {
        set.set(key);
    }
    set
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    let keys = sequential_keys();
    group.bench_function("sequential", |b| {
        b.iter(|| {
            let mut set = ByteSet::new();
            for key in &keys {
                set.set(black_box(key));
            }
            set
        });
    });

    let keys = random_keys();
    group.bench_function("random", |b| {
        b.iter(|| {
            let mut set = ByteSet::new();
            for key in &keys {
                set.set(black_box(key));
            }
            set
        });
    });

    group.finish();
}

fn bench_has(c: &mut Criterion) {
    let mut group = c.benchmark_group("has");

    let sequential = sequential_keys();
    let set = populated_set(&sequential);
    group.bench_function("sequential", |b| {
        b.iter(|| {
            for key in &sequential {
                black_box(set.has(black_box(key)));
            }
        });
    });

    let random = random_keys();
    let set = populated_set(&random);
    group.bench_function("random", |b| {
        b.iter(|| {
            for key in &random {
                black_box(set.has(black_box(key)));
            }
        });
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    let set = populated_set(&random_keys());
    group.bench_function("full", |b| {
        b.iter(|| {
            let mut visited = 0usize;
            set.scan(|key| {
                black_box(key);
                visited += 1;
                true
            });
            visited
        });
    });

    group.finish();
}

criterion_group!(benches, bench_set, bench_has, bench_scan);
criterion_main!(benches);
