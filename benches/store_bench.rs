// Store benchmark - per-entry put (full re-sort each time) against batched
// put_all (one sort per batch), plus positional read costs.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orderly::set::IndexedSet;
use orderly::store::SortedIndexStore;

const SIZES: [usize; 3] = [100, 1_000, 5_000];

fn random_entries(count: usize, seed: u64) -> Vec<(String, String)> {
    let mut rng = StdRng::seed_from_u64(seed);
    return (0..count)
        .map(|i| (format!("key{:08}", rng.r#gen::<u32>()), i.to_string()))
        .collect();
}

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_put");
    for size in SIZES {
        let entries = random_entries(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("put", size), &entries, |b, entries| {
            b.iter(|| {
                let store: SortedIndexStore = SortedIndexStore::new();
                for (key, value) in entries {
                    store.put(key.clone(), value.clone());
                }
                black_box(store.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("put_all", size), &entries, |b, entries| {
            b.iter(|| {
                let store: SortedIndexStore = SortedIndexStore::new();
                store.put_all(entries.iter().cloned());
                black_box(store.len())
            });
        });
    }
    group.finish();
}

fn bench_positional(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional_read");
    for size in SIZES {
        let entries = random_entries(size, 7);
        let store: SortedIndexStore = SortedIndexStore::new();
        store.put_all(entries.iter().cloned());
        let set: IndexedSet<String> = entries.iter().map(|(key, _)| key.clone()).collect();
        let probe = (size - 1).to_string();

        group.bench_with_input(BenchmarkId::new("store_get_value", size), &size, |b, &size| {
            b.iter(|| black_box(store.get_value(size / 2)));
        });

        group.bench_with_input(BenchmarkId::new("store_index_of", size), &probe, |b, probe| {
            b.iter(|| black_box(store.index_of(probe)));
        });

        group.bench_with_input(BenchmarkId::new("indexed_set_get", size), &size, |b, &size| {
            b.iter(|| black_box(set.get(size / 2).is_ok()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_put, bench_positional);
criterion_main!(benches);
