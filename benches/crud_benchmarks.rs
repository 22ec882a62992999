use bough::render::HEIGHT_LIMIT;
use bough::{BinaryTree, Dictionary, RenderConfig};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::hint::black_box;

const N: usize = 10_000;

// Sorted input degenerates into a chain, so every operation is linear in its depth.
const CHAIN: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(12345);
    (0..n).map(|_| rng.gen_range(0..n as i64 * 4)).collect()
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let keys = ordered_keys(CHAIN);
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("Dictionary", CHAIN), |b| {
        b.iter(|| {
            let mut dictionary = Dictionary::new();
            for &k in &keys {
                dictionary.insert(k, k);
            }
            dictionary
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("Dictionary", N), |b| {
        b.iter(|| {
            let mut dictionary = Dictionary::with_capacity(N);
            for &k in &keys {
                dictionary.insert(k, k);
            }
            dictionary
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

fn bench_find(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree: BinaryTree<i64> = keys.iter().copied().collect();
    let probes = &keys[..100];

    let mut group = c.benchmark_group("find");

    group.bench_function(BenchmarkId::new("BinaryTree", N), |b| {
        b.iter(|| {
            let mut found = 0usize;
            for k in probes {
                if tree.find(k).is_ok() {
                    found += 1;
                }
            }
            found
        });
    });

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree: BinaryTree<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("rank");

    group.bench_function(BenchmarkId::new("node_at_rank", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for rank in (1..=N).step_by(100) {
                if let Ok(node) = tree.node_at_rank(rank) {
                    sum = sum.wrapping_add(*node.key());
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("rank_of", N), |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for k in keys.iter().step_by(100) {
                sum += tree.rank_of(k).unwrap_or(0);
            }
            sum
        });
    });

    group.finish();
}

// ─── Remove ─────────────────────────────────────────────────────────────────

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree: BinaryTree<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("BinaryTree", N), |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for k in &keys {
                    let _ = tree.remove(k);
                }
                tree
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ─── Render ─────────────────────────────────────────────────────────────────

fn bench_render(c: &mut Criterion) {
    let tree: BinaryTree<i64> = random_keys(32).into_iter().collect();
    let config = RenderConfig::new().max_height(HEIGHT_LIMIT);

    c.bench_function("render_random_32", |b| b.iter(|| black_box(&tree).render_with(&config)));
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_ordered, bench_insert_random);

criterion_group!(lookup_benches, bench_find, bench_rank);

criterion_group!(remove_benches, bench_remove_random);

criterion_group!(render_benches, bench_render);

criterion_main!(insert_benches, lookup_benches, remove_benches, render_benches);
