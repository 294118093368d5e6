// Comparative benchmark suite for the ordered containers
//
// Benchmarks three implementations:
// - RedBlackTree: rebalances on every mutation, height stays logarithmic
// - BinarySearchTree: no balancing (collapses to a spine on sorted input)
// - std::collections::BTreeSet: the standard library baseline

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

use grove::tree::{BinarySearchTree, RedBlackTree};

// =============================================================================
// Benchmark Helpers
// =============================================================================

/// Uniform random keys over a wide space; duplicates possible but rare.
fn random_keys(count: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..u32::MAX)).collect()
}

// =============================================================================
// Sequential (Worst-Case) Insert Benchmarks
// =============================================================================

fn bench_sequential_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_insert");

    // Kept small: the naive tree is quadratic on this workload.
    let sizes = [100, 1000];

    for size in sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("RedBlackTree", size), &size, |b, &size| {
            b.iter(|| {
                let mut tree = RedBlackTree::new();
                for value in 0..size as u32 {
                    tree.insert(value);
                }
                black_box(tree.len())
            });
        });

        group.bench_with_input(
            BenchmarkId::new("BinarySearchTree", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut tree = BinarySearchTree::new();
                    for value in 0..size as u32 {
                        tree.insert(value);
                    }
                    black_box(tree.len())
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |b, &size| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for value in 0..size as u32 {
                    set.insert(value);
                }
                black_box(set.len())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Random Insert Benchmarks
// =============================================================================

fn bench_random_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_insert");

    let sizes = [100, 1000, 10000];

    for size in sizes {
        let keys = random_keys(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("RedBlackTree", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = RedBlackTree::new();
                for &key in keys {
                    tree.insert(key);
                }
                black_box(tree.len())
            });
        });

        group.bench_with_input(
            BenchmarkId::new("BinarySearchTree", size),
            &keys,
            |b, keys| {
                b.iter(|| {
                    let mut tree = BinarySearchTree::new();
                    for &key in keys {
                        tree.insert(key);
                    }
                    black_box(tree.len())
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &keys, |b, keys| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &key in keys {
                    set.insert(key);
                }
                black_box(set.len())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Search Benchmarks (Steady State)
// =============================================================================

fn bench_search_hits(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_hits");

    let sizes = [1000, 10000];

    for size in sizes {
        let keys = random_keys(size, 7);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("RedBlackTree", size), &keys, |b, keys| {
            let mut tree = RedBlackTree::new();
            for &key in keys {
                tree.insert(key);
            }
            b.iter(|| {
                let mut hits = 0usize;
                for key in keys {
                    if tree.search(key) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("BinarySearchTree", size),
            &keys,
            |b, keys| {
                let mut tree = BinarySearchTree::new();
                for &key in keys {
                    tree.insert(key);
                }
                b.iter(|| {
                    let mut hits = 0usize;
                    for key in keys {
                        if tree.search(key) {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &keys, |b, keys| {
            let set: BTreeSet<u32> = keys.iter().copied().collect();
            b.iter(|| {
                let mut hits = 0usize;
                for key in keys {
                    if set.contains(key) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Insert-Then-Remove Benchmarks
// =============================================================================

fn bench_insert_then_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_then_remove");

    let sizes = [100, 1000, 5000];

    for size in sizes {
        let keys = random_keys(size, 13);
        group.throughput(Throughput::Elements((size * 2) as u64));

        group.bench_with_input(BenchmarkId::new("RedBlackTree", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = RedBlackTree::new();
                for &key in keys {
                    tree.insert(key);
                }
                for key in keys {
                    tree.remove(key);
                }
                black_box(tree.len())
            });
        });

        group.bench_with_input(
            BenchmarkId::new("BinarySearchTree", size),
            &keys,
            |b, keys| {
                b.iter(|| {
                    let mut tree = BinarySearchTree::new();
                    for &key in keys {
                        tree.insert(key);
                    }
                    for key in keys {
                        tree.remove(key);
                    }
                    black_box(tree.len())
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &keys, |b, keys| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &key in keys {
                    set.insert(key);
                }
                for key in keys {
                    set.remove(key);
                }
                black_box(set.len())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Mixed Insert/Remove Benchmarks
// =============================================================================

fn bench_mixed_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_operations");

    let sizes = [100, 1000, 5000];

    for size in sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("RedBlackTree", size), &size, |b, &size| {
            b.iter(|| {
                let mut tree = RedBlackTree::new();
                let mut rng = StdRng::seed_from_u64(42);
                // 70% insert, 30% remove over a small key space
                for _ in 0..size {
                    let key = rng.gen_range(0..4096u32);
                    if tree.is_empty() || rng.gen_bool(0.7) {
                        tree.insert(key);
                    } else {
                        tree.remove(&key);
                    }
                }
                black_box(tree.len())
            });
        });

        group.bench_with_input(
            BenchmarkId::new("BinarySearchTree", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut tree = BinarySearchTree::new();
                    let mut rng = StdRng::seed_from_u64(42);
                    for _ in 0..size {
                        let key = rng.gen_range(0..4096u32);
                        if tree.is_empty() || rng.gen_bool(0.7) {
                            tree.insert(key);
                        } else {
                            tree.remove(&key);
                        }
                    }
                    black_box(tree.len())
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |b, &size| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                let mut rng = StdRng::seed_from_u64(42);
                for _ in 0..size {
                    let key = rng.gen_range(0..4096u32);
                    if set.is_empty() || rng.gen_bool(0.7) {
                        set.insert(key);
                    } else {
                        set.remove(&key);
                    }
                }
                black_box(set.len())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_sequential_insert,
    bench_random_insert,
    bench_search_hits,
    bench_insert_then_remove,
    bench_mixed_operations,
);

criterion_main!(benches);
