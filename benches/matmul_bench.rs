//! Naive vs blocked timings over a few tile shapes and thread counts.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tilemm::blocked::tiled::matmul_blocked;
use tilemm::threaded::tiled_mt::matmul_blocked_mt;
use tilemm::{BlockConfig, matmul_naive};

fn inputs(size: usize) -> (Vec<f64>, Vec<f64>) {
    let a = (0..size * size).map(|i| (i % 100) as f64).collect();
    let b = (0..size * size).map(|i| (i % 100) as f64).collect();
    (a, b)
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for size in [128, 256, 512] {
        let (a, b) = inputs(size);
        group.throughput(Throughput::Elements((2 * size * size * size) as u64));

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bench, &s| {
            let mut c = vec![0.0; s * s];
            bench.iter(|| matmul_naive(black_box(&a), black_box(&b), &mut c, s, s, s));
        });

        for tile in [16, 64] {
            let cfg = BlockConfig::new(tile, tile, tile);
            let id = format!("blocked_{tile}/{size}");
            group.bench_function(id, |bench| {
                bench.iter(|| {
                    let mut c = vec![0.0; size * size];
                    matmul_blocked(&a, &b, &mut c, size, size, size, cfg.clamp(size, size, size));
                    black_box(c)
                });
            });
        }

        for threads in [2, 4] {
            let cfg = BlockConfig::new(64, 32, 64).with_threads(threads);
            let id = format!("blocked_mt{threads}/{size}");
            group.bench_function(id, |bench| {
                bench.iter(|| {
                    let mut c = vec![0.0; size * size];
                    matmul_blocked_mt(&a, &b, &mut c, size, size, size, &cfg);
                    black_box(c)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_matmul);
criterion_main!(benches);
