use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ffd::FFDOptimizer;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use zaagplan::entities::{CutInstance, Overhead, Piece, StockLength};

criterion_main!(benches);
criterion_group!(benches, ffd_solve_bench);

const N_PIECES: [usize; 3] = [100, 1_000, 10_000];

fn create_instance(n_pieces: usize, seed: u64) -> CutInstance {
    let mut rng = SmallRng::seed_from_u64(seed);
    let pieces = (0..n_pieces)
        .map(|i| Piece::new(format!("P{i}"), rng.random_range(300..=4500)).unwrap())
        .collect();
    let stock = [5000, 6000, 7000].map(|l| StockLength::new(l).unwrap());
    CutInstance::new(pieces, stock, Overhead::new(50, 3))
}

/// Benchmark a full FFD run for instances of increasing size
fn ffd_solve_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ffd_solve");
    for n_pieces in N_PIECES {
        let instance = create_instance(n_pieces, 0);
        group.throughput(criterion::Throughput::Elements(n_pieces as u64));
        group.bench_function(BenchmarkId::from_parameter(n_pieces), |b| {
            b.iter(|| FFDOptimizer::new(instance.clone()).solve().unwrap())
        });
    }
    group.finish();
}
