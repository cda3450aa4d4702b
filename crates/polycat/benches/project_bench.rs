//! Criterion benches for the zero-sum projection.
//! Focus dims: d in {4, 8, 16, 32}, 256 random zero-sum points per batch.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polycat::project::build_projection;
use polycat::{Domain, Vector};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn zero_sum_points(d: usize, n: usize, seed: u64) -> Vec<Vector> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut xs: Vec<f64> = (0..d).map(|_| rng.gen_range(-1.0..1.0)).collect();
            let mean = xs.iter().sum::<f64>() / d as f64;
            xs.iter_mut().for_each(|x| *x -= mean);
            Vector::from_f64(&xs)
        })
        .collect()
}

fn zero_sum_int_points(d: usize, n: usize, seed: u64) -> Vec<Vector> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut xs: Vec<i64> = (0..d).map(|_| rng.gen_range(-5..=5)).collect();
            let s: i64 = xs.iter().sum();
            xs[d - 1] -= s;
            Vector::from_ints(&xs)
        })
        .collect()
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");
    for &d in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("build_rdf", d), &d, |b, &d| {
            b.iter(|| {
                let _ = build_projection(d, Domain::Approximate).unwrap();
            })
        });
        let map = build_projection(d, Domain::Approximate).unwrap();
        group.bench_with_input(BenchmarkId::new("apply_rdf", d), &d, |b, &d| {
            b.iter_batched(
                || zero_sum_points(d, 256, 41),
                |pts| {
                    let _ = map.apply(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    // exact rows exist only for d <= 2 outside RDF
    let exact = build_projection(2, Domain::quadratic(2).unwrap()).unwrap();
    group.bench_function(BenchmarkId::new("apply_exact", 2), |b| {
        b.iter_batched(
            || zero_sum_int_points(2, 256, 42),
            |pts| {
                let _ = exact.apply(&pts).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_project);
criterion_main!(benches);
