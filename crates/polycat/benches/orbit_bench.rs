//! Criterion benches for orbit expansion.
//! Sizes: symmetric groups on 4..=7 coordinates, exact vs approximate seeds,
//! plus two full catalogue recipes as end-to-end references.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polycat::library::{gosset_3_21, six_hundred_cell, RecipeCfg};
use polycat::orbit::{expand, GroupAction};
use polycat::Vector;

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");
    for &d in &[4usize, 5, 6, 7] {
        let action = GroupAction::symmetric(d).unwrap();
        let exact: Vec<i64> = (1..=d as i64).collect();
        let approx: Vec<f64> = (1..=d).map(|i| i as f64 + 0.5).collect();
        group.bench_with_input(BenchmarkId::new("symmetric_exact", d), &d, |b, _| {
            b.iter_batched(
                || vec![Vector::from_ints(&exact)],
                |seeds| {
                    let _ = expand(&seeds, &action).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("symmetric_approx", d), &d, |b, _| {
            b.iter_batched(
                || vec![Vector::from_f64(&approx)],
                |seeds| {
                    let _ = expand(&seeds, &action).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    let hyper = GroupAction::hyperoctahedral(4).unwrap();
    group.bench_function(BenchmarkId::new("hyperoctahedral", 4), |b| {
        let seeds = vec![Vector::from_ints(&[1, 2, 0, 3])];
        b.iter(|| {
            let _ = expand(&seeds, &hyper).unwrap();
        })
    });
    group.finish();
}

fn bench_recipes(c: &mut Criterion) {
    let mut group = c.benchmark_group("recipe");
    group.sample_size(20);
    let cfgs = [
        ("exact", RecipeCfg::default()),
        ("approx", RecipeCfg::approximate()),
    ];
    for (label, cfg) in cfgs {
        group.bench_function(BenchmarkId::new("six_hundred_cell", label), |b| {
            b.iter(|| {
                let _ = six_hundred_cell(&cfg).unwrap();
            })
        });
    }
    group.bench_function(BenchmarkId::new("gosset_3_21", "exact"), |b| {
        let cfg = RecipeCfg::default();
        b.iter(|| {
            let _ = gosset_3_21(&cfg).unwrap();
        })
    });
    group.finish();
}

criterion_group!(benches, bench_expand, bench_recipes);
criterion_main!(benches);
