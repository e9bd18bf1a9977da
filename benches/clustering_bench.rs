use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dip_cluster::test_data::TestDistributions;
use skinnydip::{PValueStrategy, SkinnyDipBuilder, UniDipBuilder};

fn bench_unidip(c: &mut Criterion) {
    let mut group = c.benchmark_group("UniDip");

    for per_mode in [100, 1_000, 5_000] {
        let data = TestDistributions::mixture_normal(&[-20.0, 0.0, 20.0], per_mode, 1.0, 42);
        let unidip = UniDipBuilder::new().build().unwrap();
        group.bench_with_input(BenchmarkId::new("table", per_mode * 3), &data, |b, data| {
            b.iter(|| unidip.fit(black_box(data)))
        });

        let extended = UniDipBuilder::new()
            .extend_tails(true)
            .outliers_allowed(false)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::new("tails_no_outliers", per_mode * 3), &data, |b, data| {
            b.iter(|| extended.fit(black_box(data)))
        });
    }

    // The estimator's null cache is shared across iterations
    let data = TestDistributions::noisy_trimodal();
    let bootstrap = UniDipBuilder::new()
        .pval_strategy(PValueStrategy::Bootstrap)
        .n_boots(500)
        .build()
        .unwrap();
    group.sample_size(10);
    group.bench_function("bootstrap_noisy_trimodal", |b| {
        b.iter(|| bootstrap.fit(black_box(&data)))
    });

    group.finish();
}

fn bench_skinnydip(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkinnyDip");
    let skinnydip = SkinnyDipBuilder::new().build().unwrap();

    let blobs = TestDistributions::three_blobs_2d();
    group.bench_function("three_blobs_2d", |b| b.iter(|| skinnydip.fit(black_box(&blobs))));

    let noisy = TestDistributions::noisy_blobs_2d();
    group.bench_function("noisy_blobs_2d", |b| b.iter(|| skinnydip.fit(black_box(&noisy))));

    group.finish();
}

criterion_group!(benches, bench_unidip, bench_skinnydip);
criterion_main!(benches);
