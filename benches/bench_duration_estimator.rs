use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration,
};

use green_light_timing::duration_estimator::DurationEstimator;
use green_light_timing::synthetic::random_observations;

/// Benchmarks estimate() over batches of synthetic observations (50, 100 and 200 approaches).
fn bench_estimate_batches(c: &mut Criterion) {
    let estimator = DurationEstimator::default();
    let batch_sizes = [50, 100, 200];

    let mut group = c.benchmark_group("estimate_batch");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    for &batch in batch_sizes.iter() {
        let observations = random_observations(batch, 40);
        group.bench_with_input(
            BenchmarkId::from_parameter(batch),
            &observations,
            |b, observations| {
                b.iter(|| {
                    for obs in observations {
                        black_box(estimator.estimate(black_box(obs)).ok());
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_aqi_lookup(c: &mut Criterion) {
    let estimator = DurationEstimator::default();
    c.bench_function("aqi_impact", |b| {
        b.iter(|| {
            for aqi in (0..400).step_by(7) {
                black_box(estimator.aqi_impact(black_box(aqi)));
            }
        });
    });
}

criterion_group!(benches, bench_estimate_batches, bench_aqi_lookup);
criterion_main!(benches);
