use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration,
};
use std::sync::Arc;

use green_light_timing::detection::{process_frames, StaticAirQuality};
use green_light_timing::duration_estimator::DurationEstimator;
use green_light_timing::shared_data::FrameDetection;

const LABELS: [&str; 6] = ["car", "truck", "bus", "motorcycle", "person", "traffic light"];

/// Dummy detector output: frame i carries 5 + (i % 20) labels.
fn generate_dummy_frames(batch_size: usize) -> Vec<FrameDetection> {
    (0..batch_size)
        .map(|i| FrameDetection {
            image: format!("frame_{}.png", i),
            labels: (0..5 + (i % 20))
                .map(|j| LABELS[(i + j) % LABELS.len()].to_string())
                .collect(),
        })
        .collect()
}

fn bench_process_frames(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let estimator = DurationEstimator::default();

    let mut group = c.benchmark_group("process_frames");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    for &batch in [10, 20, 50].iter() {
        let frames = generate_dummy_frames(batch);
        group.bench_with_input(BenchmarkId::from_parameter(batch), &frames, |b, frames| {
            b.iter(|| {
                let response = runtime.block_on(process_frames(
                    &estimator,
                    Arc::new(StaticAirQuality(120)),
                    black_box(frames),
                ));
                black_box(response.ok());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_process_frames);
criterion_main!(benches);
