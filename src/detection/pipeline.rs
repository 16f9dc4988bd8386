use std::sync::Arc;

use crate::detection::air_quality::AirQualitySource;
use crate::duration_estimator::DurationEstimator;
use crate::error::{EstimatorError, Result};
use crate::shared_data::{BatchResponse, FrameDetection, FrameResult, Observation, VehicleCounts};

/// Computes a green duration for every detected frame in a batch.
///
/// The AQI is fetched once per batch on the blocking pool. If that lookup
/// fails the whole batch fails; no partial results are returned. The detector
/// does not report emergency vehicles, so their count is always zero here.
pub async fn process_frames(
    estimator: &DurationEstimator,
    source: Arc<dyn AirQualitySource>,
    frames: &[FrameDetection],
) -> Result<BatchResponse> {
    let aqi = tokio::task::spawn_blocking(move || source.fetch_aqi())
        .await
        .map_err(|e| EstimatorError::AirQualityUnavailable(format!("lookup task failed: {}", e)))??;
    log::info!("[Pipeline] AQI {} for batch of {} frames", aqi, frames.len());

    let mut results = Vec::with_capacity(frames.len());
    for frame in frames {
        let counts = VehicleCounts::tally(&frame.labels);
        let observation = Observation::from_counts(counts, aqi, 0);
        let green_light_duration = estimator.estimate(&observation)?;

        log::info!(
            "[Pipeline] {}: {} vehicles -> {:.2}s green",
            frame.image,
            counts.total(),
            green_light_duration
        );

        results.push(FrameResult {
            image: frame.image.clone(),
            vehicle_count: counts,
            green_light_duration,
            aqi,
        });
    }

    Ok(BatchResponse { results })
}
