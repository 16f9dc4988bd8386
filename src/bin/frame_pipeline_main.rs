// frame_pipeline_main.rs
use green_light_timing::detection::{
    process_frames, AirQualitySource, PayloadFileAirQuality, StaticAirQuality,
};
use green_light_timing::duration_estimator::{DurationEstimator, EstimatorConfig};
use green_light_timing::monitoring::timing_log::{log_timing, timing_log_path};
use green_light_timing::shared_data::{
    current_timestamp, BatchResponse, FrameDetection, Observation, TimingRecord,
};
use std::sync::Arc;

// Usage: frame_pipeline_main <frames.json> <aqi number | air_pollution.json>
async fn run(frames_path: &str, aqi_arg: &str) -> green_light_timing::Result<BatchResponse> {
    let estimator = DurationEstimator::new(EstimatorConfig::from_env()?)?;

    let frames: Vec<FrameDetection> =
        serde_json::from_str(&std::fs::read_to_string(frames_path)?)?;

    let source: Arc<dyn AirQualitySource> = match aqi_arg.parse::<i64>() {
        Ok(aqi) => Arc::new(StaticAirQuality(aqi)),
        Err(_) => Arc::new(PayloadFileAirQuality::new(aqi_arg)),
    };

    let response = process_frames(&estimator, source, &frames).await?;

    let ts = current_timestamp();
    for result in &response.results {
        let observation = Observation::from_counts(result.vehicle_count, result.aqi, 0);
        let record = TimingRecord::new(ts, &observation, result.green_light_duration);
        if let Err(e) = log_timing(timing_log_path(), &record) {
            log::warn!("Error logging timing for {}: {}", result.image, e);
        }
    }
    Ok(response)
}

// argv may be empty when launched through a bare execve
fn program_name(args: &[String]) -> &str {
    args.first()
        .map(String::as_str)
        .unwrap_or("frame_pipeline_main")
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        let program = program_name(&args);
        eprintln!("Usage: {} <frames.json> <aqi | air_pollution.json>", program);
        std::process::exit(2);
    }

    match run(&args[1], &args[2]).await {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error encoding response: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            // Same shape the upload endpoint used for upstream failures
            println!("{}", serde_json::json!({ "error": e.to_string() }));
            std::process::exit(1);
        }
    }
}
