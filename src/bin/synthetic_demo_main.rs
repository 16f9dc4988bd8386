use green_light_timing::duration_estimator::{DurationEstimator, EstimatorConfig};
use green_light_timing::monitoring::timing_log::{
    log_timing, print_summary, summarize, timing_log_path,
};
use green_light_timing::shared_data::{current_timestamp, TimingRecord};
use green_light_timing::synthetic::random_observations;

const DEFAULT_SAMPLES: usize = 50;
const MAX_PER_CLASS: u32 = 40;

fn main() {
    env_logger::init();

    let samples = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_SAMPLES);

    let estimator = match EstimatorConfig::from_env().and_then(DurationEstimator::new) {
        Ok(estimator) => estimator,
        Err(e) => {
            eprintln!("Estimator config error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Generating {} synthetic observations...", samples);
    let ts = current_timestamp();
    let mut records = Vec::with_capacity(samples);
    for observation in random_observations(samples, MAX_PER_CLASS) {
        match estimator.estimate(&observation) {
            Ok(duration) => {
                let record = TimingRecord::new(ts, &observation, duration);
                if let Err(e) = log_timing(timing_log_path(), &record) {
                    log::warn!("Error logging timing: {}", e);
                }
                records.push(record);
            }
            Err(e) => log::warn!("Skipping observation {:?}: {}", observation, e),
        }
    }

    let config = estimator.config();
    let summary = summarize(&records, config.base_duration, config.max_green_duration);
    print_summary(summary.as_ref());
}
