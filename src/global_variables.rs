// Queue scaling and clamp bounds (seconds)
pub const QUEUE_SCALE: f64 = 10.0;
pub const BASE_DURATION: f64 = 15.0;
pub const MAX_GREEN_DURATION: f64 = 120.0;

// Per-class vehicle weights
pub const CAR_WEIGHT: f64 = 1.0;
pub const TRUCK_WEIGHT: f64 = 3.0;
pub const BUS_WEIGHT: f64 = 2.75;
pub const BIKE_WEIGHT: f64 = 0.65;

// Blend of queue and vehicle durations
pub const QUEUE_WEIGHT: f64 = 0.6;
pub const VEHICLE_WEIGHT: f64 = 0.4;

pub const EMERGENCY_COEFFICIENT: f64 = 0.7;

// AQI tiers as (inclusive lower bound, multiplier)
pub const AQI_TIERS: [(i64, f64); 5] = [(0, 0.8), (50, 0.9), (101, 1.0), (201, 1.2), (301, 1.5)];

// Environment variables
pub const ENV_CONFIG_PATH: &str = "GREEN_TIMING_CONFIG";
pub const ENV_TIMING_LOG: &str = "GREEN_TIMING_LOG";

// Output files
pub const TIMING_LOG_FILE: &str = "green_light_timings.csv";
pub const TIMING_PLOT_FILE: &str = "duration_vs_queue.png";
