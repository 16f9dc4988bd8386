pub mod aqi_ladder;
pub mod config;
pub mod estimator;

// Re-export the items callers need most
pub use aqi_ladder::{AqiLadder, AqiTier};
pub use config::{EstimatorConfig, VehicleWeights};
pub use estimator::{DurationBreakdown, DurationEstimator};
