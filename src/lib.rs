pub mod detection;
pub mod duration_estimator;
pub mod error;
pub mod global_variables;
pub mod monitoring;
pub mod shared_data;
pub mod synthetic;

pub use duration_estimator::{DurationEstimator, EstimatorConfig};
pub use error::{EstimatorError, Result};
pub use shared_data::Observation;
