//! Error types for green light timing

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, EstimatorError>;

#[derive(Error, Debug)]
pub enum EstimatorError {
    /// A count, queue length or AQI below zero
    #[error("Invalid input: {field} must be non-negative, got {value}")]
    NegativeInput { field: &'static str, value: i64 },

    /// Estimator configuration failed validation
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// The air quality collaborator could not supply an index
    #[error("Failed to fetch AQI data: {0}")]
    AirQualityUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
