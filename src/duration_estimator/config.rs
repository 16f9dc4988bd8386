//! Tunable parameters of the green duration formula.
//!
//! Defaults come from `global_variables`. A JSON file named by
//! `GREEN_TIMING_CONFIG` may override any subset of fields.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::duration_estimator::aqi_ladder::AqiLadder;
use crate::error::{EstimatorError, Result};
use crate::global_variables::{
    BASE_DURATION, BIKE_WEIGHT, BUS_WEIGHT, CAR_WEIGHT, EMERGENCY_COEFFICIENT, ENV_CONFIG_PATH,
    MAX_GREEN_DURATION, QUEUE_SCALE, QUEUE_WEIGHT, TRUCK_WEIGHT, VEHICLE_WEIGHT,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleWeights {
    pub car: f64,
    pub truck: f64,
    pub bus: f64,
    pub bike: f64,
}

impl Default for VehicleWeights {
    fn default() -> Self {
        Self {
            car: CAR_WEIGHT,
            truck: TRUCK_WEIGHT,
            bus: BUS_WEIGHT,
            bike: BIKE_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Logarithmic scaling factor applied to the queue length.
    pub queue_scale: f64,
    pub vehicle_weights: VehicleWeights,
    /// Lower clamp bound in seconds.
    pub base_duration: f64,
    /// Upper clamp bound in seconds.
    pub max_green_duration: f64,
    pub queue_weight: f64,
    pub vehicle_weight: f64,
    /// Added to the multiplier once per emergency vehicle.
    pub emergency_coefficient: f64,
    pub aqi_ladder: AqiLadder,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            queue_scale: QUEUE_SCALE,
            vehicle_weights: VehicleWeights::default(),
            base_duration: BASE_DURATION,
            max_green_duration: MAX_GREEN_DURATION,
            queue_weight: QUEUE_WEIGHT,
            vehicle_weight: VEHICLE_WEIGHT,
            emergency_coefficient: EMERGENCY_COEFFICIENT,
            aqi_ladder: AqiLadder::default(),
        }
    }
}

impl EstimatorConfig {
    /// Same as the defaults but with different clamp bounds.
    pub fn with_bounds(base_duration: f64, max_green_duration: f64) -> Result<Self> {
        let config = Self {
            base_duration,
            max_green_duration,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        log::info!(
            "Loaded estimator config from {} (bounds {}..={}s)",
            path.as_ref().display(),
            config.base_duration,
            config.max_green_duration
        );
        Ok(config)
    }

    /// Loads the file named by `GREEN_TIMING_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(ENV_CONFIG_PATH) {
            Ok(path) if !path.trim().is_empty() => Self::load_from_file(path.trim()),
            _ => {
                log::debug!("{} not set, using default estimator config", ENV_CONFIG_PATH);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("queue_scale", self.queue_scale),
            ("vehicle_weights.car", self.vehicle_weights.car),
            ("vehicle_weights.truck", self.vehicle_weights.truck),
            ("vehicle_weights.bus", self.vehicle_weights.bus),
            ("vehicle_weights.bike", self.vehicle_weights.bike),
            ("base_duration", self.base_duration),
            ("max_green_duration", self.max_green_duration),
            ("queue_weight", self.queue_weight),
            ("vehicle_weight", self.vehicle_weight),
            ("emergency_coefficient", self.emergency_coefficient),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(EstimatorError::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        if self.base_duration > self.max_green_duration {
            return Err(EstimatorError::InvalidConfig(format!(
                "base_duration ({}) exceeds max_green_duration ({})",
                self.base_duration, self.max_green_duration
            )));
        }
        // Re-run the ladder checks in case the struct was built by hand.
        AqiLadder::new(self.aqi_ladder.tiers().to_vec())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = EstimatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_duration, 15.0);
        assert_eq!(config.max_green_duration, 120.0);
        assert_eq!(config.vehicle_weights.bus, 2.75);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(EstimatorConfig::with_bounds(60.0, 30.0).is_err());
        assert!(EstimatorConfig::with_bounds(30.0, 30.0).is_ok());
    }

    #[test]
    fn negative_or_nan_weights_are_rejected() {
        let mut config = EstimatorConfig::default();
        config.vehicle_weights.truck = -1.0;
        assert!(config.validate().is_err());

        let mut config = EstimatorConfig::default();
        config.queue_scale = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"max_green_duration": 90.0, "vehicle_weights": {{"truck": 4.0}}}}"#
        )
        .unwrap();

        let config = EstimatorConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.max_green_duration, 90.0);
        assert_eq!(config.vehicle_weights.truck, 4.0);
        assert_eq!(config.vehicle_weights.car, 1.0);
        assert_eq!(config.base_duration, 15.0);
    }

    #[test]
    fn invalid_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"base_duration": 200.0}}"#).unwrap();
        assert!(matches!(
            EstimatorConfig::load_from_file(file.path()),
            Err(EstimatorError::InvalidConfig(_))
        ));
    }
}
