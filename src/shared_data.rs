// src/shared_data.rs

use crate::error::{EstimatorError, Result};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Traffic and environmental readings for one approach, recomputed per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Observation {
    pub queue_length: i64,
    pub car_count: i64,
    pub truck_count: i64,
    pub bus_count: i64,
    pub bike_count: i64,
    pub air_quality_index: i64,
    pub emergency_vehicle_count: i64,
}

impl Observation {
    /// Builds an observation from detector counts. The queue is every detected vehicle.
    pub fn from_counts(counts: VehicleCounts, air_quality_index: i64, emergency: i64) -> Self {
        Self {
            queue_length: counts.total() as i64,
            car_count: counts.cars as i64,
            truck_count: counts.trucks as i64,
            bus_count: counts.buses as i64,
            bike_count: counts.bikes as i64,
            air_quality_index,
            emergency_vehicle_count: emergency,
        }
    }

    /// Rejects the first negative field found.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("queue_length", self.queue_length),
            ("car_count", self.car_count),
            ("truck_count", self.truck_count),
            ("bus_count", self.bus_count),
            ("bike_count", self.bike_count),
            ("air_quality_index", self.air_quality_index),
            ("emergency_vehicle_count", self.emergency_vehicle_count),
        ];
        for (field, value) in fields {
            if value < 0 {
                return Err(EstimatorError::NegativeInput { field, value });
            }
        }
        Ok(())
    }
}

/// Per-class vehicle counts reported by the detector for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VehicleCounts {
    pub cars: u32,
    pub trucks: u32,
    pub buses: u32,
    pub bikes: u32,
}

impl VehicleCounts {
    pub fn total(&self) -> u64 {
        self.cars as u64 + self.trucks as u64 + self.buses as u64 + self.bikes as u64
    }
}

/// Raw detector output for a single uploaded image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameDetection {
    pub image: String,
    pub labels: Vec<String>,
}

/// Timing result for one frame, shaped like the upload endpoint's response entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameResult {
    pub image: String,
    pub vehicle_count: VehicleCounts,
    pub green_light_duration: f64,
    pub aqi: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<FrameResult>,
}

/// One row of the timing log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingRecord {
    pub timestamp: u64,
    pub queue_length: i64,
    pub car_count: i64,
    pub truck_count: i64,
    pub bus_count: i64,
    pub bike_count: i64,
    pub air_quality_index: i64,
    pub emergency_vehicle_count: i64,
    pub green_duration_seconds: f64,
}

impl TimingRecord {
    pub fn new(timestamp: u64, observation: &Observation, green_duration_seconds: f64) -> Self {
        Self {
            timestamp,
            queue_length: observation.queue_length,
            car_count: observation.car_count,
            truck_count: observation.truck_count,
            bus_count: observation.bus_count,
            bike_count: observation.bike_count,
            air_quality_index: observation.air_quality_index,
            emergency_vehicle_count: observation.emergency_vehicle_count,
            green_duration_seconds,
        }
    }
}

pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_length_is_total_of_counts() {
        let counts = VehicleCounts {
            cars: 4,
            trucks: 2,
            buses: 1,
            bikes: 3,
        };
        let obs = Observation::from_counts(counts, 80, 0);
        assert_eq!(obs.queue_length, 10);
        assert_eq!(obs.bus_count, 1);
        assert_eq!(obs.air_quality_index, 80);
    }

    #[test]
    fn validate_names_the_negative_field() {
        let obs = Observation {
            truck_count: -2,
            ..Default::default()
        };
        match obs.validate() {
            Err(EstimatorError::NegativeInput { field, value }) => {
                assert_eq!(field, "truck_count");
                assert_eq!(value, -2);
            }
            other => panic!("expected NegativeInput, got {:?}", other),
        }
    }

    #[test]
    fn zero_observation_is_valid() {
        assert!(Observation::default().validate().is_ok());
    }
}
