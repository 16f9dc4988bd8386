use serde::{Deserialize, Serialize};

use crate::duration_estimator::config::EstimatorConfig;
use crate::error::Result;
use crate::shared_data::Observation;

/// Intermediate terms of one estimate, useful for explaining a result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    pub queue_duration: f64,
    pub vehicle_duration: f64,
    pub aqi_impact: f64,
    pub ev_impact: f64,
    /// Value before clamping.
    pub weighted_duration: f64,
    /// Final green time in seconds.
    pub green_duration_seconds: f64,
}

/// Maps an observation to a bounded green light duration.
///
/// Stateless apart from its immutable config, so it can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct DurationEstimator {
    config: EstimatorConfig,
}

impl DurationEstimator {
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// `k * ln(queue_length + 1)`; zero for an empty queue.
    pub fn queue_duration(&self, queue_length: i64) -> f64 {
        self.config.queue_scale * (queue_length as f64 + 1.0).ln()
    }

    pub fn vehicle_duration(&self, cars: i64, trucks: i64, buses: i64, bikes: i64) -> f64 {
        let w = &self.config.vehicle_weights;
        cars as f64 * w.car + trucks as f64 * w.truck + buses as f64 * w.bus + bikes as f64 * w.bike
    }

    pub fn aqi_impact(&self, aqi: i64) -> f64 {
        self.config.aqi_ladder.multiplier_for(aqi)
    }

    pub fn ev_impact(&self, emergency_vehicles: i64) -> f64 {
        1.0 + emergency_vehicles as f64 * self.config.emergency_coefficient
    }

    /// Validates the observation and returns every term of the formula.
    pub fn breakdown(&self, obs: &Observation) -> Result<DurationBreakdown> {
        obs.validate()?;

        let queue_duration = self.queue_duration(obs.queue_length);
        let vehicle_duration = self.vehicle_duration(
            obs.car_count,
            obs.truck_count,
            obs.bus_count,
            obs.bike_count,
        );
        let aqi_impact = self.aqi_impact(obs.air_quality_index);
        let ev_impact = self.ev_impact(obs.emergency_vehicle_count);

        let weighted_duration = (self.config.queue_weight * queue_duration
            + self.config.vehicle_weight * vehicle_duration)
            * aqi_impact
            * ev_impact;
        // inf * 0 can yield NaN under extreme custom weights; treat it as no demand.
        let bounded = if weighted_duration.is_nan() {
            self.config.base_duration
        } else {
            weighted_duration
        };
        let green_duration_seconds =
            bounded.clamp(self.config.base_duration, self.config.max_green_duration);

        log::debug!(
            "queue={:.2}s vehicles={:.2}s aqi x{:.2} ev x{:.2} -> weighted {:.2}s, green {:.2}s",
            queue_duration,
            vehicle_duration,
            aqi_impact,
            ev_impact,
            weighted_duration,
            green_duration_seconds
        );

        Ok(DurationBreakdown {
            queue_duration,
            vehicle_duration,
            aqi_impact,
            ev_impact,
            weighted_duration,
            green_duration_seconds,
        })
    }

    /// Pre-clamp weighted duration.
    pub fn weighted_duration(&self, obs: &Observation) -> Result<f64> {
        Ok(self.breakdown(obs)?.weighted_duration)
    }

    /// Green light duration in seconds, always within the configured bounds.
    pub fn estimate(&self, obs: &Observation) -> Result<f64> {
        Ok(self.breakdown(obs)?.green_duration_seconds)
    }

    /// Positional form of [`estimate`](Self::estimate), in the order the upload endpoint passes values.
    #[allow(clippy::too_many_arguments)]
    pub fn green_light_duration(
        &self,
        queue_length: i64,
        cars: i64,
        trucks: i64,
        buses: i64,
        bikes: i64,
        aqi: i64,
        emergency_vehicles: i64,
    ) -> Result<f64> {
        self.estimate(&Observation {
            queue_length,
            car_count: cars,
            truck_count: trucks,
            bus_count: buses,
            bike_count: bikes,
            air_quality_index: aqi,
            emergency_vehicle_count: emergency_vehicles,
        })
    }
}
