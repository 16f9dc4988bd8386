use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::error::{EstimatorError, Result};

/// Anything that can supply the current air quality index.
///
/// Implementations may block; the frame pipeline calls them on tokio's blocking pool.
pub trait AirQualitySource: Send + Sync {
    fn fetch_aqi(&self) -> Result<i64>;
}

/// A fixed AQI, e.g. one entered by an operator.
#[derive(Debug, Clone, Copy)]
pub struct StaticAirQuality(pub i64);

impl AirQualitySource for StaticAirQuality {
    fn fetch_aqi(&self) -> Result<i64> {
        Ok(self.0)
    }
}

/// Reads a saved OpenWeather air-pollution response from disk.
#[derive(Debug, Clone)]
pub struct PayloadFileAirQuality {
    pub path: PathBuf,
}

impl PayloadFileAirQuality {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl AirQualitySource for PayloadFileAirQuality {
    fn fetch_aqi(&self) -> Result<i64> {
        let body = fs::read_to_string(&self.path).map_err(|e| {
            EstimatorError::AirQualityUnavailable(format!(
                "cannot read {}: {}",
                self.path.display(),
                e
            ))
        })?;
        parse_air_pollution_payload(&body)
    }
}

#[derive(Debug, Deserialize)]
struct AirPollutionPayload {
    list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionEntry {
    main: AirPollutionMain,
}

#[derive(Debug, Deserialize)]
struct AirPollutionMain {
    aqi: i64,
}

/// Extracts `list[0].main.aqi` from an air-pollution response body.
///
/// Error bodies (`{"cod": 401, "message": "..."}`) and empty lists become
/// `AirQualityUnavailable` carrying the provider's message when there is one.
pub fn parse_air_pollution_payload(body: &str) -> Result<i64> {
    match serde_json::from_str::<AirPollutionPayload>(body) {
        Ok(payload) => payload
            .list
            .first()
            .map(|entry| entry.main.aqi)
            .ok_or_else(|| {
                EstimatorError::AirQualityUnavailable("response contained no readings".to_string())
            }),
        Err(parse_err) => {
            let message = serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or_else(|| parse_err.to_string());
            log::warn!("Error fetching AQI data: {}", message);
            Err(EstimatorError::AirQualityUnavailable(message))
        }
    }
}
