use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};
use crate::global_variables::AQI_TIERS;

/// One rung of the ladder: every AQI at or above `lower_bound` (up to the next rung) uses `multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AqiTier {
    pub lower_bound: i64,
    pub multiplier: f64,
}

/// Ordered AQI threshold table.
///
/// Tiers are sorted by strictly increasing `lower_bound`. An AQI below the
/// first bound falls into the first tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AqiTier>", into = "Vec<AqiTier>")]
pub struct AqiLadder {
    tiers: Vec<AqiTier>,
}

impl AqiLadder {
    pub fn new(tiers: Vec<AqiTier>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(EstimatorError::InvalidConfig(
                "AQI ladder needs at least one tier".to_string(),
            ));
        }
        for pair in tiers.windows(2) {
            if pair[0].lower_bound >= pair[1].lower_bound {
                return Err(EstimatorError::InvalidConfig(format!(
                    "AQI ladder bounds must be strictly increasing ({} then {})",
                    pair[0].lower_bound, pair[1].lower_bound
                )));
            }
        }
        if let Some(tier) = tiers
            .iter()
            .find(|t| !t.multiplier.is_finite() || t.multiplier < 0.0)
        {
            return Err(EstimatorError::InvalidConfig(format!(
                "AQI multiplier for tier starting at {} must be finite and non-negative, got {}",
                tier.lower_bound, tier.multiplier
            )));
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[AqiTier] {
        &self.tiers
    }

    /// Multiplier for the tier containing `aqi`.
    pub fn multiplier_for(&self, aqi: i64) -> f64 {
        // Number of tiers whose lower bound is <= aqi; the last of them contains aqi.
        let idx = self.tiers.partition_point(|t| t.lower_bound <= aqi);
        self.tiers[idx.saturating_sub(1)].multiplier
    }
}

impl Default for AqiLadder {
    fn default() -> Self {
        Self {
            tiers: AQI_TIERS
                .iter()
                .map(|&(lower_bound, multiplier)| AqiTier {
                    lower_bound,
                    multiplier,
                })
                .collect(),
        }
    }
}

impl TryFrom<Vec<AqiTier>> for AqiLadder {
    type Error = EstimatorError;

    fn try_from(tiers: Vec<AqiTier>) -> Result<Self> {
        Self::new(tiers)
    }
}

impl From<AqiLadder> for Vec<AqiTier> {
    fn from(ladder: AqiLadder) -> Self {
        ladder.tiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ladder_boundaries_are_exact() {
        let ladder = AqiLadder::default();
        let cases = [
            (0, 0.8),
            (49, 0.8),
            (50, 0.9),
            (100, 0.9),
            (101, 1.0),
            (200, 1.0),
            (201, 1.2),
            (300, 1.2),
            (301, 1.5),
            (5000, 1.5),
        ];
        for (aqi, expected) in cases {
            assert_eq!(ladder.multiplier_for(aqi), expected, "aqi {}", aqi);
        }
    }

    #[test]
    fn below_first_bound_uses_first_tier() {
        let ladder = AqiLadder::new(vec![
            AqiTier {
                lower_bound: 10,
                multiplier: 0.5,
            },
            AqiTier {
                lower_bound: 20,
                multiplier: 2.0,
            },
        ])
        .unwrap();
        assert_eq!(ladder.multiplier_for(-5), 0.5);
        assert_eq!(ladder.multiplier_for(19), 0.5);
        assert_eq!(ladder.multiplier_for(20), 2.0);
    }

    #[test]
    fn rejects_unsorted_and_empty_ladders() {
        assert!(AqiLadder::new(vec![]).is_err());
        let unsorted = vec![
            AqiTier {
                lower_bound: 100,
                multiplier: 1.0,
            },
            AqiTier {
                lower_bound: 50,
                multiplier: 0.9,
            },
        ];
        assert!(AqiLadder::new(unsorted).is_err());
        let nan = vec![AqiTier {
            lower_bound: 0,
            multiplier: f64::NAN,
        }];
        assert!(AqiLadder::new(nan).is_err());
    }

    #[test]
    fn deserializing_goes_through_validation() {
        let bad = r#"[{"lower_bound":5,"multiplier":1.0},{"lower_bound":5,"multiplier":1.1}]"#;
        assert!(serde_json::from_str::<AqiLadder>(bad).is_err());

        let good = r#"[{"lower_bound":0,"multiplier":1.0},{"lower_bound":5,"multiplier":1.1}]"#;
        let ladder: AqiLadder = serde_json::from_str(good).unwrap();
        assert_eq!(ladder.multiplier_for(7), 1.1);
    }
}
