use rand::Rng;

use crate::shared_data::{Observation, VehicleCounts};

/// Random but plausible observation: up to `max_per_class` vehicles per class,
/// queue equal to the vehicle total, AQI anywhere on the 0..=400 scale and an
/// occasional emergency vehicle.
pub fn random_observation<R: Rng>(rng: &mut R, max_per_class: u32) -> Observation {
    let counts = VehicleCounts {
        cars: rng.random_range(0..=max_per_class),
        trucks: rng.random_range(0..=max_per_class / 3),
        buses: rng.random_range(0..=max_per_class / 4),
        bikes: rng.random_range(0..=max_per_class / 2),
    };
    let aqi = rng.random_range(0..=400);
    // Roughly one approach in ten has an emergency vehicle waiting
    let emergency = if rng.random_range(0..10) == 0 { 1 } else { 0 };
    Observation::from_counts(counts, aqi, emergency)
}

pub fn random_observations(n: usize, max_per_class: u32) -> Vec<Observation> {
    let mut rng = rand::rng();
    (0..n)
        .map(|_| random_observation(&mut rng, max_per_class))
        .collect()
}
