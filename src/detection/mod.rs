// detection/mod.rs
pub mod air_quality;
pub mod pipeline;
pub mod vehicle_classes;

pub use air_quality::{AirQualitySource, PayloadFileAirQuality, StaticAirQuality};
pub use pipeline::process_frames;
pub use vehicle_classes::VehicleClass;
