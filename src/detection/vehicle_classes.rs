use crate::shared_data::VehicleCounts;

/// Vehicle classes the timing formula weights separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    Car,
    Truck,
    Bus,
    Bike,
}

impl VehicleClass {
    /// Maps a detector class label to a vehicle class. Pedestrians, traffic lights etc. yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "car" => Some(VehicleClass::Car),
            "truck" => Some(VehicleClass::Truck),
            "bus" => Some(VehicleClass::Bus),
            "motorcycle" | "motorbike" => Some(VehicleClass::Bike),
            _ => None,
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            VehicleClass::Car => write!(f, "car"),
            VehicleClass::Truck => write!(f, "truck"),
            VehicleClass::Bus => write!(f, "bus"),
            VehicleClass::Bike => write!(f, "bike"),
        }
    }
}

impl VehicleCounts {
    pub fn add(&mut self, class: VehicleClass) {
        match class {
            VehicleClass::Car => self.cars += 1,
            VehicleClass::Truck => self.trucks += 1,
            VehicleClass::Bus => self.buses += 1,
            VehicleClass::Bike => self.bikes += 1,
        }
    }

    /// Counts every recognised vehicle label in one detector run.
    pub fn tally<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = VehicleCounts::default();
        for label in labels {
            match VehicleClass::from_label(label.as_ref()) {
                Some(class) => {
                    log::trace!("Counted {} from label '{}'", class, label.as_ref());
                    counts.add(class);
                }
                None => log::trace!("Ignoring non-vehicle label '{}'", label.as_ref()),
            }
        }
        counts
    }
}
