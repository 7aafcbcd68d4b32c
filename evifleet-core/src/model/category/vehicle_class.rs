use super::{CategoryLabel, Dimension};
use crate::model::FleetConfigurationError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VehicleClass {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Pickup,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] =
        [VehicleClass::Sedan, VehicleClass::Suv, VehicleClass::Pickup];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::Sedan => "Sedan",
            VehicleClass::Suv => "SUV",
            VehicleClass::Pickup => "Pickup",
        }
    }
}

impl CategoryLabel for VehicleClass {
    const DIMENSION: Dimension = Dimension::VehicleClass;
}

impl Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VehicleClass {
    type Err = FleetConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleClass::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| FleetConfigurationError::UnknownCategory {
                dimension: Self::DIMENSION,
                label: s.to_string(),
            })
    }
}
