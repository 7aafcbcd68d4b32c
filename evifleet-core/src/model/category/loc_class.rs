use crate::model::FleetConfigurationError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// settlement class of the study region, selects the empirical mileage
/// distribution parameters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LocClass {
    Urban,
    Rural,
}

impl Display for LocClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocClass::Urban => write!(f, "urban"),
            LocClass::Rural => write!(f, "rural"),
        }
    }
}

impl FromStr for LocClass {
    type Err = FleetConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "urban" => Ok(LocClass::Urban),
            "rural" => Ok(LocClass::Rural),
            _ => Err(FleetConfigurationError::invalid_parameter(
                "loc_class",
                format!("'{s}' is not one of [urban, rural]"),
            )),
        }
    }
}
