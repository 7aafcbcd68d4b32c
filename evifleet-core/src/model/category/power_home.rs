use super::{CategoryLabel, Dimension};
use crate::model::FleetConfigurationError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// charger available at the driver's residence
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PowerHome {
    HomeL1,
    HomeL2,
    HomeNone,
}

impl PowerHome {
    pub const ALL: [PowerHome; 3] = [PowerHome::HomeL1, PowerHome::HomeL2, PowerHome::HomeNone];

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerHome::HomeL1 => "HomeL1",
            PowerHome::HomeL2 => "HomeL2",
            PowerHome::HomeNone => "HomeNone",
        }
    }
}

impl CategoryLabel for PowerHome {
    const DIMENSION: Dimension = Dimension::PowerHome;
}

impl Display for PowerHome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PowerHome {
    type Err = FleetConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PowerHome::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| FleetConfigurationError::UnknownCategory {
                dimension: Self::DIMENSION,
                label: s.to_string(),
            })
    }
}
