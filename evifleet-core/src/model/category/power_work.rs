use super::{CategoryLabel, Dimension};
use crate::model::FleetConfigurationError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// charger available at the driver's workplace
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PowerWork {
    WorkL1,
    WorkL2,
    WorkNone,
}

impl PowerWork {
    pub const ALL: [PowerWork; 3] = [PowerWork::WorkL1, PowerWork::WorkL2, PowerWork::WorkNone];

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerWork::WorkL1 => "WorkL1",
            PowerWork::WorkL2 => "WorkL2",
            PowerWork::WorkNone => "WorkNone",
        }
    }
}

impl CategoryLabel for PowerWork {
    const DIMENSION: Dimension = Dimension::PowerWork;
}

impl Display for PowerWork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PowerWork {
    type Err = FleetConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PowerWork::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| FleetConfigurationError::UnknownCategory {
                dimension: Self::DIMENSION,
                label: s.to_string(),
            })
    }
}
