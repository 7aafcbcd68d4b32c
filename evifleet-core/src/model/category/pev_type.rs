use super::{CategoryLabel, Dimension};
use crate::model::FleetConfigurationError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// plug-in electric vehicle powertrain. the suffix is the all-electric range in miles.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PevType {
    #[serde(rename = "PHEV20")]
    Phev20,
    #[serde(rename = "PHEV50")]
    Phev50,
    #[serde(rename = "BEV100")]
    Bev100,
    #[serde(rename = "BEV250")]
    Bev250,
}

impl PevType {
    pub const ALL: [PevType; 4] = [
        PevType::Phev20,
        PevType::Phev50,
        PevType::Bev100,
        PevType::Bev250,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PevType::Phev20 => "PHEV20",
            PevType::Phev50 => "PHEV50",
            PevType::Bev100 => "BEV100",
            PevType::Bev250 => "BEV250",
        }
    }
}

impl CategoryLabel for PevType {
    const DIMENSION: Dimension = Dimension::PevType;
}

impl Display for PevType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PevType {
    type Err = FleetConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PevType::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| FleetConfigurationError::UnknownCategory {
                dimension: Self::DIMENSION,
                label: s.to_string(),
            })
    }
}
