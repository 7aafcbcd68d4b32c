use super::{CategoryLabel, Dimension};
use crate::model::FleetConfigurationError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// where a driver prefers to charge when more than one option is available.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreferredLoc {
    PrefHome,
    PrefWork,
    PrefPublic,
}

impl PreferredLoc {
    pub const ALL: [PreferredLoc; 3] = [
        PreferredLoc::PrefHome,
        PreferredLoc::PrefWork,
        PreferredLoc::PrefPublic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredLoc::PrefHome => "PrefHome",
            PreferredLoc::PrefWork => "PrefWork",
            PreferredLoc::PrefPublic => "PrefPublic",
        }
    }
}

impl CategoryLabel for PreferredLoc {
    const DIMENSION: Dimension = Dimension::PreferredLoc;
}

impl Display for PreferredLoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PreferredLoc {
    type Err = FleetConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PreferredLoc::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| FleetConfigurationError::UnknownCategory {
                dimension: Self::DIMENSION,
                label: s.to_string(),
            })
    }
}
