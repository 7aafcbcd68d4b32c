use super::{CategoryLabel, Dimension};
use crate::model::FleetConfigurationError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// a daily mileage bin, identified by its lower edge in miles. the bin width is
/// a property of the whole run; source pool and fleet must be binned with the
/// same width for their labels to line up.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct VmtBin(pub u32);

impl VmtBin {
    pub fn lower_bound(&self) -> u32 {
        self.0
    }

    pub fn upper_bound(&self, bin_width: u32) -> u32 {
        self.0 + bin_width
    }
}

impl CategoryLabel for VmtBin {
    const DIMENSION: Dimension = Dimension::VmtBin;
}

impl Display for VmtBin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VmtBin {
    type Err = FleetConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(VmtBin)
            .map_err(|_| FleetConfigurationError::UnknownCategory {
                dimension: Self::DIMENSION,
                label: s.to_string(),
            })
    }
}
