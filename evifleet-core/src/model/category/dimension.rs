use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the stratifying dimensions of a fleet, excluding day of week which partitions
/// the fleet rather than weighting it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    PevType,
    PreferredLoc,
    PowerHome,
    PowerWork,
    VehicleClass,
    #[serde(rename = "schedule_vmt_bin")]
    VmtBin,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::PevType,
        Dimension::PreferredLoc,
        Dimension::PowerHome,
        Dimension::PowerWork,
        Dimension::VehicleClass,
        Dimension::VmtBin,
    ];

    /// column name of this dimension in source and fleet tables
    pub fn column_name(&self) -> &'static str {
        match self {
            Dimension::PevType => "pev_type",
            Dimension::PreferredLoc => "preferred_loc",
            Dimension::PowerHome => "power_home",
            Dimension::PowerWork => "power_work",
            Dimension::VehicleClass => "vehicle_class",
            Dimension::VmtBin => "schedule_vmt_bin",
        }
    }

    /// name of the weight table that configures this dimension
    pub fn weights_name(&self) -> &'static str {
        match self {
            Dimension::PevType => "pev_weights",
            Dimension::PreferredLoc => "pref_weights",
            Dimension::PowerHome => "home_weights",
            Dimension::PowerWork => "work_weights",
            Dimension::VehicleClass => "vehicle_weights",
            Dimension::VmtBin => "vmt_weights",
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column_name())
    }
}
