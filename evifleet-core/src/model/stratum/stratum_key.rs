use crate::model::category::{
    DayOfWeek, Dimension, PevType, PowerHome, PowerWork, PreferredLoc, VehicleClass, VmtBin,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// one combination of category labels across every stratifying dimension plus day
/// of week. fleet members are bound to source vehicles by exact equality of this key.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StratumKey {
    pub day_of_week: DayOfWeek,
    pub pev_type: PevType,
    pub preferred_loc: PreferredLoc,
    pub power_home: PowerHome,
    pub power_work: PowerWork,
    pub vehicle_class: VehicleClass,
    pub schedule_vmt_bin: VmtBin,
}

impl StratumKey {
    /// the label this stratum carries for a dimension
    pub fn label(&self, dimension: Dimension) -> String {
        match dimension {
            Dimension::PevType => self.pev_type.to_string(),
            Dimension::PreferredLoc => self.preferred_loc.to_string(),
            Dimension::PowerHome => self.power_home.to_string(),
            Dimension::PowerWork => self.power_work.to_string(),
            Dimension::VehicleClass => self.vehicle_class.to_string(),
            Dimension::VmtBin => self.schedule_vmt_bin.to_string(),
        }
    }
}

impl Display for StratumKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}/{}/{}",
            self.day_of_week,
            self.pev_type,
            self.preferred_loc,
            self.power_home,
            self.power_work,
            self.vehicle_class,
            self.schedule_vmt_bin
        )
    }
}
