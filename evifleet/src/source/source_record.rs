use super::{DestinationType, SourceVehicleId};
use chrono::NaiveTime;
use evifleet_core::model::{
    category::{DayOfWeek, PevType, PowerHome, PowerWork, PreferredLoc, VehicleClass, VmtBin},
    stratum::StratumKey,
};
use serde::{Deserialize, Serialize};

/// one charging session of one simulated vehicle in the source pool. a vehicle
/// commonly spans several rows, one per session, all carrying the same
/// stratifying attributes.
///
/// CSV rows as currently defined:
/// schedule_vmt_bin,power_public,power_work,power_home,preferred_loc,pev_type,
/// day_of_week,vehicle_class,source_vehicle_id,session_id,start_time,end_time,
/// dest_type,energy_kwh
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SourceRecord {
    pub schedule_vmt_bin: VmtBin,
    /// legacy public charger tag, passed through to the output but never matched on
    #[serde(default)]
    pub power_public: Option<String>,
    pub power_work: PowerWork,
    pub power_home: PowerHome,
    pub preferred_loc: PreferredLoc,
    pub pev_type: PevType,
    pub day_of_week: DayOfWeek,
    pub vehicle_class: VehicleClass,
    pub source_vehicle_id: SourceVehicleId,
    pub session_id: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub dest_type: DestinationType,
    pub energy_kwh: f64,
}

impl SourceRecord {
    /// column names that must appear in a source population file header
    pub const REQUIRED_COLUMNS: [&'static str; 13] = [
        "schedule_vmt_bin",
        "power_work",
        "power_home",
        "preferred_loc",
        "pev_type",
        "day_of_week",
        "vehicle_class",
        "source_vehicle_id",
        "session_id",
        "start_time",
        "end_time",
        "dest_type",
        "energy_kwh",
    ];

    pub fn new(
        stratum: &StratumKey,
        source_vehicle_id: SourceVehicleId,
        session_id: u32,
        start_time: NaiveTime,
        end_time: NaiveTime,
        dest_type: DestinationType,
        energy_kwh: f64,
    ) -> SourceRecord {
        SourceRecord {
            schedule_vmt_bin: stratum.schedule_vmt_bin,
            power_public: None,
            power_work: stratum.power_work,
            power_home: stratum.power_home,
            preferred_loc: stratum.preferred_loc,
            pev_type: stratum.pev_type,
            day_of_week: stratum.day_of_week,
            vehicle_class: stratum.vehicle_class,
            source_vehicle_id,
            session_id,
            start_time,
            end_time,
            dest_type,
            energy_kwh,
        }
    }

    pub fn stratum(&self) -> StratumKey {
        StratumKey {
            day_of_week: self.day_of_week,
            pev_type: self.pev_type,
            preferred_loc: self.preferred_loc,
            power_home: self.power_home,
            power_work: self.power_work,
            vehicle_class: self.vehicle_class,
            schedule_vmt_bin: self.schedule_vmt_bin,
        }
    }
}
