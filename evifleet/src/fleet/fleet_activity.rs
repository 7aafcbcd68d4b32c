use super::{FleetId, FleetMember};
use crate::source::{DestinationType, SourceRecord, SourceVehicleId};
use chrono::NaiveTime;
use evifleet_core::model::{
    category::{DayOfWeek, PevType, PowerHome, PowerWork, PreferredLoc, VehicleClass, VmtBin},
    stratum::StratumKey,
};
use serde::{Deserialize, Serialize};

/// one charging session of one fleet member, copied from the session of the
/// source vehicle the member is bound to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FleetActivity {
    pub fleet_id: FleetId,
    pub source_vehicle_id: SourceVehicleId,
    pub day_of_week: DayOfWeek,
    pub pev_type: PevType,
    pub preferred_loc: PreferredLoc,
    pub power_home: PowerHome,
    pub power_work: PowerWork,
    pub vehicle_class: VehicleClass,
    pub schedule_vmt_bin: VmtBin,
    pub power_public: Option<String>,
    pub session_id: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub dest_type: DestinationType,
    pub energy_kwh: f64,
}

impl FleetActivity {
    pub fn new(member: &FleetMember, session: &SourceRecord) -> FleetActivity {
        let key = &member.stratum;
        FleetActivity {
            fleet_id: member.fleet_id,
            source_vehicle_id: member.source_vehicle_id,
            day_of_week: key.day_of_week,
            pev_type: key.pev_type,
            preferred_loc: key.preferred_loc,
            power_home: key.power_home,
            power_work: key.power_work,
            vehicle_class: key.vehicle_class,
            schedule_vmt_bin: key.schedule_vmt_bin,
            power_public: session.power_public.clone(),
            session_id: session.session_id,
            start_time: session.start_time,
            end_time: session.end_time,
            dest_type: session.dest_type,
            energy_kwh: session.energy_kwh,
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
