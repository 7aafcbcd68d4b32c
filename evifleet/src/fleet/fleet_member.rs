use super::FleetId;
use crate::source::SourceVehicleId;
use evifleet_core::model::stratum::StratumKey;

/// one synthesized vehicle, bound to a vehicle of the source pool from the same stratum
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetMember {
    pub fleet_id: FleetId,
    pub stratum: StratumKey,
    pub source_vehicle_id: SourceVehicleId,
}

impl FleetMember {
    pub fn new(fleet_id: FleetId, stratum: StratumKey, source_vehicle_id: SourceVehicleId) -> Self {
        FleetMember {
            fleet_id,
            stratum,
            source_vehicle_id,
        }
    }
}
