//! builders shared by the fleet tests
use crate::source::{DestinationType, SourcePopulation, SourceRecord, SourceVehicleId};
use chrono::NaiveTime;
use evifleet_core::model::{
    category::{DayOfWeek, PevType, PowerHome, PowerWork, PreferredLoc, VehicleClass, VmtBin},
    stratum::StratumKey,
    weights::{FleetWeights, VmtWeights, WeightEntry},
};
use std::collections::HashMap;

fn entries(pairs: &[(&str, f64)]) -> Vec<WeightEntry> {
    pairs.iter().map(|(c, w)| WeightEntry::new(c, *w)).collect()
}

/// weights over pev type and preferred location. the remaining dimensions are
/// fixed to HomeL2, WorkL2 and Sedan.
pub fn mock_weights(pev: &[(&str, f64)], pref: &[(&str, f64)]) -> FleetWeights {
    let named = HashMap::from([
        (String::from("pev_weights"), entries(pev)),
        (String::from("pref_weights"), entries(pref)),
        (String::from("home_weights"), entries(&[("HomeL2", 1.0)])),
        (String::from("work_weights"), entries(&[("WorkL2", 1.0)])),
        (String::from("vehicle_weights"), entries(&[("Sedan", 1.0)])),
    ]);
    FleetWeights::try_from_named(&named).unwrap()
}

pub fn mock_vmt(weekday: &[(&str, f64)], weekend: &[(&str, f64)]) -> VmtWeights {
    VmtWeights::try_from_entries(&entries(weekday), &entries(weekend)).unwrap()
}

/// a key compatible with [`mock_weights`]
pub fn mock_key(
    day_of_week: DayOfWeek,
    pev_type: PevType,
    preferred_loc: PreferredLoc,
    bin: u32,
) -> StratumKey {
    StratumKey {
        day_of_week,
        pev_type,
        preferred_loc,
        power_home: PowerHome::HomeL2,
        power_work: PowerWork::WorkL2,
        vehicle_class: VehicleClass::Sedan,
        schedule_vmt_bin: VmtBin(bin),
    }
}

/// a source pool holding, for each (key, vehicle id, session count) triple, that
/// many sessions of the vehicle
pub fn mock_source(vehicles: &[(StratumKey, u64, u32)]) -> SourcePopulation {
    let records = vehicles
        .iter()
        .flat_map(|(key, id, n_sessions)| {
            (0..*n_sessions).map(move |session_id| {
                let start = NaiveTime::from_hms_opt(8 + session_id, 0, 0).unwrap();
                let end = NaiveTime::from_hms_opt(8 + session_id, 45, 0).unwrap();
                SourceRecord::new(
                    key,
                    SourceVehicleId(*id),
                    session_id,
                    start,
                    end,
                    DestinationType::Home,
                    5.0 + *id as f64,
                )
            })
        })
        .collect();
    SourcePopulation::new(records)
}
