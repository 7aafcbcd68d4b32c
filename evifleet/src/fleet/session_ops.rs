use super::{FleetActivity, FleetMember};
use crate::source::{SourcePopulation, SourceRecord, SourceVehicleId};
use evifleet_core::model::stratum::StratumKey;
use itertools::Itertools;
use std::collections::HashMap;

/// expands every fleet member into one activity row per session of its bound
/// source vehicle. sessions are matched on the full stratum and the vehicle id, so
/// the same id reused in another stratum never leaks into a member. output follows
/// member order, then session order in the source pool.
pub fn join_sessions(members: &[FleetMember], source: &SourcePopulation) -> Vec<FleetActivity> {
    let sessions: HashMap<(StratumKey, SourceVehicleId), Vec<&SourceRecord>> = source
        .records()
        .iter()
        .map(|r| ((r.stratum(), r.source_vehicle_id), r))
        .into_group_map();

    members
        .iter()
        .flat_map(|member| {
            sessions
                .get(&(member.stratum, member.source_vehicle_id))
                .into_iter()
                .flatten()
                .map(move |session| FleetActivity::new(member, session))
        })
        .collect()
}
