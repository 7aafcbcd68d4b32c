use super::{FleetId, FleetMember, FleetWarning};
use crate::source::{SourcePopulation, SourceVehicleId};
use evifleet_core::model::stratum::StratumKey;
use itertools::Itertools;
use rand::{seq::IndexedRandom, Rng};
use std::collections::HashMap;

/// the outcome of binding fleet rows to source vehicles
#[derive(Clone, Debug, PartialEq)]
pub struct BoundFleet {
    pub members: Vec<FleetMember>,
    pub dropped: usize,
    pub warning: Option<FleetWarning>,
}

/// distinct source vehicle ids of each stratum, in order of first appearance in
/// the source pool
pub fn vehicle_index(source: &SourcePopulation) -> HashMap<StratumKey, Vec<SourceVehicleId>> {
    source
        .records()
        .iter()
        .map(|r| (r.stratum(), r.source_vehicle_id))
        .unique()
        .into_group_map()
}

/// assigns each fleet row a source vehicle drawn uniformly, with replacement, from
/// the vehicles of the source pool sharing its stratum. rows whose stratum has no
/// source vehicle are dropped and reported in a single
/// [`FleetWarning::SparseMatch`]. surviving members are numbered densely from 1 in
/// row order.
pub fn bind<R: Rng + ?Sized>(
    rows: &[StratumKey],
    source: &SourcePopulation,
    rng: &mut R,
) -> BoundFleet {
    let index = vehicle_index(source);
    let mut bound = vec![];
    let mut unmatched = vec![];
    for key in rows {
        let drawn = match index.get(key) {
            Some(ids) => ids.choose(rng),
            None => None,
        };
        match drawn {
            Some(id) => bound.push((*key, *id)),
            None => unmatched.push(*key),
        }
    }

    let members = bound
        .into_iter()
        .enumerate()
        .map(|(idx, (key, id))| FleetMember::new(FleetId(idx + 1), key, id))
        .collect_vec();

    let dropped = unmatched.len();
    let warning = if dropped > 0 {
        let strata = unmatched.iter().unique().collect_vec();
        for key in strata.iter() {
            log::debug!("no source vehicle for stratum {key}");
        }
        let warning = FleetWarning::SparseMatch {
            dropped,
            strata: strata.len(),
        };
        log::warn!("{warning}");
        Some(warning)
    } else {
        None
    };

    BoundFleet {
        members,
        dropped,
        warning,
    }
}
