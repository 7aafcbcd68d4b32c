use super::{FleetActivity, FleetId};
use evifleet_core::model::{
    category::{DayOfWeek, Dimension},
    stratum::StratumKey,
    weights::{FleetWeights, VmtWeights},
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// target and realized proportion of one category of one dimension, among the
/// fleet members of one day of week
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FleetStatsRow {
    pub dimension: Dimension,
    pub day_of_week: DayOfWeek,
    pub category: String,
    pub target_weight: f64,
    pub realized_weight: f64,
    pub realized_count: usize,
}

/// per-category comparison of a generated fleet against the weights it was
/// generated from. members are counted once each, regardless of how many sessions
/// they carry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct FleetStats {
    pub rows: Vec<FleetStatsRow>,
}

impl FleetStats {
    pub fn from_activity(
        activity: &[FleetActivity],
        weights: &FleetWeights,
        vmt: &VmtWeights,
    ) -> FleetStats {
        let members: BTreeMap<FleetId, StratumKey> =
            activity.iter().map(|a| (a.fleet_id, a.stratum())).collect();
        let mut rows = vec![];
        for day_of_week in DayOfWeek::ALL {
            let day_members = members
                .values()
                .filter(|k| k.day_of_week == day_of_week)
                .collect_vec();
            let n_members = day_members.len();
            for dimension in Dimension::ALL {
                let targets = match dimension {
                    Dimension::VmtBin => vmt
                        .get(day_of_week)
                        .iter()
                        .map(|(bin, w)| (bin.to_string(), w))
                        .collect_vec(),
                    _ => weights.labeled_weights(dimension),
                };
                let counts = day_members.iter().map(|k| k.label(dimension)).counts();
                for (category, target_weight) in targets {
                    let realized_count = counts.get(&category).copied().unwrap_or_default();
                    let realized_weight = if n_members == 0 {
                        0.0
                    } else {
                        realized_count as f64 / n_members as f64
                    };
                    rows.push(FleetStatsRow {
                        dimension,
                        day_of_week,
                        category,
                        target_weight,
                        realized_weight,
                        realized_count,
                    });
                }
            }
        }
        FleetStats { rows }
    }

    pub fn get(
        &self,
        dimension: Dimension,
        day_of_week: DayOfWeek,
        category: &str,
    ) -> Option<&FleetStatsRow> {
        self.rows.iter().find(|r| {
            r.dimension == dimension && r.day_of_week == day_of_week && r.category == category
        })
    }
}
