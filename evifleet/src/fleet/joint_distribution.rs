use evifleet_core::model::{
    category::DayOfWeek,
    stratum::StratumKey,
    weights::{FleetWeights, VmtWeights},
};
use itertools::iproduct;

/// one cell of the joint distribution. the statistical weight is the product of the
/// per-dimension weights, so it sums to one within each day of week.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointStratum {
    pub key: StratumKey,
    pub stat_weight: f64,
}

/// the cartesian product of every weight table, assuming the dimensions are
/// independent. cells with zero weight are not kept.
#[derive(Clone, Debug, PartialEq)]
pub struct JointDistribution {
    strata: Vec<JointStratum>,
}

impl JointDistribution {
    pub fn build(weights: &FleetWeights, vmt: &VmtWeights) -> JointDistribution {
        let strata = iproduct!(
            vmt.iter(),
            weights.pev_weights.iter(),
            weights.pref_weights.iter(),
            weights.home_weights.iter(),
            weights.work_weights.iter(),
            weights.vehicle_weights.iter()
        )
        .map(
            |(
                (day_of_week, schedule_vmt_bin, w_vmt),
                (pev_type, w_pev),
                (preferred_loc, w_pref),
                (power_home, w_home),
                (power_work, w_work),
                (vehicle_class, w_vehicle),
            )| JointStratum {
                key: StratumKey {
                    day_of_week,
                    pev_type,
                    preferred_loc,
                    power_home,
                    power_work,
                    vehicle_class,
                    schedule_vmt_bin,
                },
                stat_weight: w_vmt * w_pev * w_pref * w_home * w_work * w_vehicle,
            },
        )
        .filter(|s| s.stat_weight > 0.0)
        .collect();
        JointDistribution { strata }
    }

    pub fn strata(&self) -> &[JointStratum] {
        &self.strata
    }

    pub fn len(&self) -> usize {
        self.strata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strata.is_empty()
    }

    /// the strata of one day of week, in construction order
    pub fn partition(&self, day_of_week: DayOfWeek) -> impl Iterator<Item = &JointStratum> + '_ {
        self.strata
            .iter()
            .filter(move |s| s.key.day_of_week == day_of_week)
    }

    pub fn partition_weight(&self, day_of_week: DayOfWeek) -> f64 {
        self.partition(day_of_week).map(|s| s.stat_weight).sum()
    }
}
