use super::{FleetError, FleetWarning, JointDistribution, JointStratum};
use evifleet_core::model::{category::DayOfWeek, stratum::StratumKey};
use itertools::Itertools;
use rand::{
    seq::{index, IndexedRandom},
    Rng,
};
use std::cmp::Ordering;

/// the fleet rows of a joint distribution, one stratum key per fleet member, with
/// exactly the target fleet size within each day of week.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterializedFleet {
    pub rows: Vec<StratumKey>,
    pub warnings: Vec<FleetWarning>,
}

/// expands each day of week partition of the joint distribution into fleet rows.
///
/// each stratum contributes `round(stat_weight * fleet_size)` rows. when the
/// relative error of the expanded partition size exceeds `size_tolerance`, rows are
/// randomly duplicated or removed until the partition holds exactly `fleet_size`
/// rows, and a [`FleetWarning::SizeReconciliation`] is recorded. otherwise the
/// expanded rows are kept as-is and no randomness is consumed.
pub fn materialize<R: Rng + ?Sized>(
    distribution: &JointDistribution,
    fleet_size: usize,
    size_tolerance: f64,
    rng: &mut R,
) -> Result<MaterializedFleet, FleetError> {
    let mut rows = vec![];
    let mut warnings = vec![];
    for day_of_week in DayOfWeek::ALL {
        let strata = distribution.partition(day_of_week).collect_vec();
        if strata.is_empty() {
            return Err(FleetError::SamplingError(format!(
                "joint distribution has no {day_of_week} strata with positive weight"
            )));
        }
        let expanded = proportional_expansion(&strata, fleet_size);
        let realized = expanded.len();
        let relative_error = relative_error(realized, fleet_size);
        if relative_error <= size_tolerance {
            log::debug!(
                "{day_of_week} partition expanded to {realized} rows for target {fleet_size}"
            );
            rows.extend(expanded);
        } else {
            let warning = FleetWarning::SizeReconciliation {
                day_of_week,
                target: fleet_size,
                realized,
                relative_error,
            };
            log::warn!("{warning}");
            warnings.push(warning);
            rows.extend(reconcile(expanded, &strata, fleet_size, rng)?);
        }
    }
    Ok(MaterializedFleet { rows, warnings })
}

/// number of fleet rows a stratum expands to, rounding half away from zero
pub fn stratum_count(stat_weight: f64, fleet_size: usize) -> usize {
    (stat_weight * fleet_size as f64).round() as usize
}

pub fn relative_error(realized: usize, target: usize) -> f64 {
    (realized as f64 - target as f64).abs() / target as f64
}

fn proportional_expansion(strata: &[&JointStratum], fleet_size: usize) -> Vec<StratumKey> {
    strata
        .iter()
        .flat_map(|s| std::iter::repeat(s.key).take(stratum_count(s.stat_weight, fleet_size)))
        .collect()
}

/// brings a partition to the target size. a short partition grows by duplicating
/// uniformly drawn rows of the expanded partition, or when rounding left it empty,
/// by drawing strata in proportion to their weight. a long partition shrinks by
/// removing a uniform sample of its rows.
fn reconcile<R: Rng + ?Sized>(
    mut rows: Vec<StratumKey>,
    strata: &[&JointStratum],
    fleet_size: usize,
    rng: &mut R,
) -> Result<Vec<StratumKey>, FleetError> {
    match rows.len().cmp(&fleet_size) {
        Ordering::Equal => Ok(rows),
        Ordering::Less if rows.is_empty() => {
            for _ in 0..fleet_size {
                let stratum = strata
                    .choose_weighted(rng, |s| s.stat_weight)
                    .map_err(|e| {
                        FleetError::SamplingError(format!("unable to draw weighted stratum: {e}"))
                    })?;
                rows.push(stratum.key);
            }
            Ok(rows)
        }
        Ordering::Less => {
            let n_expanded = rows.len();
            for _ in n_expanded..fleet_size {
                let idx = rng.random_range(0..n_expanded);
                rows.push(rows[idx]);
            }
            Ok(rows)
        }
        Ordering::Greater => {
            let mut keep = vec![true; rows.len()];
            for idx in index::sample(rng, rows.len(), rows.len() - fleet_size) {
                keep[idx] = false;
            }
            let kept = rows
                .into_iter()
                .zip(keep)
                .filter_map(|(row, keep)| keep.then_some(row))
                .collect();
            Ok(kept)
        }
    }
}
