use evifleet_core::model::category::DayOfWeek;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// recoverable degradations of a generated fleet. these are logged when they occur
/// and returned with the fleet, they never abort a generation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum FleetWarning {
    /// proportional expansion missed the target size by more than the size tolerance,
    /// and rows were randomly duplicated or removed to reach it
    SizeReconciliation {
        day_of_week: DayOfWeek,
        target: usize,
        realized: usize,
        relative_error: f64,
    },
    /// fleet members whose stratum has no vehicle in the source pool were dropped
    SparseMatch { dropped: usize, strata: usize },
}

impl Display for FleetWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FleetWarning::SizeReconciliation {
                day_of_week,
                target,
                realized,
                relative_error,
            } => write!(
                f,
                "{day_of_week} fleet expanded to {realized} members for a target of {target} \
                 (relative error {:.4}%), randomly corrected to target size",
                relative_error * 100.0
            ),
            FleetWarning::SparseMatch { dropped, strata } => write!(
                f,
                "dropped {dropped} fleet members from {strata} strata with no matching \
                 source vehicle"
            ),
        }
    }
}
