use super::{WeightEntry, WeightTable};
use crate::model::{
    category::{CategoryLabel, Dimension, PevType, PowerHome, PowerWork, PreferredLoc, VehicleClass},
    FleetConfigurationError,
};
use std::collections::HashMap;

/// the caller-supplied weight tables of a fleet generation request. the mileage
/// dimension is not part of this set, it is derived from the mean daily mileage
/// of the study region.
#[derive(Clone, Debug, PartialEq)]
pub struct FleetWeights {
    pub pev_weights: WeightTable<PevType>,
    pub pref_weights: WeightTable<PreferredLoc>,
    pub home_weights: WeightTable<PowerHome>,
    pub work_weights: WeightTable<PowerWork>,
    pub vehicle_weights: WeightTable<VehicleClass>,
}

impl FleetWeights {
    /// builds the weight tables from raw entries keyed by weight table name. the
    /// names must be exactly `pev_weights`, `pref_weights`, `home_weights`,
    /// `work_weights` and `vehicle_weights`. supplying `vmt_weights` or any public
    /// charging weights is rejected: mixing caller-specified mileage or public
    /// charger weighting with the derived tables is not supported.
    pub fn try_from_named(
        named: &HashMap<String, Vec<WeightEntry>>,
    ) -> Result<FleetWeights, FleetConfigurationError> {
        let mut names = named.keys().collect::<Vec<_>>();
        names.sort();
        for name in names {
            if let Some(reason) = unsupported_reason(name) {
                return Err(FleetConfigurationError::UnsupportedWeights {
                    name: name.clone(),
                    reason,
                });
            }
        }
        Ok(FleetWeights {
            pev_weights: table_from_named(named)?,
            pref_weights: table_from_named(named)?,
            home_weights: table_from_named(named)?,
            work_weights: table_from_named(named)?,
            vehicle_weights: table_from_named(named)?,
        })
    }

    /// categories of one dimension paired with their target weights, rendered as labels
    pub fn labeled_weights(&self, dimension: Dimension) -> Vec<(String, f64)> {
        match dimension {
            Dimension::PevType => labeled(&self.pev_weights),
            Dimension::PreferredLoc => labeled(&self.pref_weights),
            Dimension::PowerHome => labeled(&self.home_weights),
            Dimension::PowerWork => labeled(&self.work_weights),
            Dimension::VehicleClass => labeled(&self.vehicle_weights),
            Dimension::VmtBin => vec![],
        }
    }
}

fn table_from_named<C: CategoryLabel>(
    named: &HashMap<String, Vec<WeightEntry>>,
) -> Result<WeightTable<C>, FleetConfigurationError> {
    let name = C::DIMENSION.weights_name();
    let entries = named
        .get(name)
        .ok_or_else(|| FleetConfigurationError::MissingWeights(name.to_string()))?;
    WeightTable::try_from_entries(entries)
}

fn labeled<C: CategoryLabel>(table: &WeightTable<C>) -> Vec<(String, f64)> {
    table.iter().map(|(c, w)| (c.to_string(), w)).collect()
}

fn unsupported_reason(name: &str) -> Option<String> {
    let supported = [
        Dimension::PevType,
        Dimension::PreferredLoc,
        Dimension::PowerHome,
        Dimension::PowerWork,
        Dimension::VehicleClass,
    ];
    if supported.iter().any(|d| d.weights_name() == name) {
        None
    } else if name == Dimension::VmtBin.weights_name() {
        Some(String::from(
            "mileage weights are derived from mean_vmt, bin_width and loc_class \
             and may not be supplied",
        ))
    } else if name.contains("public") {
        Some(String::from(
            "public charger weighting is a legacy option that cannot be combined \
             with pev and mileage weighting",
        ))
    } else {
        Some(String::from("not a recognized weight table"))
    }
}
