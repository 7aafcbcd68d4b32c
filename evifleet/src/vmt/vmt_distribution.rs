use evifleet_core::model::{
    category::{DayOfWeek, LocClass},
    weights::VmtWeights,
    FleetConfigurationError,
};

/// produces the combined mileage dimension of a fleet: one binned mileage weight
/// table per day of week, for a region with the given mean daily mileage.
pub trait VmtDistribution: Send + Sync {
    fn vmt_weights(
        &self,
        mean_vmt: f64,
        bin_width: u32,
        loc_class: LocClass,
    ) -> Result<VmtWeights, FleetConfigurationError>;
}

/// an explicit mileage table. the region parameters do not change the table, but
/// every bin must sit on an edge of the requested bin width.
impl VmtDistribution for VmtWeights {
    fn vmt_weights(
        &self,
        _mean_vmt: f64,
        bin_width: u32,
        _loc_class: LocClass,
    ) -> Result<VmtWeights, FleetConfigurationError> {
        if bin_width == 0 {
            return Err(FleetConfigurationError::invalid_parameter(
                "bin_width",
                String::from("must be a positive number of miles"),
            ));
        }
        for day_of_week in DayOfWeek::ALL {
            if let Some((bin, _)) = self
                .get(day_of_week)
                .iter()
                .find(|(bin, _)| bin.lower_bound() % bin_width != 0)
            {
                return Err(FleetConfigurationError::invalid_parameter(
                    "vmt",
                    format!(
                        "{day_of_week} mileage bin {bin} is not aligned to a bin width of \
                         {bin_width} miles"
                    ),
                ));
            }
        }
        Ok(self.clone())
    }
}
