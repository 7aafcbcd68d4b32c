use super::{GammaParameters, GammaVmtConfig, VmtDistribution};
use evifleet_core::model::{
    category::{DayOfWeek, LocClass, VmtBin},
    weights::{VmtWeights, WeightTable},
    FleetConfigurationError,
};
use statrs::distribution::{ContinuousCDF, Gamma};

/// bins a gamma-distributed daily mileage into fixed-width mileage bins. each
/// (location class, day of week) pair has its own empirical shape parameter and
/// mean ratio, see [`GammaVmtConfig`].
///
/// the bins are `[i * bin_width, (i + 1) * bin_width)` for every bin whose lower
/// edge is below `max_vmt`. the final bin absorbs the tail of the distribution.
/// bins with zero weight are removed and the remaining weights renormalized.
#[derive(Clone, Debug, Default)]
pub struct GammaVmtDistribution {
    pub config: GammaVmtConfig,
}

impl GammaVmtDistribution {
    pub fn new(config: GammaVmtConfig) -> GammaVmtDistribution {
        GammaVmtDistribution { config }
    }

    fn day_table(
        &self,
        mean_vmt: f64,
        bin_width: u32,
        parameters: &GammaParameters,
    ) -> Result<WeightTable<VmtBin>, FleetConfigurationError> {
        parameters.validate()?;
        let scale = parameters.scale(mean_vmt);
        let gamma = Gamma::new(parameters.shape, 1.0 / scale).map_err(|e| {
            FleetConfigurationError::invalid_parameter("shape", format!("invalid gamma: {e}"))
        })?;
        let n_bins = self.config.max_vmt.div_ceil(bin_width).max(1);
        let raw = (0..n_bins)
            .map(|i| {
                let lower = i * bin_width;
                let p_lower = gamma.cdf(lower as f64);
                let p_upper = if i == n_bins - 1 {
                    1.0
                } else {
                    gamma.cdf((lower + bin_width) as f64)
                };
                (VmtBin(lower), (p_upper - p_lower).max(0.0))
            })
            .filter(|(_, w)| *w > 0.0)
            .collect::<Vec<_>>();
        let total: f64 = raw.iter().map(|(_, w)| w).sum();
        let normalized = raw.into_iter().map(|(bin, w)| (bin, w / total)).collect();
        WeightTable::try_new(normalized)
    }
}

impl VmtDistribution for GammaVmtDistribution {
    fn vmt_weights(
        &self,
        mean_vmt: f64,
        bin_width: u32,
        loc_class: LocClass,
    ) -> Result<VmtWeights, FleetConfigurationError> {
        if !(mean_vmt.is_finite() && mean_vmt > 0.0) {
            return Err(FleetConfigurationError::invalid_parameter(
                "mean_vmt",
                format!("must be a positive number of miles, found {mean_vmt}"),
            ));
        }
        if bin_width == 0 {
            return Err(FleetConfigurationError::invalid_parameter(
                "bin_width",
                String::from("must be a positive number of miles"),
            ));
        }
        let table = |day_of_week: DayOfWeek| {
            let parameters = self.config.parameters(loc_class, day_of_week);
            self.day_table(mean_vmt, bin_width, parameters)
                .map_err(|e| FleetConfigurationError::DayOfWeekError {
                    day_of_week,
                    source: Box::new(e),
                })
        };
        let weekday = table(DayOfWeek::Weekday)?;
        let weekend = table(DayOfWeek::Weekend)?;
        log::debug!(
            "generated {loc_class} mileage distribution for mean of {mean_vmt} miles: {} / {} bins",
            weekday.len(),
            weekend.len()
        );
        Ok(VmtWeights::new(weekday, weekend))
    }
}
