use super::{GammaVmtConfig, GammaVmtDistribution, VmtDistribution};
use evifleet_core::model::{
    weights::{VmtWeights, WeightEntry},
    FleetConfigurationError,
};
use serde::{Deserialize, Serialize};

/// configures where the mileage dimension of a fleet comes from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum VmtSourceConfig {
    /// derive the mileage tables from the mean daily mileage of the region
    Gamma(GammaVmtConfig),
    /// use the given mileage tables as-is
    Explicit {
        weekday: Vec<WeightEntry>,
        weekend: Vec<WeightEntry>,
    },
}

impl Default for VmtSourceConfig {
    fn default() -> Self {
        VmtSourceConfig::Gamma(GammaVmtConfig::default())
    }
}

impl VmtSourceConfig {
    pub fn build(&self) -> Result<Box<dyn VmtDistribution>, FleetConfigurationError> {
        match self {
            VmtSourceConfig::Gamma(config) => {
                for parameters in [
                    &config.urban_weekday,
                    &config.urban_weekend,
                    &config.rural_weekday,
                    &config.rural_weekend,
                ] {
                    parameters.validate()?;
                }
                Ok(Box::new(GammaVmtDistribution::new(config.clone())))
            }
            VmtSourceConfig::Explicit { weekday, weekend } => {
                let weights = VmtWeights::try_from_entries(weekday, weekend)?;
                Ok(Box::new(weights))
            }
        }
    }
}
