use crate::vmt::VmtSourceConfig;
use evifleet_core::model::FleetConfigurationError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SIZE_TOLERANCE: f64 = 0.001;

/// configures a [`super::FleetGenerator`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FleetGeneratorConfig {
    /// seeds the random source. when absent the generator is seeded from the
    /// operating system and runs are not reproducible.
    pub seed: Option<u64>,
    /// largest relative error between expanded and target partition size that is
    /// accepted without random correction
    pub size_tolerance: f64,
    pub vmt: VmtSourceConfig,
}

impl Default for FleetGeneratorConfig {
    fn default() -> Self {
        FleetGeneratorConfig {
            seed: None,
            size_tolerance: DEFAULT_SIZE_TOLERANCE,
            vmt: VmtSourceConfig::default(),
        }
    }
}

pub fn validate_size_tolerance(size_tolerance: f64) -> Result<(), FleetConfigurationError> {
    if !size_tolerance.is_finite() || !(0.0..1.0).contains(&size_tolerance) {
        return Err(FleetConfigurationError::invalid_parameter(
            "size_tolerance",
            format!("must be in the range [0, 1), found {size_tolerance}"),
        ));
    }
    Ok(())
}
