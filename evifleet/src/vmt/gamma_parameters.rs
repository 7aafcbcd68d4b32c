use evifleet_core::model::FleetConfigurationError;
use serde::{Deserialize, Serialize};

/// empirical gamma parameters for one (location class, day of week) mileage
/// distribution.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GammaParameters {
    /// gamma shape parameter k
    pub shape: f64,
    /// ratio of this day type's mean daily mileage to the region's mean daily mileage
    pub mean_ratio: f64,
}

impl GammaParameters {
    pub fn new(shape: f64, mean_ratio: f64) -> GammaParameters {
        GammaParameters { shape, mean_ratio }
    }

    /// gamma scale parameter for a region with the given mean daily mileage
    pub fn scale(&self, mean_vmt: f64) -> f64 {
        mean_vmt * self.mean_ratio / self.shape
    }

    pub fn validate(&self) -> Result<(), FleetConfigurationError> {
        if !(self.shape.is_finite() && self.shape > 0.0) {
            return Err(FleetConfigurationError::invalid_parameter(
                "shape",
                format!("gamma shape must be positive, found {}", self.shape),
            ));
        }
        if !(self.mean_ratio.is_finite() && self.mean_ratio > 0.0) {
            return Err(FleetConfigurationError::invalid_parameter(
                "mean_ratio",
                format!("mean ratio must be positive, found {}", self.mean_ratio),
            ));
        }
        Ok(())
    }
}
