use evifleet_core::model::{category::LocClass, FleetConfigurationError};
use serde::{Deserialize, Serialize};

/// the study region a fleet is generated for
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct FleetParameters {
    /// number of fleet members in each day of week partition
    pub fleet_size: usize,
    /// mean daily vehicle miles traveled in the region
    pub mean_vmt: f64,
    /// width of a mileage bin in miles
    pub bin_width: u32,
    pub loc_class: LocClass,
}

impl FleetParameters {
    pub fn validate(&self) -> Result<(), FleetConfigurationError> {
        if self.fleet_size == 0 {
            return Err(FleetConfigurationError::invalid_parameter(
                "fleet_size",
                String::from("must be a positive number of vehicles"),
            ));
        }
        if !self.mean_vmt.is_finite() || self.mean_vmt <= 0.0 {
            return Err(FleetConfigurationError::invalid_parameter(
                "mean_vmt",
                format!("must be a positive number of miles, found {}", self.mean_vmt),
            ));
        }
        if self.bin_width == 0 {
            return Err(FleetConfigurationError::invalid_parameter(
                "bin_width",
                String::from("must be a positive number of miles"),
            ));
        }
        Ok(())
    }
}
