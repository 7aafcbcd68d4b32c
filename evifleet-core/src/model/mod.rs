pub mod category;
mod configuration_error;
pub mod stratum;
pub mod weights;

pub use configuration_error::FleetConfigurationError;
