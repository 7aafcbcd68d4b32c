use evifleet_core::model::FleetConfigurationError;

#[derive(thiserror::Error, Debug)]
pub enum FleetError {
    #[error(transparent)]
    ConfigurationError(#[from] FleetConfigurationError),
    #[error("failure sampling fleet: {0}")]
    SamplingError(String),
}
