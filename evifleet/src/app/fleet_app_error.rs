use crate::{fleet::FleetError, source::SourcePopulationError};
use evifleet_core::model::FleetConfigurationError;

#[derive(thiserror::Error, Debug)]
pub enum FleetAppError {
    #[error(transparent)]
    ConfigurationError(#[from] FleetConfigurationError),
    #[error(transparent)]
    SourcePopulationError(#[from] SourcePopulationError),
    #[error(transparent)]
    FleetError(#[from] FleetError),
    #[error("output file {0} already exists, pass --overwrite to replace it")]
    OutputExists(String),
    #[error("failure writing {filename}: {message}")]
    WriteError { filename: String, message: String },
}

impl FleetAppError {
    pub fn write_error(filename: &str, message: String) -> FleetAppError {
        FleetAppError::WriteError {
            filename: filename.to_string(),
            message,
        }
    }
}
