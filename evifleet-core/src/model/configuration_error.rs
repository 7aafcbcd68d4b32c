use super::category::{DayOfWeek, Dimension};

/// fatal, caller-fixable problems with a fleet generation request. these are always
/// raised before any sampling occurs.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FleetConfigurationError {
    #[error("unknown {dimension} category '{label}'")]
    UnknownCategory { dimension: Dimension, label: String },
    #[error("{dimension} weights sum to {sum}, expected 1.0 within {tolerance}")]
    WeightSumError {
        dimension: Dimension,
        sum: f64,
        tolerance: f64,
    },
    #[error("{dimension} weight for '{label}' must be finite and non-negative, found {weight}")]
    InvalidWeight {
        dimension: Dimension,
        label: String,
        weight: f64,
    },
    #[error("{dimension} category '{label}' appears more than once")]
    DuplicateCategory { dimension: Dimension, label: String },
    #[error("{0} weight table is empty")]
    EmptyWeightTable(Dimension),
    #[error("{day_of_week} {source}")]
    DayOfWeekError {
        day_of_week: DayOfWeek,
        source: Box<FleetConfigurationError>,
    },
    #[error("missing weight table '{0}'")]
    MissingWeights(String),
    #[error("unsupported weight table '{name}': {reason}")]
    UnsupportedWeights { name: String, reason: String },
    #[error("invalid value for '{name}': {message}")]
    InvalidParameter { name: String, message: String },
    #[error("failure reading fleet configuration: {0}")]
    ConfigurationFileError(String),
}

impl FleetConfigurationError {
    pub fn invalid_parameter(name: &str, message: String) -> FleetConfigurationError {
        FleetConfigurationError::InvalidParameter {
            name: name.to_string(),
            message,
        }
    }
}
