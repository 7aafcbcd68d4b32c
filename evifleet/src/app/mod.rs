mod fleet_app;
mod fleet_app_error;
mod fleet_run_config;
pub mod output_ops;

pub use fleet_app::{FleetApp, FleetOperation};
pub use fleet_app_error::FleetAppError;
pub use fleet_run_config::FleetRunConfig;
