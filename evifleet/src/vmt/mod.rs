//! daily mileage (VMT) distributions. a [`VmtDistribution`] turns the mean daily
//! mileage of a study region into one binned mileage weight table per day of week.
mod gamma_parameters;
mod gamma_vmt_config;
mod gamma_vmt_distribution;
mod vmt_distribution;
mod vmt_source_config;

pub use gamma_parameters::GammaParameters;
pub use gamma_vmt_config::GammaVmtConfig;
pub use gamma_vmt_distribution::GammaVmtDistribution;
pub use vmt_distribution::VmtDistribution;
pub use vmt_source_config::VmtSourceConfig;
