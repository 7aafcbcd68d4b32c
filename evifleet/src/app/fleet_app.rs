use super::{output_ops, FleetAppError, FleetRunConfig};
use crate::{
    fleet::FleetGenerator,
    source::SourcePopulation,
    vmt::{GammaVmtConfig, GammaVmtDistribution, VmtDistribution},
};
use clap::{Parser, Subcommand};
use evifleet_core::model::category::LocClass;
use std::path::Path;

/// command line tool for synthesizing electric vehicle fleets and their charging
/// activity from a pool of simulated vehicle charging sessions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FleetApp {
    #[command(subcommand)]
    pub op: FleetOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum FleetOperation {
    /// generate a fleet and write its charging activity and statistics
    Generate {
        /// run configuration, a .toml or .json file
        #[arg(long)]
        config_file: String,
        /// source population CSV, optionally gzipped
        #[arg(long)]
        source_file: String,
        #[arg(long)]
        output_directory: String,
        /// replaces the seed of the run configuration
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
        /// gzip the fleet activity file
        #[arg(long, default_value_t = false)]
        gzip: bool,
    },
    /// print the default daily mileage distribution of a region as CSV
    Vmt {
        #[arg(long)]
        mean_vmt: f64,
        #[arg(long)]
        bin_width: u32,
        /// urban or rural
        #[arg(long)]
        loc_class: LocClass,
        #[arg(long)]
        max_vmt: Option<u32>,
    },
}

impl FleetOperation {
    pub fn run(&self) -> Result<(), FleetAppError> {
        match self {
            FleetOperation::Generate {
                config_file,
                source_file,
                output_directory,
                seed,
                overwrite,
                gzip,
            } => {
                let output_directory = Path::new(output_directory);
                let config = FleetRunConfig::try_from(config_file)?;
                let parameters = config.parameters();
                parameters.validate()?;
                let weights = config.fleet_weights()?;
                let generator_config = config.generator_config(*seed);
                let generator = FleetGenerator::new(&generator_config)?;
                output_ops::check_outputs(output_directory, *gzip, *overwrite)?;

                let source = SourcePopulation::from_csv(source_file)?;
                let result = generator.generate(&source, &parameters, &weights)?;
                output_ops::write_fleet(
                    output_directory,
                    &result,
                    &parameters,
                    generator_config.seed,
                    *gzip,
                    *overwrite,
                )
            }
            FleetOperation::Vmt {
                mean_vmt,
                bin_width,
                loc_class,
                max_vmt,
            } => {
                let mut config = GammaVmtConfig::default();
                if let Some(max_vmt) = max_vmt {
                    config.max_vmt = *max_vmt;
                }
                let vmt = GammaVmtDistribution::new(config).vmt_weights(
                    *mean_vmt,
                    *bin_width,
                    *loc_class,
                )?;
                output_ops::write_vmt_table(std::io::stdout().lock(), &vmt, *bin_width)
            }
        }
    }
}
