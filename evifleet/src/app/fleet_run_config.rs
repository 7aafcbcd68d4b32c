use crate::{
    fleet::{FleetGeneratorConfig, FleetParameters, DEFAULT_SIZE_TOLERANCE},
    vmt::VmtSourceConfig,
};
use config::{Config, Environment, File, FileFormat};
use evifleet_core::model::{
    category::LocClass,
    weights::{FleetWeights, WeightEntry},
    FleetConfigurationError,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// prefix of environment variables that override run configuration values,
/// for example `EVIFLEET_FLEET_SIZE=500`
pub const ENV_PREFIX: &str = "EVIFLEET";

/// a fleet generation run read from a .toml or .json file.
///
/// ```toml
/// fleet_size = 1000
/// mean_vmt = 28.5
/// bin_width = 10
/// loc_class = "urban"
/// seed = 42
///
/// [vmt]
/// type = "gamma"
///
/// [[weights.pev_weights]]
/// category = "BEV250"
/// weight = 0.6
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FleetRunConfig {
    pub fleet_size: usize,
    pub mean_vmt: f64,
    pub bin_width: u32,
    pub loc_class: LocClass,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_size_tolerance")]
    pub size_tolerance: f64,
    #[serde(default)]
    pub vmt: VmtSourceConfig,
    /// weight tables keyed by name, see [`FleetWeights::try_from_named`]
    pub weights: HashMap<String, Vec<WeightEntry>>,
}

fn default_size_tolerance() -> f64 {
    DEFAULT_SIZE_TOLERANCE
}

impl FleetRunConfig {
    pub fn parameters(&self) -> FleetParameters {
        FleetParameters {
            fleet_size: self.fleet_size,
            mean_vmt: self.mean_vmt,
            bin_width: self.bin_width,
            loc_class: self.loc_class,
        }
    }

    pub fn fleet_weights(&self) -> Result<FleetWeights, FleetConfigurationError> {
        FleetWeights::try_from_named(&self.weights)
    }

    /// generator configuration for this run. a seed given on the command line
    /// replaces the seed of the file.
    pub fn generator_config(&self, seed: Option<u64>) -> FleetGeneratorConfig {
        FleetGeneratorConfig {
            seed: seed.or(self.seed),
            size_tolerance: self.size_tolerance,
            vmt: self.vmt.clone(),
        }
    }
}

impl TryFrom<&String> for FleetRunConfig {
    type Error = FleetConfigurationError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let format = if f.ends_with(".toml") {
            FileFormat::Toml
        } else if f.ends_with(".json") {
            FileFormat::Json
        } else {
            return Err(FleetConfigurationError::ConfigurationFileError(format!(
                "unsupported file type: {f}"
            )));
        };
        let config = Config::builder()
            .add_source(File::new(f, format))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| {
                FleetConfigurationError::ConfigurationFileError(format!("failure reading {f}: {e}"))
            })?;
        config.try_deserialize().map_err(|e| {
            FleetConfigurationError::ConfigurationFileError(format!("failure decoding {f}: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vmt::GammaVmtConfig;
    use std::io::Write;

    fn write_temp_config(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!("evifleet_{}_{name}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_read_toml() {
        let contents = r#"
fleet_size = 250
mean_vmt = 31.5
bin_width = 10
loc_class = "rural"

[vmt]
type = "gamma"
max_vmt = 200

[[weights.pev_weights]]
category = "BEV250"
weight = 0.75

[[weights.pev_weights]]
category = "PHEV50"
weight = 0.25

[[weights.pref_weights]]
category = "PrefHome"
weight = 1.0

[[weights.home_weights]]
category = "HomeL2"
weight = 1.0

[[weights.work_weights]]
category = "WorkNone"
weight = 1.0

[[weights.vehicle_weights]]
category = "SUV"
weight = 1.0
"#;
        let filename = write_temp_config("run.toml", contents);
        let config = FleetRunConfig::try_from(&filename);
        std::fs::remove_file(&filename).unwrap();
        let config = config.unwrap();

        assert_eq!(config.fleet_size, 250);
        assert_eq!(config.loc_class, LocClass::Rural);
        assert_eq!(config.seed, None);
        assert_eq!(config.size_tolerance, DEFAULT_SIZE_TOLERANCE);
        assert_eq!(
            config.vmt,
            VmtSourceConfig::Gamma(GammaVmtConfig {
                max_vmt: 200,
                ..Default::default()
            })
        );
        let weights = config.fleet_weights().unwrap();
        assert_eq!(weights.pev_weights.len(), 2);
        assert_eq!(config.generator_config(Some(9)).seed, Some(9));
    }

    #[test]
    fn test_read_json_rejects_vmt_weights() {
        let contents = serde_json::json!({
            "fleet_size": 10,
            "mean_vmt": 20.0,
            "bin_width": 5,
            "loc_class": "urban",
            "seed": 3,
            "weights": {
                "pev_weights": [{"category": "BEV100", "weight": 1.0}],
                "vmt_weights": [{"category": "0", "weight": 1.0}]
            }
        });
        let filename = write_temp_config("run.json", &contents.to_string());
        let config = FleetRunConfig::try_from(&filename);
        std::fs::remove_file(&filename).unwrap();
        let config = config.unwrap();

        assert_eq!(config.generator_config(None).seed, Some(3));
        assert!(matches!(
            config.fleet_weights(),
            Err(FleetConfigurationError::UnsupportedWeights { name, .. }) if name == "vmt_weights"
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = FleetRunConfig::try_from(&String::from("fleet.yaml"));
        assert!(matches!(
            result,
            Err(FleetConfigurationError::ConfigurationFileError(_))
        ));
    }
}
