use crate::config::bounds::InputField;
use crate::constants::{IMPACT_ENERGY_LIMIT_J, PACKED_DIAMETER_LIMIT_MM};
use crate::errors::ConfigError;
use crate::models::ParachuteType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_DIR: &str = "cansat-recovery";
const CONFIG_FILE: &str = "config.json";

/// Limits used when turning a sizing result into an advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryThresholds {
    pub packing_diameter_limit_mm: f64,
    pub impact_energy_limit_j: f64,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            packing_diameter_limit_mm: PACKED_DIAMETER_LIMIT_MM,
            impact_energy_limit_j: IMPACT_ENERGY_LIMIT_J,
        }
    }
}

/// Values used for inputs the user leaves out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub mass: f64,
    pub descent_velocity: f64,
    pub air_density: f64,
    pub packing_height: f64,
    pub parachute: ParachuteType,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            mass: InputField::Mass.bounds().default,
            descent_velocity: InputField::DescentVelocity.bounds().default,
            air_density: InputField::AirDensity.bounds().default,
            packing_height: InputField::PackingHeight.bounds().default,
            parachute: ParachuteType::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub thresholds: AdvisoryThresholds,
    pub defaults: InputDefaults,
}

impl CalculatorConfig {
    /// `<config dir>/cansat-recovery/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads from `path` when given. Otherwise tries the default location and
    /// falls back to built-in values if no file exists there.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    debug!("no config file found, using built-in defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            (
                "thresholds.packing_diameter_limit_mm",
                self.thresholds.packing_diameter_limit_mm,
            ),
            (
                "thresholds.impact_energy_limit_j",
                self.thresholds.impact_energy_limit_j,
            ),
        ];
        for (key, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue { key, value });
            }
        }
        Ok(())
    }
}
