use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::domain::{Ingredient, IngredientRatios};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "FormulationOptimizer";
const APP_NAME: &str = "FormulationOptimizer";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Slider positions on start-up and after a reset.
    pub initial_ratios: IngredientRatios,
    /// Raise the log level to DEBUG.
    pub verbose: bool,
}

pub fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Loads the user config. A missing file is not an error.
pub fn load_config() -> Result<Option<AppConfig>, ConfigError> {
    let path = config_file().ok_or(ConfigError::StorageUnavailable)?;
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let config: AppConfig = serde_json::from_str(&data)?;
    config
        .initial_ratios
        .validate_bounds()
        .map_err(|(ingredient, value)| ConfigError::OutOfRange {
            ingredient,
            value,
            max: ingredient.max(),
        })?;
    Ok(Some(config))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config directory unavailable")]
    StorageUnavailable,
    #[error("initial ratio for {} is {value}, expected 0 to {max}", .ingredient.label())]
    OutOfRange {
        ingredient: Ingredient,
        value: f64,
        max: f64,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
