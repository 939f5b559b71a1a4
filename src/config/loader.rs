//! Reading and writing `models/<name>/config.yaml` files

use super::schema::TrainingConfig;
use super::validate::validate_value;
use crate::error::{Error, Result};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File name every model directory carries
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Conventional location of a model's configuration
pub fn config_path(models_dir: impl AsRef<Path>, name: &str) -> PathBuf {
    models_dir.as_ref().join(name).join(CONFIG_FILE_NAME)
}

/// Load and validate a configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<TrainingConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let value: Value = serde_yaml::from_str(&content).map_err(|e| Error::yaml(path, e))?;
    Ok(validate_value(&value)?)
}

/// Write a configuration as YAML, creating parent directories
pub fn save_config(config: &TrainingConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let yaml = serde_yaml::to_string(config)
        .map_err(|e| Error::Config(format!("YAML serialization error: {e}")))?;
    fs::write(path, yaml).map_err(|e| Error::io(path, e))
}

/// Every `<models_dir>/<name>/config.yaml`, sorted by path
pub fn discover_configs(models_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let models_dir = models_dir.as_ref();
    let entries = fs::read_dir(models_dir).map_err(|e| Error::io(models_dir, e))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(models_dir, e))?;
        let candidate = entry.path().join(CONFIG_FILE_NAME);
        if entry.path().is_dir() && candidate.is_file() {
            found.push(candidate);
        }
    }
    found.sort();
    Ok(found)
}
