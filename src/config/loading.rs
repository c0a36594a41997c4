//! Configuration loading functions.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::Config;

/// Project-level config file names, in search order.
pub const PROJECT_CONFIG_FILES: [&str; 4] = [
    ".breach-tracker.yaml",
    ".breach-tracker.yml",
    ".breach-tracker.json",
    ".breach-tracker.toml",
];

impl Config {
    /// Load and validate configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let config: Config = match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
                path: path.display().to_string(),
                source: e,
            })?,
            "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
                path: path.display().to_string(),
                source: e,
            })?,
            "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseToml {
                path: path.display().to_string(),
                source: e,
            })?,
            _ => {
                return Err(ConfigError::UnsupportedFormat(
                    path.display().to_string(),
                    ext,
                ));
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration for a run.
    ///
    /// An explicit path must load successfully. Otherwise the search order is:
    /// 1. `.breach-tracker.{yaml,yml,json,toml}` in `project_root`
    /// 2. `<config_dir>/breach-tracker/config.yaml`
    /// 3. Default configuration
    ///
    /// Discovered files that fail to load are skipped with a warning.
    pub fn load(explicit: Option<&Path>, project_root: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "Loading explicit config");
            return Self::from_file(path);
        }

        if let Some(root) = project_root {
            for filename in PROJECT_CONFIG_FILES {
                let path = root.join(filename);
                if path.exists() {
                    match Self::from_file(&path) {
                        Ok(config) => {
                            debug!(path = %path.display(), "Loaded project config");
                            return Ok(config);
                        }
                        Err(e) => warn!(path = %path.display(), error = %e, "Ignoring config file"),
                    }
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("breach-tracker").join("config.yaml");
            if global_config.exists() {
                match Self::from_file(&global_config) {
                    Ok(config) => {
                        debug!(path = %global_config.display(), "Loaded global config");
                        return Ok(config);
                    }
                    Err(e) => {
                        warn!(path = %global_config.display(), error = %e, "Ignoring config file")
                    }
                }
            }
        }

        Ok(Self::default())
    }
}
