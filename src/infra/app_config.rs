use crate::domain::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_PATH_ENV: &str = "ERDRAFT_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub renderer: RendererConfig,
}

/// Settings for the Mermaid CLI (`mmdc`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Explicit path to `mmdc`; looked up on PATH when unset.
    pub binary: Option<PathBuf>,
    pub theme: String,
    pub background: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            binary: None,
            theme: "default".to_string(),
            background: "white".to_string(),
        }
    }
}

/// Loads the implicit config file, falling back to defaults when it is missing
/// or unusable.
pub fn load_config() -> AppConfig {
    let path = config_path();
    if !path.exists() {
        return AppConfig::default();
    }
    match load_config_from(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring config: {}", err);
            AppConfig::default()
        }
    }
}

/// Loads an explicitly requested config file. Errors are returned, not swallowed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("erdraft")
        .join("config.toml")
}
