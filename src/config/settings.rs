//! User settings and preferences
//!
//! Manages application settings stored in ~/.edbinds/config.toml

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Action metadata table
    #[serde(default = "default_action_mappings")]
    pub action_mappings: PathBuf,

    /// Directory of device map JSON files
    #[serde(default = "default_device_mappings_dir")]
    pub device_mappings_dir: PathBuf,

    /// Name of the active device map (first loaded map when unset)
    #[serde(default)]
    pub device_map: Option<String>,

    /// Where relative `.binds` names are looked up
    #[serde(default)]
    pub bindings_dir: Option<PathBuf>,
}

fn default_action_mappings() -> PathBuf {
    PathBuf::from("ActionMappings.json")
}

fn default_device_mappings_dir() -> PathBuf {
    PathBuf::from("DeviceMappings")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            action_mappings: default_action_mappings(),
            device_mappings_dir: default_device_mappings_dir(),
            device_map: None,
            bindings_dir: None,
        }
    }
}

impl Settings {
    /// Configured bindings directory, or the game's default export location
    pub fn bindings_dir(&self) -> Option<PathBuf> {
        self.bindings_dir.clone().or_else(|| {
            dirs::data_local_dir().map(|d| {
                d.join("Frontier Developments")
                    .join("Elite Dangerous")
                    .join("Options")
                    .join("Bindings")
            })
        })
    }

    /// Resolve a `.binds` argument: used as given if it exists,
    /// otherwise looked up in the bindings directory.
    pub fn resolve_bindings_path(&self, name: &Path) -> PathBuf {
        if name.exists() || name.is_absolute() {
            return name.to_path_buf();
        }
        self.bindings_dir()
            .map(|dir| dir.join(name))
            .filter(|candidate| candidate.exists())
            .unwrap_or_else(|| name.to_path_buf())
    }

    fn validate(self) -> ConfigResult<Self> {
        if self.device_map.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ConfigError::Invalid("device_map must not be empty".into()));
        }
        if self.action_mappings.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("action_mappings must not be empty".into()));
        }
        Ok(self)
    }
}

/// Get the config directory path (~/.edbinds/)
pub fn config_dir() -> ConfigResult<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".edbinds"))
}

/// Load settings from ~/.edbinds/config.toml
pub fn load_settings() -> ConfigResult<Settings> {
    load_settings_from(&config_dir()?.join("config.toml"))
}

/// Load settings from a specific file; a missing file yields defaults
pub fn load_settings_from(path: &Path) -> ConfigResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = toml::from_str(&content)?;
    settings.validate()
}
