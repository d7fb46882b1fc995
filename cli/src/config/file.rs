//! Configuration file structure and operations.

use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{create_dir_all, read_to_string, write};
use std::path::Path;

use super::profile::ProfileConfig;
use super::types::Settings;

/// The complete configuration file structure.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ConfigFile {
    /// Named profiles for different environments
    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl ConfigFile {
    /// Create a config file with a default profile.
    pub(crate) fn with_default_profile() -> Self {
        ConfigFile {
            profiles: HashMap::from([("default".into(), ProfileConfig::default_profile())]),
            settings: Settings::default(),
        }
    }

    /// Get a profile configuration by name.
    pub(crate) fn profile_config(&self, profile_name: &str) -> Option<&ProfileConfig> {
        self.profiles.get(profile_name)
    }

    /// Get a profile configuration or return an error.
    pub(crate) fn profile_config_ok_or(
        &self,
        profile_name: &str,
    ) -> Result<ProfileConfig, ConfigError> {
        self.profile_config(profile_name).cloned().ok_or_else(|| {
            ConfigError::Message(format!(
                "Profile '{}' not found in configuration",
                profile_name
            ))
        })
    }

    /// Get the specified profile with inheritance from the "all" profile.
    pub(crate) fn resolved_profile_config(
        &self,
        profile_name: &str,
    ) -> Result<ProfileConfig, ConfigError> {
        let profile = self.profile_config_ok_or(profile_name)?;
        Ok(profile.merge(self.profile_config("all")))
    }

    /// Insert or update a profile from an AppConfig.
    pub(crate) fn insert_app_config(&mut self, config: &super::AppConfig) {
        self.profiles
            .insert(config.profile_name.clone(), config.clone().into());
    }

    /// Load the config file from disk.
    pub(crate) fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let body = read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Message(format!("Failed to read config file: {}", e)))?;
        toml::from_str(&body)
            .map_err(|e| ConfigError::Message(format!("Failed to parse config file: {}", e)))
    }

    /// Save the config file to disk.
    pub(crate) fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        if let Some(parent) = path.as_ref().parent() {
            create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {}", e))
            })?;
        }
        let body = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config file: {}", e)))?;
        write(path, body)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {}", e)))
    }
}
