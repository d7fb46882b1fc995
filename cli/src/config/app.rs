//! Resolved runtime configuration.

use config::ConfigError;
use paperrag_api::ClientConfig;
use std::path::{Path, PathBuf};

use super::file::ConfigFile;
use super::profile::ProfileConfig;
use super::{DEFAULT_POLL_INTERVAL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, PAPERRAG_CONFIG_PATH};

/// One fully-resolved profile, ready to hand to the client and the chat
/// loop.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub profile_name: String,
    pub api_endpoint: String,
    pub poll_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub config_path: PathBuf,
}

impl AppConfig {
    /// Load the user's config file, creating it with a default profile on
    /// first run. Profile selection order: explicit argument,
    /// `settings.default_profile`, then `default`. `PAPERRAG_API_ENDPOINT`
    /// overrides the endpoint after resolution.
    pub fn load(profile: Option<&str>) -> Result<Self, ConfigError> {
        let path = Self::default_config_path();
        let mut config = Self::load_from(&path, profile)?;
        if let Ok(endpoint) = std::env::var("PAPERRAG_API_ENDPOINT")
            && !endpoint.is_empty()
        {
            config.api_endpoint = endpoint;
        }
        Ok(config)
    }

    pub fn load_from(path: &Path, profile: Option<&str>) -> Result<Self, ConfigError> {
        if !path.exists() {
            ConfigFile::with_default_profile().save_to(path)?;
        }
        let file = ConfigFile::load_from(path)?;

        let profile_name = profile
            .map(str::to_string)
            .or_else(|| file.settings.default_profile.clone())
            .unwrap_or_else(|| "default".to_string());
        let resolved = file.resolved_profile_config(&profile_name)?;

        Ok(AppConfig {
            profile_name,
            api_endpoint: resolved
                .api_endpoint
                .unwrap_or_else(|| super::PAPERRAG_API_ENDPOINT.to_string()),
            poll_interval_secs: resolved
                .poll_interval_secs
                .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
            request_timeout_secs: resolved
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            config_path: path.to_path_buf(),
        })
    }

    /// Write this profile back to the config file.
    pub fn save(&self) -> Result<(), ConfigError> {
        let mut file = if self.config_path.exists() {
            ConfigFile::load_from(&self.config_path)?
        } else {
            ConfigFile::default()
        };
        file.insert_app_config(self);
        file.save_to(&self.config_path)
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(PAPERRAG_CONFIG_PATH)
    }
}

impl From<AppConfig> for ClientConfig {
    fn from(config: AppConfig) -> Self {
        ClientConfig {
            api_endpoint: config.api_endpoint,
            request_timeout_secs: config.request_timeout_secs,
        }
    }
}

impl From<AppConfig> for ProfileConfig {
    fn from(config: AppConfig) -> Self {
        ProfileConfig {
            api_endpoint: Some(config.api_endpoint),
            poll_interval_secs: Some(config.poll_interval_secs),
            request_timeout_secs: Some(config.request_timeout_secs),
        }
    }
}
