use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api;
use crate::error::ConfigError;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "RESTAURANT_API_URL";

/// Name used by existing web deployments of the form
pub const LEGACY_API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the platform API, without the endpoint path
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the platform-specific config directory.
    /// Creates default config if file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there when absent
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            tracing::info!("[config] Created default config at: {}", path.display());
            return Ok(config);
        }

        let load_failed =
            |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::LoadFailed {
                path: path.display().to_string(),
                source,
            };

        let content = fs::read_to_string(path).map_err(|e| load_failed(e.into()))?;
        let config: Config = serde_json::from_str(&content).map_err(|e| load_failed(e.into()))?;

        tracing::info!("[config] Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let save_failed =
            |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::SaveFailed {
                path: path.display().to_string(),
                source,
            };

        let json = serde_json::to_string_pretty(self).map_err(|e| save_failed(e.into()))?;
        fs::write(path, json).map_err(|e| save_failed(e.into()))?;

        Ok(())
    }

    /// `<config_dir>/RestaurantOnboarding/config.json`
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("RestaurantOnboarding").join("config.json"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup; `RESTAURANT_API_URL` wins
    /// over `NEXT_PUBLIC_API_URL`, and empty values are ignored
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let override_url = [API_URL_ENV, LEGACY_API_URL_ENV].into_iter().find_map(|key| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(|value| (key, value))
        });

        if let Some((key, url)) = override_url {
            tracing::info!("[config] API base URL taken from {}", key);
            self.api_base_url = url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api_base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::Invalid("api_base_url is empty".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must start with http:// or https://, got {}",
                base
            )));
        }
        Ok(())
    }

    /// Full URL of the restaurant-creation endpoint
    pub fn create_restaurant_url(&self) -> String {
        api::endpoint_url(self.api_base_url.trim())
    }
}
