//! Configuration loading and management for reviewlens.
//!
//! Loads settings from `reviewlens.toml` with an environment variable
//! override for the provider API key. Resolved once and injected into the
//! client, so key rotation means re-creating the client, not re-reading
//! the environment on every request.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable carrying the provider credential.
pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

const DEFAULT_ENDPOINT: &str = "https://api.deepseek.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "deepseek-chat";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Provider configuration for the LLM client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chat-completion endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature; kept low to bias toward literal extraction.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Overall request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Provider API key. `None` means the AI path is unavailable and every
    /// digest falls back to the local summariser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    0.2
}

fn default_connect_timeout() -> u64 {
    3
}

fn default_request_timeout() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
            api_key: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// built-in defaults when no config file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::load_from(&path)?,
            None => Config::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Override the API key from the environment. A blank value counts as
    /// absent, so an empty export cannot masquerade as a credential.
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api_key = Some(key);
            }
        }
    }

    /// Find the config file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        let local_config = PathBuf::from("reviewlens.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home
                .join(".config")
                .join("reviewlens")
                .join("reviewlens.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The configured API key, if any non-blank value is present.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}
