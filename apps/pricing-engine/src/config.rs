//! Configuration for the pricing engine service.
//!
//! Loads a YAML file (default `config.yaml`) when present, then applies
//! environment variable overrides.
//!
//! # Environment Variables
//!
//! - `HTTP_PORT`: HTTP server port
//! - `BIND_ADDRESS`: Bind address for the HTTP server
//! - `VWAP_WINDOW_MINUTES`: Trailing window for the volume-weighted price
//! - `REFERENCE_DATA_PATH`: Path to the instrument reference data JSON

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    Validation(String),

    /// An environment override held an unusable value.
    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnvVar {
        /// Environment variable name.
        var: String,
        /// The rejected value.
        value: String,
    },
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Pricing calculation configuration.
    pub pricing: PricingConfig,
    /// Instrument reference data configuration.
    pub reference_data: ReferenceDataConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server port for the REST endpoints.
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Bind address.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            bind_address: default_bind_address(),
        }
    }
}

/// Pricing calculation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Trailing window for the volume-weighted price, in minutes.
    #[serde(default = "default_vwap_window_minutes")]
    pub vwap_window_minutes: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            vwap_window_minutes: default_vwap_window_minutes(),
        }
    }
}

/// Instrument reference data configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceDataConfig {
    /// Path to the instrument reference data JSON file.
    #[serde(default = "default_reference_data_path")]
    pub path: String,
}

impl Default for ReferenceDataConfig {
    fn default() -> Self {
        Self {
            path: default_reference_data_path(),
        }
    }
}

const fn default_http_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

const fn default_vwap_window_minutes() -> u64 {
    15
}

fn default_reference_data_path() -> String {
    "data/instruments.json".to_string()
}

impl Config {
    /// Validate cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when a field holds an unusable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.http_port == 0 {
            return Err(ConfigError::Validation(
                "server.http_port must not be zero".to_string(),
            ));
        }
        if self.pricing.vwap_window_minutes == 0 {
            return Err(ConfigError::Validation(
                "pricing.vwap_window_minutes must be at least 1".to_string(),
            ));
        }
        if self.reference_data.path.is_empty() {
            return Err(ConfigError::Validation(
                "reference_data.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment overrides from the given lookup.
    ///
    /// The lookup is injected so tests can drive overrides without touching
    /// process state.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEnvVar` when an override does not parse.
    pub fn apply_overrides<F>(&mut self, get: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = get("HTTP_PORT") {
            self.server.http_port = value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                var: "HTTP_PORT".to_string(),
                value,
            })?;
        }
        if let Some(value) = get("BIND_ADDRESS") {
            self.server.bind_address = value;
        }
        if let Some(value) = get("VWAP_WINDOW_MINUTES") {
            self.pricing.vwap_window_minutes =
                value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                    var: "VWAP_WINDOW_MINUTES".to_string(),
                    value,
                })?;
        }
        if let Some(value) = get("REFERENCE_DATA_PATH") {
            self.reference_data.path = value;
        }
        Ok(())
    }
}

/// Load configuration from an optional YAML file path, then apply
/// environment overrides and validate.
///
/// With no explicit path, `config.yaml` is used when present and defaults
/// otherwise. An explicit path that cannot be read is an error.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the file cannot be read or parsed, an
/// environment override does not parse, or validation fails.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => read_yaml(p)?,
        None if std::path::Path::new("config.yaml").exists() => read_yaml("config.yaml")?,
        None => Config::default(),
    };

    config.apply_overrides(|var| std::env::var(var).ok())?;
    config.validate()?;
    Ok(config)
}

fn read_yaml(path: &str) -> Result<Config, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    Ok(serde_yaml_bw::from_str(&raw)?)
}
