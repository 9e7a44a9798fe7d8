use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Default API URL cannot be empty")]
    EmptyDefaultApiUrl,

    #[error("Image reference cannot be empty: {0}")]
    EmptyImage(&'static str),

    #[error("Helix entrypoint cannot be empty")]
    EmptyEntrypoint,

    #[error("Container runtime binary cannot be empty")]
    EmptyRuntimeBinary,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),
}

/// Project-local configuration file
pub const PROJECT_CONFIG_PATH: &str = ".helix-runner/config.yaml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "HELIX_RUNNER_";

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .helix-runner/config.yaml (project config, optional)
    /// 3. `extra` file passed with `--config` (optional)
    /// 4. Environment variables (HELIX_RUNNER_* prefix, highest priority)
    pub fn load(extra: Option<&Path>) -> Result<Config> {
        Self::load_with_project(Path::new(PROJECT_CONFIG_PATH), extra)
    }

    /// Same as [`ConfigLoader::load`] with an explicit project config path
    ///
    /// A missing `project` file is skipped; a missing `extra` file is an error.
    pub fn load_with_project(project: &Path, extra: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(project));

        if let Some(path) = extra {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.default_api_url.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultApiUrl);
        }

        if config.images.base.trim().is_empty() {
            return Err(ConfigError::EmptyImage("images.base"));
        }

        if config.images.helix.trim().is_empty() {
            return Err(ConfigError::EmptyImage("images.helix"));
        }

        if config.helix_entrypoint.trim().is_empty() {
            return Err(ConfigError::EmptyEntrypoint);
        }

        if config.runtime.binary.trim().is_empty() {
            return Err(ConfigError::EmptyRuntimeBinary);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        Ok(())
    }
}
