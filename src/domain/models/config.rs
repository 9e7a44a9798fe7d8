use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::credentials::DEFAULT_API_URL;

/// Main configuration structure for helix-runner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// API URL used when the credentials file does not set `HELIX_API_URL`
    #[serde(default = "default_api_url")]
    pub default_api_url: String,

    /// Container images
    #[serde(default)]
    pub images: ImagesConfig,

    /// Entrypoint of the Helix CLI inside the Helix image
    #[serde(default = "default_helix_entrypoint")]
    pub helix_entrypoint: String,

    /// Container runtime configuration
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_helix_entrypoint() -> String {
    "/helix".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_api_url: default_api_url(),
            images: ImagesConfig::default(),
            helix_entrypoint: default_helix_entrypoint(),
            runtime: RuntimeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Container image references
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ImagesConfig {
    /// Plain image used by `get-secret`
    #[serde(default = "default_base_image")]
    pub base: String,

    /// Image shipping the Helix CLI, used by `run`
    #[serde(default = "default_helix_image")]
    pub helix: String,
}

fn default_base_image() -> String {
    "ubuntu:latest".to_string()
}

fn default_helix_image() -> String {
    "europe-docker.pkg.dev/helixml/helix/controlplane-dev:dev002".to_string()
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            base: default_base_image(),
            helix: default_helix_image(),
        }
    }
}

/// Container runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RuntimeConfig {
    /// Docker-compatible CLI binary (`docker`, `podman`, ...)
    #[serde(default = "default_runtime_binary")]
    pub binary: String,

    /// Kill the container after this many seconds (0 disables the limit)
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_runtime_binary() -> String {
    "docker".to_string()
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            binary: default_runtime_binary(),
            timeout_secs: 0,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rotated log files; stderr only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// File rotation (daily, hourly, never)
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
