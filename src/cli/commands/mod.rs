//! CLI command implementations.

pub mod get_secret;
pub mod inspect;
pub mod run;

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::types::CredentialsArgs;
use crate::domain::models::Config;
use crate::infrastructure::container::{DockerCliConfig, DockerCliRuntime};
use crate::services::{HelixService, HelixSettings};

/// Resolve `--helix-credentials`, falling back to `~/.helix/credentials`.
pub fn resolve_credentials_path(args: &CredentialsArgs) -> Result<PathBuf> {
    if let Some(path) = &args.helix_credentials {
        return Ok(path.clone());
    }
    let home = dirs::home_dir().context("Cannot determine home directory; pass --helix-credentials")?;
    Ok(home.join(".helix").join("credentials"))
}

/// Build a service backed by the configured docker CLI.
pub fn build_service(config: &Config) -> HelixService {
    let runtime = DockerCliRuntime::with_config(DockerCliConfig {
        binary: config.runtime.binary.clone(),
        timeout_secs: (config.runtime.timeout_secs > 0).then_some(config.runtime.timeout_secs),
    });
    HelixService::new(Arc::new(runtime), HelixSettings::from(config))
}
