//! Helix invocation service.
//!
//! Reads a credentials file, turns it into container configuration and runs
//! the Helix CLI (or a plain shell, for `get-secret`) through a
//! [`ContainerRuntime`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::error::{HelixError, HelixResult};
use crate::domain::models::config::Config;
use crate::domain::models::container::{Container, Secret};
use crate::domain::models::credentials::{
    CredentialConfig, CredentialParser, ACTIVE_TOOLS_VAR, API_KEY_VAR, API_URL_VAR,
};
use crate::domain::ports::ContainerRuntime;

/// Name under which the API key secret is registered.
pub const API_KEY_SECRET_NAME: &str = "helix-api-key";

/// Where `get-secret` exposes the credentials file inside the container.
pub const CONTAINER_CREDENTIALS_PATH: &str = "/root/.helix/credentials";

/// Settings the service needs from [`Config`].
#[derive(Debug, Clone)]
pub struct HelixSettings {
    /// Image for `get-secret`
    pub base_image: String,
    /// Image shipping the Helix CLI
    pub helix_image: String,
    /// Helix CLI entrypoint inside `helix_image`
    pub helix_entrypoint: String,
    /// Parser carrying the fallback API URL
    pub parser: CredentialParser,
}

impl From<&Config> for HelixSettings {
    fn from(config: &Config) -> Self {
        Self {
            base_image: config.images.base.clone(),
            helix_image: config.images.helix.clone(),
            helix_entrypoint: config.helix_entrypoint.clone(),
            parser: CredentialParser::with_default_api_url(config.default_api_url.clone()),
        }
    }
}

impl Default for HelixSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Non-sensitive view of parsed credentials.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CredentialSummary {
    /// Credentials file that was read
    pub path: PathBuf,
    /// Resolved API URL
    pub api_url: String,
    /// Raw active tools value
    pub active_tools: String,
    /// Whether a non-empty API key is present
    pub api_key_present: bool,
}

/// Runs Helix operations against a container runtime.
pub struct HelixService {
    runtime: Arc<dyn ContainerRuntime>,
    settings: HelixSettings,
}

impl HelixService {
    /// Create a service over `runtime`.
    pub fn new(runtime: Arc<dyn ContainerRuntime>, settings: HelixSettings) -> Self {
        Self { runtime, settings }
    }

    /// Read and parse a credentials file.
    pub async fn load_credentials(&self, credentials_path: &Path) -> HelixResult<CredentialConfig> {
        let contents = tokio::fs::read_to_string(credentials_path)
            .await
            .map_err(|source| HelixError::CredentialsRead {
                path: credentials_path.to_path_buf(),
                source,
            })?;

        let credentials = self.settings.parser.parse(&contents);
        if !credentials.has_api_key() {
            warn!(
                path = %credentials_path.display(),
                "credentials file has no {API_KEY_VAR}; the Helix CLI will run unauthenticated"
            );
        }
        Ok(credentials)
    }

    /// Apply parsed credentials to a container.
    ///
    /// The API key becomes a secret variable; URL and active tools are plain
    /// environment variables.
    pub fn apply_credentials(container: Container, credentials: &CredentialConfig) -> Container {
        let secret = Secret::new(API_KEY_SECRET_NAME, credentials.api_key.clone());
        container
            .with_secret_variable(API_KEY_VAR, secret)
            .with_env_variable(API_URL_VAR, credentials.api_url.clone())
            .with_env_variable(ACTIVE_TOOLS_VAR, credentials.active_tools.clone())
    }

    /// Read `credentials_path` and inject its configuration into `container`.
    pub async fn with_helix_secret(
        &self,
        container: Container,
        credentials_path: &Path,
    ) -> HelixResult<Container> {
        let credentials = self.load_credentials(credentials_path).await?;
        Ok(Self::apply_credentials(container, &credentials))
    }

    /// Helix CLI container with credentials applied.
    pub async fn helix_cli(&self, credentials_path: &Path) -> HelixResult<Container> {
        let container = Container::from_image(self.settings.helix_image.clone());
        self.with_helix_secret(container, credentials_path).await
    }

    /// Base64 of the credentials file as seen from inside a container.
    ///
    /// The mount source is made absolute; docker reads a bare relative name
    /// as a named volume.
    #[instrument(skip(self), fields(runtime = self.runtime.runtime_id()))]
    pub async fn get_secret(&self, credentials_path: &Path) -> HelixResult<String> {
        let host_path =
            std::path::absolute(credentials_path).map_err(|source| HelixError::CredentialsRead {
                path: credentials_path.to_path_buf(),
                source,
            })?;
        let container = Container::from_image(self.settings.base_image.clone())
            .with_mounted_file(CONTAINER_CREDENTIALS_PATH, host_path);
        let container = self.with_helix_secret(container, credentials_path).await?;

        let args = vec![
            "bash".to_string(),
            "-c".to_string(),
            format!("cat {CONTAINER_CREDENTIALS_PATH} |base64"),
        ];
        let stdout = self.runtime.stdout(&container, &args).await?;
        info!(bytes = stdout.len(), "read credentials from container");
        Ok(stdout)
    }

    /// Run `prompt` through the Helix CLI and return its stdout.
    #[instrument(skip(self, prompt), fields(runtime = self.runtime.runtime_id()))]
    pub async fn run(&self, prompt: &str, credentials_path: &Path) -> HelixResult<String> {
        let container = self
            .helix_cli(credentials_path)
            .await?
            .with_entrypoint([self.settings.helix_entrypoint.clone()]);

        let args = vec!["run".to_string(), "--prompt".to_string(), prompt.to_string()];
        let stdout = self.runtime.stdout(&container, &args).await?;
        info!(bytes = stdout.len(), "helix run finished");
        Ok(stdout)
    }

    /// Summarize a credentials file without revealing the key.
    pub async fn inspect(&self, credentials_path: &Path) -> HelixResult<CredentialSummary> {
        let credentials = self.load_credentials(credentials_path).await?;
        Ok(CredentialSummary {
            path: credentials_path.to_path_buf(),
            api_url: credentials.api_url.clone(),
            active_tools: credentials.active_tools.clone(),
            api_key_present: credentials.has_api_key(),
        })
    }
}
